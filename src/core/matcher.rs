use std::cmp::Ordering;

use crate::core::sorter::SortedReturnRoutes;
use crate::models::{MatchCandidate, Route};

/// Binary search over return routes sorted ascending by distance
///
/// For a remaining-budget target, finds the best feasible return distance
/// and every route sharing it.
///
/// # Tie order
/// An exact hit at probe index `mid` yields the ties from `mid` leftward
/// (decreasing index) followed by the ties right of `mid` (increasing
/// index). Without an exact hit, the search ends on `high`, the rightmost
/// route not exceeding the target, and only the leftward scan runs since
/// nothing to its right can tie.
#[derive(Debug, Clone, Copy)]
pub struct DistanceMatcher<'a> {
    routes: &'a [Route],
}

impl<'a> DistanceMatcher<'a> {
    pub fn new(sorted: &'a SortedReturnRoutes) -> Self {
        Self { routes: sorted.as_slice() }
    }

    /// Caller guarantees `routes` is sorted ascending by distance
    pub(crate) fn over_sorted(routes: &'a [Route]) -> Self {
        debug_assert!(routes.windows(2).all(|w| w[0].distance <= w[1].distance));
        Self { routes }
    }

    /// All return routes at the best distance not exceeding `target`
    ///
    /// Empty when every return distance exceeds `target`.
    pub fn best_matches(&self, target: i64) -> Vec<MatchCandidate> {
        let routes = self.routes;
        let mut low = 0usize;
        // One past `high`, so an empty search space is `end == low`
        let mut end = routes.len();

        while low < end {
            let high = end - 1;
            let mid = low + (high - low) / 2;

            match routes[mid].distance.cmp(&target) {
                Ordering::Equal => {
                    return self
                        .scan_left(mid, target)
                        .chain(self.scan_right(mid + 1, target))
                        .collect();
                }
                Ordering::Greater => end = mid,
                Ordering::Less => low = mid + 1,
            }
        }

        match end.checked_sub(1) {
            Some(high) => self.scan_left(high, routes[high].distance).collect(),
            None => Vec::new(),
        }
    }

    fn scan_left(&self, from: usize, distance: i64) -> impl Iterator<Item = MatchCandidate> + 'a {
        let routes: &'a [Route] = self.routes;
        routes[..=from]
            .iter()
            .rev()
            .take_while(move |route| route.distance == distance)
            .map(candidate)
    }

    fn scan_right(&self, from: usize, distance: i64) -> impl Iterator<Item = MatchCandidate> + 'a {
        let routes: &'a [Route] = self.routes;
        routes[from..]
            .iter()
            .take_while(move |route| route.distance == distance)
            .map(candidate)
    }
}

fn candidate(route: &Route) -> MatchCandidate {
    MatchCandidate {
        distance: route.distance,
        return_id: route.id,
    }
}
