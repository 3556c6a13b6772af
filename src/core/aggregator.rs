use std::cmp::Ordering;

use crate::core::{
    filters::{remaining_budget, validate_routes, InputError},
    matcher::DistanceMatcher,
    sorter::{sort_by_distance, SortedReturnRoutes},
};
use crate::models::{PairingResult, ResultPair, Route};

/// Running best total and the pairs achieving it
#[derive(Debug, Default)]
struct SearchState {
    best: Option<i64>,
    pairs: Vec<ResultPair>,
}

impl SearchState {
    fn offer(mut self, forward_id: i64, return_id: i64, total: i64) -> Self {
        let ordering = self.best.map_or(Ordering::Greater, |best| total.cmp(&best));

        match ordering {
            Ordering::Greater => {
                tracing::trace!("New best total {} via ({}, {})", total, forward_id, return_id);
                self.best = Some(total);
                self.pairs.clear();
                self.pairs.push(ResultPair::new(forward_id, return_id));
            }
            Ordering::Equal => self.pairs.push(ResultPair::new(forward_id, return_id)),
            Ordering::Less => {}
        }

        self
    }

    fn into_result(self) -> PairingResult {
        PairingResult {
            pairs: self.pairs,
            max_total: self.best,
        }
    }
}

/// Pairs forward routes with return routes under a travel budget
///
/// # Pipeline
/// 1. Budget pre-filter per forward route
/// 2. Binary search for the best feasible return distance
/// 3. Global max tracking across forward routes
///
/// Forward routes are processed in input order, so the result lists the
/// winning forward routes in that order, each followed by its tied returns
/// in [`DistanceMatcher`] scan order.
#[derive(Debug, Clone, Copy)]
pub struct PairAggregator {
    max_travel_dist: i64,
}

impl PairAggregator {
    pub fn new(max_travel_dist: i64) -> Result<Self, InputError> {
        if max_travel_dist < 0 {
            return Err(InputError::NegativeBudget(max_travel_dist));
        }
        Ok(Self { max_travel_dist })
    }

    /// Find every pair achieving the maximal feasible total
    ///
    /// Neither collection is modified.
    pub fn pair(
        &self,
        forward: &[Route],
        returns: &SortedReturnRoutes,
    ) -> Result<PairingResult, InputError> {
        validate_routes(forward, returns.as_slice(), self.max_travel_dist)?;
        Ok(self.aggregate(forward, returns.as_slice()))
    }

    /// `returns` must already be sorted ascending by distance
    fn aggregate(&self, forward: &[Route], returns: &[Route]) -> PairingResult {
        let Some(min_return) = returns.first().map(|route| route.distance) else {
            return PairingResult::default();
        };
        let matcher = DistanceMatcher::over_sorted(returns);

        let state = forward.iter().fold(SearchState::default(), |state, fwd| {
            let Some(target) = remaining_budget(fwd.distance, self.max_travel_dist, min_return) else {
                return state;
            };

            matcher
                .best_matches(target)
                .into_iter()
                .fold(state, |state, m| state.offer(fwd.id, m.return_id, fwd.distance + m.distance))
        });

        tracing::debug!(
            "Paired {} forward with {} return routes: {} pairs at total {:?}",
            forward.len(),
            returns.len(),
            state.pairs.len(),
            state.best
        );

        state.into_result()
    }
}

/// Find every forward/return pair with the maximal total not exceeding
/// `max_travel_dist`
///
/// `returns` is sorted ascending by distance in place; callers needing the
/// original order must copy it first, or use [`PairAggregator::pair`] with a
/// [`SortedReturnRoutes`] built from a slice. Inputs are validated before
/// `returns` is touched.
pub fn optimize_routes(
    forward: &[Route],
    returns: &mut [Route],
    max_travel_dist: i64,
) -> Result<Vec<ResultPair>, InputError> {
    validate_routes(forward, returns, max_travel_dist)?;
    let aggregator = PairAggregator::new(max_travel_dist)?;

    sort_by_distance(returns);
    Ok(aggregator.aggregate(forward, returns).pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes(raw: &[(i64, i64)]) -> Vec<Route> {
        raw.iter().copied().map(Route::from).collect()
    }

    fn pairs(raw: &[(i64, i64)]) -> Vec<ResultPair> {
        raw.iter().copied().map(ResultPair::from).collect()
    }

    #[test]
    fn test_duplicate_returns_in_scan_order() {
        let fwd = routes(&[(1, 1000), (2, 2000), (3, 3000)]);
        let mut ret = routes(&[(5, 3500), (6, 3500), (7, 1000)]);

        let result = optimize_routes(&fwd, &mut ret, 7000).unwrap();
        assert_eq!(result, pairs(&[(3, 6), (3, 5)]));
        // Side effect: returns are now sorted
        assert_eq!(ret, routes(&[(7, 1000), (5, 3500), (6, 3500)]));
    }

    #[test]
    fn test_empty_forward_routes() {
        let mut ret = routes(&[(1, 5), (2, 10)]);
        assert!(optimize_routes(&[], &mut ret, 100).unwrap().is_empty());
    }

    #[test]
    fn test_empty_return_routes() {
        let fwd = routes(&[(1, 5)]);
        assert!(optimize_routes(&fwd, &mut [], 100).unwrap().is_empty());
    }

    #[test]
    fn test_forward_over_budget() {
        let fwd = routes(&[(1, 10)]);
        let mut ret = routes(&[(2, 5)]);
        assert!(optimize_routes(&fwd, &mut ret, 3).unwrap().is_empty());
    }

    #[test]
    fn test_later_higher_total_discards_earlier() {
        let fwd = routes(&[(1, 1), (2, 4), (3, 2)]);
        let ret = SortedReturnRoutes::new(routes(&[(10, 3), (11, 5)]));
        let aggregator = PairAggregator::new(9).unwrap();

        let result = aggregator.pair(&fwd, &ret).unwrap();
        // 4 + 5 = 9 beats 1 + 5 = 6 and 2 + 5 = 7
        assert_eq!(result.pairs, pairs(&[(2, 11)]));
        assert_eq!(result.max_total, Some(9));
    }

    #[test]
    fn test_ties_across_forward_routes_keep_input_order() {
        let fwd = routes(&[(1, 6), (2, 2), (3, 4)]);
        let ret = SortedReturnRoutes::new(routes(&[(10, 4), (11, 6), (12, 2)]));
        let aggregator = PairAggregator::new(10).unwrap();

        let result = aggregator.pair(&fwd, &ret).unwrap();
        assert_eq!(result.pairs, pairs(&[(1, 10), (3, 11)]));
        assert_eq!(result.max_total, Some(10));
    }

    #[test]
    fn test_no_feasible_pair_reports_no_total() {
        let fwd = routes(&[(1, 8)]);
        let ret = SortedReturnRoutes::new(routes(&[(2, 5)]));
        let aggregator = PairAggregator::new(10).unwrap();

        let result = aggregator.pair(&fwd, &ret).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.max_total, None);
    }

    #[test]
    fn test_zero_budget_with_zero_distances() {
        let fwd = routes(&[(1, 0)]);
        let mut ret = routes(&[(2, 0), (3, 0)]);

        let result = optimize_routes(&fwd, &mut ret, 0).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_invalid_input_leaves_returns_untouched() {
        let fwd = routes(&[(1, -4)]);
        let mut ret = routes(&[(2, 9), (3, 1)]);

        assert!(optimize_routes(&fwd, &mut ret, 10).is_err());
        assert_eq!(ret, routes(&[(2, 9), (3, 1)]));
    }

    #[test]
    fn test_negative_budget_rejected() {
        assert_eq!(PairAggregator::new(-1).unwrap_err(), InputError::NegativeBudget(-1));
    }
}
