use crate::models::Route;

/// Sort return routes ascending by distance, in place
///
/// The sort is stable, so routes with equal distance keep their input order
/// and stay contiguous. Callers holding the same slice observe the reordering.
pub fn sort_by_distance(routes: &mut [Route]) {
    routes.sort_by_key(|route| route.distance);
}

/// Return routes ordered ascending by distance
///
/// Equal-distance entries are contiguous, which the duplicate scan in
/// [`DistanceMatcher`](super::matcher::DistanceMatcher) depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedReturnRoutes {
    routes: Vec<Route>,
}

impl SortedReturnRoutes {
    /// Take ownership of `routes` and sort them
    pub fn new(mut routes: Vec<Route>) -> Self {
        sort_by_distance(&mut routes);
        Self { routes }
    }

    /// Sort a copy, leaving the caller's slice untouched
    pub fn from_slice(routes: &[Route]) -> Self {
        Self::new(routes.to_vec())
    }

    pub fn as_slice(&self) -> &[Route] {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_in_place() {
        let mut routes = vec![Route::new(5, 3500), Route::new(6, 3500), Route::new(7, 1000)];
        sort_by_distance(&mut routes);

        assert_eq!(
            routes,
            vec![Route::new(7, 1000), Route::new(5, 3500), Route::new(6, 3500)]
        );
    }

    #[test]
    fn test_duplicates_stay_contiguous() {
        let sorted = SortedReturnRoutes::new(vec![
            Route::new(1, 4),
            Route::new(2, 1),
            Route::new(3, 4),
            Route::new(4, 2),
            Route::new(5, 4),
        ]);

        let distances: Vec<i64> = sorted.as_slice().iter().map(|r| r.distance).collect();
        assert_eq!(distances, vec![1, 2, 4, 4, 4]);
        let tied: Vec<i64> = sorted.as_slice()[2..].iter().map(|r| r.id).collect();
        assert_eq!(tied, vec![1, 3, 5]);
    }

    #[test]
    fn test_from_slice_leaves_input_untouched() {
        let input = vec![Route::new(1, 9), Route::new(2, 3)];
        let sorted = SortedReturnRoutes::from_slice(&input);

        assert_eq!(input, vec![Route::new(1, 9), Route::new(2, 3)]);
        assert_eq!(sorted.as_slice(), &[Route::new(2, 3), Route::new(1, 9)]);
    }

    #[test]
    fn test_empty() {
        let sorted = SortedReturnRoutes::new(vec![]);
        assert!(sorted.as_slice().is_empty());
    }
}
