use thiserror::Error;
use crate::models::Route;

/// Which input collection a route came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Forward,
    Return,
}

impl std::fmt::Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteKind::Forward => write!(f, "forward"),
            RouteKind::Return => write!(f, "return"),
        }
    }
}

/// Input that falls outside the pairing or h-index contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("travel budget must be non-negative, got {0}")]
    NegativeBudget(i64),

    #[error("{kind} route {id} has negative distance {distance}")]
    NegativeDistance {
        kind: RouteKind,
        id: i64,
        distance: i64,
    },

    #[error("citation at index {index} is negative ({value})")]
    NegativeCitation { index: usize, value: i64 },

    #[error("citations must be sorted ascending, index {index} breaks the order")]
    UnsortedCitations { index: usize },
}

/// Check the travel budget and both route collections
///
/// Empty collections are always accepted.
pub fn validate_routes(
    forward: &[Route],
    returns: &[Route],
    max_travel_dist: i64,
) -> Result<(), InputError> {
    if max_travel_dist < 0 {
        return Err(InputError::NegativeBudget(max_travel_dist));
    }

    check_distances(forward, RouteKind::Forward)?;
    check_distances(returns, RouteKind::Return)
}

fn check_distances(routes: &[Route], kind: RouteKind) -> Result<(), InputError> {
    match routes.iter().find(|route| route.distance < 0) {
        Some(route) => Err(InputError::NegativeDistance {
            kind,
            id: route.id,
            distance: route.distance,
        }),
        None => Ok(()),
    }
}

/// Check that citations are non-negative and ascending
pub fn validate_citations(citations: &[i64]) -> Result<(), InputError> {
    if let Some((index, &value)) = citations.iter().enumerate().find(|&(_, &c)| c < 0) {
        return Err(InputError::NegativeCitation { index, value });
    }

    match citations.windows(2).position(|w| w[0] > w[1]) {
        Some(pos) => Err(InputError::UnsortedCitations { index: pos + 1 }),
        None => Ok(()),
    }
}

/// Remaining budget for a forward route, if any return route could still fit
///
/// Returns `None` when the forward distance alone exceeds the budget, or when
/// the remainder is below the shortest return distance.
#[inline]
pub fn remaining_budget(
    forward_distance: i64,
    max_travel_dist: i64,
    min_return_distance: i64,
) -> Option<i64> {
    if forward_distance > max_travel_dist {
        return None;
    }

    let remaining = max_travel_dist - forward_distance;
    if remaining < min_return_distance {
        return None;
    }

    Some(remaining)
}
