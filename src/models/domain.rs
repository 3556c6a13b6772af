use serde::{Deserialize, Serialize};

/// A labeled travel distance
///
/// Serialized as a two-element `[id, distance]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Route {
    pub id: i64,
    pub distance: i64,
}

impl Route {
    pub fn new(id: i64, distance: i64) -> Self {
        Self { id, distance }
    }
}

impl From<(i64, i64)> for Route {
    fn from((id, distance): (i64, i64)) -> Self {
        Self { id, distance }
    }
}

impl From<Route> for (i64, i64) {
    fn from(route: Route) -> Self {
        (route.id, route.distance)
    }
}

/// Best feasible return route for one forward route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate {
    pub distance: i64,
    pub return_id: i64,
}

/// Forward/return identifier pair, serialized as `[forwardId, returnId]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct ResultPair {
    pub forward_id: i64,
    pub return_id: i64,
}

impl ResultPair {
    pub fn new(forward_id: i64, return_id: i64) -> Self {
        Self { forward_id, return_id }
    }
}

impl From<(i64, i64)> for ResultPair {
    fn from((forward_id, return_id): (i64, i64)) -> Self {
        Self { forward_id, return_id }
    }
}

impl From<ResultPair> for (i64, i64) {
    fn from(pair: ResultPair) -> Self {
        (pair.forward_id, pair.return_id)
    }
}

/// Outcome of one pairing run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingResult {
    pub pairs: Vec<ResultPair>,
    /// Achieved total distance, `None` when no pair fits the budget
    pub max_total: Option<i64>,
}

impl PairingResult {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
