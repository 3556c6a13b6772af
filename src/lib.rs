//! Route Pair - budget-constrained forward/return route pairing
//!
//! Given forward routes, return routes and a travel budget, finds every
//! forward/return pair whose combined distance is maximal without exceeding
//! the budget. Return routes are sorted once and each forward route
//! binary-searches its best feasible return distance.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{optimize_routes, h_index, PairAggregator, SortedReturnRoutes, InputError};
pub use crate::models::{Route, ResultPair, PairingResult, OptimizeRoutesRequest, OptimizeRoutesResponse};
