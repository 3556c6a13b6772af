// Core algorithm exports
pub mod aggregator;
pub mod citations;
pub mod filters;
pub mod matcher;
pub mod sorter;

pub use aggregator::{optimize_routes, PairAggregator};
pub use citations::h_index;
pub use filters::{validate_routes, validate_citations, remaining_budget, InputError, RouteKind};
pub use matcher::DistanceMatcher;
pub use sorter::{sort_by_distance, SortedReturnRoutes};
