// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Route, MatchCandidate, ResultPair, PairingResult};
pub use requests::{OptimizeRoutesRequest, HIndexRequest};
pub use responses::{OptimizeRoutesResponse, HIndexResponse, HealthResponse, ErrorResponse};
