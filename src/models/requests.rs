use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Route;

/// Request to pair forward and return routes under a travel budget
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OptimizeRoutesRequest {
    #[serde(alias = "forward_routes", rename = "fwdRoutes", default)]
    pub forward_routes: Vec<Route>,
    #[serde(alias = "return_routes", rename = "returnRoutes", default)]
    pub return_routes: Vec<Route>,
    #[validate(range(min = 0))]
    #[serde(alias = "max_travel_dist", rename = "maxTravelDist")]
    pub max_travel_dist: i64,
}

/// Request to compute an h-index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HIndexRequest {
    #[serde(default)]
    pub citations: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_request_accepts_camel_and_snake_case() {
        let camel: OptimizeRoutesRequest = serde_json::from_str(
            r#"{"fwdRoutes":[[1,10]],"returnRoutes":[[2,5]],"maxTravelDist":3}"#,
        )
        .unwrap();
        let snake: OptimizeRoutesRequest = serde_json::from_str(
            r#"{"forward_routes":[[1,10]],"return_routes":[[2,5]],"max_travel_dist":3}"#,
        )
        .unwrap();

        assert_eq!(camel.forward_routes, snake.forward_routes);
        assert_eq!(camel.return_routes, snake.return_routes);
        assert_eq!(camel.max_travel_dist, 3);
    }

    #[test]
    fn test_negative_budget_fails_validation() {
        let req = OptimizeRoutesRequest {
            forward_routes: vec![],
            return_routes: vec![],
            max_travel_dist: -1,
        };
        assert!(req.validate().is_err());
    }
}
