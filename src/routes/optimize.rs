use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::LimitSettings;
use crate::core::{h_index, InputError, PairAggregator, SortedReturnRoutes};
use crate::models::{
    ErrorResponse, HIndexRequest, HIndexResponse, HealthResponse, OptimizeRoutesRequest,
    OptimizeRoutesResponse,
};

/// Application state shared across all handlers
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    pub limits: LimitSettings,
}

/// Configure pairing and citation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/routes/optimize", web::post().to(optimize_routes))
        .route("/citations/h-index", web::post().to(compute_h_index));
}

fn invalid_input(err: &InputError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::bad_request("Invalid input", err.to_string()))
}

fn too_large(what: &str, len: usize, max: usize) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::bad_request(
        "Request too large",
        format!("{} has {} entries, limit is {}", what, len, max),
    ))
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Route optimization endpoint
///
/// POST /api/v1/routes/optimize
///
/// Request body:
/// ```json
/// {
///   "fwdRoutes": [[1, 1000], [2, 2000]],
///   "returnRoutes": [[5, 3500], [6, 3500]],
///   "maxTravelDist": 7000
/// }
/// ```
async fn optimize_routes(
    state: web::Data<AppState>,
    req: web::Json<OptimizeRoutesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for optimize request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Validation failed",
            errors.to_string(),
        ));
    }

    let max_routes = state.limits.max_routes;
    if req.forward_routes.len() > max_routes {
        return too_large("fwdRoutes", req.forward_routes.len(), max_routes);
    }
    if req.return_routes.len() > max_routes {
        return too_large("returnRoutes", req.return_routes.len(), max_routes);
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let OptimizeRoutesRequest { forward_routes, return_routes, max_travel_dist } = req.into_inner();

    tracing::info!(
        "Optimizing routes [{}]: {} forward, {} return, budget {}",
        request_id,
        forward_routes.len(),
        return_routes.len(),
        max_travel_dist
    );

    let result = PairAggregator::new(max_travel_dist).and_then(|aggregator| {
        aggregator.pair(&forward_routes, &SortedReturnRoutes::new(return_routes))
    });

    match result {
        Ok(result) => {
            tracing::info!(
                "Returning {} pairs [{}] at total {:?}",
                result.pairs.len(),
                request_id,
                result.max_total
            );
            HttpResponse::Ok().json(OptimizeRoutesResponse {
                pairs: result.pairs,
                max_total: result.max_total,
                request_id,
            })
        }
        Err(e) => {
            tracing::info!("Rejected optimize request [{}]: {}", request_id, e);
            invalid_input(&e)
        }
    }
}

/// h-index endpoint
///
/// POST /api/v1/citations/h-index
///
/// Request body:
/// ```json
/// { "citations": [0, 1, 3, 5, 6] }
/// ```
async fn compute_h_index(
    state: web::Data<AppState>,
    req: web::Json<HIndexRequest>,
) -> impl Responder {
    let max_citations = state.limits.max_citations;
    if req.citations.len() > max_citations {
        return too_large("citations", req.citations.len(), max_citations);
    }

    match h_index(&req.citations) {
        Ok(h_index) => {
            tracing::debug!("h-index {} over {} citations", h_index, req.citations.len());
            HttpResponse::Ok().json(HIndexResponse { h_index })
        }
        Err(e) => {
            tracing::info!("Rejected h-index request: {}", e);
            invalid_input(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_health_check_reports_crate_version() {
        let app = actix_web::test::init_service(
            actix_web::App::new().service(web::scope("/api/v1").configure(configure)),
        )
        .await;

        let req = actix_web::test::TestRequest::get().uri("/api/v1/health").to_request();
        let body: HealthResponse = actix_web::test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_default_state_uses_default_limits() {
        let state = AppState::default();
        assert_eq!(state.limits.max_routes, LimitSettings::default().max_routes);
    }
}
