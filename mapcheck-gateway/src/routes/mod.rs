use axum::{routing::{get, post}, Router};
use utoipa::OpenApi;

pub mod check_mapping;

use crate::app_state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(check_mapping::check_mapping),
    components(
        schemas(
            mapcheck_evaluator::CheckInput,
            mapcheck_evaluator::OutcomeBody,
            mapcheck_mapping::FieldMapping,
        )
    ),
    tags(
        (name = "mapping", description = "Expression evaluation against field mappings"),
    )
)]
pub struct ApiDoc;

pub fn new(state: AppState) -> Router {
    Router::new()
        .route("/api/check-mapping", post(check_mapping::check_mapping))
        .route("/v1/healthz", get(|| async { "ok" }))
        .with_state(state)
}
