use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use mapcheck_evaluator::{CheckInput, CheckReply, EvalError, EvaluationOutcome, OutcomeBody};

use crate::app_state::AppState;

/// Evaluate an expression against a data object or raw field mappings
#[utoipa::path(
    post,
    path = "/api/check-mapping",
    request_body = CheckInput,
    responses(
        (status = 200, description = "Remote evaluator result", body = OutcomeBody),
        (status = 400, description = "Missing expression or data", body = OutcomeBody),
        (status = 500, description = "Missing credential or internal error", body = OutcomeBody),
        (status = "default", description = "Remote evaluator rejected the request; its status is relayed", body = OutcomeBody)
    ),
    tag = "mapping"
)]
pub async fn check_mapping(
    State(state): State<AppState>,
    body: Result<Json<CheckInput>, JsonRejection>,
) -> (StatusCode, Json<EvaluationOutcome>) {
    let reply = match body {
        Ok(Json(input)) => state.evaluator.check(input).await,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected check-mapping body");
            CheckReply::from(EvalError::Validation(rejection.body_text()))
        }
    };

    (reply.status, Json(reply.outcome))
}
