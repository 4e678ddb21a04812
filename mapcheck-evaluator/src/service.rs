use async_trait::async_trait;
use mapcheck_auth::{inject_token, resolve_token, HttpRequestParts};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client,
};
use serde_json::Value;
use tracing::{debug, info, warn, Instrument};

use crate::{
    config::EvaluatorConfig,
    error::{EvalError, EvalResult},
    outcome::CheckReply,
    request::{CheckInput, EvaluationRequest},
};

const APPLICATION_JSON: &str = "application/json";

/// Turns a check request into a reply; never fails outright
#[async_trait]
pub trait Evaluator: Send + Sync + 'static {
    async fn check(&self, input: CheckInput) -> CheckReply;
}

/// Evaluator backed by the remote HTTP API.
///
/// Holds no per-request state, so one instance serves concurrent checks.
pub struct HttpEvaluator {
    client: Client,
    config: EvaluatorConfig,
}

impl HttpEvaluator {
    pub fn new(config: EvaluatorConfig) -> EvalResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Validate, resolve credentials and send exactly one request
    pub async fn evaluate(&self, input: CheckInput) -> EvalResult<Value> {
        let request = input.into_request()?;
        let token = resolve_token(&self.config.credential)?;

        let mut parts = HttpRequestParts::default();
        inject_token(&mut parts, &token, &self.config.inject)?;

        self.send(&request, parts).await
    }

    async fn send(&self, request: &EvaluationRequest, parts: HttpRequestParts) -> EvalResult<Value> {
        let body = serde_json::to_vec(request)?;
        debug!(fields = request.data.len(), bytes = body.len(), "sending evaluation request");

        let mut builder = self
            .client
            .post(&self.config.endpoint)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON);

        if !parts.query.is_empty() {
            builder = builder.query(&parts.query);
        }
        for (key, value) in parts.headers {
            builder = builder.header(key, value);
        }

        let response = builder.body(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(EvalError::remote(&self.config.error_label, status, text));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl Evaluator for HttpEvaluator {
    async fn check(&self, input: CheckInput) -> CheckReply {
        let span = tracing::info_span!("check", request_id = %uuid::Uuid::new_v4());

        async move {
            match self.evaluate(input).await {
                Ok(result) => {
                    info!("evaluation succeeded");
                    CheckReply::success(result)
                }
                Err(err) => {
                    warn!(code = err.code(), status = %err.status_code(), error = %err, "evaluation failed");
                    CheckReply::from(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}
