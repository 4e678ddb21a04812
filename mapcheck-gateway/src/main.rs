use anyhow::Context;
use axum::Router;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use mapcheck_evaluator::HttpEvaluator;
use mapcheck_gateway::{middleware, routes, AppState, ApiDoc, GatewayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -------- log ----------
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("mapcheck_gateway=debug".parse()?))
        .init();

    // -------- config -------
    let config = GatewayConfig::from_env().context("Failed to load gateway configuration")?;
    tracing::info!("config: {}", config.summary());

    let evaluator = HttpEvaluator::new(config.evaluator.clone())
        .context("Failed to create evaluator HTTP client")?;
    let state = AppState::new(evaluator);

    // -------- router -------
    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(routes::new(state));
    let app = middleware::default_stack(app);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    tracing::info!("gateway listen on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
