use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Default middleware stack: request tracing, permissive CORS for the
/// browser front end
pub fn default_stack<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
