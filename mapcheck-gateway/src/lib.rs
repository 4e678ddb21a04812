pub mod app_state;
pub mod config;
pub mod middleware;
pub mod routes;

pub use app_state::AppState;
pub use config::GatewayConfig;
pub use routes::{new, ApiDoc};
