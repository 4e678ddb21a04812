pub mod model;
pub mod resolver;
pub mod injector;
pub mod error;
pub mod provider;

pub use model::*;
pub use resolver::resolve_token;
pub use injector::{inject_token, HttpRequestParts};
pub use error::AuthError;
