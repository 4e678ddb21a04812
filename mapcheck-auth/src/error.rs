use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Evaluator auth token is not configured. Please set {0} in your environment.")]
    MissingCredential(String),

    #[error("Token injection failed: {0}")]
    InjectError(String),
}
