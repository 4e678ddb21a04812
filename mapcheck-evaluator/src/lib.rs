pub mod config;
pub mod error;
pub mod outcome;
pub mod request;
pub mod service;

// Re-export commonly used types
pub use config::EvaluatorConfig;
pub use error::{EvalError, EvalResult};
pub use outcome::{CheckReply, EvaluationOutcome, OutcomeBody};
pub use request::{CheckInput, EvaluationRequest};
pub use service::{Evaluator, HttpEvaluator};
