use std::sync::Arc;

use mapcheck_evaluator::Evaluator;

#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<dyn Evaluator>,
}

impl AppState {
    pub fn new(evaluator: impl Evaluator) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
        }
    }
}
