use std::sync::Arc;

use crate::bullet::grader::RubricEvaluator;
use crate::bullet::writer::VariantGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no mutable state; every request gets its own flow.
#[derive(Clone)]
pub struct AppState {
    /// Writes bullet variations. Default: LlmVariantGenerator.
    pub generator: Arc<dyn VariantGenerator>,
    /// Grades bullet variations. Default: LlmRubricEvaluator.
    pub evaluator: Arc<dyn RubricEvaluator>,
}
