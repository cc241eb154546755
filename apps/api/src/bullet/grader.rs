//! Rubric Evaluator: grades candidate bullets against the nine boolean criteria.
//!
//! One call, no output retry: any failure here fails the request.

use async_trait::async_trait;
use tracing::info;

use crate::bullet::models::{BulletOptions, BulletRating, BulletRatingList};
use crate::bullet::prompts::{GRADING_INSTRUCTIONS, GRADING_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::prompts::{keyword_line, CAREER_COACH_PERSONA};
use crate::llm_client::{LlmClient, ReasoningEffort};

#[async_trait]
pub trait RubricEvaluator: Send + Sync {
    /// Returns ratings tagged with each candidate's 1-based `bullet_id`.
    async fn evaluate(&self, options: &BulletOptions) -> Result<Vec<BulletRating>, AppError>;
}

/// Grades bullets with the reasoning model at low effort.
pub struct LlmRubricEvaluator {
    llm: LlmClient,
}

impl LlmRubricEvaluator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl RubricEvaluator for LlmRubricEvaluator {
    async fn evaluate(&self, options: &BulletOptions) -> Result<Vec<BulletRating>, AppError> {
        let prompt = build_grading_prompt(options);
        let instructions = format!("{CAREER_COACH_PERSONA} {GRADING_INSTRUCTIONS}");

        let graded: BulletRatingList = self
            .llm
            .call_structured(&prompt, &instructions, ReasoningEffort::Low)
            .await
            .map_err(|e| AppError::Llm(format!("Bullet grading failed: {e}")))?;

        info!(
            "Grader returned {} ratings for {} bullets",
            graded.ratings.len(),
            options.list_of_bullets.len()
        );

        Ok(graded.ratings)
    }
}

fn build_grading_prompt(options: &BulletOptions) -> String {
    let numbered_bullets = options
        .list_of_bullets
        .iter()
        .enumerate()
        .map(|(i, bullet)| format!("  {}. {}", i + 1, bullet))
        .collect::<Vec<_>>()
        .join("\n");

    GRADING_PROMPT_TEMPLATE
        .replace("{numbered_bullets}", &numbered_bullets)
        .replace("{keyword_line}", &keyword_line(options.keyword.as_deref()))
}
