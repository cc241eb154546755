//! Variant Generator: asks the LLM for candidate bullets built from the X/Y/Z facts.
//!
//! Default: `LlmVariantGenerator`. `AppState` holds an `Arc<dyn VariantGenerator>`
//! so the handler can be exercised without a provider.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::bullet::models::{BulletOptions, BulletRequest, GeneratedBullets};
use crate::bullet::prompts::{WRITING_INSTRUCTIONS, WRITING_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::prompts::{keyword_line, CAREER_COACH_PERSONA};
use crate::llm_client::{LlmClient, LlmError, ReasoningEffort};

/// Extra attempts when the model's output is malformed.
pub const MAX_GENERATION_RETRIES: u32 = 3;
/// How many variations the prompt asks for. Not enforced.
pub const TARGET_VARIATIONS: usize = 10;

#[async_trait]
pub trait VariantGenerator: Send + Sync {
    async fn generate(&self, request: &BulletRequest) -> Result<BulletOptions, AppError>;
}

/// Writes bullet variations with the reasoning model at high effort.
pub struct LlmVariantGenerator {
    llm: LlmClient,
}

impl LlmVariantGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl VariantGenerator for LlmVariantGenerator {
    async fn generate(&self, request: &BulletRequest) -> Result<BulletOptions, AppError> {
        let prompt = build_writing_prompt(request);
        let instructions = format!("{CAREER_COACH_PERSONA} {WRITING_INSTRUCTIONS}");

        let (llm, prompt, instructions) = (&self.llm, prompt.as_str(), instructions.as_str());

        let list_of_bullets = with_output_retries(|| async move {
            let generated: GeneratedBullets = llm
                .call_structured(prompt, instructions, ReasoningEffort::High)
                .await?;
            validate_bullets(generated.list_of_bullets)
        })
        .await?;

        if list_of_bullets.len() != TARGET_VARIATIONS {
            warn!(
                "Writer returned {} bullets (asked for {})",
                list_of_bullets.len(),
                TARGET_VARIATIONS
            );
        }

        Ok(BulletOptions {
            list_of_bullets,
            keyword: request.keyword().map(str::to_string),
        })
    }
}

/// Runs `attempt` until it succeeds, retrying only malformed output, up to
/// `MAX_GENERATION_RETRIES` extra times. Any other error ends the request.
async fn with_output_retries<F, Fut>(mut attempt: F) -> Result<Vec<String>, AppError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<Vec<String>, LlmError>>,
{
    let mut last_error = None;

    for n in 0..=MAX_GENERATION_RETRIES {
        match attempt().await {
            Ok(bullets) => {
                info!("Writer produced {} bullets on attempt {}", bullets.len(), n + 1);
                return Ok(bullets);
            }
            Err(e) if e.is_malformed_output() => {
                warn!(
                    "Generation attempt {}/{} returned malformed output: {}, retrying",
                    n + 1,
                    MAX_GENERATION_RETRIES + 1,
                    e
                );
                last_error = Some(e);
            }
            Err(e) => return Err(AppError::Llm(format!("Bullet writing failed: {e}"))),
        }
    }

    Err(AppError::Llm(format!(
        "Bullet writing failed after {} attempts: {}",
        MAX_GENERATION_RETRIES + 1,
        last_error.map(|e| e.to_string()).unwrap_or_default()
    )))
}

/// An empty list or a blank bullet is treated like unparseable output.
fn validate_bullets(bullets: Vec<String>) -> Result<Vec<String>, LlmError> {
    let bullets: Vec<String> = bullets.into_iter().map(|b| b.trim().to_string()).collect();
    if bullets.is_empty() || bullets.iter().any(|b| b.is_empty()) {
        return Err(LlmError::EmptyContent);
    }
    Ok(bullets)
}

fn build_writing_prompt(request: &BulletRequest) -> String {
    WRITING_PROMPT_TEMPLATE
        .replace("{accomplished}", request.accomplished.trim())
        .replace("{measured}", request.measured.trim())
        .replace("{task}", request.task.trim())
        .replace("{keyword_line}", &keyword_line(request.keyword()))
}
