//! LLM Client: the single point of entry for all OpenAI calls in the bullet API.
//!
//! ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
//! All LLM interactions MUST go through this module.
//!
//! Model: o4-mini (hardcoded, do not make configurable)

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;
pub mod schema;
#[cfg(test)]
pub(crate) mod test_support;

pub use schema::StructuredOutput;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "o4-mini";
const MAX_OUTPUT_TOKENS: u32 = 16_000;
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM refused the request: {0}")]
    Refusal(String),
}

impl LlmError {
    /// True when the model answered but its output could not be used,
    /// including a refusal. These are worth another attempt; transport and
    /// API errors are not.
    pub fn is_malformed_output(&self) -> bool {
        matches!(
            self,
            LlmError::Parse(_) | LlmError::EmptyContent | LlmError::Refusal(_)
        )
    }
}

/// How hard the reasoning model should think before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    High,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (OpenAI Responses API)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    instructions: &'a str,
    input: &'a str,
    max_output_tokens: u32,
    reasoning: ReasoningConfig,
    text: TextConfig<'a>,
}

#[derive(Debug, Serialize)]
struct ReasoningConfig {
    effort: ReasoningEffort,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct TextConfig<'a> {
    format: OutputFormat<'a>,
}

#[derive(Debug, Serialize)]
struct OutputFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'static str,
    name: &'a str,
    schema: Value,
    strict: bool,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    #[serde(default)]
    pub output: Vec<OutputItem>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    Message {
        #[serde(default)]
        content: Vec<ContentPart>,
    },
    Reasoning {
        #[serde(default)]
        summary: Vec<SummaryPart>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    OutputText { text: String },
    Refusal { refusal: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct SummaryPart {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the first `output_text` part of the first message.
    pub fn text(&self) -> Option<&str> {
        self.message_parts().find_map(|part| match part {
            ContentPart::OutputText { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// The model's refusal message, if it declined to answer.
    pub fn refusal(&self) -> Option<&str> {
        self.message_parts().find_map(|part| match part {
            ContentPart::Refusal { refusal } => Some(refusal.as_str()),
            _ => None,
        })
    }

    /// Joins all reasoning summary text. Empty unless a summary was requested.
    pub fn reasoning_summary(&self) -> String {
        self.output
            .iter()
            .filter_map(|item| match item {
                OutputItem::Reasoning { summary } => Some(summary),
                _ => None,
            })
            .flatten()
            .map(|part| part.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn message_parts(&self) -> impl Iterator<Item = &ContentPart> {
        self.output
            .iter()
            .filter_map(|item| match item {
                OutputItem::Message { content } => Some(content),
                _ => None,
            })
            .flatten()
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The single LLM client used by all services.
/// Wraps the OpenAI Responses API with retry logic and structured output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
    /// Request and log reasoning summaries.
    debug: bool,
}

impl LlmClient {
    pub fn new(api_key: String, debug: bool) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            debug,
        })
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Makes a raw call to the Responses API, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call<T: StructuredOutput>(
        &self,
        prompt: &str,
        instructions: &str,
        effort: ReasoningEffort,
    ) -> Result<LlmResponse, LlmError> {
        let schema_name = T::format_name();
        let request_body = ResponsesRequest {
            model: MODEL,
            instructions,
            input: prompt,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            reasoning: ReasoningConfig {
                effort,
                summary: self.debug.then_some("detailed"),
            },
            text: TextConfig {
                format: OutputFormat {
                    format_type: "json_schema",
                    name: &schema_name,
                    schema: T::openai_schema(),
                    strict: true,
                },
            },
        };
        let url = format!("{}/responses", self.base_url);

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<OpenAiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            // Read failures stay Http; a body that isn't a response object is Parse
            let body = response.bytes().await?;
            let llm_response: LlmResponse = serde_json::from_slice(&body)?;

            if let Some(usage) = &llm_response.usage {
                debug!(
                    "LLM call succeeded: schema={}, input_tokens={}, output_tokens={}",
                    schema_name, usage.input_tokens, usage.output_tokens
                );
            }

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    /// Calls the LLM with a strict JSON schema derived from `T` and deserializes the reply.
    /// Schema mismatches fail with `LlmError::Parse`; nothing is coerced.
    pub async fn call_structured<T: StructuredOutput>(
        &self,
        prompt: &str,
        instructions: &str,
        effort: ReasoningEffort,
    ) -> Result<T, LlmError> {
        let response = self.call::<T>(prompt, instructions, effort).await?;

        if self.debug {
            let thinking = response.reasoning_summary();
            if !thinking.is_empty() {
                debug!("thinking: {thinking}");
            }
        }

        parse_structured(&response)
    }
}

fn parse_structured<T: StructuredOutput>(response: &LlmResponse) -> Result<T, LlmError> {
    let text = match response.text() {
        Some(text) => text,
        None => {
            return Err(match response.refusal() {
                Some(refusal) => LlmError::Refusal(refusal.to_string()),
                None => LlmError::EmptyContent,
            })
        }
    };

    // Strict mode should never fence its output, but strip it if it does
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(LlmError::EmptyContent);
    }

    serde_json::from_str(text).map_err(LlmError::Parse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    let stripped = stripped.trim_start();
    stripped
        .strip_suffix("```")
        .map(|s| s.trim())
        .unwrap_or(stripped)
}
