// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting pieces.

/// Persona shared by every bullet-related call.
pub const CAREER_COACH_PERSONA: &str =
    "You are a career coach who helps people write resume bullet points.";

/// Renders the optional keyword line used by both the writing and grading prompts.
pub fn keyword_line(keyword: Option<&str>) -> String {
    match keyword {
        Some(keyword) => format!("Keyword: {keyword}"),
        None => "No keyword provided".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_line_with_keyword() {
        assert_eq!(keyword_line(Some("Kubernetes")), "Keyword: Kubernetes");
    }

    #[test]
    fn test_keyword_line_without_keyword() {
        assert_eq!(keyword_line(None), "No keyword provided");
    }
}
