use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/bullet`: the X/Y/Z facts behind one bullet.
#[derive(Debug, Clone, Deserialize)]
pub struct BulletRequest {
    /// What was accomplished [X].
    pub accomplished: String,
    /// How it was measured [Y].
    pub measured: String,
    /// The task or project [Z].
    pub task: String,
    #[serde(default)]
    pub keyword: Option<String>,
}

impl BulletRequest {
    /// The keyword with surrounding whitespace removed; blank counts as absent.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn is_blank(&self) -> bool {
        [&self.accomplished, &self.measured, &self.task]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}

/// Structured output of the writing call.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeneratedBullets {
    pub list_of_bullets: Vec<String>,
}

/// Candidate bullets plus the keyword they were written for.
#[derive(Debug, Clone, PartialEq)]
pub struct BulletOptions {
    pub list_of_bullets: Vec<String>,
    pub keyword: Option<String>,
}

/// Rubric grades for one candidate.
///
/// `bullet_id` is the candidate's 1-based position in the list sent to the grader;
/// ratings are matched back by id, never by their own position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BulletRating {
    pub bullet_id: u32,
    pub strong_action_verb: bool,
    pub clear_meaning: bool,
    pub has_quantifiable_result: bool,
    pub result_makes_sense: bool,
    pub skill_can_be_deduced: bool,
    pub skill_is_valuable: bool,
    pub is_readable: bool,
    pub is_specific: bool,
    pub keyword_added: bool,
}

/// Structured output of the grading call.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BulletRatingList {
    pub ratings: Vec<BulletRating>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredBullet {
    #[serde(rename = "bullet")]
    pub text: String,
    /// 0.0 – 1.0
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulletResponse {
    pub bullet_list: Vec<ScoredBullet>,
}
