//! Bullet scoring: deterministic score from rubric grades and bullet length.
//!
//! score = (length_score + Σ weight(flag) for each true flag) / 75
//!
//! Length score is 10 up to 100 characters, decays linearly to 0 at 300.

use std::collections::HashMap;

use thiserror::Error;

use crate::bullet::models::{BulletRating, ScoredBullet};

/// Bullets at or under this many characters get the full length score.
pub const ONE_LINE_CHARS: usize = 100;
/// Characters past `ONE_LINE_CHARS` over which the length score decays to zero.
pub const LENGTH_DECAY_CHARS: f64 = 200.0;
pub const MAX_LENGTH_SCORE: f64 = 10.0;

pub const STRONG_ACTION_VERB_WEIGHT: f64 = 10.0;
pub const CLEAR_MEANING_WEIGHT: f64 = 10.0;
pub const QUANTIFIABLE_RESULT_WEIGHT: f64 = 5.0;
pub const RESULT_MAKES_SENSE_WEIGHT: f64 = 7.0;
pub const SKILL_DEDUCED_WEIGHT: f64 = 5.0;
pub const SKILL_VALUABLE_WEIGHT: f64 = 3.0;
pub const READABLE_WEIGHT: f64 = 10.0;
pub const SPECIFIC_WEIGHT: f64 = 5.0;
pub const KEYWORD_ADDED_WEIGHT: f64 = 10.0;

/// Best possible total: full length score plus every flag.
pub const MAX_TOTAL: f64 = 75.0;

/// A grading reply that does not cover each candidate exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradingMismatch {
    #[error("no rating returned for bullet {bullet_id}")]
    MissingRating { bullet_id: u32 },

    #[error("bullet {bullet_id} was rated more than once")]
    DuplicateRating { bullet_id: u32 },

    #[error("rating refers to unknown bullet {bullet_id}")]
    UnknownBullet { bullet_id: u32 },
}

/// Length component of the score, 0.0 – 10.0. Length counts characters, not bytes.
pub fn length_score(text: &str) -> f64 {
    let overflow = text.chars().count().saturating_sub(ONE_LINE_CHARS) as f64;
    (MAX_LENGTH_SCORE * (1.0 - overflow / LENGTH_DECAY_CHARS)).max(0.0)
}

/// Sum of the weights of every true flag, 0.0 – 65.0.
pub fn rubric_points(rating: &BulletRating) -> f64 {
    [
        (rating.strong_action_verb, STRONG_ACTION_VERB_WEIGHT),
        (rating.clear_meaning, CLEAR_MEANING_WEIGHT),
        (rating.has_quantifiable_result, QUANTIFIABLE_RESULT_WEIGHT),
        (rating.result_makes_sense, RESULT_MAKES_SENSE_WEIGHT),
        (rating.skill_can_be_deduced, SKILL_DEDUCED_WEIGHT),
        (rating.skill_is_valuable, SKILL_VALUABLE_WEIGHT),
        (rating.is_readable, READABLE_WEIGHT),
        (rating.is_specific, SPECIFIC_WEIGHT),
        (rating.keyword_added, KEYWORD_ADDED_WEIGHT),
    ]
    .iter()
    .filter(|(set, _)| *set)
    .map(|(_, weight)| weight)
    .sum()
}

/// Normalized score for one bullet, 0.0 – 1.0.
pub fn score_bullet(text: &str, rating: &BulletRating) -> f64 {
    (length_score(text) + rubric_points(rating)) / MAX_TOTAL
}

/// Scores every candidate against the rating that names it.
///
/// Candidate `i` (0-based) has `bullet_id` `i + 1`. The result keeps candidate
/// order no matter how the ratings are ordered. Every candidate must be rated
/// exactly once; anything else is a `GradingMismatch`.
pub fn score_bullets(
    bullets: &[String],
    ratings: &[BulletRating],
) -> Result<Vec<ScoredBullet>, GradingMismatch> {
    let mut by_id: HashMap<u32, &BulletRating> = HashMap::with_capacity(ratings.len());
    for rating in ratings {
        let id = rating.bullet_id;
        if id == 0 || id as usize > bullets.len() {
            return Err(GradingMismatch::UnknownBullet { bullet_id: id });
        }
        if by_id.insert(id, rating).is_some() {
            return Err(GradingMismatch::DuplicateRating { bullet_id: id });
        }
    }

    bullets
        .iter()
        .zip(1u32..)
        .map(|(text, bullet_id)| -> Result<ScoredBullet, GradingMismatch> {
            let rating = by_id
                .get(&bullet_id)
                .ok_or(GradingMismatch::MissingRating { bullet_id })?;
            Ok(ScoredBullet {
                text: text.clone(),
                score: score_bullet(text, rating),
            })
        })
        .collect()
}
