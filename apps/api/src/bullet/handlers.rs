//! Axum route handler for the Bullet API.
//!
//! Flow: write variations → grade them → score locally → return in writer order.

use axum::{extract::State, Json};
use tracing::info;

use crate::bullet::grader::RubricEvaluator;
use crate::bullet::models::{BulletRequest, BulletResponse};
use crate::bullet::scoring::score_bullets;
use crate::bullet::writer::VariantGenerator;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/bullet
///
/// Writes resume bullet variations from the accomplished / measured / task facts
/// and returns each with its rubric score.
pub async fn handle_create_bullet(
    State(state): State<AppState>,
    Json(request): Json<BulletRequest>,
) -> Result<Json<BulletResponse>, AppError> {
    if request.is_blank() {
        return Err(AppError::Validation(
            "accomplished, measured and task cannot all be empty".to_string(),
        ));
    }

    let response =
        create_bullets(state.generator.as_ref(), state.evaluator.as_ref(), &request).await?;

    Ok(Json(response))
}

/// Runs generation, grading and scoring strictly in sequence. No partial results.
pub async fn create_bullets(
    generator: &dyn VariantGenerator,
    evaluator: &dyn RubricEvaluator,
    request: &BulletRequest,
) -> Result<BulletResponse, AppError> {
    let options = generator.generate(request).await?;
    info!("Generated {} bullet variations", options.list_of_bullets.len());

    let ratings = evaluator.evaluate(&options).await?;

    let bullet_list = score_bullets(&options.list_of_bullets, &ratings)?;
    info!(
        "Scored {} bullets (best {:.3})",
        bullet_list.len(),
        bullet_list.iter().map(|b| b.score).fold(0.0, f64::max)
    );

    Ok(BulletResponse { bullet_list })
}
