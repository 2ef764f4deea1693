use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use tracing::{info, instrument};

use super::{report::ProgressReport, types::ClaimResponse};
use crate::{
    badge::BadgeCatalog,
    challenge::ChallengeProgress,
    leaderboard::LeaderboardEntry,
    level::LevelLadder,
    shared::{AppError, AppState},
    trip::UserProfile,
};

/// GET /badges
#[instrument(name = "list_badges", skip(state))]
pub async fn list_badges(State(state): State<AppState>) -> Json<BadgeCatalog> {
    Json(state.gamification.catalog().clone())
}

/// GET /levels
#[instrument(name = "list_levels", skip(state))]
pub async fn list_levels(State(state): State<AppState>) -> Json<LevelLadder> {
    Json(state.gamification.ladder().clone())
}

/// HTTP handler for a user's badge, level and stats overview
///
/// GET /users/:user_id/progress
#[instrument(name = "user_progress", skip(state))]
pub async fn user_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProgressReport>, AppError> {
    let report = state.gamification.progress_report(&user_id, Utc::now()).await?;

    info!(
        user_id = %user_id,
        earned = report.earned_count,
        level = report.level.current_level.level,
        "Progress report built"
    );

    Ok(Json(report))
}

/// HTTP handler for granting a single badge
///
/// POST /users/:user_id/badges/:badge_id
/// Returns the user profile after the grant (unchanged for unknown or held badges)
#[instrument(name = "award_badge", skip(state))]
pub async fn award_badge(
    State(state): State<AppState>,
    Path((user_id, badge_id)): Path<(String, String)>,
) -> Result<Json<UserProfile>, AppError> {
    let user = state.gamification.award_badge(&user_id, &badge_id).await?;
    Ok(Json(user))
}

/// HTTP handler granting every badge whose requirement is already met
///
/// POST /users/:user_id/claims
#[instrument(name = "claim_badges", skip(state))]
pub async fn claim_badges(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ClaimResponse>, AppError> {
    let (awarded, user) = state
        .gamification
        .claim_eligible_badges(&user_id, Utc::now())
        .await?;
    Ok(Json(ClaimResponse { awarded, user }))
}

/// GET /users/:user_id/challenges
#[instrument(name = "user_challenges", skip(state))]
pub async fn user_challenges(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ChallengeProgress>>, AppError> {
    let challenges = state.gamification.challenges(&user_id, Utc::now()).await?;
    Ok(Json(challenges))
}

/// GET /leaderboard
#[instrument(name = "leaderboard", skip(state))]
pub async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let entries = state.gamification.leaderboard(Utc::now()).await?;

    info!(entry_count = entries.len(), "Leaderboard listed");

    Ok(Json(entries))
}
