// Library crate for the TripQuest gamification service
// This file exposes the public API for integration tests

pub mod badge;
pub mod challenge;
pub mod config;
pub mod leaderboard;
pub mod level;
pub mod progress;
pub mod shared;
pub mod stats;
pub mod trip;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Re-export commonly used types for easier access in tests
pub use badge::{
    award_badge, evaluate_badges, BadgeCatalog, BadgeDefinition, BadgeProgress, Requirement,
    RequirementKind,
};
pub use challenge::{
    evaluate_challenges, ChallengeDefinition, ChallengeError, ChallengeProgress, ChallengeStatus,
};
pub use config::{AppConfig, ConfigError};
pub use leaderboard::{rank_users, LeaderboardEntry};
pub use level::{resolve_level, LevelDefinition, LevelLadder, LevelStatus};
pub use progress::{GamificationService, ProgressReport};
pub use shared::{AppError, AppState};
pub use stats::{compute_stats, TravelStats};
pub use trip::{
    trips_for_user, Activity, ActivityCategory, InMemoryTravelRepository, Stop,
    TravelRepository, TravelSnapshot, Trip, UserProfile,
};

/// Routes served to the travel planner UI
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/badges", get(progress::list_badges))
        .route("/levels", get(progress::list_levels))
        .route("/leaderboard", get(progress::leaderboard))
        .route("/users/:user_id/progress", get(progress::user_progress))
        .route("/users/:user_id/challenges", get(progress::user_challenges))
        .route("/users/:user_id/claims", post(progress::claim_badges))
        .route(
            "/users/:user_id/badges/:badge_id",
            post(progress::award_badge),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
