// Public API - what other modules can use
pub use handlers::{
    award_badge, claim_badges, list_badges, list_levels, leaderboard, user_challenges,
    user_progress,
};
pub use report::{build_progress_report, ProgressReport};
pub use service::{GamificationService, GamificationServiceBuilder};
pub use types::ClaimResponse;

// Internal modules
mod handlers;
pub mod report;
pub mod service;
mod types;
