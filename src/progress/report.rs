use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::badge::{evaluate_badges_with_stats, BadgeCatalog, BadgeProgress};
use crate::level::{resolve_level, LevelLadder, LevelStatus};
use crate::stats::{compute_stats, TravelStats};
use crate::trip::{Trip, UserProfile};

/// Everything a badge page renders for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub user_id: String,
    pub badges: Vec<BadgeProgress>,
    pub earned_count: usize,
    pub total_badges: usize,
    pub points: u64,
    pub level: LevelStatus,
    pub stats: TravelStats,
}

pub fn build_progress_report(
    user: &UserProfile,
    trips: &[Trip],
    catalog: &BadgeCatalog,
    ladder: &LevelLadder,
    now: DateTime<Utc>,
) -> ProgressReport {
    let stats = compute_stats(user, trips, now);
    let badges = evaluate_badges_with_stats(user, &stats, catalog);
    let earned_count = badges.iter().filter(|b| b.is_earned).count();

    ProgressReport {
        user_id: user.id.clone(),
        total_badges: badges.len(),
        earned_count,
        badges,
        points: user.points,
        level: resolve_level(user.points, ladder),
        stats,
    }
}
