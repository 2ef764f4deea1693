use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::level::{resolve_level, LevelLadder};
use crate::stats::{compute_stats, TravelStats};
use crate::trip::{trips_for_user, Trip, UserProfile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub points: u64,
    pub level: u32,
    pub level_name: String,
    pub level_icon: String,
    pub badge_count: usize,
    /// 1-based position; ties on points keep the order users were supplied in
    pub rank: usize,
    pub stats: TravelStats,
}

/// Ranks users by points, highest first.
///
/// `all_trips` may hold trips of any user; each user only sees their own.
/// Equal point totals never share a rank: the user listed first in `users`
/// ranks higher.
pub fn rank_users(
    users: &[UserProfile],
    all_trips: &[Trip],
    ladder: &LevelLadder,
    now: DateTime<Utc>,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = users
        .iter()
        .map(|user| {
            let trips = trips_for_user(all_trips, &user.id);
            let stats = compute_stats(user, trips, now);
            let level = resolve_level(user.points, ladder).current_level;

            LeaderboardEntry {
                id: user.id.clone(),
                name: user.name.clone(),
                avatar: user.avatar.clone(),
                points: user.points,
                level: level.level,
                level_name: level.name,
                level_icon: level.icon,
                badge_count: user.badges.len(),
                rank: 0,
                stats,
            }
        })
        .collect();

    // stable sort: tied users keep input order
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }

    debug!(users = entries.len(), trips = all_trips.len(), "Leaderboard ranked");

    entries
}
