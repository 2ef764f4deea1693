use serde::{Deserialize, Serialize};

use super::ladder::{LevelDefinition, LevelLadder};
use crate::shared::progress_percent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelStatus {
    pub current_level: LevelDefinition,
    pub next_level: Option<LevelDefinition>,
    /// Percentage of the way from the current tier's floor to the next one;
    /// fixed at 100 on the top tier
    pub level_progress: u8,
}

/// Places a point total on the ladder.
///
/// The current level is the highest rung whose floor is at or below
/// `points`, so totals past a bounded top rung still land on it.
pub fn resolve_level(points: u64, ladder: &LevelLadder) -> LevelStatus {
    let current = ladder
        .iter()
        .rev()
        .find(|level| level.min_points <= points)
        .unwrap_or_else(|| ladder.lowest());

    let next = ladder.find_level(current.level + 1);

    let level_progress = match next {
        Some(next) => progress_percent(
            points.saturating_sub(current.min_points),
            next.min_points - current.min_points,
        ),
        None => 100,
    };

    LevelStatus {
        current_level: current.clone(),
        next_level: next.cloned(),
        level_progress,
    }
}
