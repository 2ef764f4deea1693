use serde::{Deserialize, Serialize};

use super::errors::LadderError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDefinition {
    pub level: u32,
    pub name: String,
    pub icon: String,
    pub min_points: u64,
    /// `None` marks the open-ended top tier
    #[serde(default)]
    pub max_points: Option<u64>,
}

impl LevelDefinition {
    pub fn contains(&self, points: u64) -> bool {
        points >= self.min_points && self.max_points.map_or(true, |max| points <= max)
    }
}

/// Contiguous point brackets covering every non-negative total.
///
/// Validated once on construction so lookups never need to re-check shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelLadder {
    levels: Vec<LevelDefinition>,
}

impl LevelLadder {
    pub fn new(levels: Vec<LevelDefinition>) -> Result<Self, LadderError> {
        let first = levels.first().ok_or(LadderError::Empty)?;
        if first.min_points != 0 {
            return Err(LadderError::DoesNotStartAtZero(first.min_points));
        }

        for level in &levels {
            if level.max_points.is_some_and(|max| max < level.min_points) {
                return Err(LadderError::InvertedRange(level.level));
            }
        }

        for pair in levels.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if upper.level != lower.level + 1 {
                return Err(LadderError::NonConsecutiveLevels {
                    previous: lower.level,
                    found: upper.level,
                });
            }
            let Some(max) = lower.max_points else {
                return Err(LadderError::UnboundedBelowTop(lower.level));
            };
            if max.checked_add(1) != Some(upper.min_points) {
                return Err(LadderError::Gap {
                    previous: lower.level,
                    next: upper.level,
                });
            }
        }

        Ok(Self { levels })
    }

    pub fn lowest(&self) -> &LevelDefinition {
        &self.levels[0]
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LevelDefinition> {
        self.levels.iter()
    }

    pub fn find_level(&self, level: u32) -> Option<&LevelDefinition> {
        self.levels.iter().find(|l| l.level == level)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Nine tiers from Novice Traveler to the open-ended Ultimate Wanderer
    pub fn travel_defaults() -> Self {
        let tiers: [(&str, &str, u64, Option<u64>); 9] = [
            ("Novice Traveler", "🌟", 0, Some(99)),
            ("Weekend Explorer", "⭐", 100, Some(249)),
            ("City Hopper", "✨", 250, Some(499)),
            ("Country Navigator", "🌠", 500, Some(999)),
            ("Continental Voyager", "💫", 1000, Some(1999)),
            ("Globe Trotter", "🌟", 2000, Some(3999)),
            ("World Explorer", "🏆", 4000, Some(7999)),
            ("Travel Legend", "👑", 8000, Some(15999)),
            ("Ultimate Wanderer", "🌌", 16000, None),
        ];

        Self {
            levels: tiers
                .iter()
                .zip(1..)
                .map(|(&(name, icon, min_points, max_points), level)| LevelDefinition {
                    level,
                    name: name.to_string(),
                    icon: icon.to_string(),
                    min_points,
                    max_points,
                })
                .collect(),
        }
    }
}
