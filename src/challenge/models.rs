use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::errors::ChallengeError;
use super::region::Region;
use crate::trip::ActivityCategory;

/// A time-boxed goal. Only trips starting between `starts_on` and
/// `deadline` (both inclusive) count towards it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub reward: u64,
    pub starts_on: NaiveDate,
    pub deadline: NaiveDate,
    pub requirement: ChallengeRequirement,
}

impl ChallengeDefinition {
    pub fn in_window(&self, date: NaiveDate) -> bool {
        self.starts_on <= date && date <= self.deadline
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChallengeRequirement {
    /// Distinct countries, optionally only those in one region
    #[serde(rename_all = "camelCase")]
    Countries {
        #[serde(default)]
        region: Option<Region>,
        count: u32,
    },
    /// Completed trips whose activity spend stayed strictly below `max_budget`
    #[serde(rename_all = "camelCase")]
    BudgetTrips { max_budget: f64, count: u32 },
    #[serde(rename_all = "camelCase")]
    ActivityType {
        category: ActivityCategory,
        count: u32,
    },
}

impl ChallengeRequirement {
    pub fn count(&self) -> u32 {
        match self {
            ChallengeRequirement::Countries { count, .. }
            | ChallengeRequirement::BudgetTrips { count, .. }
            | ChallengeRequirement::ActivityType { count, .. } => *count,
        }
    }
}

/// Rejects challenge lists that could never report sensible progress:
/// repeated ids, zero counts, windows that end before they start and
/// budget limits that are not positive.
pub fn validate_challenges(
    challenges: Vec<ChallengeDefinition>,
) -> Result<Vec<ChallengeDefinition>, ChallengeError> {
    let mut seen = HashSet::new();
    for challenge in &challenges {
        if !seen.insert(challenge.id.as_str()) {
            return Err(ChallengeError::DuplicateId(challenge.id.clone()));
        }
        if challenge.requirement.count() == 0 {
            return Err(ChallengeError::ZeroCount(challenge.id.clone()));
        }
        if challenge.deadline < challenge.starts_on {
            return Err(ChallengeError::InvertedWindow {
                id: challenge.id.clone(),
                starts_on: challenge.starts_on,
                deadline: challenge.deadline,
            });
        }
        if let ChallengeRequirement::BudgetTrips { max_budget, .. } = challenge.requirement {
            if !(max_budget.is_finite() && max_budget > 0.0) {
                return Err(ChallengeError::InvalidBudget(challenge.id.clone()));
            }
        }
    }
    Ok(challenges)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChallengeStatus {
    Active,
    Completed,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeProgress {
    #[serde(flatten)]
    pub challenge: ChallengeDefinition,
    pub current: u32,
    pub required: u32,
    pub progress: u8,
    pub status: ChallengeStatus,
}

/// The challenges running through 2026
pub fn default_challenges() -> Vec<ChallengeDefinition> {
    let starts_on = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default();
    let deadline = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap_or_default();

    vec![
        ChallengeDefinition {
            id: "europe-explorer".to_string(),
            name: "European Explorer".to_string(),
            description: "Visit 5 European countries in 2026".to_string(),
            icon: "🇪🇺".to_string(),
            reward: 200,
            starts_on,
            deadline,
            requirement: ChallengeRequirement::Countries {
                region: Some(Region::Europe),
                count: 5,
            },
        },
        ChallengeDefinition {
            id: "budget-champion".to_string(),
            name: "Budget Champion".to_string(),
            description: "Complete 3 trips under $500 each".to_string(),
            icon: "💵".to_string(),
            reward: 150,
            starts_on,
            deadline,
            requirement: ChallengeRequirement::BudgetTrips {
                max_budget: 500.0,
                count: 3,
            },
        },
        ChallengeDefinition {
            id: "culture-seeker".to_string(),
            name: "Culture Seeker".to_string(),
            description: "Visit 15 museums this year".to_string(),
            icon: "🏛️".to_string(),
            reward: 100,
            starts_on,
            deadline,
            requirement: ChallengeRequirement::ActivityType {
                category: ActivityCategory::Culture,
                count: 15,
            },
        },
    ]
}
