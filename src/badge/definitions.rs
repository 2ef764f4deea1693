use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::errors::CatalogError;
use crate::trip::ActivityCategory;

/// What a badge measures. Kinds without a data source in the trip model
/// still parse so catalogs can name them ahead of support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequirementKind {
    Trips,
    Cities,
    Countries,
    #[serde(alias = "cultural_activities")]
    CulturalActivities,
    #[serde(alias = "culinary_activities")]
    CulinaryActivities,
    #[serde(alias = "adventure")]
    AdventureActivities,
    #[serde(alias = "nightlife")]
    NightlifeActivities,
    #[serde(alias = "budget_success")]
    BudgetSuccess,
    #[serde(alias = "early_booking")]
    EarlyBooking,
    #[serde(alias = "shared_trips")]
    SharedTrips,
    #[serde(alias = "eco_friendly")]
    EcoFriendly,
    Photos,
    #[serde(other)]
    Unsupported,
}

impl RequirementKind {
    /// Activity category counted by category-scoped kinds
    pub fn activity_category(self) -> Option<ActivityCategory> {
        match self {
            RequirementKind::CulturalActivities => Some(ActivityCategory::Culture),
            RequirementKind::CulinaryActivities => Some(ActivityCategory::Food),
            RequirementKind::AdventureActivities => Some(ActivityCategory::Adventure),
            RequirementKind::NightlifeActivities => Some(ActivityCategory::Nightlife),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub kind: RequirementKind,
    pub threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub points: u64,
    pub requirement: Requirement,
}

/// Ordered, validated set of badge definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BadgeCatalog {
    badges: Vec<BadgeDefinition>,
}

impl BadgeCatalog {
    pub fn new(badges: Vec<BadgeDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for badge in &badges {
            if !seen.insert(badge.id.as_str()) {
                return Err(CatalogError::DuplicateId(badge.id.clone()));
            }
            if badge.points == 0 {
                return Err(CatalogError::ZeroPoints(badge.id.clone()));
            }
            if badge.requirement.threshold == 0 {
                return Err(CatalogError::ZeroThreshold(badge.id.clone()));
            }
        }
        Ok(Self { badges })
    }

    pub fn get(&self, badge_id: &str) -> Option<&BadgeDefinition> {
        self.badges.iter().find(|badge| badge.id == badge_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BadgeDefinition> {
        self.badges.iter()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    /// The badges the travel planner ships with
    pub fn travel_defaults() -> Self {
        use RequirementKind::*;

        Self {
            badges: vec![
                badge("first-trip", "First Steps", "Created your first trip", "🎯", 10, Trips, 1),
                badge("explorer", "Explorer", "Visited 5 different cities", "🗺️", 50, Cities, 5),
                badge(
                    "globetrotter",
                    "Globe Trotter",
                    "Visited 10 different countries",
                    "🌍",
                    100,
                    Countries,
                    10,
                ),
                badge(
                    "budget-master",
                    "Budget Master",
                    "Stayed under budget on 5 trips",
                    "💰",
                    75,
                    BudgetSuccess,
                    5,
                ),
                badge(
                    "early-bird",
                    "Early Bird",
                    "Booked 3 trips more than 60 days in advance",
                    "🐦",
                    40,
                    EarlyBooking,
                    3,
                ),
                badge(
                    "social-butterfly",
                    "Social Butterfly",
                    "Shared 10 trips with the community",
                    "🦋",
                    60,
                    SharedTrips,
                    10,
                ),
                badge(
                    "culture-vulture",
                    "Culture Vulture",
                    "Visited 20 museums and cultural sites",
                    "🎭",
                    80,
                    CulturalActivities,
                    20,
                ),
                badge(
                    "foodie",
                    "Foodie Explorer",
                    "Tried 30 different cuisines",
                    "🍜",
                    70,
                    CulinaryActivities,
                    30,
                ),
                badge(
                    "eco-warrior",
                    "Eco Warrior",
                    "Chose eco-friendly transportation 5 times",
                    "🌱",
                    90,
                    EcoFriendly,
                    5,
                ),
                badge(
                    "night-owl",
                    "Night Owl",
                    "Experienced 10 nightlife activities",
                    "🦉",
                    45,
                    NightlifeActivities,
                    10,
                ),
                badge("photographer", "Photographer", "Added photos to 15 trips", "📸", 55, Photos, 15),
                badge(
                    "adventurer",
                    "Adventurer",
                    "Completed 10 adventure activities",
                    "🏔️",
                    85,
                    AdventureActivities,
                    10,
                ),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a BadgeCatalog {
    type Item = &'a BadgeDefinition;
    type IntoIter = std::slice::Iter<'a, BadgeDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.badges.iter()
    }
}

fn badge(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    points: u64,
    kind: RequirementKind,
    threshold: u32,
) -> BadgeDefinition {
    BadgeDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        points,
        requirement: Requirement { kind, threshold },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn travel_defaults_pass_validation() {
        let defaults = BadgeCatalog::travel_defaults();
        let validated = BadgeCatalog::new(defaults.iter().cloned().collect()).unwrap();
        assert_eq!(validated.len(), 12);
        assert_eq!(validated.get("foodie").unwrap().points, 70);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let first = badge("dup", "A", "", "", 10, RequirementKind::Trips, 1);
        let second = badge("dup", "B", "", "", 20, RequirementKind::Cities, 2);

        let result = BadgeCatalog::new(vec![first, second]);
        assert_eq!(result, Err(CatalogError::DuplicateId("dup".into())));
    }

    #[test]
    fn rejects_zero_points_and_thresholds() {
        let no_points = badge("free", "Free", "", "", 0, RequirementKind::Trips, 1);
        assert_eq!(
            BadgeCatalog::new(vec![no_points]),
            Err(CatalogError::ZeroPoints("free".into()))
        );

        let no_threshold = badge("easy", "Easy", "", "", 5, RequirementKind::Trips, 0);
        assert_eq!(
            BadgeCatalog::new(vec![no_threshold]),
            Err(CatalogError::ZeroThreshold("easy".into()))
        );
    }

    #[rstest]
    #[case("trips", RequirementKind::Trips)]
    #[case("culturalActivities", RequirementKind::CulturalActivities)]
    #[case("cultural_activities", RequirementKind::CulturalActivities)]
    #[case("budget_success", RequirementKind::BudgetSuccess)]
    #[case("nightlife", RequirementKind::NightlifeActivities)]
    #[case("time_travel", RequirementKind::Unsupported)]
    fn parses_requirement_kinds(#[case] raw: &str, #[case] expected: RequirementKind) {
        let json = format!(r#"{{"kind":"{raw}","threshold":3}}"#);
        let requirement: Requirement = serde_json::from_str(&json).unwrap();
        assert_eq!(requirement.kind, expected);
        assert_eq!(requirement.threshold, 3);
    }
}
