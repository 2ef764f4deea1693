use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::definitions::{BadgeCatalog, BadgeDefinition, RequirementKind};
use crate::shared::progress_percent;
use crate::stats::{compute_stats, TravelStats};
use crate::trip::{Trip, UserProfile};

/// A badge together with how far the user is towards it.
///
/// `is_earned` reflects only whether the badge was granted. A badge at 100%
/// stays unearned until [`super::award_badge`] is called for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeProgress {
    #[serde(flatten)]
    pub badge: BadgeDefinition,
    pub is_earned: bool,
    pub current: u32,
    pub required: u32,
    pub progress: u8,
}

impl BadgeProgress {
    /// Requirement met, whether or not the badge has been granted yet
    pub fn is_complete(&self) -> bool {
        self.current >= self.required
    }
}

/// Evaluates every catalog badge against the user's trips, in catalog order.
///
/// `trips` must already be filtered to `user`; trips belonging to anyone
/// else are counted as the user's own.
pub fn evaluate_badges(
    user: &UserProfile,
    trips: &[Trip],
    catalog: &BadgeCatalog,
    now: DateTime<Utc>,
) -> Vec<BadgeProgress> {
    let stats = compute_stats(user, trips, now);
    evaluate_badges_with_stats(user, &stats, catalog)
}

/// Same as [`evaluate_badges`] for callers that already hold the user's stats
pub fn evaluate_badges_with_stats(
    user: &UserProfile,
    stats: &TravelStats,
    catalog: &BadgeCatalog,
) -> Vec<BadgeProgress> {
    catalog
        .iter()
        .map(|badge| {
            let required = badge.requirement.threshold;
            let current = current_count(badge.requirement.kind, stats);

            BadgeProgress {
                badge: badge.clone(),
                is_earned: user.has_badge(&badge.id),
                current,
                required,
                progress: progress_percent(u64::from(current), u64::from(required)),
            }
        })
        .collect()
}

fn current_count(kind: RequirementKind, stats: &TravelStats) -> u32 {
    match kind {
        RequirementKind::Trips => stats.total_trips,
        RequirementKind::Cities => stats.cities_visited,
        RequirementKind::Countries => stats.countries_visited,
        RequirementKind::CulturalActivities
        | RequirementKind::CulinaryActivities
        | RequirementKind::AdventureActivities
        | RequirementKind::NightlifeActivities => kind
            .activity_category()
            .map(|category| stats.activities_of(category))
            .unwrap_or_default(),
        RequirementKind::BudgetSuccess => stats.trips_under_budget,
        RequirementKind::EarlyBooking => stats.early_bookings,
        RequirementKind::SharedTrips
        | RequirementKind::EcoFriendly
        | RequirementKind::Photos
        | RequirementKind::Unsupported => {
            debug!(?kind, "No data source for requirement kind, reporting zero");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::Requirement;
    use crate::trip::{Activity, ActivityCategory, Stop};
    use chrono::{NaiveDate, TimeZone};
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap()
    }

    fn first_trip_catalog() -> BadgeCatalog {
        BadgeCatalog::new(vec![BadgeDefinition {
            id: "first-trip".into(),
            name: "First Steps".into(),
            description: "Created your first trip".into(),
            icon: "🎯".into(),
            points: 10,
            requirement: Requirement {
                kind: RequirementKind::Trips,
                threshold: 1,
            },
        }])
        .unwrap()
    }

    fn trip_with(id: &str, activities: Vec<Activity>) -> Trip {
        Trip {
            id: id.into(),
            user_id: "u".into(),
            name: String::new(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            budget: None,
            created_at: None,
            stops: vec![Stop {
                id: "s".into(),
                city_id: None,
                city: "Tokyo".into(),
                country: "Japan".into(),
                activities,
            }],
        }
    }

    fn activities(category: ActivityCategory, count: usize) -> Vec<Activity> {
        (0..count)
            .map(|i| Activity {
                id: i.to_string(),
                name: format!("{category} {i}"),
                category,
                cost: 10.0,
            })
            .collect()
    }

    #[test]
    fn no_trips_means_no_progress() {
        let user = UserProfile::new("u", "User");
        let progress = evaluate_badges(&user, &[], &first_trip_catalog(), now());

        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].current, 0);
        assert_eq!(progress[0].progress, 0);
        assert!(!progress[0].is_earned);
    }

    #[test]
    fn saturated_progress_does_not_earn_the_badge() {
        let user = UserProfile::new("u", "User");
        let trips = vec![
            trip_with("1", vec![]),
            trip_with("2", vec![]),
            trip_with("3", vec![]),
        ];

        let progress = evaluate_badges(&user, &trips, &first_trip_catalog(), now());
        assert_eq!(progress[0].current, 3);
        assert_eq!(progress[0].required, 1);
        assert_eq!(progress[0].progress, 100);
        assert!(progress[0].is_complete());
        assert!(!progress[0].is_earned);
    }

    #[test]
    fn granted_badge_is_earned_regardless_of_progress() {
        let mut user = UserProfile::new("u", "User");
        user.badges.push("first-trip".into());

        let progress = evaluate_badges(&user, &[], &first_trip_catalog(), now());
        assert!(progress[0].is_earned);
        assert_eq!(progress[0].progress, 0);
    }

    #[test]
    fn category_badges_count_exact_activities() {
        let user = UserProfile::new("u", "User");
        let mut mixed = activities(ActivityCategory::Culture, 4);
        mixed.extend(activities(ActivityCategory::Food, 6));
        mixed.extend(activities(ActivityCategory::Sightseeing, 10));
        let trips = vec![trip_with("1", mixed)];

        let progress = evaluate_badges(&user, &trips, &BadgeCatalog::travel_defaults(), now());
        let by_id = |id: &str| progress.iter().find(|p| p.badge.id == id).unwrap();

        assert_eq!(by_id("culture-vulture").current, 4);
        assert_eq!(by_id("culture-vulture").progress, 20);
        assert_eq!(by_id("foodie").current, 6);
        assert_eq!(by_id("foodie").progress, 20);
        assert_eq!(by_id("adventurer").current, 0);
    }

    #[test]
    fn unsupported_kinds_report_zero() {
        let user = UserProfile::new("u", "User");
        let trips = vec![trip_with("1", activities(ActivityCategory::Culture, 3))];

        let progress = evaluate_badges(&user, &trips, &BadgeCatalog::travel_defaults(), now());
        for id in ["social-butterfly", "eco-warrior", "photographer"] {
            let badge = progress.iter().find(|p| p.badge.id == id).unwrap();
            assert_eq!(badge.current, 0, "{id} should have no progress");
            assert_eq!(badge.progress, 0);
        }
    }

    #[test]
    fn preserves_catalog_order() {
        let user = UserProfile::new("u", "User");
        let catalog = BadgeCatalog::travel_defaults();
        let progress = evaluate_badges(&user, &[], &catalog, now());

        let evaluated: Vec<&str> = progress.iter().map(|p| p.badge.id.as_str()).collect();
        let defined: Vec<&str> = catalog.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(evaluated, defined);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 13)] // 12.5 rounds up
    #[case(4, 50)]
    #[case(8, 100)]
    #[case(11, 100)]
    fn progress_tracks_trip_count(#[case] trip_count: usize, #[case] expected: u8) {
        let user = UserProfile::new("u", "User");
        let catalog = BadgeCatalog::new(vec![BadgeDefinition {
            id: "frequent-flyer".into(),
            name: "Frequent Flyer".into(),
            description: "Planned 8 trips".into(),
            icon: "✈️".into(),
            points: 25,
            requirement: Requirement {
                kind: RequirementKind::Trips,
                threshold: 8,
            },
        }])
        .unwrap();
        let trips: Vec<Trip> = (0..trip_count)
            .map(|i| trip_with(&i.to_string(), vec![]))
            .collect();

        let progress = evaluate_badges(&user, &trips, &catalog, now());
        assert_eq!(progress[0].progress, expected);
        assert!(progress[0].progress <= 100);
    }

    #[test]
    fn serializes_badge_fields_flat() {
        let user = UserProfile::new("u", "User");
        let progress = evaluate_badges(&user, &[], &first_trip_catalog(), now());
        let json = serde_json::to_value(&progress[0]).unwrap();

        assert_eq!(json["id"], "first-trip");
        assert_eq!(json["isEarned"], false);
        assert_eq!(json["requirement"]["kind"], "trips");
    }
}
