use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Days between booking and departure after which a trip counts as booked early
pub const EARLY_BOOKING_DAYS: i64 = 60;

/// A traveller as owned by the surrounding application.
///
/// `badges` keeps insertion order for display but is treated as a set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub points: u64,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.iter().any(|id| id == badge_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stops: Vec<Stop>,
}

impl Trip {
    /// A trip is complete once midnight (UTC) of its end date lies before `now`
    pub fn is_completed(&self, now: DateTime<Utc>) -> bool {
        self.end_date.and_time(NaiveTime::default()).and_utc() < now
    }

    /// Inclusive day count, so a same-day trip lasts one day
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(0) + 1
    }

    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.stops.iter().flat_map(|stop| stop.activities.iter())
    }

    pub fn total_cost(&self) -> f64 {
        self.activities().map(|activity| activity.cost).sum()
    }

    /// Completed trips with a budget whose planned spend stayed within it
    pub fn stayed_under_budget(&self, now: DateTime<Utc>) -> bool {
        match self.budget {
            Some(budget) => self.is_completed(now) && self.total_cost() <= budget,
            None => false,
        }
    }

    pub fn was_booked_early(&self) -> bool {
        self.created_at
            .map(|created| (self.start_date - created.date_naive()).num_days() > EARLY_BOOKING_DAYS)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<String>,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Stop {
    /// Identity used for distinct-city counting: the city id when the
    /// collaborator supplies one, the display name otherwise
    pub fn city_key(&self) -> &str {
        self.city_id.as_deref().unwrap_or(&self.city)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub category: ActivityCategory,
    #[serde(default)]
    pub cost: f64,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ActivityCategory {
    #[serde(alias = "Sightseeing")]
    Sightseeing,
    #[serde(alias = "Culture")]
    Culture,
    #[serde(alias = "Food")]
    Food,
    #[serde(alias = "Adventure")]
    Adventure,
    #[serde(alias = "Entertainment")]
    Entertainment,
    #[serde(alias = "Nightlife")]
    Nightlife,
    #[serde(alias = "Shopping")]
    Shopping,
    #[serde(alias = "Relaxation")]
    Relaxation,
    #[default]
    #[serde(other)]
    Other,
}

/// Selects the trips owned by `user_id` from a global trip list
pub fn trips_for_user<'a>(trips: &'a [Trip], user_id: &str) -> Vec<&'a Trip> {
    trips.iter().filter(|trip| trip.user_id == user_id).collect()
}
