use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::trip::ActivityCategory;

/// Summary counters derived from one user's trips
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelStats {
    pub total_trips: u32,
    pub completed_trips: u32,
    pub cities_visited: u32,
    pub countries_visited: u32,
    pub total_activities: u32,
    pub activities_by_category: BTreeMap<ActivityCategory, u32>,
    pub total_budget: f64,
    pub average_trip_duration: u32,
    pub trips_under_budget: u32,
    pub early_bookings: u32,
}

impl TravelStats {
    pub fn activities_of(&self, category: ActivityCategory) -> u32 {
        self.activities_by_category
            .get(&category)
            .copied()
            .unwrap_or_default()
    }
}
