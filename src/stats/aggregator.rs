use chrono::{DateTime, Utc};
use std::collections::HashSet;
use strum::IntoEnumIterator;
use tracing::trace;

use super::models::TravelStats;
use crate::trip::{ActivityCategory, Trip, UserProfile};

/// Aggregates counters over `trips`, which must already be the user's own
/// trips. Use [`crate::trip::trips_for_user`] to narrow a global list first.
///
/// `now` decides which trips count as completed, so the result is
/// deterministic for a fixed instant.
pub fn compute_stats<'a, I>(user: &UserProfile, trips: I, now: DateTime<Utc>) -> TravelStats
where
    I: IntoIterator<Item = &'a Trip>,
{
    let mut stats = TravelStats {
        activities_by_category: ActivityCategory::iter().map(|c| (c, 0)).collect(),
        ..TravelStats::default()
    };
    let mut cities: HashSet<&str> = HashSet::new();
    let mut countries: HashSet<&str> = HashSet::new();
    let mut total_days: i64 = 0;

    for trip in trips {
        stats.total_trips += 1;
        total_days += trip.duration_days();
        stats.total_budget += trip.budget.unwrap_or_default();

        if trip.is_completed(now) {
            stats.completed_trips += 1;
        }
        if trip.stayed_under_budget(now) {
            stats.trips_under_budget += 1;
        }
        if trip.was_booked_early() {
            stats.early_bookings += 1;
        }

        for stop in &trip.stops {
            cities.insert(stop.city_key());
            countries.insert(stop.country.as_str());

            for activity in &stop.activities {
                stats.total_activities += 1;
                *stats
                    .activities_by_category
                    .entry(activity.category)
                    .or_default() += 1;
            }
        }
    }

    stats.cities_visited = cities.len() as u32;
    stats.countries_visited = countries.len() as u32;
    if stats.total_trips > 0 {
        stats.average_trip_duration =
            (total_days as f64 / f64::from(stats.total_trips)).round() as u32;
    }

    trace!(
        user_id = %user.id,
        total_trips = stats.total_trips,
        cities = stats.cities_visited,
        countries = stats.countries_visited,
        "Computed travel stats"
    );

    stats
}
