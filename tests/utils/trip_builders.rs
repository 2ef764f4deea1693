//! Trip builders - fluent API for assembling trips with stops and activities
#![allow(dead_code)] // Test utilities may not all be used in every test

use chrono::{DateTime, NaiveDate, Utc};

use tripquest::{Activity, ActivityCategory, Stop, Trip};

// ============================================================================
// Trip Construction
// ============================================================================

pub struct TripBuilder {
    trip: Trip,
}

impl TripBuilder {
    /// A three-day trip in March 2026 with no stops
    pub fn new(id: &str, user_id: &str) -> Self {
        Self {
            trip: Trip {
                id: id.to_string(),
                user_id: user_id.to_string(),
                name: format!("Trip {id}"),
                start_date: date(2026, 3, 1),
                end_date: date(2026, 3, 3),
                budget: None,
                created_at: None,
                stops: vec![],
            },
        }
    }

    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.trip.start_date = start;
        self.trip.end_date = end;
        self
    }

    pub fn budget(mut self, budget: f64) -> Self {
        self.trip.budget = Some(budget);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.trip.created_at = Some(created_at);
        self
    }

    /// Adds a stop in `city`, `country`
    pub fn stop(mut self, city: &str, country: &str) -> Self {
        self.trip.stops.push(Stop {
            id: format!("{}-{}", self.trip.id, self.trip.stops.len()),
            city_id: None,
            city: city.to_string(),
            country: country.to_string(),
            activities: vec![],
        });
        self
    }

    /// Adds `count` activities of `category` to the most recent stop
    pub fn activities(mut self, category: ActivityCategory, count: usize, cost: f64) -> Self {
        let stop = self
            .trip
            .stops
            .last_mut()
            .expect("add a stop before adding activities");
        for _ in 0..count {
            stop.activities.push(Activity {
                id: format!("{}-{}", stop.id, stop.activities.len()),
                name: format!("{category} activity"),
                category,
                cost,
            });
        }
        self
    }

    pub fn build(self) -> Trip {
        self.trip
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
