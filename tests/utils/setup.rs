#![allow(dead_code)] // Test utilities may not all be used in every test

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use tripquest::{
    GamificationService, InMemoryTravelRepository, TravelSnapshot, Trip, UserProfile,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub repository: Arc<InMemoryTravelRepository>,
    pub service: Arc<GamificationService>,
    pub now: DateTime<Utc>,
}

pub struct TestSetupBuilder {
    users: Vec<UserProfile>,
    trips: Vec<Trip>,
    now: DateTime<Utc>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            users: vec![],
            trips: vec![],
            now: Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap(),
        }
    }

    pub fn with_user(mut self, id: &str, points: u64, badges: &[&str]) -> Self {
        self.users.push(UserProfile {
            id: id.to_string(),
            name: id.to_string(),
            avatar: None,
            badges: badges.iter().map(|b| b.to_string()).collect(),
            points,
        });
        self
    }

    /// The five travellers the community page shows
    pub fn with_community(self) -> Self {
        self.with_user("you", 125, &["first-trip"])
            .with_user("sarah", 385, &["first-trip", "explorer"])
            .with_user("mike", 560, &["first-trip", "budget-master", "early-bird"])
            .with_user("emma", 445, &["first-trip", "explorer", "social-butterfly"])
            .with_user("alex", 890, &["first-trip", "globetrotter"])
    }

    pub fn with_trip(mut self, trip: Trip) -> Self {
        self.trips.push(trip);
        self
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn build(self) -> TestSetup {
        let repository = Arc::new(InMemoryTravelRepository::from_snapshot(TravelSnapshot {
            users: self.users,
            trips: self.trips,
        }));
        let service = Arc::new(GamificationService::builder(repository.clone()).build());

        TestSetup {
            repository,
            service,
            now: self.now,
        }
    }
}
