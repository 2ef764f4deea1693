use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::models::{Trip, UserProfile};
use crate::shared::AppError;

/// Users and trips as the surrounding application stores them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelSnapshot {
    #[serde(default)]
    pub users: Vec<UserProfile>,
    #[serde(default)]
    pub trips: Vec<Trip>,
}

/// Read/write channel to user profiles and read channel to trips.
///
/// `list_users` must return users in a stable order: the leaderboard breaks
/// point ties by that order.
#[async_trait]
pub trait TravelRepository: Send + Sync {
    async fn get_user(&self, user_id: &str) -> Result<Option<UserProfile>, AppError>;
    async fn list_users(&self) -> Result<Vec<UserProfile>, AppError>;
    async fn save_user(&self, user: &UserProfile) -> Result<(), AppError>;
    async fn list_trips(&self) -> Result<Vec<Trip>, AppError>;
    async fn trips_for_user(&self, user_id: &str) -> Result<Vec<Trip>, AppError>;
}

/// In-memory implementation of TravelRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryTravelRepository {
    users: Arc<RwLock<Vec<UserProfile>>>,
    trips: Arc<RwLock<Vec<Trip>>>,
}

impl InMemoryTravelRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: TravelSnapshot) -> Self {
        Self {
            users: Arc::new(RwLock::new(snapshot.users)),
            trips: Arc::new(RwLock::new(snapshot.trips)),
        }
    }

    pub async fn add_trip(&self, trip: Trip) {
        self.trips.write().await.push(trip);
    }
}

#[async_trait]
impl TravelRepository for InMemoryTravelRepository {
    #[instrument(skip(self))]
    async fn get_user(&self, user_id: &str) -> Result<Option<UserProfile>, AppError> {
        let users = self.users.read().await;
        let user = users.iter().find(|u| u.id == user_id).cloned();
        match &user {
            Some(u) => debug!(user_id = %user_id, points = u.points, "User found in memory"),
            None => debug!(user_id = %user_id, "User not found in memory"),
        }
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<UserProfile>, AppError> {
        Ok(self.users.read().await.clone())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn save_user(&self, user: &UserProfile) -> Result<(), AppError> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        debug!(points = user.points, badges = user.badges.len(), "User saved in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_trips(&self) -> Result<Vec<Trip>, AppError> {
        Ok(self.trips.read().await.clone())
    }

    #[instrument(skip(self))]
    async fn trips_for_user(&self, user_id: &str) -> Result<Vec<Trip>, AppError> {
        let trips = self.trips.read().await;
        Ok(trips
            .iter()
            .filter(|trip| trip.user_id == user_id)
            .cloned()
            .collect())
    }
}
