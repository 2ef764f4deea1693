use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard, RwLock};
use tracing::{info, instrument};

use super::report::{build_progress_report, ProgressReport};
use crate::{
    badge::{self, evaluate_badges, BadgeCatalog},
    challenge::{default_challenges, evaluate_challenges, ChallengeDefinition, ChallengeProgress},
    leaderboard::{rank_users, LeaderboardEntry},
    level::LevelLadder,
    shared::AppError,
    trip::{TravelRepository, UserProfile},
};

/// Collaborator-facing entry point: loads users and trips from the
/// repository, runs the pure evaluators and persists badge grants.
pub struct GamificationService {
    catalog: Arc<BadgeCatalog>,
    ladder: Arc<LevelLadder>,
    challenges: Arc<Vec<ChallengeDefinition>>,
    repository: Arc<dyn TravelRepository>,
    user_mutexes: Arc<RwLock<HashMap<String, Arc<AsyncMutex<()>>>>>,
}

impl GamificationService {
    pub fn builder(repository: Arc<dyn TravelRepository>) -> GamificationServiceBuilder {
        GamificationServiceBuilder::new(repository)
    }

    pub fn catalog(&self) -> &BadgeCatalog {
        &self.catalog
    }

    pub fn ladder(&self) -> &LevelLadder {
        &self.ladder
    }

    #[instrument(skip(self))]
    pub async fn progress_report(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ProgressReport, AppError> {
        let user = self.load_user(user_id).await?;
        let trips = self.repository.trips_for_user(user_id).await?;
        Ok(build_progress_report(
            &user,
            &trips,
            &self.catalog,
            &self.ladder,
            now,
        ))
    }

    #[instrument(skip(self))]
    pub async fn challenges(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<ChallengeProgress>, AppError> {
        self.load_user(user_id).await?;
        let trips = self.repository.trips_for_user(user_id).await?;
        Ok(evaluate_challenges(&trips, &self.challenges, now))
    }

    #[instrument(skip(self))]
    pub async fn leaderboard(&self, now: DateTime<Utc>) -> Result<Vec<LeaderboardEntry>, AppError> {
        let users = self.repository.list_users().await?;
        let trips = self.repository.list_trips().await?;
        Ok(rank_users(&users, &trips, &self.ladder, now))
    }

    /// Grants one badge and persists the result. Unknown or already held
    /// badges return the stored profile unchanged.
    #[instrument(skip(self))]
    pub async fn award_badge(&self, user_id: &str, badge_id: &str) -> Result<UserProfile, AppError> {
        let (_guard, user) = self.lock_user(user_id).await?;
        let updated = badge::award_badge(&user, badge_id, &self.catalog);
        if updated != user {
            self.repository.save_user(&updated).await?;
            info!(user_id, badge_id, points = updated.points, "Badge awarded");
        }
        Ok(updated)
    }

    /// Grants every badge whose requirement is met but which the user does
    /// not hold yet. Returns the newly granted ids and the stored profile.
    #[instrument(skip(self))]
    pub async fn claim_eligible_badges(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(Vec<String>, UserProfile), AppError> {
        let (_guard, user) = self.lock_user(user_id).await?;
        let trips = self.repository.trips_for_user(user_id).await?;

        let eligible: Vec<String> = evaluate_badges(&user, &trips, &self.catalog, now)
            .into_iter()
            .filter(|progress| progress.is_complete() && !progress.is_earned)
            .map(|progress| progress.badge.id)
            .collect();

        let updated = eligible.iter().fold(user, |current, badge_id| {
            badge::award_badge(&current, badge_id, &self.catalog)
        });

        if !eligible.is_empty() {
            self.repository.save_user(&updated).await?;
            info!(
                user_id,
                awarded = eligible.len(),
                points = updated.points,
                "Eligible badges claimed"
            );
        }

        Ok((eligible, updated))
    }

    async fn load_user(&self, user_id: &str) -> Result<UserProfile, AppError> {
        self.repository
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    /// Takes the user's write lock and reads the profile under it. Unknown
    /// users fail before a lock entry is created.
    async fn lock_user(
        &self,
        user_id: &str,
    ) -> Result<(OwnedMutexGuard<()>, UserProfile), AppError> {
        self.load_user(user_id).await?;

        let guard = self.user_lock(user_id).await.lock_owned().await;
        let user = self.load_user(user_id).await?;
        Ok((guard, user))
    }

    async fn user_lock(&self, user_id: &str) -> Arc<AsyncMutex<()>> {
        {
            let guard = self.user_mutexes.read().await;
            if let Some(lock) = guard.get(user_id) {
                return lock.clone();
            }
        }

        let mut guard = self.user_mutexes.write().await;
        guard
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }
}

pub struct GamificationServiceBuilder {
    catalog: BadgeCatalog,
    ladder: LevelLadder,
    challenges: Vec<ChallengeDefinition>,
    repository: Arc<dyn TravelRepository>,
}

impl GamificationServiceBuilder {
    fn new(repository: Arc<dyn TravelRepository>) -> Self {
        Self {
            catalog: BadgeCatalog::travel_defaults(),
            ladder: LevelLadder::travel_defaults(),
            challenges: default_challenges(),
            repository,
        }
    }

    pub fn with_catalog(mut self, catalog: BadgeCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_ladder(mut self, ladder: LevelLadder) -> Self {
        self.ladder = ladder;
        self
    }

    pub fn with_challenges(mut self, challenges: Vec<ChallengeDefinition>) -> Self {
        self.challenges = challenges;
        self
    }

    pub fn build(self) -> GamificationService {
        GamificationService {
            catalog: Arc::new(self.catalog),
            ladder: Arc::new(self.ladder),
            challenges: Arc::new(self.challenges),
            repository: self.repository,
            user_mutexes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
