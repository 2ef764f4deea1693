use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::debug;

use super::models::{ChallengeDefinition, ChallengeProgress, ChallengeRequirement, ChallengeStatus};
use super::region::region_of;
use crate::shared::progress_percent;
use crate::trip::Trip;

/// Reports progress on each challenge from the user's trips.
///
/// Like badge evaluation this never grants anything. A challenge that met
/// its count is `Completed` even after the deadline passes.
pub fn evaluate_challenges(
    trips: &[Trip],
    challenges: &[ChallengeDefinition],
    now: DateTime<Utc>,
) -> Vec<ChallengeProgress> {
    challenges
        .iter()
        .map(|challenge| {
            let in_window: Vec<&Trip> = trips
                .iter()
                .filter(|trip| challenge.in_window(trip.start_date))
                .collect();

            let current = current_count(&challenge.requirement, &in_window, now);
            let required = challenge.requirement.count();

            let status = if current >= required {
                ChallengeStatus::Completed
            } else if now.date_naive() > challenge.deadline {
                ChallengeStatus::Expired
            } else {
                ChallengeStatus::Active
            };

            debug!(
                challenge_id = %challenge.id,
                current,
                required,
                ?status,
                "Evaluated challenge"
            );

            ChallengeProgress {
                challenge: challenge.clone(),
                current,
                required,
                progress: progress_percent(u64::from(current), u64::from(required)),
                status,
            }
        })
        .collect()
}

fn current_count(requirement: &ChallengeRequirement, trips: &[&Trip], now: DateTime<Utc>) -> u32 {
    match requirement {
        ChallengeRequirement::Countries { region, .. } => {
            let countries: HashSet<&str> = trips
                .iter()
                .flat_map(|trip| trip.stops.iter())
                .map(|stop| stop.country.as_str())
                .filter(|country| match region {
                    Some(region) => region_of(country) == Some(*region),
                    None => true,
                })
                .collect();
            countries.len() as u32
        }
        ChallengeRequirement::BudgetTrips { max_budget, .. } => trips
            .iter()
            .filter(|trip| trip.is_completed(now) && trip.total_cost() < *max_budget)
            .count() as u32,
        ChallengeRequirement::ActivityType { category, .. } => trips
            .iter()
            .flat_map(|trip| trip.activities())
            .filter(|activity| activity.category == *category)
            .count() as u32,
    }
}
