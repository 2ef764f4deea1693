use tracing::{debug, warn};

use super::definitions::BadgeCatalog;
use crate::trip::UserProfile;

/// Grants `badge_id` to the user, returning the updated profile.
///
/// This is the only place points change. Unknown ids and badges the user
/// already holds leave the profile untouched, so repeated grants are
/// harmless. Deciding *when* to grant is up to the caller: evaluation only
/// reports progress.
pub fn award_badge(user: &UserProfile, badge_id: &str, catalog: &BadgeCatalog) -> UserProfile {
    let Some(badge) = catalog.get(badge_id) else {
        warn!(user_id = %user.id, badge_id, "Ignoring grant of unknown badge");
        return user.clone();
    };

    if user.has_badge(badge_id) {
        debug!(user_id = %user.id, badge_id, "Badge already held");
        return user.clone();
    }

    let mut updated = user.clone();
    updated.badges.push(badge.id.clone());
    updated.points = updated.points.saturating_add(badge.points);

    debug!(
        user_id = %user.id,
        badge_id,
        reward = badge.points,
        points = updated.points,
        "Badge granted"
    );

    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserProfile {
        UserProfile {
            id: "u1".into(),
            name: "Ada".into(),
            avatar: None,
            badges: vec!["first-trip".into()],
            points: 10,
        }
    }

    #[test]
    fn grants_badge_and_points() {
        let catalog = BadgeCatalog::travel_defaults();
        let updated = award_badge(&user(), "explorer", &catalog);

        assert_eq!(updated.badges, vec!["first-trip", "explorer"]);
        assert_eq!(updated.points, 60);
    }

    #[test]
    fn input_profile_is_not_mutated() {
        let catalog = BadgeCatalog::travel_defaults();
        let original = user();
        let _ = award_badge(&original, "explorer", &catalog);

        assert_eq!(original, user());
    }

    #[test]
    fn awarding_twice_equals_awarding_once() {
        let catalog = BadgeCatalog::travel_defaults();
        let once = award_badge(&user(), "globetrotter", &catalog);
        let twice = award_badge(&once, "globetrotter", &catalog);

        assert_eq!(once, twice);
        assert_eq!(twice.points, 110);
    }

    #[test]
    fn already_held_badge_is_a_no_op() {
        let catalog = BadgeCatalog::travel_defaults();
        assert_eq!(award_badge(&user(), "first-trip", &catalog), user());
    }

    #[test]
    fn unknown_badge_is_a_no_op() {
        let catalog = BadgeCatalog::travel_defaults();
        assert_eq!(award_badge(&user(), "moonwalker", &catalog), user());
    }
}
