use log::info;
use serde::Serialize;

use crate::db::{require_profile, ProfileStore};
use crate::errors::AppError;
use crate::models::recommendation::{RecommendationResult, Tier};
use crate::models::score::{round_score, HealthInputs, SubScores};
use crate::models::user::{HealthSnapshot, RecommendationLevel};
use crate::services::{recommendation, score};

/// Scores `inputs` against the stored profile and replaces its snapshot.
pub fn compute_score(
    store: &dyn ProfileStore,
    email: &str,
    inputs: &HealthInputs,
) -> Result<SubScores, AppError> {
    score::validate_inputs(inputs)?;
    let mut profile = require_profile(store, email)?;
    let scores = score::compute(&profile.body(), inputs)?;

    profile.health_data = snapshot_of(&scores);
    profile.recommendation_level = RecommendationLevel::Advanced;
    store.put(email, &profile)?;

    info!("Health score {} ({}) recorded for {}", scores.overall_score, scores.category.label(), email);
    Ok(scores)
}

pub fn get_recommendations(store: &dyn ProfileStore, email: &str) -> Result<RecommendationResult, AppError> {
    let profile = require_profile(store, email)?;
    Ok(recommendation::derive(&profile))
}

#[derive(Serialize, Debug, PartialEq)]
pub struct HealthStatus {
    pub health_data: HealthSnapshot,
    pub recommendation_level: RecommendationLevel,
}

pub fn health_status(store: &dyn ProfileStore, email: &str) -> Result<HealthStatus, AppError> {
    let profile = require_profile(store, email)?;
    Ok(HealthStatus {
        health_data: profile.health_data,
        recommendation_level: profile.recommendation_level,
    })
}

#[derive(Serialize, Debug, PartialEq)]
pub struct TierStatus {
    pub user_exists: bool,
    pub has_health_data: bool,
    pub tier: Tier,
    pub recommendation_level: RecommendationLevel,
    pub health_data_available: Vec<&'static str>,
}

/// Explains which recommendation tier a profile currently qualifies for.
pub fn tier_status(store: &dyn ProfileStore, email: &str) -> Result<TierStatus, AppError> {
    let profile = require_profile(store, email)?;
    let snapshot = &profile.health_data;
    Ok(TierStatus {
        user_exists: true,
        has_health_data: snapshot.has_assessment(),
        tier: recommendation::tier_for(snapshot),
        recommendation_level: profile.recommendation_level,
        health_data_available: snapshot.present_fields(),
    })
}

fn snapshot_of(scores: &SubScores) -> HealthSnapshot {
    let rounded = |v: f64| Some(round_score(v) as f64);
    HealthSnapshot {
        bmi_score: rounded(scores.bmi_score),
        sleep_score: rounded(scores.sleep_score),
        activity_score: rounded(scores.activity_score),
        hydration_score: rounded(scores.hydration_score),
        stress_score: rounded(scores.stress_score),
        overall_score: Some(scores.overall_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::recommendation::FocusArea;
    use crate::models::user::UserRecord;
    use chrono::Utc;
    use uuid::Uuid;

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        let user = UserRecord {
            user_id: Uuid::now_v7(),
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: String::new(),
            age: 28,
            weight: 70.0,
            height: 175.0,
            gender: "female".to_string(),
            bmi: 22.86,
            created_at: Utc::now(),
            last_login: None,
            health_data: HealthSnapshot::default(),
            recommendation_level: RecommendationLevel::Basic,
        };
        store.put(&user.email, &user).unwrap();
        store
    }

    fn inputs() -> HealthInputs {
        HealthInputs {
            sleep_hours: 8.0,
            sleep_quality: 4,
            steps: 9000,
            exercise_minutes: 40,
            activity_level: 3,
            water_intake: 2.2,
            stress_level: 2,
            meditation_minutes: 10,
        }
    }

    #[test]
    fn scoring_writes_snapshot_and_unlocks_advanced_tier() {
        let store = seeded_store();
        assert_eq!(get_recommendations(&store, "ana@example.com").unwrap().tier, Tier::Basic);

        let scores = compute_score(&store, "ana@example.com", &inputs()).unwrap();
        assert_eq!(scores.overall_score, 84);

        let status = health_status(&store, "ana@example.com").unwrap();
        assert_eq!(status.recommendation_level, RecommendationLevel::Advanced);
        assert_eq!(status.health_data.sleep_score, Some(94.0));
        assert_eq!(status.health_data.overall_score, Some(84));

        let rec = get_recommendations(&store, "ana@example.com").unwrap();
        assert_eq!(rec.tier, Tier::Advanced);
        // activity 64 and stress 64 trigger nothing; everything else is healthy
        assert_eq!(rec.focus_areas, vec![FocusArea::Maintenance]);
        assert_eq!(rec.health_analysis[0], "📊 **Health Score Analysis:** 84/100");
    }

    #[test]
    fn invalid_inputs_leave_snapshot_untouched() {
        let store = seeded_store();
        let mut bad = inputs();
        bad.stress_level = 7;
        assert!(matches!(
            compute_score(&store, "ana@example.com", &bad),
            Err(AppError::Validation { field: "stress_level", .. })
        ));
        assert!(health_status(&store, "ana@example.com").unwrap().health_data.is_empty());
    }

    #[test]
    fn unknown_profile_is_not_found() {
        let store = seeded_store();
        assert!(matches!(compute_score(&store, "x@example.com", &inputs()), Err(AppError::NotFound(_))));
        assert!(matches!(get_recommendations(&store, "x@example.com"), Err(AppError::NotFound(_))));
        assert!(matches!(tier_status(&store, "x@example.com"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn bad_inputs_are_rejected_before_profile_lookup() {
        let store = MemoryStore::new();
        let mut bad = inputs();
        bad.sleep_quality = 9;
        assert!(matches!(
            compute_score(&store, "ghost@example.com", &bad),
            Err(AppError::Validation { field: "sleep_quality", .. })
        ));
        // valid inputs for the same unknown email still report the missing profile
        assert!(matches!(
            compute_score(&store, "ghost@example.com", &inputs()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn tier_status_lists_snapshot_fields() {
        let store = seeded_store();
        let before = tier_status(&store, "ana@example.com").unwrap();
        assert!(!before.has_health_data);
        assert!(before.health_data_available.is_empty());

        compute_score(&store, "ana@example.com", &inputs()).unwrap();
        let after = tier_status(&store, "ana@example.com").unwrap();
        assert_eq!(after.tier, Tier::Advanced);
        assert_eq!(after.health_data_available.len(), 6);
    }
}
