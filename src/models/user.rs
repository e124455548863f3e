use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

use crate::models::score::BodyMetrics;

/// A stored user, keyed by email in the profile store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub gender: String,
    pub bmi: f64,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub health_data: HealthSnapshot,
    #[serde(default)]
    pub recommendation_level: RecommendationLevel,
}

impl UserRecord {
    pub fn body(&self) -> BodyMetrics {
        BodyMetrics { weight_kg: self.weight, height_cm: self.height }
    }
}

/// Last scoring result attached to a profile. Every field is optional so that
/// partially written snapshots still load; missing values read as zero.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct HealthSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydration_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<i64>,
}

impl HealthSnapshot {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == HealthSnapshot::default()
    }

    /// True when the snapshot carries enough data for advanced recommendations.
    pub fn has_assessment(&self) -> bool {
        self.sleep_score.is_some() || self.activity_score.is_some() || self.stress_score.is_some()
    }

    /// Names of the fields present, in declaration order.
    pub fn present_fields(&self) -> Vec<&'static str> {
        [
            ("bmi_score", self.bmi_score.is_some()),
            ("sleep_score", self.sleep_score.is_some()),
            ("activity_score", self.activity_score.is_some()),
            ("hydration_score", self.hydration_score.is_some()),
            ("stress_score", self.stress_score.is_some()),
            ("overall_score", self.overall_score.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationLevel {
    #[default]
    Basic,
    Advanced,
}

/// Public view of a user, without credentials or health data.
#[derive(Serialize, Debug)]
pub struct UserView {
    pub username: String,
    pub email: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub gender: String,
    pub bmi: f64,
    pub member_since: String,
}

impl From<&UserRecord> for UserView {
    fn from(user: &UserRecord) -> Self {
        UserView {
            username: user.username.clone(),
            email: user.email.clone(),
            age: user.age,
            weight: user.weight,
            height: user.height,
            gender: user.gender.clone(),
            bmi: user.bmi,
            member_since: user.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_tolerates_missing_and_integer_fields() {
        let snapshot: HealthSnapshot = serde_json::from_str(r#"{"sleep_score": 40}"#).unwrap();
        assert_eq!(snapshot.sleep_score, Some(40.0));
        assert!(snapshot.has_assessment());
        assert_eq!(snapshot.present_fields(), vec!["sleep_score"]);

        let empty: HealthSnapshot = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
        assert!(!empty.has_assessment());
    }

    #[test]
    fn hydration_alone_is_not_an_assessment() {
        let snapshot = HealthSnapshot { hydration_score: Some(85.0), bmi_score: Some(100.0), ..Default::default() };
        assert!(!snapshot.has_assessment());
    }
}
