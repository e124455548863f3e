use serde::{Deserialize, Serialize};

/// Raw health inputs submitted with a scoring request.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HealthInputs {
    pub sleep_hours: f64,
    pub sleep_quality: i32,
    pub steps: i64,
    pub exercise_minutes: i64,
    pub activity_level: i32,
    /// Litres per day.
    pub water_intake: f64,
    pub stress_level: i32,
    #[serde(default)]
    pub meditation_minutes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl BodyMetrics {
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Category {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Category::Excellent
        } else if score >= 80.0 {
            Category::VeryGood
        } else if score >= 70.0 {
            Category::Good
        } else if score >= 60.0 {
            Category::Fair
        } else {
            Category::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Excellent => "Excellent",
            Category::VeryGood => "Very Good",
            Category::Good => "Good",
            Category::Fair => "Fair",
            Category::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub bmi_score: f64,
    pub sleep_score: f64,
    pub activity_score: f64,
    pub hydration_score: f64,
    pub stress_score: f64,
    pub overall_score: i64,
    pub category: Category,
}

/// Sub-scores rounded to whole points, as reported to clients and persisted.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct DetailedScores {
    pub bmi_score: i64,
    pub sleep_score: i64,
    pub activity_score: i64,
    pub hydration_score: i64,
    pub stress_score: i64,
}

impl SubScores {
    pub fn detailed(&self) -> DetailedScores {
        DetailedScores {
            bmi_score: round_score(self.bmi_score),
            sleep_score: round_score(self.sleep_score),
            activity_score: round_score(self.activity_score),
            hydration_score: round_score(self.hydration_score),
            stress_score: round_score(self.stress_score),
        }
    }
}

/// Rounds half to even, matching how scores have always been reported.
pub fn round_score(value: f64) -> i64 {
    value.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_thresholds() {
        assert_eq!(Category::from_score(90.0), Category::Excellent);
        assert_eq!(Category::from_score(89.99), Category::VeryGood);
        assert_eq!(Category::from_score(70.0), Category::Good);
        assert_eq!(Category::from_score(60.0), Category::Fair);
        assert_eq!(Category::from_score(59.9), Category::NeedsImprovement);
    }

    #[test]
    fn category_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Category::VeryGood).unwrap(), "\"Very Good\"");
        assert_eq!(Category::NeedsImprovement.label(), "Needs Improvement");
    }

    #[test]
    fn meditation_defaults_to_zero() {
        let inputs: HealthInputs = serde_json::from_str(
            r#"{"sleep_hours":8,"sleep_quality":4,"steps":9000,"exercise_minutes":40,
                "activity_level":3,"water_intake":2.2,"stress_level":2}"#,
        )
        .unwrap();
        assert_eq!(inputs.meditation_minutes, 0);
    }

    #[test]
    fn rounding_is_half_to_even() {
        assert_eq!(round_score(84.5), 84);
        assert_eq!(round_score(85.5), 86);
        assert_eq!(round_score(84.4), 84);
    }
}
