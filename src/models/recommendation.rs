use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Basic,
    Advanced,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    WeightLoss,
    WeightGain,
    Maintenance,
}

impl Focus {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Focus::WeightGain
        } else if bmi <= 24.9 {
            Focus::Maintenance
        } else {
            Focus::WeightLoss
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    WeightLoss,
    WeightGain,
    Maintenance,
    SleepImprovement,
    FitnessBoost,
    StressManagement,
    HydrationFocus,
}

impl From<Focus> for FocusArea {
    fn from(focus: Focus) -> Self {
        match focus {
            Focus::WeightLoss => FocusArea::WeightLoss,
            Focus::WeightGain => FocusArea::WeightGain,
            Focus::Maintenance => FocusArea::Maintenance,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RecommendationResult {
    #[serde(rename = "level")]
    pub tier: Tier,
    pub focus: Focus,
    pub focus_areas: Vec<FocusArea>,
    pub diet_plan: String,
    pub workout_plan: String,
    pub lifestyle_tips: Vec<String>,
    pub health_analysis: Vec<String>,
    pub message: String,
}
