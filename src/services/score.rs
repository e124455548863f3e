use crate::errors::AppError;
use crate::models::score::{round_score, BodyMetrics, Category, HealthInputs, SubScores};

const BMI_WEIGHT: f64 = 0.3;
const SLEEP_WEIGHT: f64 = 0.25;
const ACTIVITY_WEIGHT: f64 = 0.25;
const HYDRATION_WEIGHT: f64 = 0.1;
const STRESS_WEIGHT: f64 = 0.1;

/// Checks every precondition of [`compute`], reporting the first offending field.
pub fn validate(body: &BodyMetrics, inputs: &HealthInputs) -> Result<(), AppError> {
    validate_body(body)?;
    validate_inputs(inputs)
}

pub fn validate_body(body: &BodyMetrics) -> Result<(), AppError> {
    // `!(x > 0.0)` also rejects NaN
    if !(body.height_cm > 0.0) {
        return Err(AppError::validation("height", "Height must be greater than zero"));
    }
    if !(body.weight_kg > 0.0) {
        return Err(AppError::validation("weight", "Weight must be greater than zero"));
    }
    Ok(())
}

/// Checks the submitted assessment alone. Needs no stored profile.
pub fn validate_inputs(inputs: &HealthInputs) -> Result<(), AppError> {
    if !(inputs.sleep_hours > 0.0) {
        return Err(AppError::validation("sleep_hours", "Please enter valid sleep hours"));
    }
    if inputs.steps < 0 {
        return Err(AppError::validation("steps", "Please enter valid step count"));
    }
    if inputs.exercise_minutes < 0 {
        return Err(AppError::validation("exercise_minutes", "Please enter valid exercise minutes"));
    }
    if !(inputs.water_intake >= 0.0) {
        return Err(AppError::validation("water_intake", "Please enter valid water intake"));
    }
    if inputs.meditation_minutes < 0 {
        return Err(AppError::validation("meditation_minutes", "Please enter valid meditation minutes"));
    }
    if !(1..=5).contains(&inputs.sleep_quality) {
        return Err(AppError::validation("sleep_quality", "Sleep quality must be between 1-5"));
    }
    if !(1..=5).contains(&inputs.stress_level) {
        return Err(AppError::validation("stress_level", "Stress level must be between 1-5"));
    }
    if !(1..=5).contains(&inputs.activity_level) {
        return Err(AppError::validation("activity_level", "Activity level must be between 1-5"));
    }
    Ok(())
}

/// Computes all five sub-scores plus the weighted overall score and category.
pub fn compute(body: &BodyMetrics, inputs: &HealthInputs) -> Result<SubScores, AppError> {
    validate(body, inputs)?;

    let bmi_score = bmi_score(body.bmi());
    let sleep_score = sleep_score(inputs.sleep_hours, inputs.sleep_quality);
    let activity_score = activity_score(inputs.steps, inputs.exercise_minutes, inputs.activity_level);
    let hydration_score = hydration_score(inputs.water_intake);
    let stress_score = stress_score(inputs.stress_level, inputs.meditation_minutes);

    let weighted = bmi_score * BMI_WEIGHT
        + sleep_score * SLEEP_WEIGHT
        + activity_score * ACTIVITY_WEIGHT
        + hydration_score * HYDRATION_WEIGHT
        + stress_score * STRESS_WEIGHT;

    Ok(SubScores {
        bmi_score,
        sleep_score,
        activity_score,
        hydration_score,
        stress_score,
        overall_score: round_score(weighted),
        category: Category::from_score(weighted),
    })
}

fn clamp(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

pub fn bmi_score(bmi: f64) -> f64 {
    let score = if bmi < 18.5 {
        60.0 + (bmi - 16.0) * 10.0
    } else if bmi <= 24.9 {
        100.0
    } else if bmi <= 29.9 {
        100.0 - (bmi - 24.9) * 8.0
    } else {
        60.0 - (bmi - 30.0) * 4.0
    };
    clamp(score)
}

// Buckets are tested in this exact order. The `or` conditions make everything
// outside [7, 9] land in the 80 bucket.
#[allow(clippy::nonminimal_bool)]
fn sleep_hours_bucket(hours: f64) -> f64 {
    if (7.0..=9.0).contains(&hours) {
        100.0
    } else if hours >= 6.0 || hours <= 10.0 {
        80.0
    } else if hours >= 5.0 || hours <= 11.0 {
        60.0
    } else {
        40.0
    }
}

pub fn sleep_score(hours: f64, quality: i32) -> f64 {
    let quality_score = f64::from(quality * 20);
    clamp(sleep_hours_bucket(hours) * 0.7 + quality_score * 0.3)
}

fn steps_bucket(steps: i64) -> f64 {
    match steps {
        s if s >= 10_000 => 100.0,
        s if s >= 8_000 => 85.0,
        s if s >= 6_000 => 70.0,
        s if s >= 4_000 => 50.0,
        _ => 30.0,
    }
}

fn exercise_bucket(minutes: i64) -> f64 {
    match minutes {
        m if m >= 150 => 100.0,
        m if m >= 120 => 85.0,
        m if m >= 90 => 70.0,
        m if m >= 30 => 50.0,
        _ => 20.0,
    }
}

pub fn activity_score(steps: i64, exercise_minutes: i64, activity_level: i32) -> f64 {
    let level_score = f64::from((activity_level - 1) * 25);
    clamp(steps_bucket(steps) * 0.4 + exercise_bucket(exercise_minutes) * 0.4 + level_score * 0.2)
}

pub fn hydration_score(litres: f64) -> f64 {
    let score = if litres >= 2.5 {
        100.0
    } else if litres >= 2.0 {
        85.0
    } else if litres >= 1.5 {
        70.0
    } else if litres >= 1.0 {
        50.0
    } else {
        30.0
    };
    clamp(score)
}

fn meditation_bucket(minutes: i64) -> f64 {
    match minutes {
        m if m >= 20 => 100.0,
        m if m >= 15 => 85.0,
        m if m >= 10 => 70.0,
        m if m >= 5 => 50.0,
        _ => 30.0,
    }
}

pub fn stress_score(stress_level: i32, meditation_minutes: i64) -> f64 {
    let stress_component = f64::from((5 - stress_level) * 20);
    clamp(stress_component * 0.6 + meditation_bucket(meditation_minutes) * 0.4)
}
