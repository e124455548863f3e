use crate::models::recommendation::{Focus, FocusArea, RecommendationResult, Tier};
use crate::models::user::{HealthSnapshot, UserRecord};
use crate::services::templates::{self, AssessmentScores, Block};

/// Builds recommendations for a profile. Advanced output requires a snapshot
/// holding at least a sleep, activity or stress score.
pub fn derive(profile: &UserRecord) -> RecommendationResult {
    let focus = Focus::from_bmi(profile.body().bmi());
    match tier_for(&profile.health_data) {
        Tier::Basic => basic(focus, profile.age, &profile.gender),
        Tier::Advanced => advanced(focus, &profile.health_data, profile.age, &profile.gender),
    }
}

pub fn tier_for(snapshot: &HealthSnapshot) -> Tier {
    if snapshot.has_assessment() {
        Tier::Advanced
    } else {
        Tier::Basic
    }
}

// Age and gender are part of the plan signature but do not influence the text.
fn diet_plan(focus: Focus, _age: i32, _gender: &str) -> &'static str {
    templates::basic_diet(focus)
}

fn workout_plan(focus: Focus, _age: i32, _gender: &str) -> &'static str {
    templates::basic_workout(focus)
}

fn basic(focus: Focus, age: i32, gender: &str) -> RecommendationResult {
    RecommendationResult {
        tier: Tier::Basic,
        focus,
        focus_areas: vec![focus.into()],
        diet_plan: diet_plan(focus, age, gender).to_string(),
        workout_plan: workout_plan(focus, age, gender).to_string(),
        lifestyle_tips: Vec::new(),
        health_analysis: Vec::new(),
        message: templates::BASIC_MESSAGE.to_string(),
    }
}

fn assessment_scores(snapshot: &HealthSnapshot) -> AssessmentScores {
    AssessmentScores {
        sleep: snapshot.sleep_score.unwrap_or(0.0),
        activity: snapshot.activity_score.unwrap_or(0.0),
        stress: snapshot.stress_score.unwrap_or(0.0),
        hydration: snapshot.hydration_score.unwrap_or(0.0),
        overall: snapshot.overall_score.unwrap_or(0),
    }
}

fn advanced(focus: Focus, snapshot: &HealthSnapshot, age: i32, gender: &str) -> RecommendationResult {
    let scores = assessment_scores(snapshot);

    let diet_lines = matching_lines(templates::DIET_BLOCKS, &scores);
    let diet_plan = if diet_lines.is_empty() {
        append_lines(diet_plan(focus, age, gender), templates::DIET_MAINTENANCE_TIPS)
    } else {
        append_lines(diet_plan(focus, age, gender), &diet_lines)
    };

    let workout_lines = matching_lines(templates::WORKOUT_BLOCKS, &scores);
    let workout_plan = append_lines(workout_plan(focus, age, gender), &workout_lines);

    let lifestyle_tips = matching_lines(templates::LIFESTYLE_BLOCKS, &scores)
        .into_iter()
        .map(str::to_string)
        .collect();

    RecommendationResult {
        tier: Tier::Advanced,
        focus,
        focus_areas: focus_areas(focus, &scores),
        diet_plan,
        workout_plan,
        lifestyle_tips,
        health_analysis: health_analysis(&scores),
        message: templates::ADVANCED_MESSAGE.to_string(),
    }
}

pub fn focus_areas(focus: Focus, scores: &AssessmentScores) -> Vec<FocusArea> {
    let mut areas = vec![FocusArea::from(focus)];
    if scores.sleep < 60.0 {
        areas.push(FocusArea::SleepImprovement);
    }
    if scores.activity < 50.0 {
        areas.push(FocusArea::FitnessBoost);
    }
    if scores.stress < 60.0 {
        areas.push(FocusArea::StressManagement);
    }
    if scores.hydration < 70.0 {
        areas.push(FocusArea::HydrationFocus);
    }
    areas
}

fn health_analysis(scores: &AssessmentScores) -> Vec<String> {
    std::iter::once(templates::analysis_header(scores.overall))
        .chain(templates::VERDICTS.iter().map(|v| v.render(scores).to_string()))
        .collect()
}

fn matching_lines(blocks: &[Block], scores: &AssessmentScores) -> Vec<&'static str> {
    blocks
        .iter()
        .filter(|block| (block.applies)(scores))
        .flat_map(|block| block.lines.iter().copied())
        .collect()
}

fn append_lines(base: &str, lines: &[&str]) -> String {
    if lines.is_empty() {
        base.to_string()
    } else {
        format!("{}\n\n{}", base, lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::RecommendationLevel;
    use chrono::Utc;
    use uuid::Uuid;

    fn profile(weight: f64, height: f64, health_data: HealthSnapshot) -> UserRecord {
        UserRecord {
            user_id: Uuid::now_v7(),
            username: "sam".to_string(),
            email: "sam@example.com".to_string(),
            password_hash: String::new(),
            age: 30,
            weight,
            height,
            gender: "female".to_string(),
            bmi: 0.0,
            created_at: Utc::now(),
            last_login: None,
            health_data,
            recommendation_level: RecommendationLevel::Basic,
        }
    }

    // 49.13 kg at 170 cm is a BMI of 17.0
    fn underweight(health_data: HealthSnapshot) -> UserRecord {
        profile(49.13, 170.0, health_data)
    }

    fn snapshot(sleep: f64, activity: f64, stress: f64, hydration: f64) -> HealthSnapshot {
        HealthSnapshot {
            sleep_score: Some(sleep),
            activity_score: Some(activity),
            stress_score: Some(stress),
            hydration_score: Some(hydration),
            overall_score: Some(72),
            ..Default::default()
        }
    }

    #[test]
    fn underweight_without_snapshot_is_basic_weight_gain() {
        let result = derive(&underweight(HealthSnapshot::default()));
        assert_eq!(result.tier, Tier::Basic);
        assert_eq!(result.focus, Focus::WeightGain);
        assert_eq!(result.focus_areas, vec![FocusArea::WeightGain]);
        assert!(result.lifestyle_tips.is_empty());
        assert!(result.health_analysis.is_empty());
        assert_eq!(result.diet_plan, templates::basic_diet(Focus::WeightGain));
        assert_eq!(result.message, templates::BASIC_MESSAGE);
    }

    #[test]
    fn underweight_with_snapshot_is_advanced() {
        let result = derive(&underweight(snapshot(50.0, 80.0, 70.0, 60.0)));
        assert_eq!(result.tier, Tier::Advanced);
        assert_eq!(
            result.focus_areas,
            vec![FocusArea::WeightGain, FocusArea::SleepImprovement, FocusArea::HydrationFocus]
        );
        assert_eq!(result.message, templates::ADVANCED_MESSAGE);
    }

    #[test]
    fn single_sleep_score_is_enough_for_advanced() {
        let partial = HealthSnapshot { sleep_score: Some(40.0), ..Default::default() };
        let result = derive(&profile(70.0, 175.0, partial));
        assert_eq!(result.tier, Tier::Advanced);
        // Missing scores read as zero, so every low-score area fires.
        assert_eq!(
            result.focus_areas,
            vec![
                FocusArea::Maintenance,
                FocusArea::SleepImprovement,
                FocusArea::FitnessBoost,
                FocusArea::StressManagement,
                FocusArea::HydrationFocus,
            ]
        );
        assert_eq!(result.health_analysis[0], "📊 **Health Score Analysis:** 0/100");
    }

    #[test]
    fn hydration_only_snapshot_stays_basic() {
        let partial = HealthSnapshot { hydration_score: Some(10.0), ..Default::default() };
        let result = derive(&profile(70.0, 175.0, partial));
        assert_eq!(result.tier, Tier::Basic);
        assert_eq!(result.focus_areas, vec![FocusArea::Maintenance]);
    }

    #[test]
    fn focus_ignores_stored_bmi_score() {
        let mut stale = snapshot(90.0, 90.0, 90.0, 90.0);
        stale.bmi_score = Some(100.0);
        let result = derive(&profile(110.0, 170.0, stale));
        assert_eq!(result.focus, Focus::WeightLoss);
        assert_eq!(result.focus_areas, vec![FocusArea::WeightLoss]);
    }

    #[test]
    fn strong_scores_get_maintenance_diet_tips_and_performance_workout() {
        let result = derive(&profile(70.0, 175.0, snapshot(90.0, 85.0, 90.0, 90.0)));
        // activity 85 fires the active-lifestyle diet block, so no maintenance tips
        assert!(result.diet_plan.contains("💪 **Active Lifestyle Nutrition:**"));
        assert!(!result.diet_plan.contains("Maintenance Tips"));
        assert!(result.workout_plan.contains("🏆 **Advanced Performance:**"));
        assert!(result.lifestyle_tips.is_empty());

        let calm = derive(&profile(70.0, 175.0, snapshot(90.0, 65.0, 90.0, 90.0)));
        assert_eq!(
            calm.diet_plan,
            format!(
                "{}\n\n🌟 **Maintenance Tips:**\n• Continue your balanced diet\n• Regular health check-ups\n• Seasonal food variety",
                templates::basic_diet(Focus::Maintenance)
            )
        );
        assert_eq!(calm.workout_plan, templates::basic_workout(Focus::Maintenance));
    }

    #[test]
    fn diet_blocks_follow_fixed_order() {
        let result = derive(&profile(70.0, 175.0, snapshot(40.0, 30.0, 40.0, 40.0)));
        let sleep = result.diet_plan.find("Sleep-Enhancing Foods").unwrap();
        let energy = result.diet_plan.find("Energy Boost Foods").unwrap();
        let stress = result.diet_plan.find("Stress-Reducing Nutrition").unwrap();
        let hydration = result.diet_plan.find("Hydration Strategy").unwrap();
        assert!(sleep < energy && energy < stress && stress < hydration);
        assert!(result.diet_plan.starts_with(templates::basic_diet(Focus::Maintenance)));
        assert!(result.workout_plan.contains("Beginner-Friendly Routine"));
        assert!(!result.workout_plan.contains("Advanced Performance"));
    }

    #[test]
    fn lifestyle_tips_use_their_own_thresholds() {
        // sleep 65: no focus area (>= 60) but a sleep tip (< 70)
        // activity 55: no focus area (>= 50) but an activity tip (< 60)
        let result = derive(&profile(70.0, 175.0, snapshot(65.0, 55.0, 90.0, 90.0)));
        assert_eq!(result.focus_areas, vec![FocusArea::Maintenance]);
        assert_eq!(result.lifestyle_tips[0], "🛌 **Sleep Optimization:**");
        assert!(result.lifestyle_tips.contains(&"🏃 **Activity Integration:**".to_string()));
        assert_eq!(result.lifestyle_tips.len(), 10);
    }

    #[test]
    fn analysis_uses_three_tier_wording() {
        let result = derive(&profile(70.0, 175.0, snapshot(80.0, 60.0, 59.0, 85.0)));
        assert_eq!(
            result.health_analysis,
            vec![
                "📊 **Health Score Analysis:** 72/100".to_string(),
                "✅ **Sleep:** Excellent quality and duration".to_string(),
                "⚠️ **Activity:** Moderately active".to_string(),
                "❌ **Stress:** High stress detected".to_string(),
                "✅ **Hydration:** Optimal water intake".to_string(),
            ]
        );
    }
}
