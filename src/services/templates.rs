//! Static text used to render recommendations.
//!
//! Conditional blocks are listed as (predicate, lines) pairs. Renderers walk
//! each table in order and append every block whose predicate holds, so the
//! order of entries here is the order of the rendered output.

use crate::models::recommendation::Focus;

/// Snapshot values as seen by the templates, with missing scores read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AssessmentScores {
    pub sleep: f64,
    pub activity: f64,
    pub stress: f64,
    pub hydration: f64,
    pub overall: i64,
}

pub struct Block {
    pub applies: fn(&AssessmentScores) -> bool,
    pub lines: &'static [&'static str],
}

pub const BASIC_MESSAGE: &str = "Complete health assessment for more personalized recommendations!";
pub const ADVANCED_MESSAGE: &str =
    "🎯 Advanced personalized recommendations based on your complete health profile!";

pub fn basic_diet(focus: Focus) -> &'static str {
    match focus {
        Focus::WeightLoss => "• Reduce daily calories by 500
• Include high-protein foods like chicken and fish
• Avoid processed foods and added sugars
• Eat more vegetables and fruits",
        Focus::WeightGain => "• Add 300 extra calories daily
• Eat protein-rich foods like eggs and nuts
• Include healthy carbs like whole grains
• Have 5-6 small meals throughout the day",
        Focus::Maintenance => "• Maintain your current calorie intake
• Eat balanced meals with lean proteins
• Include whole grains and fruits
• Add healthy fats like nuts and avocado",
    }
}

pub fn basic_workout(focus: Focus) -> &'static str {
    match focus {
        Focus::WeightLoss => "• Cardio: 30-45 minutes, 4-5 times/week
• Strength: Full body, 2-3 times/week
• Activities: Walking, cycling, swimming
• Stay active throughout the day",
        Focus::WeightGain => "• Strength: Heavy weights, 3-4 times/week
• Compound exercises: Squats, deadlifts
• Allow 1-2 days rest between sessions
• Gradually increase weights",
        Focus::Maintenance => "• Mixed: Cardio + Strength, 3-4 times/week
• Try different activities for variety
• Maintain a consistent schedule
• Listen to your body and rest when needed",
    }
}

/// Appended to the diet plan when no diet block applies.
pub const DIET_MAINTENANCE_TIPS: &[&str] = &[
    "🌟 **Maintenance Tips:**",
    "• Continue your balanced diet",
    "• Regular health check-ups",
    "• Seasonal food variety",
];

pub const DIET_BLOCKS: &[Block] = &[
    Block {
        applies: |s| s.sleep < 60.0,
        lines: &[
            "🌙 **Sleep-Enhancing Foods:**",
            "• Dinner: Turkey, bananas, almonds (rich in tryptophan & magnesium)",
            "• Evening: Chamomile tea, warm milk",
            "• Avoid: Caffeine after 2 PM, heavy meals before bed",
        ],
    },
    Block {
        applies: |s| s.activity > 70.0,
        lines: &[
            "💪 **Active Lifestyle Nutrition:**",
            "• Post-workout: Protein shake within 30 minutes",
            "• Recovery: Complex carbs + protein (3:1 ratio)",
            "• Hydration: Electrolyte drinks during long workouts",
        ],
    },
    Block {
        applies: |s| s.activity < 50.0,
        lines: &[
            "🚶 **Energy Boost Foods:**",
            "• Breakfast: Oatmeal with nuts and fruits",
            "• Snacks: Greek yogurt, apple with peanut butter",
            "• Iron-rich: Spinach, lentils, lean red meat",
        ],
    },
    Block {
        applies: |s| s.stress < 60.0,
        lines: &[
            "🧘 **Stress-Reducing Nutrition:**",
            "• Omega-3: Salmon, walnuts, chia seeds",
            "• Magnesium: Dark leafy greens, avocados",
            "• Vitamin C: Citrus fruits, bell peppers",
            "• Avoid: Sugar crashes, excessive caffeine",
        ],
    },
    Block {
        applies: |s| s.hydration < 70.0,
        lines: &[
            "💧 **Hydration Strategy:**",
            "• Morning: 500ml water upon waking",
            "• Meals: Glass of water before each meal",
            "• Electrolytes: Coconut water, watermelon",
            "• Track: Use water tracking app",
        ],
    },
];

pub const WORKOUT_BLOCKS: &[Block] = &[
    Block {
        applies: |s| s.sleep < 60.0,
        lines: &[
            "🌙 **Sleep-Focused Fitness:**",
            "• Morning: Sunlight exposure + light walk",
            "• Evening: Gentle yoga or stretching",
            "• Avoid: Intense workouts 3 hours before bed",
            "• Ideal workout time: Morning or early afternoon",
        ],
    },
    Block {
        applies: |s| s.activity < 50.0,
        lines: &[
            "🚶 **Beginner-Friendly Routine:**",
            "• Start: 15-20 minute sessions, 3 times/week",
            "• Focus: Consistency over intensity",
            "• Progress: Add 5 minutes weekly",
            "• Mix: Walking, bodyweight exercises, swimming",
        ],
    },
    Block {
        applies: |s| s.activity > 80.0,
        lines: &[
            "🏆 **Advanced Performance:**",
            "• Periodization: Vary intensity weekly",
            "• Recovery: Active recovery days",
            "• Cross-training: Different activities",
            "• Monitor: Heart rate variability",
        ],
    },
    Block {
        applies: |s| s.stress < 60.0,
        lines: &[
            "🧘 **Stress-Relief Fitness:**",
            "• Mindful: Yoga, tai chi, nature walks",
            "• Breathing: Box breathing during workouts",
            "• Recovery: Extra rest days when stressed",
            "• Enjoyable: Choose activities you love",
        ],
    },
];

// Tip thresholds differ from the focus-area ones on purpose: sleep and
// hydration trigger below 70, activity and stress below 60.
pub const LIFESTYLE_BLOCKS: &[Block] = &[
    Block {
        applies: |s| s.sleep < 70.0,
        lines: &[
            "🛌 **Sleep Optimization:**",
            "• Consistent bedtime: Same time every night",
            "• Bedroom: Cool, dark, and quiet",
            "• Routine: 30-minute wind-down before bed",
            "• Digital detox: No screens 1 hour before sleep",
        ],
    },
    Block {
        applies: |s| s.activity < 60.0,
        lines: &[
            "🏃 **Activity Integration:**",
            "• Desk job: Stand every 30 minutes",
            "• Walking meetings: When possible",
            "• Parking: Far from destinations",
            "• TV time: Light exercises during commercials",
        ],
    },
    Block {
        applies: |s| s.stress < 60.0,
        lines: &[
            "🧘 **Stress Management:**",
            "• Morning: 5-minute meditation",
            "• Breaks: Pomodoro technique (25/5)",
            "• Nature: 20-minute daily outdoor time",
            "• Digital: Designated no-phone times",
        ],
    },
    Block {
        applies: |s| s.hydration < 70.0,
        lines: &[
            "💧 **Hydration Habits:**",
            "• Visible: Water bottle always in sight",
            "• Flavored: Infuse with fruits/herbs",
            "• App reminder: Hourly drink alerts",
            "• Food: Water-rich fruits and vegetables",
        ],
    },
];

/// One line of the health analysis: `good` at 80 and above, `fair` at 60 and
/// above, `poor` otherwise.
pub struct Verdict {
    pub score: fn(&AssessmentScores) -> f64,
    pub good: &'static str,
    pub fair: &'static str,
    pub poor: &'static str,
}

impl Verdict {
    pub fn render(&self, scores: &AssessmentScores) -> &'static str {
        let value = (self.score)(scores);
        if value >= 80.0 {
            self.good
        } else if value >= 60.0 {
            self.fair
        } else {
            self.poor
        }
    }
}

pub const VERDICTS: &[Verdict] = &[
    Verdict {
        score: |s| s.sleep,
        good: "✅ **Sleep:** Excellent quality and duration",
        fair: "⚠️ **Sleep:** Good but could be improved",
        poor: "❌ **Sleep:** Needs significant improvement",
    },
    Verdict {
        score: |s| s.activity,
        good: "✅ **Activity:** Highly active lifestyle",
        fair: "⚠️ **Activity:** Moderately active",
        poor: "❌ **Activity:** Sedentary lifestyle detected",
    },
    Verdict {
        score: |s| s.stress,
        good: "✅ **Stress:** Well managed",
        fair: "⚠️ **Stress:** Moderate stress levels",
        poor: "❌ **Stress:** High stress detected",
    },
    Verdict {
        score: |s| s.hydration,
        good: "✅ **Hydration:** Optimal water intake",
        fair: "⚠️ **Hydration:** Could drink more water",
        poor: "❌ **Hydration:** Significant dehydration risk",
    },
];

pub fn analysis_header(overall: i64) -> String {
    format!("📊 **Health Score Analysis:** {}/100", overall)
}
