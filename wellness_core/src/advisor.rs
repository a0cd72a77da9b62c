//! Rule-based assessment of a single day's entry.
//!
//! [`diagnose`] looks only at the entry it is given, never at history.
//! Each metric lands in one of three tiers; the tier picks a comment and
//! a fixed set of recommendations.

use crate::{DailyEntry, Metric};
use serde::{Deserialize, Serialize};

/// At most this many recommendations are returned
pub const MAX_RECOMMENDATIONS: usize = 4;

/// Number of concern-tier metrics that makes a diagnosis critical
pub const CRITICAL_CONCERN_COUNT: usize = 3;

/// Band a metric falls into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Good,
    Moderate,
    Concern,
}

impl Tier {
    /// Tier for a metric value. Stress is banded in reverse.
    pub fn classify(metric: Metric, value: u8) -> Self {
        if metric.is_inverted() {
            match value {
                0..=3 => Tier::Good,
                4..=6 => Tier::Moderate,
                _ => Tier::Concern,
            }
        } else {
            match value {
                7..=u8::MAX => Tier::Good,
                5..=6 => Tier::Moderate,
                _ => Tier::Concern,
            }
        }
    }
}

/// Commentary on one metric
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricAssessment {
    pub tier: Tier,
    pub comment: String,
}

/// Derived assessment of a single entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub overall: String,
    pub mood: MetricAssessment,
    pub energy: MetricAssessment,
    pub sleep: MetricAssessment,
    pub stress: MetricAssessment,
    pub recommendations: Vec<String>,
    pub is_critical: bool,
}

impl Diagnosis {
    pub fn assessment(&self, metric: Metric) -> &MetricAssessment {
        match metric {
            Metric::Mood => &self.mood,
            Metric::Energy => &self.energy,
            Metric::Sleep => &self.sleep,
            Metric::Stress => &self.stress,
        }
    }
}

pub const EXERCISE_PRAISE: &str = "Great job exercising today! ";
pub const EXERCISE_RECOMMENDATION: &str = "Try to include at least 20 minutes of physical activity";

pub const OVERALL_GOOD: &str =
    "Your overall wellbeing is very good. Keep up these healthy habits.";
pub const OVERALL_MODERATE: &str =
    "Your wellbeing is at a moderate level. There are areas where you can improve.";
pub const OVERALL_CONCERN: &str =
    "Your wellbeing needs attention. It is important to look after yourself and seek support.";

/// Comment and recommendations for one metric tier
struct Rule {
    comment: &'static str,
    recommendations: &'static [&'static str],
}

fn rule(metric: Metric, tier: Tier) -> Rule {
    use Metric::*;
    use Tier::*;

    let (comment, recommendations): (&str, &[&str]) = match (metric, tier) {
        (Mood, Good) => ("Your mood is excellent. Keep it up!", &[]),
        (Mood, Moderate) => (
            "Your mood is at a moderate level. Consider activities you enjoy.",
            &["Set aside time for hobbies that make you happy"],
        ),
        (Mood, Concern) => (
            "Your mood is low. Taking care of your mental health matters.",
            &[
                "Consider talking to someone you trust or a professional",
                "Practice a daily gratitude exercise",
            ],
        ),
        (Energy, Good) => ("Your energy levels are excellent.", &[]),
        (Energy, Moderate) => (
            "Your energy is at a moderate level.",
            &["Make sure you stay well hydrated"],
        ),
        (Energy, Concern) => (
            "Your energy levels are low.",
            &[
                "Review your eating and resting habits",
                "Consider a short walk outdoors",
            ],
        ),
        (Sleep, Good) => ("Your sleep quality is optimal.", &[]),
        (Sleep, Moderate) => (
            "Your sleep could improve.",
            &["Establish a regular sleep routine"],
        ),
        (Sleep, Concern) => (
            "Your sleep quality needs attention.",
            &[
                "Avoid screens for an hour before bed",
                "Create a calm environment for resting",
            ],
        ),
        (Stress, Good) => ("Your stress levels are low. Excellent!", &[]),
        (Stress, Moderate) => (
            "You have moderate stress levels.",
            &["Practice deep breathing techniques"],
        ),
        (Stress, Concern) => (
            "Your stress levels are high.",
            &[
                "Consider practicing meditation or yoga",
                "Identify and reduce sources of stress where possible",
            ],
        ),
    };

    Rule {
        comment,
        recommendations,
    }
}

/// Combined score on a 0..=10 scale with stress inverted
pub fn wellbeing_score(entry: &DailyEntry) -> f64 {
    let total = f64::from(entry.mood)
        + f64::from(entry.energy)
        + f64::from(entry.sleep)
        + (10.0 - f64::from(entry.stress));
    total / 4.0
}

/// Assess a single entry.
///
/// Recommendations are produced in metric order (mood, energy, sleep,
/// stress) followed by exercise, then truncated to
/// [`MAX_RECOMMENDATIONS`].
pub fn diagnose(entry: &DailyEntry) -> Diagnosis {
    let mut recommendations = Vec::new();
    let mut concerns = 0;

    let mut assess = |metric: Metric| {
        let tier = Tier::classify(metric, entry.metric(metric));
        let rule = rule(metric, tier);
        if tier == Tier::Concern {
            concerns += 1;
        }
        recommendations.extend(rule.recommendations.iter().map(|r| r.to_string()));
        MetricAssessment {
            tier,
            comment: rule.comment.to_string(),
        }
    };

    let mood = assess(Metric::Mood);
    let energy = assess(Metric::Energy);
    let sleep = assess(Metric::Sleep);
    let stress = assess(Metric::Stress);

    let mut overall = String::new();
    if entry.exercise {
        overall.push_str(EXERCISE_PRAISE);
    } else {
        recommendations.push(EXERCISE_RECOMMENDATION.to_string());
    }

    let score = wellbeing_score(entry);
    overall.push_str(if score >= 7.0 {
        OVERALL_GOOD
    } else if score >= 5.0 {
        OVERALL_MODERATE
    } else {
        OVERALL_CONCERN
    });

    recommendations.truncate(MAX_RECOMMENDATIONS);

    Diagnosis {
        overall,
        mood,
        energy,
        sleep,
        stress,
        recommendations,
        is_critical: concerns >= CRITICAL_CONCERN_COUNT,
    }
}
