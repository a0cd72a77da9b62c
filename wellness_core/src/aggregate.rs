//! Summary statistics over a set of entries.

use crate::DailyEntry;
use serde::{Deserialize, Serialize};

/// Per-metric means and exercise count for a set of entries
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub mood: f64,
    pub energy: f64,
    pub sleep: f64,
    pub stress: f64,
    pub exercise_days: usize,
    pub entry_count: usize,
}

/// Reduce `entries` to their aggregates.
///
/// Means are rounded to one decimal place. An empty slice yields zero for
/// every field.
pub fn compute_aggregates(entries: &[DailyEntry]) -> Aggregates {
    if entries.is_empty() {
        return Aggregates::default();
    }

    let (mut mood, mut energy, mut sleep, mut stress) = (0u64, 0u64, 0u64, 0u64);
    for entry in entries {
        mood += u64::from(entry.mood);
        energy += u64::from(entry.energy);
        sleep += u64::from(entry.sleep);
        stress += u64::from(entry.stress);
    }

    let count = entries.len();
    Aggregates {
        mood: mean_one_decimal(mood, count),
        energy: mean_one_decimal(energy, count),
        sleep: mean_one_decimal(sleep, count),
        stress: mean_one_decimal(stress, count),
        exercise_days: entries.iter().filter(|e| e.exercise).count(),
        entry_count: count,
    }
}

fn mean_one_decimal(sum: u64, count: usize) -> f64 {
    let mean = sum as f64 / count as f64;
    (mean * 10.0).round() / 10.0
}
