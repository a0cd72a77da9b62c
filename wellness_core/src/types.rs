//! Core domain types for the wellness journal.
//!
//! This module defines the record kept for each calendar day and the
//! small enums used to classify its metrics.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest value any of the four metrics may take
pub const SCORE_MIN: u8 = 1;

/// Highest value any of the four metrics may take
pub const SCORE_MAX: u8 = 10;

// ============================================================================
// Daily Entry
// ============================================================================

/// One day's recorded wellness metrics.
///
/// The date is both the identity and the lookup key: a journal holds at
/// most one entry per calendar day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "EntryRecord", from = "EntryRecord")]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub mood: u8,
    pub energy: u8,
    pub sleep: u8,
    pub stress: u8,
    pub exercise: bool,
    pub notes: String,
}

impl DailyEntry {
    /// Create an entry with no exercise and empty notes
    pub fn new(date: NaiveDate, mood: u8, energy: u8, sleep: u8, stress: u8) -> Self {
        Self {
            date,
            mood,
            energy,
            sleep,
            stress,
            exercise: false,
            notes: String::new(),
        }
    }

    pub fn with_exercise(mut self, exercise: bool) -> Self {
        self.exercise = exercise;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Value of a single metric
    pub fn metric(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Mood => self.mood,
            Metric::Energy => self.energy,
            Metric::Sleep => self.sleep,
            Metric::Stress => self.stress,
        }
    }

    /// Check that every metric lies in `[SCORE_MIN, SCORE_MAX]`.
    ///
    /// The store itself accepts any value; callers at the input boundary
    /// use this before saving.
    pub fn validate(&self) -> Result<()> {
        for metric in Metric::ALL {
            let value = self.metric(metric);
            if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
                return Err(Error::InvalidEntry(format!(
                    "{} must be between {} and {}, got {}",
                    metric, SCORE_MIN, SCORE_MAX, value
                )));
            }
        }
        Ok(())
    }
}

/// On-disk shape of an entry.
///
/// `id` duplicates `date` and is rewritten from it on every save.
#[derive(Serialize, Deserialize)]
struct EntryRecord {
    #[serde(default)]
    id: String,
    date: NaiveDate,
    mood: u8,
    energy: u8,
    sleep: u8,
    stress: u8,
    exercise: bool,
    #[serde(default)]
    notes: String,
}

impl From<DailyEntry> for EntryRecord {
    fn from(entry: DailyEntry) -> Self {
        Self {
            id: entry.date.format("%Y-%m-%d").to_string(),
            date: entry.date,
            mood: entry.mood,
            energy: entry.energy,
            sleep: entry.sleep,
            stress: entry.stress,
            exercise: entry.exercise,
            notes: entry.notes,
        }
    }
}

impl From<EntryRecord> for DailyEntry {
    fn from(record: EntryRecord) -> Self {
        Self {
            date: record.date,
            mood: record.mood,
            energy: record.energy,
            sleep: record.sleep,
            stress: record.stress,
            exercise: record.exercise,
            notes: record.notes,
        }
    }
}

// ============================================================================
// Metric Classification
// ============================================================================

/// The four scored metrics of an entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Mood,
    Energy,
    Sleep,
    Stress,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Mood, Metric::Energy, Metric::Sleep, Metric::Stress];

    /// Whether a higher value is worse (only stress)
    pub fn is_inverted(self) -> bool {
        matches!(self, Metric::Stress)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Mood => "mood",
            Metric::Energy => "energy",
            Metric::Sleep => "sleep",
            Metric::Stress => "stress",
        };
        f.write_str(name)
    }
}

/// Coarse mood indicator shown next to the mood slider
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodLevel {
    Low,
    Neutral,
    High,
}

impl MoodLevel {
    pub fn from_score(mood: u8) -> Self {
        match mood {
            0..=3 => MoodLevel::Low,
            4..=6 => MoodLevel::Neutral,
            _ => MoodLevel::High,
        }
    }
}
