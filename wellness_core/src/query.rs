//! Trailing date windows over the journal.
//!
//! A window selects every entry dated on or after `today - N days`,
//! compared as calendar dates, and orders the result oldest first.

use crate::{DailyEntry, Error, Result};
use chrono::{Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Trailing window used by the trends view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Window {
    Week,
    Month,
    Year,
}

impl Window {
    pub const ALL: [Window; 3] = [Window::Week, Window::Month, Window::Year];

    /// Length of the window in days
    pub fn days(self) -> i64 {
        match self {
            Window::Week => 7,
            Window::Month => 30,
            Window::Year => 365,
        }
    }

    pub fn from_days(days: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.days() == days)
    }

    /// First date included in the window
    pub fn start(self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.days())
    }

    pub fn contains(self, today: NaiveDate, date: NaiveDate) -> bool {
        date >= self.start(today)
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "last {} days", self.days())
    }
}

impl FromStr for Window {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let window = match s.trim().to_lowercase().as_str() {
            "7" | "week" => Some(Window::Week),
            "30" | "month" => Some(Window::Month),
            "365" | "year" => Some(Window::Year),
            _ => None,
        };
        window.ok_or_else(|| {
            Error::InvalidInput(format!(
                "Unknown window {:?} (expected 7, 30, 365, week, month or year)",
                s
            ))
        })
    }
}

/// Select the entries falling in `window` relative to `today`, oldest first.
///
/// Entries dated after `today` are kept: only the lower bound is enforced.
pub fn entries_in_window(
    entries: impl IntoIterator<Item = DailyEntry>,
    window: Window,
    today: NaiveDate,
) -> Vec<DailyEntry> {
    let mut selected: Vec<DailyEntry> = entries
        .into_iter()
        .filter(|e| window.contains(today, e.date))
        .collect();

    selected.sort_by_key(|e| e.date);

    tracing::debug!(
        "Selected {} entries for the {} before {}",
        selected.len(),
        window,
        today
    );

    selected
}
