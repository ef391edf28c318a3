//! Client-side card statistics
//!
//! The backend exposes `/api/cards/stats`, but the dashboard also needs the
//! same aggregation over cards it already holds in memory. Both shapes share
//! this type; [`CardStats::compute`] is the local aggregation.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use super::card::{Card, Priority};
use crate::constants::DUE_SOON_WINDOW_DAYS;

/// Aggregated card counts by priority and due-date bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardStats {
    /// Total number of cards.
    pub number: usize,
    pub without: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    /// Due before the start of the current day.
    pub outdated: usize,
    /// Due during the current day.
    pub today: usize,
    /// Due within the next week, excluding today.
    pub week: usize,
    /// Due after next week but within a month.
    pub month: usize,
    /// Due later than a month from now.
    pub further: usize,
}

impl CardStats {
    /// Aggregate `cards` relative to `now`.
    ///
    /// Cards without a due date contribute to the priority counters only.
    #[must_use]
    pub fn compute(cards: &[Card], now: DateTime<Utc>) -> Self {
        let day_start = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map_or(now, |start| start.and_utc());
        let day_end = day_start + Duration::days(1);
        let week_end = day_start + Duration::days(DUE_SOON_WINDOW_DAYS);
        let month_end = day_start
            .checked_add_months(Months::new(1))
            .unwrap_or(day_start + Duration::days(31));

        let mut stats = Self { number: cards.len(), ..Self::default() };

        for card in cards {
            match card.priority {
                Priority::Without => stats.without += 1,
                Priority::Low => stats.low += 1,
                Priority::Medium => stats.medium += 1,
                Priority::High => stats.high += 1,
            }

            let Some(due) = card.due_date else { continue };
            if due < day_start {
                stats.outdated += 1;
            } else if due < day_end {
                stats.today += 1;
            } else if due <= week_end {
                stats.week += 1;
            } else if due <= month_end {
                stats.month += 1;
            } else {
                stats.further += 1;
            }
        }

        stats
    }
}
