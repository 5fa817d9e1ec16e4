use crate::errors::FactError;
use crate::models::StreakResponse;
use chrono::{Datelike, Duration, NaiveDate};

/// Decimal concatenation of the date, e.g. 2024-01-02 => 20240102.
/// Not a day count, so consecutive days can land on repeating indices.
pub fn daily_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Euclidean remainder, so years before 1 CE still land in range.
pub fn daily_index(date: NaiveDate, fact_count: usize) -> Result<usize, FactError> {
    if fact_count == 0 {
        return Err(FactError::EmptyStore);
    }
    Ok(daily_seed(date).rem_euclid(fact_count as i64) as usize)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakState {
    pub last_seen: Option<NaiveDate>,
    pub count: u32,
}

impl StreakState {
    /// Applies one daily-fact view on `today`. Same-day calls are no-ops.
    pub fn advance(self, today: NaiveDate) -> Self {
        if self.last_seen == Some(today) {
            return self;
        }

        let yesterday = today - Duration::days(1);
        let count = if self.last_seen == Some(yesterday) {
            self.count.saturating_add(1)
        } else {
            1
        };

        Self {
            last_seen: Some(today),
            count,
        }
    }
}

impl From<StreakState> for StreakResponse {
    fn from(state: StreakState) -> Self {
        Self {
            last_seen: state.last_seen,
            count: state.count,
        }
    }
}
