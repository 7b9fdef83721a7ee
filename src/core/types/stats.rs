use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::types::{PositionDistribution, StatisticsInput};

/// Stored counters for a single calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStats {
    pub day: NaiveDate,
    pub total_interviews: u64,
    pub completed_interviews: u64,
    pub success_count: u64,
    pub position_distribution: PositionDistribution,
    /// `None` until a session has been recorded for the day
    pub last_updated: Option<DateTime<Utc>>,
}

impl DailyStats {
    /// Counters for a day with no recorded sessions
    pub fn empty(day: NaiveDate) -> Self {
        Self {
            day,
            total_interviews: 0,
            completed_interviews: 0,
            success_count: 0,
            position_distribution: PositionDistribution::default_positions(),
            last_updated: None,
        }
    }

    /// Percentage of sessions that were completed, rounded to one decimal
    pub fn completion_rate(&self) -> f64 {
        percent(self.completed_interviews, self.total_interviews)
    }

    /// Percentage of completed sessions that passed, rounded to one decimal
    pub fn success_rate(&self) -> f64 {
        percent(self.success_count, self.completed_interviews)
    }

    pub fn summary(&self) -> StatisticsInput {
        StatisticsInput {
            total_interviews: Some(self.total_interviews),
            completion_rate: Some(self.completion_rate()),
            success_rate: Some(self.success_rate()),
            position_distribution: Some(self.position_distribution.clone()),
        }
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let rate = part as f64 / whole as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 2).unwrap()
    }

    #[test]
    fn empty_day_has_zero_rates() {
        let stats = DailyStats::empty(day());
        assert_eq!(stats.completion_rate(), 0.0);
        assert_eq!(stats.success_rate(), 0.0);
        assert_eq!(stats.position_distribution.len(), 3);
        assert_eq!(stats.last_updated, None);
    }

    #[test]
    fn rates_round_to_one_decimal() {
        let stats = DailyStats {
            total_interviews: 3,
            completed_interviews: 2,
            success_count: 1,
            ..DailyStats::empty(day())
        };
        assert_eq!(stats.completion_rate(), 66.7);
        assert_eq!(stats.success_rate(), 50.0);
    }

    #[test]
    fn success_rate_uses_completed_as_denominator() {
        let stats = DailyStats {
            total_interviews: 10,
            completed_interviews: 0,
            success_count: 0,
            ..DailyStats::empty(day())
        };
        assert_eq!(stats.success_rate(), 0.0);
        assert_eq!(stats.completion_rate(), 0.0);
    }

    #[test]
    fn summary_is_fully_populated() {
        let summary = DailyStats::empty(day()).summary();
        assert_eq!(summary.total_interviews, Some(0));
        assert_eq!(summary.completion_rate, Some(0.0));
        assert_eq!(summary.success_rate, Some(0.0));
        assert!(summary.position_distribution.is_some());
    }
}
