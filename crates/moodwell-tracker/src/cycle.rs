//! Next-cycle prediction from logged period start dates
//!
//! This is a moving-average heuristic: the mean of recent start-to-start
//! gaps, projected forward from the latest start. It carries no confidence
//! interval.

use crate::dates::days_between;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_CYCLE_LENGTH_DAYS: i64 = 28;

/// Gaps at or above this are treated as missing data, not a cycle
pub const MAX_CYCLE_GAP_DAYS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleEvent {
    pub id: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub symptoms: BTreeSet<String>,
}

impl CycleEvent {
    pub fn new(id: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            start_date,
            end_date: None,
            symptoms: BTreeSet::new(),
        }
    }

    /// Inclusive length in days, if the end date is known and not before the start
    pub fn period_length(&self) -> Option<i64> {
        let end = self.end_date?;
        let days = days_between(self.start_date, end);
        (days >= 0).then_some(days + 1)
    }
}

/// Derived, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePrediction {
    pub next_date: NaiveDate,
    pub average_cycle_length_days: i64,
    /// Negative when the next cycle is overdue
    pub days_until_next: i64,
}

/// Tunables for [`predict_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePolicy {
    pub default_length_days: i64,
    pub max_gap_days: i64,
}

impl Default for CyclePolicy {
    fn default() -> Self {
        Self {
            default_length_days: DEFAULT_CYCLE_LENGTH_DAYS,
            max_gap_days: MAX_CYCLE_GAP_DAYS,
        }
    }
}

/// Events ordered by start date, newest first
pub fn sorted_for_display(events: &[CycleEvent]) -> Vec<CycleEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    sorted
}

pub fn predict_next_cycle(events: &[CycleEvent], today: NaiveDate) -> Option<CyclePrediction> {
    predict_with(events, today, CyclePolicy::default())
}

pub fn predict_with(
    events: &[CycleEvent],
    today: NaiveDate,
    policy: CyclePolicy,
) -> Option<CyclePrediction> {
    let sorted = sorted_for_display(events);
    let latest = sorted.first()?;

    let gaps: Vec<i64> = sorted
        .windows(2)
        .map(|pair| days_between(pair[1].start_date, pair[0].start_date))
        .filter(|&diff| diff > 0 && diff < policy.max_gap_days)
        .collect();

    let average = if gaps.is_empty() {
        policy.default_length_days
    } else {
        (gaps.iter().sum::<i64>() as f64 / gaps.len() as f64).round() as i64
    };

    tracing::debug!(
        events = sorted.len(),
        used_gaps = gaps.len(),
        average,
        "predicting next cycle"
    );

    // Gap averages are positive; only a bad policy default can fail here
    let Some(offset) = u64::try_from(average).ok().filter(|days| *days > 0) else {
        tracing::warn!(average, "non-positive cycle length, no prediction");
        return None;
    };
    let next_date = latest.start_date.checked_add_days(Days::new(offset))?;

    Some(CyclePrediction {
        next_date,
        average_cycle_length_days: average,
        days_until_next: days_between(today, next_date),
    })
}

/// Rounded mean period length over events with a usable end date
pub fn average_period_length(events: &[CycleEvent]) -> Option<i64> {
    let lengths: Vec<i64> = events.iter().filter_map(CycleEvent::period_length).collect();
    if lengths.is_empty() {
        return None;
    }
    Some((lengths.iter().sum::<i64>() as f64 / lengths.len() as f64).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn events(starts: &[&str]) -> Vec<CycleEvent> {
        starts
            .iter()
            .enumerate()
            .map(|(i, s)| CycleEvent::new(i.to_string(), day(s)))
            .collect()
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(predict_next_cycle(&[], day("2024-01-01")), None);
    }

    #[test]
    fn test_regular_28_day_cycles() {
        let history = events(&["2024-01-01", "2024-01-29", "2024-02-26"]);
        let prediction = predict_next_cycle(&history, day("2024-03-01")).unwrap();
        assert_eq!(prediction.average_cycle_length_days, 28);
        assert_eq!(prediction.next_date, day("2024-03-25"));
        assert_eq!(prediction.days_until_next, 24);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let history = events(&["2024-02-26", "2024-01-01", "2024-01-29"]);
        let prediction = predict_next_cycle(&history, day("2024-03-01")).unwrap();
        assert_eq!(prediction.next_date, day("2024-03-25"));
    }

    #[test]
    fn test_long_gap_excluded() {
        // 30-day cycle, then a 90-day gap of missing data, then another 30-day cycle
        let history = events(&["2024-01-01", "2024-01-31", "2024-04-30", "2024-05-30"]);
        let prediction = predict_next_cycle(&history, day("2024-06-01")).unwrap();
        assert_eq!(prediction.average_cycle_length_days, 30);
        assert_eq!(prediction.next_date, day("2024-06-29"));
    }

    #[test]
    fn test_single_event_uses_default() {
        let history = events(&["2024-01-10"]);
        let prediction = predict_next_cycle(&history, day("2024-01-10")).unwrap();
        assert_eq!(prediction.average_cycle_length_days, DEFAULT_CYCLE_LENGTH_DAYS);
        assert_eq!(prediction.next_date, day("2024-02-07"));
        assert_eq!(prediction.days_until_next, 28);
    }

    #[test]
    fn test_same_day_duplicates_ignored() {
        let history = events(&["2024-01-01", "2024-01-01", "2024-01-27"]);
        let prediction = predict_next_cycle(&history, day("2024-01-27")).unwrap();
        assert_eq!(prediction.average_cycle_length_days, 26);
    }

    #[test]
    fn test_overdue_is_negative() {
        let history = events(&["2024-01-01", "2024-01-29"]);
        let prediction = predict_next_cycle(&history, day("2024-03-01")).unwrap();
        assert_eq!(prediction.next_date, day("2024-02-26"));
        assert_eq!(prediction.days_until_next, -4);
    }

    #[test]
    fn test_mean_is_rounded() {
        // gaps 27 and 28 -> 27.5 -> 28
        let history = events(&["2024-01-01", "2024-01-28", "2024-02-25"]);
        let prediction = predict_next_cycle(&history, day("2024-02-25")).unwrap();
        assert_eq!(prediction.average_cycle_length_days, 28);
    }

    #[test]
    fn test_custom_policy() {
        let history = events(&["2024-01-01", "2024-03-11"]);
        let policy = CyclePolicy {
            default_length_days: 30,
            max_gap_days: 90,
        };
        let prediction = predict_with(&history, day("2024-03-11"), policy).unwrap();
        assert_eq!(prediction.average_cycle_length_days, 70);

        let fallback = predict_next_cycle(&history, day("2024-03-11")).unwrap();
        assert_eq!(fallback.average_cycle_length_days, 28);
    }

    #[test]
    fn test_display_order_newest_first() {
        let history = events(&["2024-01-01", "2024-02-26", "2024-01-29"]);
        let sorted = sorted_for_display(&history);
        let starts: Vec<_> = sorted.iter().map(|e| e.start_date).collect();
        assert_eq!(
            starts,
            vec![day("2024-02-26"), day("2024-01-29"), day("2024-01-01")]
        );
    }

    #[test]
    fn test_average_period_length() {
        let mut history = events(&["2024-01-01", "2024-01-29", "2024-02-26"]);
        history[0].end_date = Some(day("2024-01-05")); // 5 days
        history[1].end_date = Some(day("2024-02-01")); // 4 days
        history[2].end_date = Some(day("2024-02-20")); // before start, ignored
        assert_eq!(average_period_length(&history), Some(5));
        assert_eq!(average_period_length(&events(&["2024-01-01"])), None);
    }

    #[test]
    fn test_non_positive_default_length_gives_no_prediction() {
        let events = vec![CycleEvent::new("a", day("2024-01-01"))];
        for default_length_days in [0, -5] {
            let policy = CyclePolicy {
                default_length_days,
                ..CyclePolicy::default()
            };
            assert_eq!(predict_with(&events, day("2024-01-10"), policy), None);
        }
    }
}
