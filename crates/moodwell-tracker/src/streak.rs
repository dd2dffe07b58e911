//! Daily streak continuation

use crate::dates::days_between;
use crate::error::TrackerError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated reminder outcome; only `occurred` events count toward a streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReminderEvent {
    pub date: NaiveDate,
    pub occurred: bool,
}

/// Running streak. `longest_run >= current_run` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    pub current_run: u32,
    pub longest_run: u32,
    #[serde(default)]
    pub last_event_date: Option<NaiveDate>,
}

impl StreakState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a streak from an unordered event history
    pub fn replay(events: &[CheckReminderEvent]) -> Self {
        let mut dates: Vec<NaiveDate> = events
            .iter()
            .filter(|e| e.occurred)
            .map(|e| e.date)
            .collect();
        dates.sort_unstable();
        dates.dedup();

        dates.into_iter().fold(Self::new(), |state, date| {
            // Sorted input never goes backwards
            update_streak(state, date).unwrap_or(state)
        })
    }

    /// The run can still be continued (last event today or yesterday)
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.last_event_date
            .map(|last| (0..=1).contains(&days_between(last, today)))
            .unwrap_or(false)
    }

    /// Run length as seen on `today`: zero once the streak has lapsed
    pub fn run_on(&self, today: NaiveDate) -> u32 {
        if self.is_active_on(today) {
            self.current_run
        } else {
            0
        }
    }
}

/// Apply one qualifying event to a streak.
///
/// Same-day events are idempotent; a gap of more than one day restarts the run
/// at 1. Events dated before the last recorded one are rejected and the state
/// is left as it was.
pub fn update_streak(state: StreakState, event_date: NaiveDate) -> Result<StreakState, TrackerError> {
    let current_run = match state.last_event_date {
        None => 1,
        Some(last) => match days_between(last, event_date) {
            0 => state.current_run,
            1 => state.current_run + 1,
            d if d > 1 => 1,
            _ => {
                tracing::warn!(%last, attempted = %event_date, "rejecting out-of-order streak event");
                return Err(TrackerError::OutOfOrder {
                    last,
                    attempted: event_date,
                });
            }
        },
    };

    Ok(StreakState {
        current_run,
        longest_run: state.longest_run.max(current_run),
        last_event_date: Some(event_date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_first_event_starts_run() {
        let state = update_streak(StreakState::new(), day("2024-05-01")).unwrap();
        assert_eq!(state.current_run, 1);
        assert_eq!(state.longest_run, 1);
        assert_eq!(state.last_event_date, Some(day("2024-05-01")));
    }

    #[test]
    fn test_five_consecutive_days() {
        let start = day("2024-05-01");
        let mut state = StreakState::new();
        for offset in 0..5 {
            state = update_streak(state, start + Days::new(offset)).unwrap();
        }
        assert_eq!(state.current_run, 5);
        assert!(state.longest_run >= 5);
    }

    #[test]
    fn test_same_day_is_idempotent() {
        let state = update_streak(StreakState::new(), day("2024-05-01")).unwrap();
        let state = update_streak(state, day("2024-05-02")).unwrap();
        let again = update_streak(state, day("2024-05-02")).unwrap();
        assert_eq!(again.current_run, state.current_run);
        assert_eq!(again, state);
    }

    #[test]
    fn test_gap_resets_run() {
        let mut state = StreakState::new();
        for d in ["2024-05-01", "2024-05-02", "2024-05-03", "2024-05-04"] {
            state = update_streak(state, day(d)).unwrap();
        }
        assert_eq!(state.current_run, 4);

        let state = update_streak(state, day("2024-05-07")).unwrap();
        assert_eq!(state.current_run, 1);
        assert_eq!(state.longest_run, 4);
    }

    #[test]
    fn test_out_of_order_rejected() {
        let state = update_streak(StreakState::new(), day("2024-05-10")).unwrap();
        let err = update_streak(state, day("2024-05-09")).unwrap_err();
        assert_eq!(
            err,
            TrackerError::OutOfOrder {
                last: day("2024-05-10"),
                attempted: day("2024-05-09"),
            }
        );
    }

    #[test]
    fn test_replay_sorts_and_skips_missed() {
        let events = vec![
            CheckReminderEvent { date: day("2024-05-03"), occurred: true },
            CheckReminderEvent { date: day("2024-05-01"), occurred: true },
            CheckReminderEvent { date: day("2024-05-02"), occurred: true },
            CheckReminderEvent { date: day("2024-05-02"), occurred: true },
            CheckReminderEvent { date: day("2024-05-04"), occurred: false },
            CheckReminderEvent { date: day("2024-05-06"), occurred: true },
        ];
        let state = StreakState::replay(&events);
        assert_eq!(state.current_run, 1);
        assert_eq!(state.longest_run, 3);
        assert_eq!(state.last_event_date, Some(day("2024-05-06")));
    }

    #[test]
    fn test_run_lapses_after_a_missed_day() {
        let state = update_streak(StreakState::new(), day("2024-05-01")).unwrap();
        assert_eq!(state.run_on(day("2024-05-01")), 1);
        assert_eq!(state.run_on(day("2024-05-02")), 1);
        assert_eq!(state.run_on(day("2024-05-03")), 0);
        assert!(!StreakState::new().is_active_on(day("2024-05-01")));
    }

    #[test]
    fn test_state_json_without_date() {
        let parsed: StreakState =
            serde_json::from_str(r#"{"current_run":0,"longest_run":2}"#).unwrap();
        assert_eq!(parsed.last_event_date, None);
        assert_eq!(parsed.longest_run, 2);
    }
}
