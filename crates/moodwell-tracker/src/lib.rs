//! Streak continuation and cycle prediction over dated events

mod cycle;
mod dates;
mod error;
mod streak;

pub use cycle::{
    average_period_length, predict_next_cycle, predict_with, sorted_for_display, CycleEvent,
    CyclePolicy, CyclePrediction, DEFAULT_CYCLE_LENGTH_DAYS, MAX_CYCLE_GAP_DAYS,
};
pub use dates::{days_between, parse_date, DATE_FORMAT};
pub use error::TrackerError;
pub use streak::{update_streak, CheckReminderEvent, StreakState};
