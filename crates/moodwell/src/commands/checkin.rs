use crate::app::{date_or_today, App};
use anyhow::Context;
use moodwell_store::MoodCheckIn;
use moodwell_tracker::{update_streak, StreakState};

pub fn run(user: &str, mood: &str, date: Option<&str>, note: Option<String>) -> anyhow::Result<()> {
    let mut app = App::load(user)?;
    let checkin = MoodCheckIn {
        date: date_or_today(date)?,
        mood: mood.trim().to_string(),
        note,
    };

    let streak = record(&mut app, &checkin)?;
    println!(
        "Checked in feeling {} on {}. Streak: {} day(s), best {}.",
        checkin.mood, checkin.date, streak.current_run, streak.longest_run
    );
    Ok(())
}

/// Store the check-in and advance the streak. Out-of-order dates store nothing.
pub fn record(app: &mut App, checkin: &MoodCheckIn) -> anyhow::Result<StreakState> {
    anyhow::ensure!(!checkin.mood.is_empty(), "mood must not be empty");

    let streak = update_streak(app.streak()?, checkin.date)
        .context("check-ins must be recorded in date order")?;

    app.save_checkin(checkin)?;
    app.save_streak(&streak)?;
    tracing::info!(
        date = %checkin.date,
        current_run = streak.current_run,
        "check-in recorded"
    );
    Ok(streak)
}
