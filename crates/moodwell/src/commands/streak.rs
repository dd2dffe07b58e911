use crate::app::App;
use moodwell_tracker::StreakState;

pub fn run(user: &str) -> anyhow::Result<()> {
    let app = App::load(user)?;
    let today = chrono::Local::now().date_naive();
    println!("{}", render(&app.streak()?, today));
    Ok(())
}

pub fn render(streak: &StreakState, today: chrono::NaiveDate) -> serde_json::Value {
    serde_json::json!({
        "current_run": streak.run_on(today),
        "longest_run": streak.longest_run,
        "last_check_in": streak.last_event_date.map(|d| d.to_string()),
        "active": streak.is_active_on(today),
    })
}
