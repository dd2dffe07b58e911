use crate::app::App;
use moodwell_tracker::{average_period_length, predict_with};

pub fn run(user: &str) -> anyhow::Result<()> {
    let app = App::load(user)?;
    let today = chrono::Local::now().date_naive();
    println!("{}", build(&app, today)?);
    Ok(())
}

pub fn build(app: &App, today: chrono::NaiveDate) -> anyhow::Result<serde_json::Value> {
    let streak = app.streak()?;
    let latest = app.latest_checkin()?;
    let cycles = app.cycles()?;

    let mut output = serde_json::json!({
        "user": app.user_id,
        "streak": super::streak::render(&streak, today),
        "latest_mood": latest.as_ref().map(|c| c.mood.clone()),
        "latest_check_in": latest.as_ref().map(|c| c.date.to_string()),
        "periods_logged": cycles.len(),
    });

    if let Some(prediction) = predict_with(&cycles, today, app.cycle_policy()) {
        output["next_period"] = serde_json::to_value(prediction)?;
    }
    if let Some(days) = average_period_length(&cycles) {
        output["average_period_length_days"] = serde_json::json!(days);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{checkin, cycle};
    use moodwell_core::Config;
    use moodwell_store::{MemoryStore, MoodCheckIn};
    use moodwell_tracker::parse_date;

    #[test]
    fn test_status_empty() {
        let app = App::with_store(Config::new(), "u1", Box::new(MemoryStore::new()));
        let out = build(&app, parse_date("2024-03-01").unwrap()).unwrap();
        assert_eq!(out["user"], "u1");
        assert_eq!(out["periods_logged"], 0);
        assert!(out["latest_mood"].is_null());
        assert!(out.get("next_period").is_none());
    }

    #[test]
    fn test_status_full() {
        let mut app = App::with_store(Config::new(), "u1", Box::new(MemoryStore::new()));
        for start in ["2024-01-01", "2024-01-29", "2024-02-26"] {
            app.save_cycle(&cycle::build_event(start, None, vec![]).unwrap())
                .unwrap();
        }
        checkin::record(
            &mut app,
            &MoodCheckIn {
                date: parse_date("2024-03-01").unwrap(),
                mood: "hopeful".to_string(),
                note: None,
            },
        )
        .unwrap();

        let out = build(&app, parse_date("2024-03-01").unwrap()).unwrap();
        assert_eq!(out["latest_mood"], "hopeful");
        assert_eq!(out["streak"]["current_run"], 1);
        assert_eq!(out["next_period"]["next_date"], "2024-03-25");
        assert_eq!(out["next_period"]["average_cycle_length_days"], 28);
        assert_eq!(out["next_period"]["days_until_next"], 24);
    }
}
