use crate::app::{date_or_today, App};
use moodwell_tracker::{
    average_period_length, parse_date, predict_with, sorted_for_display, CycleEvent,
    CyclePrediction,
};

pub fn run_log(
    user: &str,
    start: &str,
    end: Option<&str>,
    symptoms: Vec<String>,
) -> anyhow::Result<()> {
    let mut app = App::load(user)?;
    let event = build_event(start, end, symptoms)?;
    app.save_cycle(&event)?;
    println!("Logged period starting {}.", event.start_date);
    Ok(())
}

pub fn run_list(user: &str) -> anyhow::Result<()> {
    let app = App::load(user)?;
    let events = sorted_for_display(&app.cycles()?);
    if events.is_empty() {
        println!("No periods logged yet.");
        return Ok(());
    }
    for event in &events {
        println!("{}", describe(event));
    }
    Ok(())
}

pub fn run_predict(user: &str, today: Option<&str>) -> anyhow::Result<()> {
    let app = App::load(user)?;
    let today = date_or_today(today)?;
    let events = app.cycles()?;

    match predict_with(&events, today, app.cycle_policy()) {
        Some(prediction) => println!("{}", summarize(&prediction)),
        None => println!("Log at least one period to get a prediction."),
    }
    if let Some(days) = average_period_length(&events) {
        println!("Average period length: {} day(s).", days);
    }
    Ok(())
}

/// Id is the start date, so re-logging the same start replaces the entry
pub fn build_event(
    start: &str,
    end: Option<&str>,
    symptoms: Vec<String>,
) -> anyhow::Result<CycleEvent> {
    let start_date = parse_date(start)?;
    let end_date = end.map(parse_date).transpose()?;
    if let Some(end_date) = end_date {
        anyhow::ensure!(
            end_date >= start_date,
            "end date {} is before start date {}",
            end_date,
            start_date
        );
    }

    let mut event = CycleEvent::new(start_date.to_string(), start_date);
    event.end_date = end_date;
    event.symptoms = symptoms
        .into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    Ok(event)
}

fn describe(event: &CycleEvent) -> String {
    let mut line = match event.end_date {
        Some(end) => format!("{} to {}", event.start_date, end),
        None => format!("{} (ongoing)", event.start_date),
    };
    if !event.symptoms.is_empty() {
        let symptoms: Vec<&str> = event.symptoms.iter().map(String::as_str).collect();
        line.push_str(&format!(" [{}]", symptoms.join(", ")));
    }
    line
}

pub fn summarize(prediction: &CyclePrediction) -> String {
    let when = match prediction.days_until_next {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        d if d > 0 => format!("in {} days", d),
        -1 => "1 day overdue".to_string(),
        d => format!("{} days overdue", -d),
    };
    format!(
        "Next period expected {} ({}), based on an average cycle of {} days.",
        prediction.next_date, when, prediction.average_cycle_length_days
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_event_normalizes_symptoms() {
        let event = build_event(
            "2024-01-01",
            Some("2024-01-05"),
            vec!["Cramps".into(), " ".into(), "cramps".into(), "Fatigue".into()],
        )
        .unwrap();
        assert_eq!(event.id, "2024-01-01");
        assert_eq!(event.period_length(), Some(5));
        let symptoms: Vec<&str> = event.symptoms.iter().map(String::as_str).collect();
        assert_eq!(symptoms, vec!["cramps", "fatigue"]);
    }

    #[test]
    fn test_build_event_rejects_bad_dates() {
        assert!(build_event("yesterday", None, vec![]).is_err());
        assert!(build_event("2024-01-05", Some("2024-01-01"), vec![]).is_err());
    }

    #[test]
    fn test_describe() {
        let event = build_event("2024-01-01", None, vec!["headache".into()]).unwrap();
        assert_eq!(describe(&event), "2024-01-01 (ongoing) [headache]");
    }

    #[test]
    fn test_summarize_overdue() {
        let prediction = CyclePrediction {
            next_date: parse_date("2024-02-26").unwrap(),
            average_cycle_length_days: 28,
            days_until_next: -4,
        };
        let text = summarize(&prediction);
        assert!(text.contains("4 days overdue"));
        assert!(text.contains("2024-02-26"));
    }

    #[test]
    fn test_summarize_upcoming() {
        let prediction = CyclePrediction {
            next_date: parse_date("2024-03-25").unwrap(),
            average_cycle_length_days: 28,
            days_until_next: 24,
        };
        assert!(summarize(&prediction).contains("in 24 days"));
    }
}
