use crate::app::{date_or_today, App};
use moodwell_store::JournalEntry;

pub fn run(user: &str, text: &str, date: Option<&str>) -> anyhow::Result<()> {
    let mut app = App::load(user)?;
    let content = text.trim();
    anyhow::ensure!(!content.is_empty(), "journal entry must not be empty");

    let entry = JournalEntry {
        date: date_or_today(date)?,
        content: content.to_string(),
    };
    app.save_journal(&entry)?;
    println!("Journal entry saved for {}.", entry.date);
    Ok(())
}
