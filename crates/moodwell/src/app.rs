//! Shared command state: config, store and per-user record access

use anyhow::Context;
use moodwell_core::{Config, ConversationContext, ResponderChain, RuleEngine};
use moodwell_store::{FileStore, JournalEntry, KeyValueStore, Keyspace, MoodCheckIn, Paths};
use moodwell_tracker::{parse_date, CycleEvent, CyclePolicy, StreakState};
use serde::Deserialize;
use std::path::Path;

const STREAK_ID: &str = "current";

/// Digits in the per-day journal sequence; keeps keys in insertion order
const JOURNAL_SEQ_WIDTH: usize = 6;

pub fn load_config(config_path: &Path) -> Config {
    if !config_path.exists() {
        return Config::new();
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(err) => {
            tracing::warn!(path = %config_path.display(), %err, "ignoring unreadable config");
            return Config::new();
        }
    };

    #[derive(Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        crisis_keywords: Vec<String>,
        #[serde(default)]
        acknowledged_moods: Option<Vec<String>>,
        #[serde(default)]
        typing_delay_ms: Option<u64>,
        #[serde(default)]
        default_cycle_length_days: Option<i64>,
        #[serde(default)]
        max_cycle_gap_days: Option<i64>,
    }

    match serde_json::from_str::<ConfigFile>(&content) {
        Ok(cf) => {
            let mut config = Config::new();
            // Extra crisis terms add to the built-in list, never replace it
            for keyword in cf.crisis_keywords {
                let keyword = keyword.trim().to_lowercase();
                if !keyword.is_empty() && !config.crisis_keywords.contains(&keyword) {
                    config.crisis_keywords.push(keyword);
                }
            }
            if let Some(moods) = cf.acknowledged_moods {
                config.acknowledged_moods = moods;
            }
            if let Some(delay) = cf.typing_delay_ms {
                config.typing_delay_ms = delay;
            }
            if let Some(days) = cf.default_cycle_length_days.filter(|d| *d > 0) {
                config.default_cycle_length_days = days;
            }
            if let Some(days) = cf.max_cycle_gap_days.filter(|d| *d > 0) {
                config.max_cycle_gap_days = days;
            }
            config
        }
        Err(err) => {
            tracing::warn!(path = %config_path.display(), %err, "ignoring malformed config");
            Config::new()
        }
    }
}

/// Parse an optional `YYYY-MM-DD` argument, defaulting to the local date
pub fn date_or_today(arg: Option<&str>) -> anyhow::Result<chrono::NaiveDate> {
    match arg {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub struct App {
    pub config: Config,
    pub user_id: String,
    store: Box<dyn KeyValueStore>,
}

impl App {
    pub fn load(user_id: &str) -> anyhow::Result<Self> {
        let paths = Paths::new()?;
        Self::at(&paths, user_id)
    }

    pub fn at(paths: &Paths, user_id: &str) -> anyhow::Result<Self> {
        let config = load_config(&paths.config_file());
        let store_path = paths.store_file();
        let store = FileStore::open(&store_path)
            .with_context(|| format!("opening store {}", store_path.display()))?;
        Ok(Self::with_store(config, user_id, Box::new(store)))
    }

    pub fn with_store(config: Config, user_id: &str, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            config,
            user_id: user_id.to_string(),
            store,
        }
    }

    fn space(&self, kind: &str) -> Keyspace {
        Keyspace::new(&self.user_id, kind)
    }

    pub fn cycle_policy(&self) -> CyclePolicy {
        CyclePolicy {
            default_length_days: self.config.default_cycle_length_days,
            max_gap_days: self.config.max_cycle_gap_days,
        }
    }

    pub fn streak(&self) -> anyhow::Result<StreakState> {
        let key = self.space("streak").key(STREAK_ID);
        Ok(moodwell_store::load(self.store.as_ref(), &key)?.unwrap_or_default())
    }

    pub fn save_streak(&mut self, state: &StreakState) -> anyhow::Result<()> {
        let key = self.space("streak").key(STREAK_ID);
        moodwell_store::save(self.store.as_mut(), &key, state)?;
        Ok(())
    }

    /// One check-in per day; a second one the same day replaces the first
    pub fn save_checkin(&mut self, checkin: &MoodCheckIn) -> anyhow::Result<()> {
        let key = self.space("checkin").key(&checkin.date.to_string());
        moodwell_store::save(self.store.as_mut(), &key, checkin)?;
        Ok(())
    }

    pub fn checkins(&self) -> anyhow::Result<Vec<MoodCheckIn>> {
        let prefix = self.space("checkin").prefix();
        Ok(moodwell_store::load_all(self.store.as_ref(), &prefix)?)
    }

    pub fn latest_checkin(&self) -> anyhow::Result<Option<MoodCheckIn>> {
        Ok(self.checkins()?.into_iter().max_by_key(|c| c.date))
    }

    pub fn save_journal(&mut self, entry: &JournalEntry) -> anyhow::Result<()> {
        let space = self.space("journal");
        let day_prefix = format!("{}{}", space.prefix(), entry.date);
        let same_day = self.store.get_by_prefix(&day_prefix)?.len();
        let key = space.key(&format!(
            "{}-{:0width$}",
            entry.date,
            same_day,
            width = JOURNAL_SEQ_WIDTH
        ));
        moodwell_store::save(self.store.as_mut(), &key, entry)?;
        Ok(())
    }

    /// Most recent entry; keys sort by date then sequence
    pub fn latest_journal(&self) -> anyhow::Result<Option<JournalEntry>> {
        let prefix = self.space("journal").prefix();
        let entries: Vec<JournalEntry> = moodwell_store::load_all(self.store.as_ref(), &prefix)?;
        Ok(entries.into_iter().last())
    }

    pub fn save_cycle(&mut self, event: &CycleEvent) -> anyhow::Result<()> {
        let key = self.space("cycle").key(&event.id);
        moodwell_store::save(self.store.as_mut(), &key, event)?;
        Ok(())
    }

    pub fn cycles(&self) -> anyhow::Result<Vec<CycleEvent>> {
        let prefix = self.space("cycle").prefix();
        Ok(moodwell_store::load_all(self.store.as_ref(), &prefix)?)
    }

    /// Greeting context from the latest check-in and journal entry
    pub fn conversation_context(&self) -> anyhow::Result<ConversationContext> {
        let mut context = ConversationContext::starting_now();
        let today = chrono::Local::now().date_naive();

        if let Some(checkin) = self.latest_checkin()?.filter(|c| c.date == today) {
            context = context.with_mood(checkin.mood);
        }
        if let Some(entry) = self.latest_journal()?.filter(|e| e.date == today) {
            context = context.with_journal(entry.content);
        }
        Ok(context)
    }

    /// Rule engine, fronted by the remote responder when one is configured
    pub fn responder_chain(&self) -> ResponderChain {
        let chain = ResponderChain::new(RuleEngine::new(self.config.clone()));
        match moodwell_assist::RemoteResponder::from_env() {
            Some(Ok(remote)) => {
                tracing::info!(model = %remote.config().model, "remote responder enabled");
                chain.with_remote(Box::new(remote))
            }
            Some(Err(err)) => {
                tracing::warn!(%err, "remote responder unavailable, using rules only");
                chain
            }
            None => chain,
        }
    }
}
