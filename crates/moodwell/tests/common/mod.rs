use chrono::NaiveDate;
use moodwell_core::{ChatSession, Config, ConversationContext, CyclingPicker, ResponderChain, RuleEngine};
use moodwell_tracker::CycleEvent;
use std::cell::Cell;
use std::rc::Rc;

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn sample_engine() -> RuleEngine {
    RuleEngine::with_picker(Config::new(), Box::new(CyclingPicker::new()))
}

/// Session whose emergency action counts how often it fired
pub fn sample_session(context: ConversationContext) -> (ChatSession, Rc<Cell<u32>>) {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    let session = ChatSession::open(
        ResponderChain::new(sample_engine()),
        context,
        move || counter.set(counter.get() + 1),
    );
    (session, fired)
}

pub fn sample_cycles(starts: &[&str]) -> Vec<CycleEvent> {
    starts
        .iter()
        .map(|s| CycleEvent::new(s.to_string(), day(s)))
        .collect()
}
