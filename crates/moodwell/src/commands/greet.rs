use crate::app::App;
use moodwell_core::RuleEngine;

pub fn run(user: &str) -> anyhow::Result<()> {
    let app = App::load(user)?;
    let context = app.conversation_context()?;
    let mut engine = RuleEngine::new(app.config.clone());
    println!("{}", engine.greet(&context).reply);
    Ok(())
}
