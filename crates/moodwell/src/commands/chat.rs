use crate::app::App;
use moodwell_core::{ChatSession, ConversationContext};
use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::time::Duration;

pub const EMERGENCY_CONTACTS: &str = "\
If you are in immediate danger, call your local emergency number now.
  US: 988 Suicide & Crisis Lifeline (call or text 988)
  UK & ROI: Samaritans 116 123
  Elsewhere: https://findahelpline.com";

pub fn run(user: &str) -> anyhow::Result<()> {
    let app = App::load(user)?;
    let context = app.conversation_context()?;
    let chain = app.responder_chain();

    let alert = Rc::new(Cell::new(false));
    let flag = Rc::clone(&alert);
    let mut session = ChatSession::open(chain, context, move || flag.set(true));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let turns = chat_loop(
        &mut session,
        &alert,
        stdin.lock(),
        stdout.lock(),
        app.config.typing_delay(),
    )?;
    tracing::debug!(turns, "chat ended");
    Ok(())
}

/// Reply to a single message with no pending question
pub fn run_once(user: &str, text: &str) -> anyhow::Result<()> {
    let app = App::load(user)?;
    let mut chain = app.responder_chain();
    let context = ConversationContext::starting_now();

    let response = chain.respond(text, &context);
    println!("{}", response.reply);
    if response.emergency {
        println!("{}", EMERGENCY_CONTACTS);
    }
    Ok(())
}

/// Read lines until EOF or `quit`; returns the number of exchanged turns
pub fn chat_loop<R: BufRead, W: Write>(
    session: &mut ChatSession,
    alert: &Cell<bool>,
    mut input: R,
    mut output: W,
    typing_delay: Duration,
) -> anyhow::Result<usize> {
    writeln!(output, "{}", session.greeting())?;
    let mut turns = 0;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            break;
        }

        let response = session.send(text);
        if !typing_delay.is_zero() {
            std::thread::sleep(typing_delay);
        }
        writeln!(output, "{}", response.reply)?;
        if alert.replace(false) {
            writeln!(output, "{}", EMERGENCY_CONTACTS)?;
        }
        turns += 1;
    }

    writeln!(output)?;
    output.flush()?;
    Ok(turns)
}
