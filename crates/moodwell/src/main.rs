mod app;
mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, CycleAction};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let user = cli.user.as_str();

    match cli.command {
        Commands::Greet => commands::greet::run(user),
        Commands::Chat => commands::chat::run(user),
        Commands::Say { text } => commands::chat::run_once(user, &text.join(" ")),
        Commands::Checkin { mood, date, note } => {
            commands::checkin::run(user, &mood, date.as_deref(), note)
        }
        Commands::Journal { text, date } => {
            commands::journal::run(user, &text.join(" "), date.as_deref())
        }
        Commands::Streak => commands::streak::run(user),
        Commands::Cycle { action } => match action {
            CycleAction::Log {
                start,
                end,
                symptoms,
            } => commands::cycle::run_log(user, &start, end.as_deref(), symptoms),
            CycleAction::List => commands::cycle::run_list(user),
            CycleAction::Predict { today } => commands::cycle::run_predict(user, today.as_deref()),
        },
        Commands::Status => commands::status::run(user),
        Commands::Version => commands::version::run(),
    }
}
