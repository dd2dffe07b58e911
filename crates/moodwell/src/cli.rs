use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "moodwell")]
#[command(version)]
#[command(about = "Mood check-ins, streaks, cycle predictions and a supportive chat companion")]
pub struct Cli {
    /// User whose records are read and written
    #[arg(long, global = true, env = "MOODWELL_USER", default_value = "local")]
    pub user: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the greeting for right now
    Greet,

    /// Chat interactively (type `quit` to leave)
    Chat,

    /// Get a single reply
    Say {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Record today's mood and extend the streak
    Checkin {
        /// How you feel (e.g. calm, sad, anxious)
        mood: String,

        /// Day of the check-in (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Optional note
        #[arg(long)]
        note: Option<String>,
    },

    /// Write a journal entry
    Journal {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Day of the entry (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the check-in streak
    Streak,

    /// Period tracking
    Cycle {
        #[command(subcommand)]
        action: CycleAction,
    },

    /// Summary of streak, latest mood and next cycle
    Status,

    /// Print version information
    Version,
}

#[derive(Subcommand)]
pub enum CycleAction {
    /// Log a period
    Log {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// Symptom, repeatable
        #[arg(long = "symptom")]
        symptoms: Vec<String>,
    },
    /// List logged periods, newest first
    List,
    /// Predict the next period
    Predict {
        /// Reference day (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<String>,
    },
}
