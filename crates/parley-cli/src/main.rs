mod cmd_ask;
mod cmd_insights;
mod cmd_list;
mod cmd_show;
mod cmd_speakers;
mod cmd_transcript;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parley", version, about = "Sales-call transcript viewer and analyzer")]
struct Cli {
    /// Path to the call records JSON file
    #[arg(long, global = true, default_value = "calls.json")]
    file: PathBuf,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List loaded calls
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show call details, participants, and summary
    Show {
        /// Call title or 1-based index
        call: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render a call transcript
    Transcript {
        /// Call title or 1-based index
        call: String,
        /// Render as Markdown instead of plain text
        #[arg(long)]
        markdown: bool,
        /// Only show turns from this speaker (exact match)
        #[arg(long)]
        speaker: Option<String>,
    },
    /// Per-speaker message counts
    Speakers {
        /// Call title or 1-based index
        call: String,
    },
    /// Ask a question about a call
    Ask {
        /// Call title or 1-based index
        call: String,
        /// Question text
        question: String,
    },
    /// Run the standard analysis questions against a call
    Insights {
        /// Call title or 1-based index
        call: String,
    },
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List { json } => cmd_list::execute(&cli.file, json),
        Command::Show { call, json } => cmd_show::execute(&cli.file, &call, json),
        Command::Transcript {
            call,
            markdown,
            speaker,
        } => cmd_transcript::execute(&cli.file, &call, markdown, speaker.as_deref()),
        Command::Speakers { call } => cmd_speakers::execute(&cli.file, &call),
        Command::Ask { call, question } => cmd_ask::execute(&cli.file, &call, &question),
        Command::Insights { call } => cmd_insights::execute(&cli.file, &call),
    }
}
