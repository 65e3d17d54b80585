use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use memodrill_core::DATE_FORMAT;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "memodrill", version, about = "SM-2 flashcard drills over a CSV deck")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Review every due item, saving after each grade
    Review(ReviewCmd),
    /// Append a new item to a deck
    Add(AddCmd),
    /// List items with their schedule
    List(ListCmd),
    /// Show counts by learning state
    Stats { file: PathBuf },
    /// Write the deck as JSON
    Export { file: PathBuf, out: PathBuf },
}

#[derive(Debug, Args, Clone)]
pub struct ReviewCmd {
    pub file: PathBuf,
    /// Open each question with an external viewer
    #[arg(long)]
    pub open_questions: bool,
    /// Viewer command, e.g. "xdg-open" (implies --open-questions)
    #[arg(long)]
    pub viewer: Option<String>,
    /// Stop after this many grades
    #[arg(long)]
    pub max: Option<usize>,
}

#[derive(Debug, Args, Clone)]
pub struct AddCmd {
    pub file: PathBuf,
    #[arg(long)]
    pub prompt: String,
    #[arg(long)]
    pub response: String,
}

#[derive(Debug, Args, Clone)]
pub struct ListCmd {
    pub file: PathBuf,
    /// Only items due today
    #[arg(long)]
    pub due: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
