//! # CLI Argument Definitions

use clap::Parser;
use std::path::PathBuf;

/// Mood swing risk check: answer fifteen questions, get a risk estimate.
#[derive(Debug, Parser)]
#[command(name = "moodflag")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Answer the MoodFlag questionnaire and get a mood swing risk estimate")]
pub(crate) struct Args {
    /// Configuration file (defaults to ./moodflag.toml when present)
    #[arg(long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Prediction service address, overrides the configured one
    #[arg(long, value_name = "URL")]
    pub(crate) base_url: Option<String>,

    /// Submit a pre-filled JSON record instead of prompting
    #[arg(long, value_name = "FILE")]
    pub(crate) answers: Option<PathBuf>,

    /// Show the result without the cosmetic wait
    #[arg(long)]
    pub(crate) no_delay: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,
}
