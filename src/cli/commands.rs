//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cardbox")]
#[command(about = "Terminal flashcard study application", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Deck file to load before the first prompt
    #[arg(long, value_name = "FILE")]
    pub import_from: Option<PathBuf>,

    /// Deck file to write when the session ends
    #[arg(long, value_name = "FILE")]
    pub export_to: Option<PathBuf>,

    /// Config file location (default: ./cardbox.toml)
    #[arg(long, value_name = "FILE", default_value = "cardbox.toml")]
    pub config: PathBuf,
}
