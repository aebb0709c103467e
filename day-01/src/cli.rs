use std::path::PathBuf;

use clap::Parser;

const DEFAULT_INPUT: &str = "input1.txt";

/// Historian Hysteria: reconcile two lists of location IDs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Puzzle input, one pair of location IDs per line.
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
}
