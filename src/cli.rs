//! Command-line interface for tictactoe_rewind.

use clap::Parser;

/// Tic-Tac-Toe Rewind - terminal tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Terminal tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to write tracing output to (the TUI owns the terminal)
    #[arg(long, default_value = "tictactoe_rewind.log")]
    pub log_file: std::path::PathBuf,

    /// Start with the move list in descending order
    #[arg(long)]
    pub descending: bool,
}
