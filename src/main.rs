//! Tic-Tac-Toe Rewind - terminal entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_rewind::cli::Cli;
use tictactoe_rewind::tui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    tui::run(&cli)
}
