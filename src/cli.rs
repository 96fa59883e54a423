//! Command-line interface for the tic-tac-toe TUI.

use clap::{Parser, ValueEnum};
use tictactoe::Mode;

/// Tic-Tac-Toe - terminal game with an optional computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode to start in (skips the mode selection screen)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,
}

/// Game mode as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two humans sharing the keyboard
    Pvp,
    /// Play against the computer
    Pvc,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::PlayerVsPlayer,
            ModeArg::Pvc => Mode::PlayerVsComputer,
        }
    }
}
