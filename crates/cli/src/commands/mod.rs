//! CLI Commands

pub mod animals;
pub mod calc;
pub mod roster;

use clap::{Parser, Subcommand};

/// Language drills runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tally the fixed character roster and check the expected counts
    Roster,

    /// Run the receiver-semantics drill
    Animals,

    /// Run the generic accumulator drill
    Calc(calc::CalcArgs),
}
