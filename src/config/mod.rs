pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Parser)]
#[command(name = "pattern-lab")]
#[command(about = "A small gallery of classic design pattern demos")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available demos
    List,

    /// Run one demo by name, or every demo with --all
    Run {
        /// Demo name, e.g. "chain-of-responsibility"
        name: Option<String>,

        /// Run every registered demo
        #[arg(long)]
        all: bool,
    },

    /// Dispense an amount through the denomination chain
    Dispense {
        /// Amount to withdraw; must be a multiple of the smallest denomination
        amount: u32,

        /// Path to a TOML chain configuration file
        #[arg(long)]
        config: Option<String>,

        /// Print the receipt as JSON instead of console lines
        #[arg(long)]
        json: bool,
    },
}
