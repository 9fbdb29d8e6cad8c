use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::session::EndPolicy;

/// Dessert Clicker - sell desserts from your terminal
#[derive(Parser, Debug)]
#[command(name = "dessert-clicker")]
#[command(about = "Click desserts, sell desserts, share your revenue")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// What happens after the last dessert (wrap, clamp)
    #[arg(long, global = true)]
    pub end_policy: Option<EndPolicy>,

    /// Append shared summaries to this file
    #[arg(long, global = true)]
    pub share_file: Option<PathBuf>,

    /// Write logs to this file (the TUI owns the terminal, so no logs otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive clicker
    Play,
    /// Sell desserts without the TUI and print the totals
    Sell {
        /// Number of desserts to sell
        #[arg(short = 'n', long, default_value = "1")]
        count: u64,
    },
    /// Print the dessert catalog
    Catalog,
    /// Sell desserts without the TUI, then share the summary
    Share {
        /// Number of desserts to sell before sharing
        #[arg(short = 'n', long, default_value = "0")]
        count: u64,
    },
    /// Inspect configuration files
    Config {
        /// Write the effective configuration to this file
        #[arg(long, conflicts_with = "validate")]
        dump: Option<PathBuf>,
        /// Validate a configuration file
        #[arg(long)]
        validate: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
