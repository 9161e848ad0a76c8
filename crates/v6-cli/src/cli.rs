use clap::{Parser, Subcommand};
use std::path::PathBuf;
use v6_core::Strategy;

#[derive(Debug, Parser)]
#[command(name = "v6abbrev")]
#[command(about = "Abbreviate IPv6 addresses with rightmost or leftmost zero compression", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// JSON config file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
    /// Print one JSON object per result
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Abbreviate full addresses, e.g. 2001:0db8:0000:0000:0000:0000:0000:0001/64
    #[command(arg_required_else_help = true)]
    Abbreviate {
        #[arg(value_name = "ADDR", required = true)]
        addresses: Vec<String>,
        /// rightmost or leftmost; defaults to the config value
        #[arg(short, long)]
        strategy: Option<Strategy>,
    },
    /// Expand abbreviated addresses to 8 zero-padded groups
    #[command(arg_required_else_help = true)]
    Expand {
        #[arg(value_name = "ADDR", required = true)]
        addresses: Vec<String>,
    },
    /// Abbreviate with both strategies side by side
    #[command(arg_required_else_help = true)]
    Compare {
        #[arg(value_name = "ADDR", required = true)]
        addresses: Vec<String>,
    },
    /// Compare both strategies over built-in sample addresses
    Demo,
}
