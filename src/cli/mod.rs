// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Password generator with strength scoring", long_about = None)]
pub struct Args {
    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Draw from the operating system RNG
    #[arg(long)]
    pub secure_rng: bool,
}

/// Resolve a `--flag`/`--no-flag` pair against the configured default.
pub fn resolve_flag(enable: bool, disable: bool, default: bool) -> bool {
    if enable {
        true
    } else if disable {
        false
    } else {
        default
    }
}
