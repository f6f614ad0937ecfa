use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod cli;
mod core;
mod utils;
mod models;
mod generators;
mod clipboard;
mod logging;

use crate::cli::{Args, CliCommand};
use crate::cli::handlers::{self, GenerationSession};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;

fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    if let Err(e) = logging::init(&config) {
        eprintln!("❌ Failed to initialise logging: {}", e);
    }
    log::debug!("Loaded config: {:?}", config);

    let generator = PasswordGenerator::with_secure_rng(config.secure_rng || args.secure_rng);
    let mut session = GenerationSession::new(config.generation_options(), generator);

    match args.command {
        Some(CliCommand::Generate {
            length,
            symbols,
            no_symbols,
            numbers,
            no_numbers,
            uppercase,
            no_uppercase,
            custom,
            count,
            copy,
            json,
        }) => {
            if let Some(length) = length {
                session.options.length = length as usize;
            }
            let opts = &mut session.options;
            opts.include_symbols = cli::resolve_flag(symbols, no_symbols, opts.include_symbols);
            opts.include_numbers = cli::resolve_flag(numbers, no_numbers, opts.include_numbers);
            opts.include_uppercase = cli::resolve_flag(uppercase, no_uppercase, opts.include_uppercase);
            if custom.is_some() {
                session.options.custom_set = custom;
            }

            // One-shot output is printed in clear
            session.show_password = true;

            let mut system_clipboard = SystemClipboard;
            let clipboard: Option<&mut dyn Clipboard> = if copy {
                Some(&mut system_clipboard)
            } else {
                None
            };

            handlers::handle_generate(&mut session, count as usize, json, clipboard).map_err(|e| {
                log::error!("Generation failed: {}", e);
                e
            })
        }
        Some(CliCommand::Analyze { password, json }) => handlers::handle_analyze(&password, json),
        Some(CliCommand::Interactive) | None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received. Exiting...");
                    should_exit.store(true, Ordering::SeqCst);
                    println!("\n👋 Goodbye!");
                    std::process::exit(0);
                })?;
            }

            cli::menu::run_cli_menu(session, should_exit).map_err(|e| {
                log::error!("CLI menu error: {}", e);
                e
            })
        }
    }
}
