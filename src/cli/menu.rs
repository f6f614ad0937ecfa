// src/cli/menu.rs
use inquire::{Confirm, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::cli::handlers::{self, GenerationSession};
use crate::clipboard::SystemClipboard;
use crate::core::strength;
use crate::models::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

const GENERATE: &str = "🔐  Generate password";
const COPY: &str = "📋  Copy password";
const TOGGLE: &str = "👁️  Show/hide password";
const SETTINGS: &str = "⚙️  Change settings";
const ANALYZE: &str = "🔍  Analyze a password";
const HISTORY: &str = "🕘  View history";
const EXIT: &str = "🚪  Exit";

fn parse_length(input: &str) -> Option<usize> {
    input
        .trim()
        .parse()
        .ok()
        .filter(|len| (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(len))
}

fn print_current(session: &GenerationSession) {
    if let Some((password, result)) = session.current() {
        println!("\nPassword: {}", session.display_value(password));
        handlers::print_strength(result);
    }
    if let Some(text) = session.notice_text(Instant::now()) {
        println!("\n{}", text);
    }
}

fn change_settings(session: &mut GenerationSession) -> Result<(), Box<dyn Error>> {
    let current_length = session.options.length.to_string();
    let length = Text::new("Password length (8-32):")
        .with_default(&current_length)
        .prompt()?;
    match parse_length(&length) {
        Some(length) => session.options.length = length,
        None => println!(
            "❌ Length must be a number between {} and {}",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        ),
    }

    session.options.include_symbols = Confirm::new("Include symbols?")
        .with_default(session.options.include_symbols)
        .prompt()?;

    session.options.include_numbers = Confirm::new("Include numbers?")
        .with_default(session.options.include_numbers)
        .prompt()?;

    session.options.include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(session.options.include_uppercase)
        .prompt()?;

    let current_custom = session.options.custom_set.clone().unwrap_or_default();
    let custom = Text::new("Custom character set (leave empty to use the options above):")
        .with_default(&current_custom)
        .prompt()?;
    session.options.custom_set = if custom.is_empty() { None } else { Some(custom) };

    log::debug!(
        "Settings changed: length {}, symbols {}, numbers {}, uppercase {}, custom set {}",
        session.options.length,
        session.options.include_symbols,
        session.options.include_numbers,
        session.options.include_uppercase,
        session.options.custom_set.is_some()
    );

    Ok(())
}

pub fn run_cli_menu(mut session: GenerationSession, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 RUST PASSWORD GENERATOR     ║");
    println!("╚══════════════════════════════════════╝");

    // Start with a fresh password like the app always did
    session.generate()?;
    print_current(&session);

    let mut clipboard = SystemClipboard;

    while !should_exit.load(Ordering::SeqCst) {
        let options = vec![GENERATE, COPY, TOGGLE, SETTINGS, ANALYZE, HISTORY, EXIT];

        let choice = match Select::new("What would you like to do?", options).prompt() {
            Ok(choice) => choice,
            Err(inquire::InquireError::OperationCanceled)
            | Err(inquire::InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        };

        match choice {
            GENERATE => {
                if let Err(e) = session.generate() {
                    eprintln!("❌ Failed to generate password: {}", e);
                    continue;
                }
                print_current(&session);
            }
            COPY => {
                if let Some(notice) = session.copy_current(&mut clipboard) {
                    let prefix = if notice.success { "✅" } else { "❌" };
                    println!("{} {}", prefix, notice.message());
                } else {
                    println!("❗ Nothing to copy yet.");
                }
            }
            TOGGLE => {
                session.show_password = !session.show_password;
                print_current(&session);
            }
            SETTINGS => {
                change_settings(&mut session)?;
            }
            ANALYZE => {
                let input = Text::new("Password to analyze:").prompt()?;
                let result = strength::evaluate(&input);
                handlers::print_strength(&result);
            }
            HISTORY => {
                handlers::print_history(&session);
            }
            _ => break,
        }
    }

    log::info!("Interactive session finished");
    println!("\n👋 Goodbye!");
    Ok(())
}
