// src/cli/handlers.rs
use std::error::Error;
use std::time::Instant;

use console::{style, StyledObject};
use serde::Serialize;

use crate::clipboard::{copy_to_clipboard, Clipboard, CopyNotice};
use crate::core::history::{self, HistoryLog, MAX_HISTORY};
use crate::core::strength;
use crate::generators::PasswordGenerator;
use crate::models::{GeneratedPassword, PasswordGenerationOptions, StrengthColor, StrengthResult};
use crate::utils::{format_time_ago, mask_password};

const BAR_CELLS: usize = 20;

/// State of one generator run: current options, the latest password and
/// its strength, and the bounded history.
pub struct GenerationSession {
    pub options: PasswordGenerationOptions,
    generator: PasswordGenerator,
    history: HistoryLog,
    current: Option<(String, StrengthResult)>,
    /// Starts hidden; the menu toggles it.
    pub show_password: bool,
    notice: Option<CopyNotice>,
}

impl GenerationSession {
    pub fn new(options: PasswordGenerationOptions, generator: PasswordGenerator) -> Self {
        Self {
            options,
            generator,
            history: HistoryLog::new(),
            current: None,
            show_password: false,
            notice: None,
        }
    }

    // Generate, score, record
    pub fn generate(&mut self) -> Result<&StrengthResult, Box<dyn Error>> {
        let password = self.generator.generate_password(&self.options)?;
        let result = strength::evaluate(&password);
        log::info!(
            "Generated password: length {}, {} ({}/100)",
            self.options.length,
            result.label,
            result.security_score
        );

        let entry = GeneratedPassword::new(password.clone(), &result);
        self.history = history::record(entry, &self.history);
        let (_, result) = self.current.insert((password, result));
        Ok(result)
    }

    pub fn current(&self) -> Option<(&str, &StrengthResult)> {
        self.current.as_ref().map(|(p, r)| (p.as_str(), r))
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn copy_current(&mut self, clipboard: &mut dyn Clipboard) -> Option<&CopyNotice> {
        let (password, _) = self.current.as_ref()?;
        let notice = copy_to_clipboard(clipboard, password);
        Some(self.notice.insert(notice))
    }

    // Visible copy message, if it has not expired yet
    pub fn notice_text(&self, now: Instant) -> Option<&'static str> {
        self.notice
            .as_ref()
            .map(|n| n.text(now))
            .filter(|text| !text.is_empty())
    }

    pub fn display_value(&self, password: &str) -> String {
        if self.show_password {
            password.to_string()
        } else {
            mask_password(password)
        }
    }
}

#[derive(Serialize)]
pub struct GenerateOutput<'a> {
    pub password: &'a str,
    pub strength: &'a StrengthResult,
    pub history: &'a HistoryLog,
}

pub fn colorize<D>(text: D, color: StrengthColor) -> StyledObject<D> {
    match color {
        StrengthColor::Red => style(text).red(),
        StrengthColor::Orange => style(text).color256(208),
        StrengthColor::Yellow => style(text).yellow(),
        StrengthColor::Lime => style(text).green().bright(),
        StrengthColor::Green => style(text).green(),
        StrengthColor::Emerald => style(text).color256(36),
    }
}

pub fn strength_bar(result: &StrengthResult) -> String {
    let filled = (result.bar_percent as usize * BAR_CELLS / 100).min(BAR_CELLS);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

pub fn print_strength(result: &StrengthResult) {
    println!(
        "Strength:       {} {}",
        colorize(strength_bar(result), result.color),
        colorize(&result.label, result.color).bold()
    );
    println!("Security score: {}/100", result.security_score);
    println!("Time to crack:  {}", result.crack_time);

    if !result.tips.is_empty() {
        println!("\n💡 Tips:");
        for tip in &result.tips {
            println!("  • {}", tip);
        }
    }
}

pub fn print_history(session: &GenerationSession) {
    if session.history().is_empty() {
        println!("❗ No passwords generated yet.");
        return;
    }

    println!(
        "\n🕘 Recent passwords ({} of {}):",
        session.history().len(),
        MAX_HISTORY
    );
    for (i, entry) in session.history().entries().iter().enumerate() {
        println!(
            "  {}. {}  {} ({}/100, {})  {}",
            i + 1,
            session.display_value(&entry.value),
            entry.strength,
            entry.security_score,
            entry.crack_time,
            style(format_time_ago(entry.timestamp)).dim()
        );
    }
}

pub fn handle_generate(
    session: &mut GenerationSession,
    count: usize,
    json: bool,
    clipboard: Option<&mut dyn Clipboard>,
) -> Result<(), Box<dyn Error>> {
    for _ in 0..count {
        session.generate()?;
    }

    let notice = match clipboard {
        Some(clipboard) => session.copy_current(clipboard).cloned(),
        None => None,
    };

    let (password, result) = session
        .current()
        .ok_or("No password was generated")?;

    if json {
        let output = GenerateOutput {
            password,
            strength: result,
            history: session.history(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("\n🔐 Generated Password: {}", session.display_value(password));
    print_strength(result);

    if count > 1 {
        print_history(session);
    }

    if let Some(notice) = notice {
        let prefix = if notice.success { "✅" } else { "❌" };
        println!("\n{} {}", prefix, notice.message());
    }

    Ok(())
}

pub fn handle_analyze(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let result = strength::evaluate(password);
    log::info!(
        "Analyzed password: {} ({}/100)",
        result.label,
        result.security_score
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_strength(&result);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;

    struct FailingClipboard;

    impl Clipboard for FailingClipboard {
        fn write_text(&mut self, _text: &str) -> crate::clipboard::Result<()> {
            Err(ClipboardError::Write("denied".to_string()))
        }
    }

    fn session() -> GenerationSession {
        GenerationSession::new(PasswordGenerationOptions::default(), PasswordGenerator::new())
    }

    #[test]
    fn test_generate_updates_current_and_history() {
        let mut session = session();
        let score = session.generate().unwrap().security_score;
        let (password, result) = session.current().unwrap();
        assert_eq!(password.chars().count(), 12);
        assert_eq!(result.security_score, score);
        assert_eq!(session.history().latest().map(|e| e.value.as_str()), Some(password));
    }

    #[test]
    fn test_history_capped_after_six_generations() {
        let mut session = session();
        let mut generated = Vec::new();
        for _ in 0..6 {
            session.generate().unwrap();
            generated.push(session.current().unwrap().0.to_string());
        }
        let kept: Vec<&str> = session.history().entries().iter().map(|e| e.value.as_str()).collect();
        let expected: Vec<&str> = generated.iter().rev().take(5).map(String::as_str).collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn test_copy_failure_sets_notice() {
        let mut session = session();
        assert!(session.copy_current(&mut FailingClipboard).is_none());

        session.generate().unwrap();
        let notice = session.copy_current(&mut FailingClipboard).cloned().unwrap();
        assert!(!notice.success);
        assert_eq!(session.notice_text(Instant::now()), Some("Failed to copy"));
    }

    #[test]
    fn test_new_session_masks_until_toggled() {
        let mut session = session();
        assert!(!session.show_password);
        assert_eq!(session.display_value("abcd"), "••••");
        session.show_password = true;
        assert_eq!(session.display_value("abcd"), "abcd");
    }

    #[test]
    fn test_generate_output_json_shape() {
        let mut session = session();
        session.generate().unwrap();
        session.generate().unwrap();
        let (password, result) = session.current().unwrap();
        let output = GenerateOutput {
            password,
            strength: result,
            history: session.history(),
        };

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["password"], password);
        let color = json["strength"]["color"].as_str().unwrap();
        assert_eq!(color, result.color.as_str());
        assert!(color.chars().all(|c| c.is_ascii_lowercase()));
        let history = json["history"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["value"], password);
    }

    #[test]
    fn test_strength_bar_width() {
        let result = strength::evaluate("Password123!");
        assert_eq!(strength_bar(&result), format!("[{}{}]", "█".repeat(18), "░".repeat(2)));
    }
}
