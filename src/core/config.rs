// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::{PasswordGenerationOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_symbols: bool,
    pub default_include_numbers: bool,
    pub default_include_uppercase: bool,
    pub default_custom_set: Option<String>,
    pub secure_rng: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 12,
            default_include_symbols: true,
            default_include_numbers: true,
            default_include_uppercase: true,
            default_custom_set: None,
            secure_rng: false,

            // Logging
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("./passgen.log"),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(dir) = crate::utils::get_app_config_dir() {
            config.log_file = dir.join("passgen.log");
        }

        config.apply_env(|key| env::var(key).ok());
        config
    }

    fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Password Generation
        // Out-of-range lengths are treated like unparseable ones
        if let Some(length) = var("DEFAULT_PASSWORD_LENGTH")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|len| (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(len))
        {
            self.default_password_length = length;
        }

        if let Some(symbols) = var("DEFAULT_INCLUDE_SYMBOLS").and_then(|v| v.parse().ok()) {
            self.default_include_symbols = symbols;
        }

        if let Some(numbers) = var("DEFAULT_INCLUDE_NUMBERS").and_then(|v| v.parse().ok()) {
            self.default_include_numbers = numbers;
        }

        if let Some(uppercase) = var("DEFAULT_INCLUDE_UPPERCASE").and_then(|v| v.parse().ok()) {
            self.default_include_uppercase = uppercase;
        }

        if let Some(custom) = var("DEFAULT_CUSTOM_SET") {
            self.default_custom_set = if custom.is_empty() { None } else { Some(custom) };
        }

        if let Some(secure) = var("SECURE_RNG").and_then(|v| v.parse().ok()) {
            self.secure_rng = secure;
        }

        // Logging
        if let Some(level) = var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => self.log_level = LevelFilter::Error,
                "warn" => self.log_level = LevelFilter::Warn,
                "info" => self.log_level = LevelFilter::Info,
                "debug" => self.log_level = LevelFilter::Debug,
                "trace" => self.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = var("LOG_FILE") {
            self.log_file = PathBuf::from(file);
        }
    }

    pub fn generation_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.default_password_length,
            include_symbols: self.default_include_symbols,
            include_numbers: self.default_include_numbers,
            include_uppercase: self.default_include_uppercase,
            custom_set: self.default_custom_set.clone(),
        }
    }
}
