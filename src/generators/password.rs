use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::Rng;
use thiserror::Error;

use crate::models::PasswordGenerationOptions;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+{}[]:;<>,.?/~";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Ordered characters eligible for sampling. Duplicates are kept, so a
/// character listed twice in a custom set is drawn twice as often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn from_options(options: &PasswordGenerationOptions) -> Self {
        if let Some(custom) = options.custom_set.as_deref().filter(|s| !s.is_empty()) {
            return Self::from_chars(custom);
        }

        let mut chars: Vec<char> = LOWERCASE.chars().collect();
        if options.include_symbols {
            chars.extend(SYMBOLS.chars());
        }
        if options.include_numbers {
            chars.extend(NUMBERS.chars());
        }
        if options.include_uppercase {
            chars.extend(UPPERCASE.chars());
        }

        Self { chars }
    }

    pub fn from_chars(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Draw `length` characters uniformly with replacement.
    pub fn sample<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<String> {
        if self.is_empty() {
            return Err(GeneratorError::InvalidConfiguration(
                "character pool is empty".to_string(),
            ));
        }
        if length == 0 {
            return Err(GeneratorError::InvalidConfiguration(
                "password length must be at least 1".to_string(),
            ));
        }

        let dist = Uniform::from(0..self.chars.len());
        Ok((0..length).map(|_| self.chars[dist.sample(rng)]).collect())
    }
}

pub struct PasswordGenerator {
    secure_rng: bool,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator { secure_rng: false }
    }

    /// Draw from the operating system CSPRNG instead of the thread-local generator.
    pub fn with_secure_rng(secure_rng: bool) -> Self {
        PasswordGenerator { secure_rng }
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        if self.secure_rng {
            generate_with_rng(options, &mut OsRng)
        } else {
            generate_with_rng(options, &mut rand::thread_rng())
        }
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// No per-class minimum: an enabled class may be missing from the output.
pub fn generate_with_rng<R: Rng + ?Sized>(
    options: &PasswordGenerationOptions,
    rng: &mut R,
) -> Result<String> {
    let pool = CharacterPool::from_options(options);
    let password = pool.sample(options.length, rng)?;
    log::debug!(
        "Generated password of length {} from a pool of {} characters",
        options.length,
        pool.len()
    );
    Ok(password)
}
