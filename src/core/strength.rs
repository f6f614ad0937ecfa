// src/core/strength.rs
use crate::models::{StrengthColor, StrengthResult};

const COMMON_WORDS: [&str; 4] = ["password", "123456", "qwerty", "admin"];
const SEQUENCES: [&str; 3] = ["123", "abc", "xyz"];

pub struct StrengthLevel {
    pub label: &'static str,
    pub color: StrengthColor,
    pub bar_percent: u8,
    pub crack_time: &'static str,
}

/// Indexed by discrete score.
pub static STRENGTH_LEVELS: [StrengthLevel; 6] = [
    StrengthLevel { label: "Very Weak", color: StrengthColor::Red, bar_percent: 20, crack_time: "Instantly" },
    StrengthLevel { label: "Weak", color: StrengthColor::Orange, bar_percent: 40, crack_time: "A few seconds" },
    StrengthLevel { label: "Moderate", color: StrengthColor::Yellow, bar_percent: 60, crack_time: "A few hours" },
    StrengthLevel { label: "Strong", color: StrengthColor::Lime, bar_percent: 80, crack_time: "Several months" },
    StrengthLevel { label: "Very Strong", color: StrengthColor::Green, bar_percent: 90, crack_time: "Several years" },
    StrengthLevel { label: "Excellent", color: StrengthColor::Emerald, bar_percent: 100, crack_time: "Centuries" },
];

pub const TIP_LENGTH: &str = "Increase password length to at least 12 characters";
pub const TIP_COMMON_WORD: &str = "Avoid common words and patterns";
pub const TIP_REPEATING: &str = "Avoid repeating characters";
pub const TIP_SEQUENTIAL: &str = "Avoid sequential patterns";
pub const TIP_UPPERCASE: &str = "Add uppercase letters";
pub const TIP_LOWERCASE: &str = "Add lowercase letters";
pub const TIP_NUMBERS: &str = "Add numbers";
pub const TIP_SYMBOLS: &str = "Add special characters";

// Character classes and weakness patterns found in a password
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordTraits {
    pub length: usize,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_number: bool,
    pub has_symbol: bool,
    pub has_common_word: bool,
    pub has_repeating_chars: bool,
    pub has_sequential: bool,
}

impl PasswordTraits {
    pub fn inspect(password: &str) -> Self {
        let lowered = password.to_lowercase();

        Self {
            length: password.chars().count(),
            has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
            has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
            has_number: password.chars().any(|c| c.is_ascii_digit()),
            has_symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
            has_common_word: COMMON_WORDS.iter().any(|w| lowered.contains(w)),
            has_repeating_chars: has_run_of_three(password),
            has_sequential: SEQUENCES.iter().any(|s| lowered.contains(s)),
        }
    }

    pub fn variety(&self) -> usize {
        [self.has_lower, self.has_upper, self.has_number, self.has_symbol]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

// Same character three or more times in a row; line terminators never count
fn has_run_of_three(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(3)
        .any(|w| !is_line_terminator(w[0]) && w[0] == w[1] && w[1] == w[2])
}

/// Scores a password with two independent heuristics: a 0-100 security
/// score with improvement tips, and a 0-5 discrete score mapped onto
/// [`STRENGTH_LEVELS`]. The two can disagree.
pub fn evaluate(password: &str) -> StrengthResult {
    let traits = PasswordTraits::inspect(password);
    let (security_score, tips) = security_score(&traits);
    let score = discrete_score(&traits);
    let level = &STRENGTH_LEVELS[score as usize];

    StrengthResult {
        score,
        label: level.label.to_string(),
        color: level.color,
        bar_percent: level.bar_percent,
        crack_time: level.crack_time.to_string(),
        security_score,
        tips,
    }
}

fn security_score(traits: &PasswordTraits) -> (u8, Vec<String>) {
    let mut score: i32 = 0;
    let mut tips = Vec::new();

    if traits.length >= 16 {
        score += 40;
    } else if traits.length >= 12 {
        score += 30;
    } else if traits.length >= 8 {
        score += 20;
    } else {
        tips.push(TIP_LENGTH.to_string());
    }

    score += 10 * traits.variety() as i32;

    if traits.has_common_word {
        score -= 20;
        tips.push(TIP_COMMON_WORD.to_string());
    }
    if traits.has_repeating_chars {
        score -= 10;
        tips.push(TIP_REPEATING.to_string());
    }
    if traits.has_sequential {
        score -= 10;
        tips.push(TIP_SEQUENTIAL.to_string());
    }

    let score = score.clamp(0, 100) as u8;

    if score < 100 {
        let missing = [
            (traits.has_upper, TIP_UPPERCASE),
            (traits.has_lower, TIP_LOWERCASE),
            (traits.has_number, TIP_NUMBERS),
            (traits.has_symbol, TIP_SYMBOLS),
        ];
        tips.extend(
            missing
                .iter()
                .filter(|(present, _)| !present)
                .map(|(_, tip)| tip.to_string()),
        );
    }

    (score, tips)
}

fn discrete_score(traits: &PasswordTraits) -> u8 {
    let mut points = 0usize;

    if traits.length >= 12 {
        points += 2;
    } else if traits.length >= 8 {
        points += 1;
    }

    let variety = traits.variety();
    points += variety;
    if variety >= 3 {
        points += 1;
    }
    if variety == 4 {
        points += 1;
    }

    (points / 2).min(5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password() {
        let result = evaluate("");
        assert_eq!(result.score, 0);
        assert_eq!(result.label, "Very Weak");
        assert_eq!(result.security_score, 0);
        assert_eq!(
            result.tips,
            vec![TIP_LENGTH, TIP_UPPERCASE, TIP_LOWERCASE, TIP_NUMBERS, TIP_SYMBOLS]
        );
    }

    #[test]
    fn test_common_word_diverges_from_discrete_score() {
        // 30 length + 40 classes - 20 common word - 10 for "123"
        let result = evaluate("Password123!");
        assert_eq!(result.security_score, 40);
        assert_eq!(result.score, 4);
        assert_eq!(result.label, "Very Strong");
        assert_eq!(result.color, StrengthColor::Green);
        assert_eq!(result.bar_width(), "90%");
        assert_eq!(result.crack_time, "Several years");
        assert_eq!(result.tips, vec![TIP_COMMON_WORD, TIP_SEQUENTIAL]);
    }

    #[test]
    fn test_common_word_without_sequence() {
        // 30 length + 40 classes - 20 common word
        let result = evaluate("Password!9x7");
        assert_eq!(result.security_score, 50);
        assert_eq!(result.score, 4);
        assert_eq!(result.tips, vec![TIP_COMMON_WORD]);
    }

    #[test]
    fn test_repeating_lowercase() {
        let result = evaluate("aaaaaaaaaaaa");
        assert_eq!(result.security_score, 30);
        assert_eq!(result.score, 1);
        assert_eq!(result.label, "Weak");
        assert_eq!(
            result.tips,
            vec![TIP_REPEATING, TIP_UPPERCASE, TIP_NUMBERS, TIP_SYMBOLS]
        );
    }

    #[test]
    fn test_full_variety_has_no_tips() {
        let result = evaluate("Tr0ub4dor&Kq9!zWm");
        assert_eq!(result.security_score, 80);
        assert_eq!(result.score, 4);
        assert!(result.tips.is_empty());
    }

    #[test]
    fn test_discrete_score_caps_below_excellent() {
        // At most 2 (length) + 4 (classes) + 2 (variety) = 8 points
        let traits = PasswordTraits {
            length: 64,
            has_lower: true,
            has_upper: true,
            has_number: true,
            has_symbol: true,
            ..Default::default()
        };
        assert_eq!(discrete_score(&traits), 4);
        assert_eq!(STRENGTH_LEVELS[5].label, "Excellent");
        assert_eq!(STRENGTH_LEVELS[5].color, StrengthColor::Emerald);
        assert_eq!(STRENGTH_LEVELS[5].crack_time, "Centuries");
        assert_eq!(STRENGTH_LEVELS[5].bar_percent, 100);
    }

    #[test]
    fn test_length_tiers() {
        assert_eq!(evaluate("kqzvmw").security_score, 10);
        assert_eq!(evaluate("kqzvmwtp").security_score, 30);
        assert_eq!(evaluate("kqzvmwtpkqzv").security_score, 40);
        assert_eq!(evaluate("kqzvmwtpkqzvmwtp").security_score, 50);
        assert_eq!(evaluate("kqzvmwtp").score, 1);
        assert_eq!(evaluate("kqzvmwt").score, 0);
    }

    #[test]
    fn test_predicates_are_case_insensitive_where_expected() {
        let traits = PasswordTraits::inspect("xxQWERTYxx");
        assert!(traits.has_common_word);
        assert!(PasswordTraits::inspect("ABC").has_sequential);
        assert!(PasswordTraits::inspect("aDmIn").has_common_word);
        assert!(!PasswordTraits::inspect("a-b-c").has_sequential);
    }

    #[test]
    fn test_repeating_needs_three_in_a_row() {
        assert!(!PasswordTraits::inspect("aabbaa").has_repeating_chars);
        assert!(PasswordTraits::inspect("ab###cd").has_repeating_chars);
    }

    #[test]
    fn test_line_terminators_are_not_repeats() {
        assert!(!PasswordTraits::inspect("\n\n\n").has_repeating_chars);
        assert!(!PasswordTraits::inspect("x\r\r\r\u{2028}\u{2028}\u{2028}").has_repeating_chars);
        assert!(PasswordTraits::inspect("\t\t\t").has_repeating_chars);
        assert!(PasswordTraits::inspect("😀😀😀").has_repeating_chars);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        let traits = PasswordTraits::inspect("äöü");
        assert!(traits.has_symbol);
        assert!(!traits.has_lower);
        assert_eq!(traits.length, 3);
    }

    #[test]
    fn test_clamped_to_zero() {
        // 10 (lower) - 10 (repeating) - 10 (sequential)
        let result = evaluate("aaaabc");
        assert_eq!(result.security_score, 0);
        assert_eq!(
            result.tips,
            vec![TIP_LENGTH, TIP_REPEATING, TIP_SEQUENTIAL, TIP_UPPERCASE, TIP_NUMBERS, TIP_SYMBOLS]
        );
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        for pwd in ["", "abc", "Password123!", "Tr0ub4dor&Kq9!zWm", "€€€€"] {
            let a = evaluate(pwd);
            let b = evaluate(pwd);
            assert_eq!(a, b);
            assert!(a.security_score <= 100);
            assert!(a.score <= 5);
        }
    }
}
