//! Coarse strength rating.

use std::fmt;

use super::charset::SYMBOLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Map a 0..=5 score to a label.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Strength::Weak,
            3..=4 => Strength::Medium,
            _ => Strength::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count how many of the five heuristics the password satisfies.
pub fn score(password: &str) -> u8 {
    let checks = [
        password.chars().count() > 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SYMBOLS.contains(c)),
    ];
    checks.iter().filter(|&&hit| hit).count() as u8
}

pub fn rate(password: &str) -> Strength {
    Strength::from_score(score(password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_weak() {
        assert_eq!(score(""), 0);
        assert_eq!(rate(""), Strength::Weak);
    }

    #[test]
    fn test_short_lowercase_is_weak() {
        assert_eq!(score("abc"), 1);
        assert_eq!(rate("abc"), Strength::Weak);
    }

    #[test]
    fn test_eight_chars_mixed_is_medium() {
        // Exactly 8 chars does not earn the length point.
        assert_eq!(score("Abc12345"), 3);
        assert_eq!(rate("Abc12345"), Strength::Medium);
    }

    #[test]
    fn test_all_five_is_strong() {
        assert_eq!(score("Abcdefgh12!"), 5);
        assert_eq!(rate("Abcdefgh12!"), Strength::Strong);
    }

    #[test]
    fn test_each_symbol_counts() {
        for sym in SYMBOLS.chars() {
            assert_eq!(score(&sym.to_string()), 1, "symbol {sym:?}");
        }
        // Outside the set: neither a symbol nor a letter/digit point.
        assert_eq!(score(" "), 0);
        assert_eq!(score("\\"), 0);
        assert_eq!(score("'"), 0);
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        assert_eq!(score("ÄÖÜäöü"), 0);
    }

    #[test]
    fn test_score_boundaries() {
        assert_eq!(Strength::from_score(0), Strength::Weak);
        assert_eq!(Strength::from_score(2), Strength::Weak);
        assert_eq!(Strength::from_score(3), Strength::Medium);
        assert_eq!(Strength::from_score(4), Strength::Medium);
        assert_eq!(Strength::from_score(5), Strength::Strong);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        for pass in ["", "abc", "Abc12345", "Abcdefgh12!", "zz~~ZZ99zz"] {
            assert_eq!(rate(pass), rate(pass));
            assert_eq!(score(pass), score(pass));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Strength::Medium.to_string(), "Medium");
    }
}
