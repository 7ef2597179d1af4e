//! Character set building for password generation.

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// Symbol class. Also the set the strength scorer looks for, so it must stay
/// byte-for-byte as is (backtick and hyphen included).
pub const SYMBOLS: &str = "!@#$%^&*()_+=-{}[]|:;<>,.?/~`";

/// Alphabet used when every class is switched off.
pub const FALLBACK: &str = "ABCabc123!";

/// Which character classes feed the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharClasses {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharClasses {
    pub const ALL: Self = Self {
        upper: true,
        lower: true,
        digits: true,
        symbols: true,
    };

    pub fn is_empty(&self) -> bool {
        !(self.upper || self.lower || self.digits || self.symbols)
    }
}

/// Build the character pool, in the fixed order upper, lower, digits, symbols.
/// Never returns an empty pool.
pub fn build(classes: CharClasses) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(size(classes));

    if classes.upper {
        chars.extend(UPPERCASE.chars());
    }
    if classes.lower {
        chars.extend(LOWERCASE.chars());
    }
    if classes.digits {
        chars.extend(DIGITS.chars());
    }
    if classes.symbols {
        chars.extend(SYMBOLS.chars());
    }

    if chars.is_empty() {
        chars.extend(FALLBACK.chars());
    }

    chars
}

/// Calculate the charset size (for entropy calculation).
pub fn size(classes: CharClasses) -> usize {
    if classes.is_empty() {
        return FALLBACK.chars().count();
    }
    let mut size = 0;
    if classes.upper {
        size += UPPERCASE.len();
    }
    if classes.lower {
        size += LOWERCASE.len();
    }
    if classes.digits {
        size += DIGITS.len();
    }
    if classes.symbols {
        size += SYMBOLS.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes_from_bits(bits: u8) -> CharClasses {
        CharClasses {
            upper: bits & 0b0001 != 0,
            lower: bits & 0b0010 != 0,
            digits: bits & 0b0100 != 0,
            symbols: bits & 0b1000 != 0,
        }
    }

    #[test]
    fn test_all_off_falls_back() {
        let chars: String = build(CharClasses::default()).into_iter().collect();
        assert_eq!(chars, "ABCabc123!");
    }

    #[test]
    fn test_every_combination_is_ordered_union() {
        for bits in 1u8..16 {
            let classes = classes_from_bits(bits);
            let mut expected = String::new();
            if classes.upper {
                expected.push_str(UPPERCASE);
            }
            if classes.lower {
                expected.push_str(LOWERCASE);
            }
            if classes.digits {
                expected.push_str(DIGITS);
            }
            if classes.symbols {
                expected.push_str(SYMBOLS);
            }

            let got: String = build(classes).into_iter().collect();
            assert_eq!(got, expected, "classes {:?}", classes);
            assert_eq!(size(classes), got.chars().count());
        }
    }

    #[test]
    fn test_symbol_set_is_exact() {
        let classes = CharClasses {
            symbols: true,
            ..Default::default()
        };
        let got: String = build(classes).into_iter().collect();
        assert_eq!(got, "!@#$%^&*()_+=-{}[]|:;<>,.?/~`");
        assert_eq!(got.chars().count(), 29);
        assert!(got.contains('`'));
        assert!(got.contains('-'));
    }

    #[test]
    fn test_full_size() {
        assert_eq!(size(CharClasses::ALL), 26 + 26 + 10 + 29);
        assert_eq!(size(CharClasses::default()), 10);
    }
}
