//! Password form settings.

use crate::pass::CharClasses;

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub use_upper_case: bool,
    pub use_lower_case: bool,
    pub number_allowed: bool,
    pub characters_allowed: bool,
}

impl Settings {
    /// Set the length, clamped to the slider bounds.
    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    pub fn classes(&self) -> CharClasses {
        CharClasses {
            upper: self.use_upper_case,
            lower: self.use_lower_case,
            digits: self.number_allowed,
            symbols: self.characters_allowed,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 8,
            use_upper_case: true,
            use_lower_case: true,
            number_allowed: false,
            characters_allowed: false,
        }
    }
}
