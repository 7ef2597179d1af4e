//! Form state: settings plus the password/strength pair derived from them.
//!
//! Every mutation goes through [`Form::regenerate`], so the password and its
//! label are always replaced together.

use zeroize::Zeroize;

use crate::clipboard::Clipboard;
use crate::pass::{self, Strength, charset};
use crate::settings::Settings;

/// The most recently generated password and its rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub password: String,
    pub strength: Strength,
}

impl Generated {
    fn from_settings(settings: &Settings) -> Self {
        let alphabet = charset::build(settings.classes());
        Self::from_alphabet(settings.length, &alphabet)
    }

    /// Generate and rate. A generation error leaves an empty, Weak password.
    fn from_alphabet(length: usize, alphabet: &[char]) -> Self {
        let password = match pass::generate(length, alphabet) {
            Ok(password) => password,
            Err(e) => {
                log::warn!("password generation failed: {e}");
                String::new()
            }
        };
        let strength = pass::strength::rate(&password);
        log::debug!(
            "regenerated: length={} alphabet={} strength={}",
            length,
            alphabet.len(),
            strength
        );
        Self { password, strength }
    }
}

impl Drop for Generated {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

pub struct Form {
    settings: Settings,
    current: Generated,
}

impl Form {
    /// Build the form and generate the initial password.
    pub fn new(settings: Settings) -> Self {
        let current = Generated::from_settings(&settings);
        Self { settings, current }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn current(&self) -> &Generated {
        &self.current
    }

    pub fn password(&self) -> &str {
        &self.current.password
    }

    pub fn strength(&self) -> Strength {
        self.current.strength
    }

    /// Entropy estimate for the current settings, in bits.
    pub fn entropy_bits(&self) -> f64 {
        pass::entropy_bits(self.settings.length, charset::size(self.settings.classes()))
    }

    /// Re-run the pipeline. The old pair is dropped (and wiped) in one step.
    pub fn regenerate(&mut self) {
        self.current = Generated::from_settings(&self.settings);
    }

    pub fn set_length(&mut self, length: usize) {
        let before = self.settings.length;
        self.settings.set_length(length);
        if self.settings.length != before {
            self.regenerate();
        }
    }

    pub fn increase_length(&mut self) {
        self.set_length(self.settings.length.saturating_add(1));
    }

    pub fn decrease_length(&mut self) {
        self.set_length(self.settings.length.saturating_sub(1));
    }

    pub fn toggle_upper(&mut self) {
        self.settings.use_upper_case = !self.settings.use_upper_case;
        self.regenerate();
    }

    pub fn toggle_lower(&mut self) {
        self.settings.use_lower_case = !self.settings.use_lower_case;
        self.regenerate();
    }

    pub fn toggle_digits(&mut self) {
        self.settings.number_allowed = !self.settings.number_allowed;
        self.regenerate();
    }

    pub fn toggle_symbols(&mut self) {
        self.settings.characters_allowed = !self.settings.characters_allowed;
        self.regenerate();
    }

    /// Copy the current password. Failures are logged and otherwise ignored;
    /// the return value only tells the UI whether to show a confirmation.
    pub fn copy_to<C: Clipboard + ?Sized>(&self, clipboard: &mut C) -> bool {
        match clipboard.set_text(&self.current.password) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("copy ignored: {e}");
                false
            }
        }
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::pass::charset::SYMBOLS;

    #[test]
    fn test_initial_generation() {
        let form = Form::default();
        assert_eq!(form.password().chars().count(), 8);
        assert!(form.password().chars().all(|c| c.is_ascii_alphabetic()));
        assert_eq!(form.strength(), pass::strength::rate(form.password()));
    }

    #[test]
    fn test_length_change_regenerates() {
        let mut form = Form::default();
        form.set_length(20);
        assert_eq!(form.settings().length, 20);
        assert_eq!(form.password().chars().count(), 20);
    }

    #[test]
    fn test_length_is_clamped() {
        let mut form = Form::default();
        form.set_length(2);
        assert_eq!(form.password().chars().count(), 6);
        form.set_length(99);
        assert_eq!(form.password().chars().count(), 30);
        form.increase_length();
        assert_eq!(form.settings().length, 30);
        form.set_length(6);
        form.decrease_length();
        assert_eq!(form.settings().length, 6);
    }

    #[test]
    fn test_toggles_drive_alphabet() {
        let mut form = Form::default();
        form.toggle_upper();
        form.toggle_lower();
        form.toggle_digits();
        form.set_length(30);
        assert!(form.password().chars().all(|c| c.is_ascii_digit()));

        form.toggle_digits();
        form.toggle_symbols();
        assert!(form.password().chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn test_all_off_uses_fallback() {
        let mut form = Form::default();
        form.toggle_upper();
        form.toggle_lower();
        assert!(form.settings().classes().is_empty());
        assert!(form.password().chars().all(|c| "ABCabc123!".contains(c)));
        assert_eq!(form.password().chars().count(), 8);
    }

    #[test]
    fn test_label_matches_password_after_every_change() {
        let mut form = Form::default();
        let steps: [fn(&mut Form); 6] = [
            Form::toggle_digits,
            Form::toggle_symbols,
            Form::increase_length,
            Form::toggle_upper,
            Form::decrease_length,
            Form::regenerate,
        ];
        for step in steps {
            step(&mut form);
            assert_eq!(form.strength(), pass::strength::rate(form.password()));
            assert_eq!(form.password().chars().count(), form.settings().length);
        }
    }

    #[test]
    fn test_copy_writes_current_password() {
        let form = Form::default();
        let mut clip = MemoryClipboard::default();
        assert!(form.copy_to(&mut clip));
        assert_eq!(clip.contents.as_deref(), Some(form.password()));
    }

    #[test]
    fn test_copy_failure_is_swallowed() {
        let form = Form::default();
        let mut clip = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        assert!(!form.copy_to(&mut clip));
        assert_eq!(form.password().chars().count(), 8);
    }

    #[test]
    fn test_empty_alphabet_degrades_to_weak_empty_password() {
        let generated = Generated::from_alphabet(12, &[]);
        assert_eq!(generated.password, "");
        assert_eq!(generated.strength, Strength::Weak);
    }

    #[test]
    fn test_entropy_tracks_settings() {
        let form = Form::default();
        let expected = 8.0 * 52f64.log2();
        assert!((form.entropy_bits() - expected).abs() < 1e-9);
    }
}
