//! Password generator form.
//!
//! The core is three pure steps: [`pass::charset::build`] turns the enabled
//! character classes into an alphabet, [`pass::generate`] samples a password
//! from it, and [`pass::strength::rate`] labels the result. [`form::Form`]
//! holds the [`settings::Settings`] and reruns the pipeline on every change.
//!
//! ```
//! use passform::form::Form;
//! use passform::settings::Settings;
//!
//! let mut form = Form::new(Settings::default());
//! form.toggle_digits();
//! form.set_length(12);
//! assert_eq!(form.password().chars().count(), 12);
//! ```

pub mod cli;
pub mod clipboard;
pub mod exits;
pub mod form;
pub mod logging;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;
