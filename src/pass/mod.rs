//! Password generation and strength rating.

pub mod charset;
mod generate;
pub mod strength;

use thiserror::Error;

pub use charset::CharClasses;
pub use generate::{generate, generate_with};
pub use strength::Strength;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PassError {
    #[error("cannot generate a password from an empty alphabet")]
    EmptyAlphabet,
}

/// Calculate password entropy in bits.
pub fn entropy_bits(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}
