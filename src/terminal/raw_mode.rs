//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

use super::flush;

/// Guard that keeps raw mode on and the cursor hidden until dropped.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// Enable raw mode and hide the cursor.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        print!("\x1b[?25l");
        flush();
        Ok(Self { active: true })
    }

    /// Restore cooked mode and the cursor (also happens on drop).
    pub fn release(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            print!("\x1b[?25h");
            flush();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
