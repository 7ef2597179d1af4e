//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::{CliFlags, ParseError, prompts, quiet};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::form::Form;
use crate::settings::Settings;
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;
        let settings = settings_from_flags(&flags);
        Ok(Self { settings, flags })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.warn_on_clamp();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passform {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    fn warn_on_clamp(&self) {
        if let Some(len) = self.flags.length
            && len != self.settings.length
        {
            prompts::warn(&format!(
                "Length {} out of range, using {}",
                len, self.settings.length
            ));
        }
    }

    fn count(&self) -> usize {
        self.flags.number.unwrap_or(1)
    }

    /// Generate passwords and send them to the clipboard or stdout.
    pub fn generate_output(&mut self) {
        let count = self.count();
        log::info!(
            "cli: {} password(s), length {}",
            count,
            self.settings.length
        );

        if self.flags.clipboard {
            match SystemClipboard::new() {
                Ok(mut clipboard) => {
                    self.copy_batch(&mut clipboard, count);
                    return;
                }
                Err(e) => {
                    log::debug!("{e}");
                    prompts::warn("Clipboard unavailable, printing to terminal instead");
                }
            }
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = write_passwords(&mut out, self.settings, count, self.flags.strength) {
            log::debug!("stdout write failed: {e}");
        }
    }

    fn copy_batch<C: Clipboard>(&self, clipboard: &mut C, count: usize) {
        // The clipboard gets only the passwords; labels still go to stdout.
        let mut joined = String::new();
        let mut labels = String::new();
        let mut form = Form::new(self.settings);
        for n in 0..count {
            if n > 0 {
                form.regenerate();
                joined.push('\n');
            }
            joined.push_str(form.password());
            if self.flags.strength {
                labels.push_str(&prompts::strength_label(form.strength()));
                labels.push('\n');
            }
        }

        match clipboard.set_text(&joined) {
            Ok(()) => prompts::clipboard_copied(count),
            Err(e) => log::debug!("copy ignored: {e}"),
        }
        joined.zeroize();
        print!("{labels}");
    }
}

/// Build settings from defaults and flags. Length is clamped like the slider.
pub fn settings_from_flags(flags: &CliFlags) -> Settings {
    let mut settings = Settings::default();

    if flags.all {
        settings.use_upper_case = true;
        settings.use_lower_case = true;
        settings.number_allowed = true;
        settings.characters_allowed = true;
    }
    if flags.no_upper {
        settings.use_upper_case = false;
    }
    if flags.no_lower {
        settings.use_lower_case = false;
    }
    if flags.digits {
        settings.number_allowed = true;
    }
    if flags.symbols {
        settings.characters_allowed = true;
    }
    if let Some(len) = flags.length {
        settings.set_length(len);
    }

    settings
}

/// Write `count` passwords, one per line, optionally followed by a tab and
/// the strength label.
pub fn write_passwords<W: Write>(
    out: &mut W,
    settings: Settings,
    count: usize,
    with_strength: bool,
) -> io::Result<()> {
    let mut form = Form::new(settings);
    for n in 0..count {
        if n > 0 {
            form.regenerate();
        }
        if with_strength {
            writeln!(
                out,
                "{}\t{}",
                form.password(),
                prompts::strength_label(form.strength())
            )?;
        } else {
            writeln!(out, "{}", form.password())?;
        }
    }
    out.flush()
}
