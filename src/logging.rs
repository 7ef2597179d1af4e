//! Logger setup.
//!
//! `RUST_LOG` sets the filter (default `warn`). When `PASSFORM_LOG_FILE` is
//! set, records go to that file instead of stderr so the form stays intact.

use std::fs::OpenOptions;

pub const LOG_FILE_ENV: &str = "PASSFORM_LOG_FILE";

pub fn init() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.format_timestamp_secs().format_module_path(true);

    if let Ok(path) = std::env::var(LOG_FILE_ENV) {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Cannot open log file {}: {}", path, e),
        }
    }

    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}
