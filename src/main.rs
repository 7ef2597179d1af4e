use std::env;

use passform::settings::Settings;
use passform::{cli, exits, logging, tui};

fn main() {
    logging::init();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(Settings::default()),
        _ => std::process::exit(cli::run(&args)),
    }
}
