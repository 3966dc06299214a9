// corretor/src/main.rs
//! corretor entry point.

use clap::Parser;
use std::process::ExitCode;

use corretor::cli::Cli;
use corretor::ui::OutputStyle;
use corretor::{dispatch, logger, settings};

fn main() -> ExitCode {
    // Before parsing, so `.env` can provide CORRETOR_RULES_FILE.
    settings::load_dotenv();
    let cli = Cli::parse();

    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));
    let style = OutputStyle::detect(cli.no_color, cli.quiet);

    match dispatch(cli, &style) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            style.error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
