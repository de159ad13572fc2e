use clap::Parser;
use std::process::ExitCode;

use vile::runner::{self, cli::Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match runner::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
