// src/main.rs

use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::init();

    let matches = sprout::build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("apply", sub_m)) => sprout::apply::run_apply(sub_m),
        Some(("check", sub_m)) => sprout::check::run_check(sub_m),
        _ => {
            let _ = sprout::build_cli().print_help();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
