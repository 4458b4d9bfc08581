use std::process::ExitCode;

use celldevs_cli::{init_tracing, parse_args, run, usage, Command};

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("warning: {e}");
    }

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", usage());
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run(config)) => config,
        Err(e) => {
            eprintln!("ERROR: {e}");
            eprintln!("{}", usage());
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(report) => {
            println!("{}", report.elapsed.as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
