use lpm_router::cli::parse_args;
use std::process::ExitCode;

fn main() -> ExitCode {
    match parse_args() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
