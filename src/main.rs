//! liuyao - six-line divination from the command line

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = liuyao::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
