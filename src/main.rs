use std::process::ExitCode;

use starnav::cli;
use starnav::io::Terminal;

fn main() -> ExitCode {
    env_logger::init();
    let args = cli::args::parse();

    match cli::run(&args, &mut Terminal) {
        Ok(true) => ExitCode::SUCCESS,
        // planning worked, there is just no way through
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
