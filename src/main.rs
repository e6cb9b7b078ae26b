use std::io;
use std::process::ExitCode;

use bikeshare_explorer::config::SessionOptions;
use bikeshare_explorer::prompt::Console;
use bikeshare_explorer::session;

fn main() -> ExitCode {
    env_logger::init();

    let options = SessionOptions::from_env();
    log::debug!("starting with {options:?}");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    match session::run(&mut console, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("session aborted: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
