use std::io;
use std::process::ExitCode;

use rectarea::run;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();

    match run(stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
