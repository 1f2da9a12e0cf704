mod cli;

use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::parse();
    let color = !cli.no_color()
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stderr().is_terminal();

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if color {
                eprintln!("\x1b[31merror:\x1b[0m {e}");
            } else {
                eprintln!("error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
