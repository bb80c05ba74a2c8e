use cli::*;
use colored::Colorize;
use scoresheet_core::interface_utils::format_view;
use std::io;
use std::process::ExitCode;

pub fn start_cli_session(mut session: Session) -> io::Result<()> {
    println!("Card Game Scoresheet (4 players). Lowest total wins.");
    println!("{}", help_text());
    println!("{}", format_view(&session.ledger.view()));

    let stdin = io::stdin();
    run_command_loop(
        &mut session,
        stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    )
}

fn main() -> ExitCode {
    let session = match get_session() {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{}", err.red());
            return ExitCode::FAILURE;
        }
    };

    match start_cli_session(session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("Session ended: {err}").red());
            ExitCode::FAILURE
        }
    }
}
