use crate::commands::*;
use crate::session::*;
use colored::Colorize;
use scoresheet_core::interface_utils::format_view;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Reads commands line by line until `quit` or end of input. A line that is
/// not UTF-8 is reported and skipped; any other read or write failure ends
/// the loop with that error.
pub fn run_command_loop<R: BufRead, W: Write, E: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = match lines.next() {
            None => break,
            Some(Ok(line)) => line,
            Some(Err(read_err)) if read_err.kind() == io::ErrorKind::InvalidData => {
                warn!(%read_err, "skipped unreadable input line");
                writeln!(err, "{}", format!("Skipped unreadable input: {read_err}").red())?;
                continue;
            }
            Some(Err(read_err)) => return Err(read_err),
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line).and_then(|command| session.apply(command)) {
            Ok(CommandOutcome::View(view)) => writeln!(out, "{}", format_view(&view))?,
            Ok(CommandOutcome::Message(message)) => writeln!(out, "{message}")?,
            Ok(CommandOutcome::Quit) => break,
            Err(message) => writeln!(err, "{}", message.red())?,
        }
    }
    Ok(())
}
