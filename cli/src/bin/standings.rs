use clap::Parser;
use cli::*;
use colored::Colorize;
use scoresheet_core::interface_utils::*;
use scoresheet_core::*;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(about = "Print the leaderboard of an exported scoresheet.")]
pub struct Args {
    pub csv: PathBuf,
    #[clap(short, long, num_args = NUM_PLAYERS)]
    pub players: Option<Vec<String>>,
    #[clap(short, long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

fn standings(args: &Args) -> Result<String, String> {
    logging::init(&args.log_level)?;

    let players = match &args.players {
        Some(names) => Players::try_from_slice(names).map_err(|err| format!("{err}"))?,
        None => {
            let bytes = try_read_csv_file(&args.csv)?;
            csv_io::players_from_header(&bytes).map_err(|err| format!("{err}"))?
        }
    };
    let mut session = Session::new(players, String::new());
    session.import_file(&args.csv)?;
    Ok(format_view(&session.ledger.view()))
}

fn main() -> ExitCode {
    let args = Args::parse();
    match standings(&args) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.red());
            ExitCode::FAILURE
        }
    }
}
