use clap::Parser;
use scoresheet_core::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(about = "Scoresheet for a four player card game. Lowest total wins.")]
pub struct StandardArgs {
    #[clap(short, long)]
    pub config: Option<PathBuf>,
    #[clap(short, long, num_args = NUM_PLAYERS)]
    pub players: Option<Vec<String>>,
    #[clap(short, long)]
    pub export_path: Option<String>,
    #[clap(short, long)]
    pub log_level: Option<String>,
    #[clap(short, long)]
    pub import: Option<PathBuf>,
}

/// Config file first, then any flags given on the command line.
pub fn resolve_config(args: &StandardArgs) -> Result<SessionConfig, String> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::from_path(path).map_err(|err| format!("{err}"))?,
        None => SessionConfig::default(),
    };

    if let Some(players) = args.players.clone() {
        config.players = players;
    }
    if let Some(export_path) = args.export_path.clone() {
        config.export_path = export_path;
    }
    if let Some(log_level) = args.log_level.clone() {
        config.log_level = log_level;
    }

    config.validate().map_err(|err| format!("{err}"))?;
    Ok(config)
}
