pub mod args;
pub mod commands;
pub mod logging;
pub mod paths;
pub mod repl;
pub mod session;

pub use args::*;
pub use commands::*;
pub use paths::*;
pub use repl::*;
pub use session::*;

use clap::Parser;

pub fn get_session_from_args(args: &StandardArgs) -> Result<Session, String> {
    let config = resolve_config(args)?;
    logging::init(&config.log_level)?;

    let mut session = Session::from_config(&config)?;
    if let Some(path) = &args.import {
        let imported = session.import_file(path)?;
        println!("Imported {imported} rounds from {}", path.display());
    }
    Ok(session)
}

pub fn get_session() -> Result<Session, String> {
    let args = StandardArgs::parse();
    get_session_from_args(&args)
}
