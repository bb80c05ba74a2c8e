use crate::commands::*;
use crate::paths::*;
use scoresheet_core::*;
use std::path::Path;
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    View(ScoreView),
    Message(String),
    Quit,
}

/// One game at the table: the ledger plus where exports go by default.
#[derive(Clone, Debug)]
pub struct Session {
    pub ledger: ScoreLedger,
    pub export_path: String,
}

impl Session {
    pub fn new(players: Players, export_path: String) -> Self {
        Self {
            ledger: ScoreLedger::new(players),
            export_path,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self, String> {
        let players = config.players().map_err(|err| format!("{err}"))?;
        Ok(Self::new(players, config.export_path.clone()))
    }

    pub fn import_file(&mut self, path: &Path) -> Result<usize, String> {
        let bytes = try_read_csv_file(path)?;
        let imported = self
            .ledger
            .import_csv_bytes(&bytes)
            .map_err(|err| format!("Could not import. Error: {err}"))?;
        info!(path = %path.display(), imported, "imported scoresheet");
        Ok(imported)
    }

    pub fn export_file(&self, path: &Path) -> Result<(), String> {
        if self.ledger.is_empty() {
            return Err("Export becomes available after you add at least 1 round.".to_owned());
        }
        try_write_csv_file(path, &self.ledger.export_csv())?;
        info!(path = %path.display(), rounds = self.ledger.len(), "exported scoresheet");
        Ok(())
    }

    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, String> {
        let outcome = match command {
            Command::Add(inputs) => {
                self.ledger
                    .add_round_from_text(inputs.each_ref().map(String::as_str));
                CommandOutcome::View(self.ledger.view())
            }
            Command::Delete => {
                if self.ledger.delete_last_round().is_none() {
                    return Ok(CommandOutcome::Message("Nothing to delete".to_owned()));
                }
                CommandOutcome::View(self.ledger.view())
            }
            Command::Reset => {
                self.ledger.reset();
                CommandOutcome::View(self.ledger.view())
            }
            Command::Show => CommandOutcome::View(self.ledger.view()),
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.ledger.view())
                    .map_err(|err| format!("{err}"))?;
                CommandOutcome::Message(json)
            }
            Command::Export(path) => {
                let path = path.unwrap_or_else(|| self.export_path.clone());
                self.export_file(Path::new(&path))?;
                CommandOutcome::Message(format!("Exported {} rounds to {path}", self.ledger.len()))
            }
            Command::Import(path) => {
                self.import_file(Path::new(&path))?;
                CommandOutcome::View(self.ledger.view())
            }
            Command::Rename(seat, name) => {
                if !self.ledger.rename_player(seat, &name) {
                    return Err(format!("No player in seat {}", seat + 1));
                }
                CommandOutcome::View(self.ledger.view())
            }
            Command::Help => CommandOutcome::Message(help_text()),
            Command::Quit => CommandOutcome::Quit,
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;

    fn abcd_session() -> Session {
        Session::new(Players::new(["A", "B", "C", "D"]), "unused.csv".to_owned())
    }

    fn run(session: &mut Session, line: &str) -> Result<CommandOutcome, String> {
        session.apply(parse_command(line)?)
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("scoresheet-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_add_returns_view() {
        let mut session = abcd_session();
        run(&mut session, "add 5 3 5 1").unwrap();
        let Ok(CommandOutcome::View(view)) = run(&mut session, "add 2 2 2 2") else {
            panic!("expected a view");
        };
        assert_eq!(view.rounds_played, 2);
        assert_eq!(view.leader, Some("D".to_owned()));
    }

    #[test]
    fn test_delete_on_empty() {
        let mut session = abcd_session();
        assert_eq!(
            run(&mut session, "delete").unwrap(),
            CommandOutcome::Message("Nothing to delete".to_owned())
        );
        assert!(session.ledger.is_empty());
    }

    #[test]
    fn test_export_refused_when_empty() {
        let mut session = abcd_session();
        let result = run(&mut session, "export");
        assert_eq!(
            result,
            Err("Export becomes available after you add at least 1 round.".to_owned())
        );
    }

    #[test]
    fn test_export_then_import_file() {
        let path = temp_path("round-trip.csv");
        let mut session = abcd_session();
        run(&mut session, "add 5 3 5 1").unwrap();
        run(&mut session, "add 0 4 1 9").unwrap();
        run(&mut session, &format!("export {}", path.display())).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Round,A,B,C,D\n1,5,3,5,1\n2,0,4,1,9\n"
        );

        let mut restored = abcd_session();
        restored.import_file(&path).unwrap();
        assert_eq!(restored.ledger.compute_table(), session.ledger.compute_table());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_failed_import_keeps_rounds() {
        let path = temp_path("bad.csv");
        fs::write(&path, "Round,A,B,C,D\n1,1,abc,1,1\n").unwrap();

        let mut session = abcd_session();
        run(&mut session, "add 1 2 3 4").unwrap();
        let err = session.import_file(&path).unwrap_err();
        assert!(err.starts_with("Could not import. Error: "));
        assert_eq!(session.ledger.len(), 1);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_import_of_non_utf8_file_is_malformed() {
        let path = temp_path("binary.csv");
        fs::write(&path, b"Round,A,B,C,D\n1,\xff,1,1,1\n").unwrap();

        let mut session = abcd_session();
        let err = session.import_file(&path).unwrap_err();
        assert!(err.starts_with("Could not import. Error: malformed CSV"));
        assert!(session.ledger.is_empty());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_rename_then_show() {
        let mut session = abcd_session();
        run(&mut session, "add 1 2 3 4").unwrap();
        let Ok(CommandOutcome::View(view)) = run(&mut session, "rename 1 Ann") else {
            panic!("expected a view");
        };
        assert_eq!(view.table.columns[1], "Ann");
    }

    #[test]
    fn test_json_contains_leaderboard() {
        let mut session = abcd_session();
        run(&mut session, "add 1 0 0 0").unwrap();
        let Ok(CommandOutcome::Message(json)) = run(&mut session, "json") else {
            panic!("expected json");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["leaderboard"][0]["player"], "B");
        assert_eq!(value["rounds_played"], 1);
    }
}
