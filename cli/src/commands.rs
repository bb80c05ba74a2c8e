use lazy_static::lazy_static;
use regex::Regex;
use scoresheet_core::NUM_PLAYERS;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CommandKind {
    Add,
    Delete,
    Reset,
    Show,
    Json,
    Export,
    Import,
    Rename,
    Help,
    Quit,
}

impl CommandKind {
    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::Add => "add <s1> <s2> <s3> <s4>   add a round (blank or non-numeric scores count as 0)",
            CommandKind::Delete => "delete                    delete the last round",
            CommandKind::Reset => "reset                     clear all rounds",
            CommandKind::Show => "show                      print the scoresheet and leaderboard",
            CommandKind::Json => "json                      print the scoresheet as JSON",
            CommandKind::Export => "export [path]             write the scoresheet as CSV",
            CommandKind::Import => "import <path>             replace all rounds from a CSV file",
            CommandKind::Rename => "rename <seat 1-4> <name>  rename a player",
            CommandKind::Help => "help                      show this message",
            CommandKind::Quit => "quit                      leave",
        }
    }
}

pub fn help_text() -> String {
    CommandKind::iter()
        .map(|kind| format!("  {}", kind.usage()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add([String; NUM_PLAYERS]),
    Delete,
    Reset,
    Show,
    Json,
    Export(Option<String>),
    Import(String),
    Rename(usize, String),
    Help,
    Quit,
}

lazy_static! {
    static ref COMMAND_RE: Regex = Regex::new(r"^\s*(\S+)\s*(.*?)\s*$").unwrap();
    static ref RENAME_RE: Regex = Regex::new(r"^([1-4])(?:\s+(.*))?$").unwrap();
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let Some(captures) = COMMAND_RE.captures(line) else {
        return Err("Empty command. Type `help` for a list of commands".to_owned());
    };
    let (_, [keyword, rest]) = captures.extract();
    let kind = CommandKind::from_str(keyword)
        .map_err(|_| format!("Unknown command `{keyword}`. Type `help` for a list of commands"))?;

    let command = match kind {
        CommandKind::Add => {
            let mut tokens = rest.split_whitespace();
            Command::Add(std::array::from_fn(|_| {
                tokens.next().unwrap_or_default().to_owned()
            }))
        }
        CommandKind::Delete => Command::Delete,
        CommandKind::Reset => Command::Reset,
        CommandKind::Show => Command::Show,
        CommandKind::Json => Command::Json,
        CommandKind::Export => Command::Export((!rest.is_empty()).then(|| rest.to_owned())),
        CommandKind::Import => {
            if rest.is_empty() {
                return Err(format!("Usage: {}", kind.usage()));
            }
            Command::Import(rest.to_owned())
        }
        CommandKind::Rename => {
            let Some(rename) = RENAME_RE.captures(rest) else {
                return Err(format!("Usage: {}", kind.usage()));
            };
            let seat: usize = rename[1]
                .parse()
                .map_err(|_| format!("Usage: {}", kind.usage()))?;
            let name = rename.get(2).map_or("", |m| m.as_str()).to_owned();
            Command::Rename(seat - 1, name)
        }
        CommandKind::Help => Command::Help,
        CommandKind::Quit => Command::Quit,
    };

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn add(scores: [&str; NUM_PLAYERS]) -> Command {
        Command::Add(scores.map(str::to_owned))
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(parse_command("add 5 3 5 1").unwrap(), add(["5", "3", "5", "1"]));
        assert_eq!(parse_command("  ADD 5 x ").unwrap(), add(["5", "x", "", ""]));
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_command("delete").unwrap(), Command::Delete);
        assert_eq!(parse_command("reset").unwrap(), Command::Reset);
        assert_eq!(parse_command("Show").unwrap(), Command::Show);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_export() {
        assert_eq!(parse_command("export").unwrap(), Command::Export(None));
        assert_eq!(
            parse_command("export my game.csv").unwrap(),
            Command::Export(Some("my game.csv".to_owned()))
        );
    }

    #[test]
    fn test_parse_import_requires_path() {
        assert!(parse_command("import").is_err());
        assert_eq!(
            parse_command("import game.csv").unwrap(),
            Command::Import("game.csv".to_owned())
        );
    }

    #[test]
    fn test_parse_rename() {
        assert_eq!(
            parse_command("rename 2 Mary Ann").unwrap(),
            Command::Rename(1, "Mary Ann".to_owned())
        );
        assert_eq!(
            parse_command("rename 4").unwrap(),
            Command::Rename(3, "".to_owned())
        );
        assert!(parse_command("rename 5 Bob").is_err());
        assert!(parse_command("rename Bob").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        assert!(parse_command("").is_err());
        assert!(parse_command("   ").is_err());
        assert!(parse_command("undo").is_err());
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = help_text();
        for kind in CommandKind::iter() {
            assert!(help.contains(&kind.to_string()));
        }
    }
}
