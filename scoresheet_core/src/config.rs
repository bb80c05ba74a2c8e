use crate::csv_io::DEFAULT_EXPORT_FILE_NAME;
use crate::error::ConfigError;
use crate::scoring::players::{default_player_name, Players};
use crate::types::NUM_PLAYERS;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

fn default_players() -> Vec<String> {
    (0..NUM_PLAYERS).map(default_player_name).collect()
}

fn default_export_path() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_owned()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_owned()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    #[serde(default = "default_players")]
    pub players: Vec<String>,
    #[serde(default = "default_export_path")]
    pub export_path: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            players: default_players(),
            export_path: default_export_path(),
            log_level: default_log_level(),
        }
    }
}

impl SessionConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config: SessionConfig = serde_yaml::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.players().map(|_| ())
    }

    pub fn players(&self) -> Result<Players, ConfigError> {
        Players::try_from_slice(&self.players)
    }
}
