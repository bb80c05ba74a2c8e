use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no CSV data to import")]
    Empty,

    #[error("malformed CSV: {0}")]
    Malformed(#[from] csv::Error),

    #[error("row {row}: invalid score {value:?} for {player}")]
    InvalidScore {
        row: usize,
        player: String,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("expected {expected} player names, found {found}")]
    PlayerCount { expected: usize, found: usize },
}
