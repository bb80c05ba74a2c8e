use crate::error::ConfigError;
use crate::types::*;

pub fn default_player_name(seat: usize) -> String {
    format!("Player {}", seat + 1)
}

pub fn normalize_player_name(seat: usize, raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default_player_name(seat)
    } else {
        trimmed.to_owned()
    }
}

/// The four seat names of a session. Duplicates are allowed and stay
/// separate seats.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Players {
    names: [String; NUM_PLAYERS],
}

impl Players {
    pub fn new<S: AsRef<str>>(names: [S; NUM_PLAYERS]) -> Self {
        Self {
            names: std::array::from_fn(|seat| normalize_player_name(seat, names[seat].as_ref())),
        }
    }

    pub fn try_from_slice<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        if names.len() != NUM_PLAYERS {
            return Err(ConfigError::PlayerCount {
                expected: NUM_PLAYERS,
                found: names.len(),
            });
        }
        Ok(Self {
            names: std::array::from_fn(|seat| normalize_player_name(seat, names[seat].as_ref())),
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, seat: usize) -> &str {
        &self.names[seat]
    }

    pub fn rename(&mut self, seat: usize, raw: &str) -> bool {
        let Some(slot) = self.names.get_mut(seat) else {
            return false;
        };
        *slot = normalize_player_name(seat, raw);
        true
    }
}

impl Default for Players {
    fn default() -> Self {
        Self {
            names: std::array::from_fn(default_player_name),
        }
    }
}
