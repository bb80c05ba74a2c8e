use serde::{Deserialize, Serialize};

pub const NUM_PLAYERS: usize = 4;
pub const ROUND_COLUMN: &str = "Round";

pub type Score = u32;
pub type Total = u64;
pub type RoundNumber = usize;
pub type Rank = usize;

pub type SeatScores = [Score; NUM_PLAYERS];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    pub scores: SeatScores,
}

impl Round {
    pub fn new(scores: SeatScores) -> Self {
        Self { scores }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub round: RoundNumber,
    pub scores: SeatScores,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreTable {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl ScoreTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_sum(&self, seat: usize) -> Total {
        self.rows.iter().map(|row| row.scores[seat] as Total).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerTotal {
    pub player: String,
    pub total: Total,
}

pub type Totals = Vec<PlayerTotal>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub rank: Rank,
    pub player: String,
    pub total: Total,
}

pub type Leaderboard = Vec<LeaderboardRow>;

/// Everything a harness needs to redraw after a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreView {
    pub table: ScoreTable,
    pub totals: Totals,
    pub leaderboard: Leaderboard,
    pub rounds_played: usize,
    pub leader: Option<String>,
}

pub fn total_for<'a>(totals: &'a Totals, player: &str) -> Option<&'a PlayerTotal> {
    totals.iter().find(|t| t.player == player)
}
