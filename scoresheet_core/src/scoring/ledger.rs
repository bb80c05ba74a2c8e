use crate::csv_io::{read_rounds_from_bytes, write_table};
use crate::error::ImportError;
use crate::scoring::coercion::*;
use crate::scoring::leaderboard::*;
use crate::scoring::players::Players;
use crate::types::*;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Rounds of one session, in the order they were entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    players: Players,
    rounds: Vec<Round>,
}

impl ScoreLedger {
    pub fn new(players: Players) -> Self {
        Self {
            players,
            rounds: vec![],
        }
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn rename_player(&mut self, seat: usize, name: &str) -> bool {
        let renamed = self.players.rename(seat, name);
        if renamed {
            debug!(seat, name = self.players.name(seat), "renamed player");
        }
        renamed
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn add_round(&mut self, scores: SeatScores) -> Round {
        let round = Round::new(scores);
        self.rounds.push(round);
        debug!(round = self.rounds.len(), ?scores, "added round");
        round
    }

    pub fn add_round_from_text(&mut self, inputs: [&str; NUM_PLAYERS]) -> Round {
        self.add_round(inputs.map(|input| to_nonnegative_int(input, 0)))
    }

    /// Scores keyed by player name. A name missing from `scores` reads 0.
    pub fn add_round_by_name(&mut self, scores: &HashMap<String, String>) -> Round {
        let seat_scores: SeatScores = std::array::from_fn(|seat| {
            coerce_or_zero(scores.get(self.players.name(seat)).map(String::as_str))
        });
        self.add_round(seat_scores)
    }

    pub fn delete_last_round(&mut self) -> Option<Round> {
        let removed = self.rounds.pop();
        if removed.is_some() {
            debug!(remaining = self.rounds.len(), "deleted last round");
        }
        removed
    }

    pub fn reset(&mut self) {
        info!(cleared = self.rounds.len(), "reset ledger");
        self.rounds.clear();
    }

    pub fn compute_table(&self) -> ScoreTable {
        let mut columns = vec![ROUND_COLUMN.to_owned()];
        columns.extend(self.players.names().iter().cloned());

        let rows = self
            .rounds
            .iter()
            .enumerate()
            .map(|(i, round)| TableRow {
                round: i + 1,
                scores: round.scores,
            })
            .collect();

        ScoreTable { columns, rows }
    }

    pub fn compute_totals_and_leaderboard(&self) -> (Totals, Leaderboard) {
        let totals = compute_totals(&self.compute_table(), &self.players);
        let leaderboard = rank_players(&totals);
        (totals, leaderboard)
    }

    pub fn view(&self) -> ScoreView {
        let table = self.compute_table();
        let totals = compute_totals(&table, &self.players);
        let leaderboard = rank_players(&totals);
        let rounds_played = table.rows.len();
        let leader = current_leader(&leaderboard, rounds_played);
        ScoreView {
            table,
            totals,
            leaderboard,
            rounds_played,
            leader,
        }
    }

    pub fn export_csv(&self) -> Vec<u8> {
        write_table(&self.compute_table())
    }

    /// Replaces every round with the ones read from `text`. On error the
    /// ledger is left as it was.
    pub fn import_csv(&mut self, text: &str) -> Result<usize, ImportError> {
        self.import_csv_bytes(text.as_bytes())
    }

    pub fn import_csv_bytes(&mut self, bytes: &[u8]) -> Result<usize, ImportError> {
        let rounds = read_rounds_from_bytes(bytes, &self.players).map_err(|err| {
            warn!(%err, "rejected CSV import");
            err
        })?;
        info!(
            previous = self.rounds.len(),
            imported = rounds.len(),
            "imported rounds"
        );
        self.rounds = rounds;
        Ok(self.rounds.len())
    }
}
