use crate::scoring::players::Players;
use crate::types::*;
use itertools::Itertools;

pub fn compute_totals(table: &ScoreTable, players: &Players) -> Totals {
    players
        .names()
        .iter()
        .enumerate()
        .map(|(seat, player)| PlayerTotal {
            player: player.clone(),
            total: table.column_sum(seat),
        })
        .collect()
}

/// Lowest total ranks first. Equal totals keep seat order and still get
/// distinct ranks.
pub fn rank_players(totals: &Totals) -> Leaderboard {
    totals
        .iter()
        .sorted_by_key(|player_total| player_total.total)
        .enumerate()
        .map(|(i, player_total)| LeaderboardRow {
            rank: i + 1,
            player: player_total.player.clone(),
            total: player_total.total,
        })
        .collect()
}

pub fn current_leader(leaderboard: &Leaderboard, rounds_played: usize) -> Option<String> {
    if rounds_played == 0 {
        return None;
    }
    leaderboard.first().map(|row| row.player.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn totals_of(values: &[(&str, Total)]) -> Totals {
        values
            .iter()
            .map(|&(player, total)| PlayerTotal {
                player: player.to_owned(),
                total,
            })
            .collect()
    }

    #[test]
    fn test_rank_players_lowest_first() {
        let leaderboard = rank_players(&totals_of(&[("A", 9), ("B", 1), ("C", 4), ("D", 12)]));
        let order: Vec<(Rank, &str, Total)> = leaderboard
            .iter()
            .map(|row| (row.rank, row.player.as_str(), row.total))
            .collect();
        assert_eq!(order, vec![(1, "B", 1), (2, "C", 4), (3, "A", 9), (4, "D", 12)]);
    }

    #[test]
    fn test_rank_players_ties_keep_seat_order() {
        let leaderboard = rank_players(&totals_of(&[("A", 0), ("B", 0), ("C", 0), ("D", 0)]));
        let names: Vec<&str> = leaderboard.iter().map(|row| row.player.as_str()).collect();
        let ranks: Vec<Rank> = leaderboard.iter().map(|row| row.rank).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_current_leader_needs_a_round() {
        let leaderboard = rank_players(&totals_of(&[("A", 0), ("B", 0), ("C", 0), ("D", 0)]));
        assert_eq!(current_leader(&leaderboard, 0), None);
        assert_eq!(current_leader(&leaderboard, 1), Some("A".to_owned()));
    }
}
