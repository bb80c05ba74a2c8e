use crate::types::*;
use colored::Colorize;
use itertools::Itertools;

fn format_grid(header: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
            .join(" | ")
    };

    let mut lines = vec![format_line(header)];
    lines.push(widths.iter().map(|&w| "-".repeat(w)).join("-+-"));
    lines.extend(rows.iter().map(|row| format_line(row)));
    lines.join("\n")
}

pub fn format_table(table: &ScoreTable) -> String {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.round.to_string())
                .chain(row.scores.iter().map(|s| s.to_string()))
                .collect()
        })
        .collect();
    format_grid(&table.columns, &rows)
}

pub fn format_leaderboard(leaderboard: &Leaderboard) -> String {
    let header = ["Rank", "Player", "Total"].map(str::to_owned);
    let rows: Vec<Vec<String>> = leaderboard
        .iter()
        .map(|row| vec![row.rank.to_string(), row.player.clone(), row.total.to_string()])
        .collect();
    format_grid(&header, &rows)
}

pub fn format_leader_line(view: &ScoreView) -> Option<String> {
    view.leader
        .as_ref()
        .map(|leader| format!("Current leader: {}", leader.bold().green()))
}

pub fn format_view(view: &ScoreView) -> String {
    let mut sections = vec![];
    if view.table.is_empty() {
        sections.push("No rounds yet. Add the first round with `add`.".to_owned());
    } else {
        sections.push(format_table(&view.table));
    }
    sections.push(format!("{}", "Leaderboard (lowest total)".bold()));
    sections.push(format_leaderboard(&view.leaderboard));
    sections.push(format!("Rounds played: {}", view.rounds_played));
    if let Some(line) = format_leader_line(view) {
        sections.push(line);
    }
    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_table() {
        let mut ledger = ScoreLedger::new(Players::new(["Ann", "B", "C", "D"]));
        ledger.add_round([5, 3, 15, 1]);
        let expected = [
            "Round | Ann | B |  C | D",
            "------+-----+---+----+--",
            "    1 |   5 | 3 | 15 | 1",
        ]
        .join("\n");
        assert_eq!(format_table(&ledger.compute_table()), expected);
    }

    #[test]
    fn test_format_leaderboard() {
        let mut ledger = ScoreLedger::new(Players::new(["A", "B", "C", "D"]));
        ledger.add_round([5, 3, 5, 1]);
        let (_, leaderboard) = ledger.compute_totals_and_leaderboard();
        let expected = [
            "Rank | Player | Total",
            "-----+--------+------",
            "   1 |      D |     1",
            "   2 |      B |     3",
            "   3 |      A |     5",
            "   4 |      C |     5",
        ]
        .join("\n");
        assert_eq!(format_leaderboard(&leaderboard), expected);
    }
}
