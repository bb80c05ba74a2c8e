use crate::error::ImportError;
use crate::scoring::coercion::coerce_numeric_cell;
use crate::scoring::players::Players;
use crate::types::*;
use csv::{ReaderBuilder, StringRecord, Trim, Writer};

pub const DEFAULT_EXPORT_FILE_NAME: &str = "card_game_scoresheet.csv";

pub fn write_table(table: &ScoreTable) -> Vec<u8> {
    let mut writer = Writer::from_writer(vec![]);
    write_table_to(&mut writer, table).expect("writing CSV into memory cannot fail");
    writer
        .into_inner()
        .expect("flushing CSV into memory cannot fail")
}

fn write_table_to<W: std::io::Write>(
    writer: &mut Writer<W>,
    table: &ScoreTable,
) -> Result<(), csv::Error> {
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        let mut record = StringRecord::new();
        record.push_field(&row.round.to_string());
        for score in row.scores {
            record.push_field(&score.to_string());
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

/// Reads the rounds stored in `text`, looking each seat up by its current
/// player name. Absent columns, and rows too short to reach them, read 0.
/// A present cell that is not a number rejects the whole input; a negative
/// number is coerced to 0.
pub fn read_rounds(text: &str, players: &Players) -> Result<Vec<Round>, ImportError> {
    read_rounds_from_bytes(text.as_bytes(), players)
}

/// Same as [`read_rounds`] for raw file contents; bytes that are not UTF-8
/// are reported as malformed CSV.
pub fn read_rounds_from_bytes(bytes: &[u8], players: &Players) -> Result<Vec<Round>, ImportError> {
    if is_blank(bytes) {
        return Err(ImportError::Empty);
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let seat_columns: Vec<Option<usize>> = players
        .names()
        .iter()
        .map(|name| headers.iter().position(|header| header == name))
        .collect();

    let mut rounds = vec![];
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let mut scores: SeatScores = [0; NUM_PLAYERS];

        for (seat, column) in seat_columns.iter().enumerate() {
            let Some(value) = column.and_then(|c| record.get(c)) else {
                continue;
            };
            scores[seat] = coerce_numeric_cell(value).ok_or_else(|| ImportError::InvalidScore {
                row: i + 1,
                player: players.name(seat).to_owned(),
                value: value.to_owned(),
            })?;
        }

        rounds.push(Round::new(scores));
    }

    Ok(rounds)
}

/// Player names as they appear in an exported header: every column except
/// `Round`, first four only. Missing seats fall back to their defaults.
pub fn players_from_header(bytes: &[u8]) -> Result<Players, ImportError> {
    if is_blank(bytes) {
        return Err(ImportError::Empty);
    }

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(bytes);
    let headers = reader.headers()?;
    let mut names = headers.iter().filter(|header| *header != ROUND_COLUMN);
    let seats: [&str; NUM_PLAYERS] = std::array::from_fn(|_| names.next().unwrap_or_default());
    Ok(Players::new(seats))
}
