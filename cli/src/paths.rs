use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn try_read_csv_file(path: &Path) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|err| format!("{}: {err}", path.display()))
}

pub fn try_write_csv_file(path: &Path, bytes: &[u8]) -> Result<(), String> {
    let file = File::create(path).map_err(|err| format!("{}: {err}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .and_then(|_| writer.flush())
        .map_err(|err| format!("{}: {err}", path.display()))
}
