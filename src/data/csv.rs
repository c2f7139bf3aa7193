// File: src/data/csv.rs
//! Fixed-column reader for the verb and affix files.
//!
//! Columns are `tense, cem, tesniye, ferd, person`. The first line is a header
//! and is skipped. There is no quoting: a comma inside a field shifts the
//! columns after it.
use crate::core::types::VerbRow;
use crate::error::CsvError;

pub const COLUMNS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Missing trailing columns read as empty strings.
    #[default]
    Lenient,
    /// Every data line must have exactly [`COLUMNS`] columns.
    Strict,
}

/// Data lines of `text`: trimmed, split on newlines, header dropped.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.trim().lines().enumerate().skip(1).map(|(i, line)| (i + 1, line))
}

fn split_row(line: &str) -> [&str; COLUMNS] {
    let mut fields = [""; COLUMNS];
    for (slot, value) in fields.iter_mut().zip(line.split(',')) {
        *slot = value;
    }
    fields
}

fn check_shape(line_no: usize, line: &str) -> Result<(), CsvError> {
    let found = line.split(',').count();
    if found != COLUMNS {
        return Err(CsvError::ColumnCount {
            line: line_no,
            expected: COLUMNS,
            found,
        });
    }
    Ok(())
}

fn to_row([tense, cem, tesniye, ferd, person]: [&str; COLUMNS]) -> VerbRow {
    VerbRow {
        tense: tense.to_string(),
        person: person.to_string(),
        ferd: ferd.to_string(),
        tesniye: tesniye.to_string(),
        cem: cem.to_string(),
    }
}

/// Parses every data line into a [`VerbRow`], fields taken verbatim.
///
/// In lenient mode this never fails and yields one row per data line.
pub fn parse_rows(text: &str, mode: ParseMode) -> Result<Vec<VerbRow>, CsvError> {
    data_lines(text)
        .map(|(line_no, line)| {
            if mode == ParseMode::Strict {
                check_shape(line_no, line)?;
            }
            Ok(to_row(split_row(line)))
        })
        .collect()
}

/// Lenient parse with every field trimmed, as the affix files are read.
pub fn parse_trimmed(text: &str) -> Vec<VerbRow> {
    data_lines(text)
        .map(|(_, line)| to_row(split_row(line).map(str::trim)))
        .collect()
}
