// File: src/render.rs
//! Plain-terminal rendering of a [`ConjugationTable`], affix clusters in red.
use crate::core::catalog::{Form, Kind, Tense};
use crate::core::table::{Cell, CellText, ConjugationTable};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{self, Write};

const PERSON_HEADER: &str = "شَخْصٌ";
const COLUMN_SEP: &str = " | ";
const AFFIX_COLOR: Color = Color::Red;

fn write_cell<W: Write>(out: &mut W, cell: &Cell, color: bool) -> io::Result<()> {
    if let Some(pronoun) = cell.pronoun {
        queue!(out, Print(pronoun), Print(' '))?;
    }
    match &cell.text {
        CellText::Plain(text) => queue!(out, Print(text))?,
        CellText::Segmented(segments) => {
            for segment in segments {
                if color && segment.role.is_affix() {
                    queue!(
                        out,
                        SetForegroundColor(AFFIX_COLOR),
                        Print(&segment.text),
                        ResetColor
                    )?;
                } else {
                    queue!(out, Print(&segment.text))?;
                }
            }
        }
    }
    Ok(())
}

/// Writes `table` one person per line. The person column is left out when
/// pronouns are shown, since the pronouns name the person already.
pub fn write_table<W: Write>(
    out: &mut W,
    table: &ConjugationTable,
    show_pronouns: bool,
    color: bool,
) -> io::Result<()> {
    let mut header: Vec<&str> = Vec::new();
    if !show_pronouns {
        header.push(PERSON_HEADER);
    }
    header.extend([Form::Ferd, Form::Tesniye, Form::Cem].map(Form::name));
    writeln!(out, "{}", header.join(COLUMN_SEP))?;

    for (i, row) in table.rows.iter().enumerate() {
        if row.starts_section && i > 0 {
            writeln!(out, "{}", "-".repeat(32))?;
        }
        if !show_pronouns {
            queue!(out, Print(row.person.name()), Print(COLUMN_SEP))?;
        }
        for (j, cell) in row.cells.iter().enumerate() {
            if j > 0 {
                queue!(out, Print(COLUMN_SEP))?;
            }
            write_cell(out, cell, color)?;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Lists kinds with their numbered verbs and the tenses.
pub fn write_catalog<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "kinds:")?;
    for kind in Kind::available() {
        writeln!(out, "  {} ({})", kind, kind.name())?;
        for (i, verb) in kind.verbs().iter().enumerate() {
            writeln!(out, "    {}: {}", i, verb)?;
        }
    }
    writeln!(out, "tenses:")?;
    for &tense in Tense::ALL {
        if tense.has_divider_before() {
            writeln!(out, "  --")?;
        }
        let marker = if tense.is_negative() { " (negative)" } else { "" };
        writeln!(out, "  {} ({}){}", tense, tense.name(), marker)?;
    }
    Ok(())
}
