use crate::core::catalog::{Form, Person, Tense};
use crate::core::segmenter::segment_with_pattern;
use crate::core::types::{pattern_key, AffixPatterns, Segment, VerbRow};

/// Cell content: either segmented into affix/stem clusters or plain text when
/// no usable pattern exists for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellText {
    Plain(String),
    Segmented(Vec<Segment>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub form: Form,
    /// Number of number columns the cell covers (2 for the merged first person).
    pub span: usize,
    pub pronoun: Option<&'static str>,
    pub text: CellText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub person: Person,
    pub starts_section: bool,
    pub cells: Vec<Cell>,
}

/// The conjugation table for one verb and tense, rows in person order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConjugationTable {
    pub rows: Vec<TableRow>,
}

impl ConjugationTable {
    pub fn build(
        data: &[VerbRow],
        tense: Tense,
        affixes: &AffixPatterns,
        show_pronouns: bool,
    ) -> Self {
        let tense_rows: Vec<&VerbRow> = data
            .iter()
            .filter(|row| row.tense == tense.as_str())
            .collect();

        let rows = Person::ALL
            .iter()
            .filter_map(|&person| {
                let row = tense_rows.iter().find(|r| r.person == person.as_str())?;
                if row.is_blank() {
                    return None;
                }
                Some(TableRow {
                    person,
                    starts_section: person.starts_section(),
                    cells: cells_for(row, person, affixes, show_pronouns),
                })
            })
            .collect();

        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn cells_for(
    row: &VerbRow,
    person: Person,
    affixes: &AffixPatterns,
    show_pronouns: bool,
) -> Vec<Cell> {
    let pronouns = person.pronouns();
    let columns: &[(Form, usize, usize)] = if person.merges_dual() {
        &[(Form::Ferd, 1, 0), (Form::Cem, 2, 1)]
    } else {
        &[(Form::Ferd, 1, 0), (Form::Tesniye, 1, 1), (Form::Cem, 1, 2)]
    };

    columns
        .iter()
        .map(|&(form, span, pronoun_idx)| Cell {
            form,
            span,
            pronoun: show_pronouns
                .then(|| pronouns.get(pronoun_idx).copied())
                .flatten(),
            text: render_form(row.form(form), person, form, affixes),
        })
        .collect()
}

fn render_form(text: &str, person: Person, form: Form, affixes: &AffixPatterns) -> CellText {
    if text.is_empty() {
        return CellText::Plain(String::new());
    }
    affixes
        .get(&pattern_key(person.as_str(), form))
        .filter(|pattern| !pattern.is_empty())
        .and_then(|pattern| segment_with_pattern(text, pattern))
        .map(CellText::Segmented)
        .unwrap_or_else(|| CellText::Plain(text.to_string()))
}
