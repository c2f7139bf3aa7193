use std::fs;
use std::path::Path;
use tempfile::TempDir;
use verb_core::core::catalog::{Form, Kind, Person, Tense};
use verb_core::core::table::{CellText, ConjugationTable};
use verb_core::core::types::{Role, VerbRow};
use verb_core::data::source::DirectorySource;
use verb_core::error::LoadError;
use verb_core::VerbLoader;

fn shipped_data() -> DirectorySource {
    DirectorySource::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
}

fn write_verbs(dir: &TempDir, name: &str, contents: &str) {
    let verbs = dir.path().join("verbs");
    fs::create_dir_all(&verbs).unwrap();
    fs::write(verbs.join(name), contents).unwrap();
}

#[test]
fn reads_rows_from_a_directory() {
    let dir = TempDir::new().unwrap();
    write_verbs(
        &dir,
        "mudaaf-1.csv",
        "tense,cem,tesniye,ferd,person\nmazi,كتبوا,كتبا,كتبت,3-muennes\n",
    );

    let mut loader = VerbLoader::new(DirectorySource::new(dir.path()));
    let rows = loader.load(Kind::Mudaaf, 1).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tense, "mazi");
    assert_eq!(rows[0].cem, "كتبوا");
    assert_eq!(rows[0].tesniye, "كتبا");
    assert_eq!(rows[0].ferd, "كتبت");
    assert_eq!(rows[0].person, "3-muennes");
}

#[test]
fn cached_rows_survive_the_file_going_away() {
    let dir = TempDir::new().unwrap();
    write_verbs(&dir, "salim-2.csv", "h\nmazi,a,b,c,3-muzekker\n");

    let mut loader = VerbLoader::new(DirectorySource::new(dir.path()));
    assert_eq!(loader.load(Kind::Salim, 2).unwrap().len(), 1);

    fs::remove_file(dir.path().join("verbs/salim-2.csv")).unwrap();
    assert_eq!(loader.load(Kind::Salim, 2).unwrap().len(), 1);
}

#[test]
fn missing_file_reports_not_found_and_renders_empty() {
    let dir = TempDir::new().unwrap();
    let mut loader = VerbLoader::new(DirectorySource::new(dir.path()));

    let rows: Vec<VerbRow> = match loader.load(Kind::Muz, 0) {
        Err(LoadError::Retrieval { reason, .. }) => {
            assert_eq!(reason, "Not Found");
            Vec::new()
        }
        other => panic!("expected retrieval error, got {other:?}"),
    };
    let affixes = loader.load_affixes(Kind::Muz, Tense::Mazi);
    assert!(affixes.is_empty());
    assert!(ConjugationTable::build(&rows, Tense::Mazi, &affixes, false).is_empty());
}

#[test]
fn shipped_past_tense_table() {
    let mut loader = VerbLoader::new(shipped_data());
    let rows = loader.load(Kind::Salim, 0).unwrap();
    let affixes = loader.load_affixes(Kind::Salim, Tense::Mazi);
    let table = ConjugationTable::build(&rows, Tense::Mazi, &affixes, false);

    let persons: Vec<Person> = table.rows.iter().map(|r| r.person).collect();
    assert_eq!(
        persons,
        vec![
            Person::FirstSpeaker,
            Person::SecondMasculine,
            Person::SecondFeminine,
            Person::ThirdMasculine,
            Person::ThirdFeminine,
        ]
    );

    let third_plural = &table.rows[3].cells[2];
    assert_eq!(third_plural.form, Form::Cem);
    match &third_plural.text {
        CellText::Segmented(segments) => {
            let roles: Vec<Role> = segments.iter().map(|s| s.role).collect();
            assert_eq!(
                roles,
                vec![Role::Stem, Role::Stem, Role::Stem, Role::Suffix, Role::Suffix]
            );
        }
        other => panic!("expected segmented cell, got {other:?}"),
    }
}

#[test]
fn shipped_data_passes_strict_check() {
    let loader = VerbLoader::new(shipped_data());
    assert_eq!(loader.check(Kind::Salim, 0).unwrap().len(), 14);
}

#[test]
fn shipped_present_tense_prefixes() {
    let mut loader = VerbLoader::new(shipped_data());
    let rows = loader.load(Kind::Salim, 0).unwrap();
    let affixes = loader.load_affixes(Kind::Salim, Tense::Muzari);
    let table = ConjugationTable::build(&rows, Tense::Muzari, &affixes, true);

    let first = &table.rows[0];
    assert_eq!(first.cells[0].pronoun, Some("أَنَا"));
    match &first.cells[0].text {
        CellText::Segmented(segments) => {
            assert_eq!(segments[0].role, Role::Prefix);
            assert!(segments[1..].iter().all(|s| s.role == Role::Stem));
        }
        other => panic!("expected segmented cell, got {other:?}"),
    }
}
