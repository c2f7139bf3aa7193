use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use verb_core::core::catalog::{Kind, Tense};
use verb_core::core::table::ConjugationTable;
use verb_core::core::types::VerbRow;
use verb_core::data::source::DirectorySource;
use verb_core::persistence::{PreferenceStore, Selections};
use verb_core::render::{write_catalog, write_table};
use verb_core::VerbLoader;

const LOADING_FAILED: &str = "تَعَذَّرَ التَّحْمِيلُ";

/// Show the conjugation table of an Arabic verb.
#[derive(Debug, Parser)]
#[command(name = "verb_table", version)]
struct Args {
    /// Directory holding `verbs/<kind>-<index>.csv` files.
    #[arg(long, env = "VERB_DATA_DIR", default_value = "data")]
    data: PathBuf,

    /// Verb kind (salim, muz, mudaaf).
    #[arg(long)]
    kind: Option<Kind>,

    /// Zero-based verb index within the kind.
    #[arg(long)]
    verb: Option<usize>,

    #[arg(long)]
    tense: Option<Tense>,

    /// Show pronouns instead of the person column.
    #[arg(long, conflicts_with = "no_pronouns")]
    pronouns: bool,

    #[arg(long)]
    no_pronouns: bool,

    /// Selections file; defaults to the user config directory.
    #[arg(long, env = "VERB_PREFS")]
    prefs: Option<PathBuf>,

    /// Strictly validate the selected verb file and exit.
    #[arg(long)]
    check: bool,

    /// Print kinds, verbs and tenses and exit.
    #[arg(long)]
    list: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn apply_args(selections: &mut Selections, args: &Args) {
    if let Some(kind) = args.kind {
        selections.set_kind(kind);
    }
    if let Some(index) = args.verb {
        selections.verb_index = index;
    }
    if let Some(tense) = args.tense {
        selections.tense = tense.as_str().to_string();
    }
    if args.pronouns {
        selections.show_pronouns = true;
    } else if args.no_pronouns {
        selections.show_pronouns = false;
    }
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();
    let mut stdout = io::stdout();

    if args.list {
        return match write_catalog(&mut stdout) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let prefs_path = args
        .prefs
        .clone()
        .unwrap_or_else(PreferenceStore::default_path);
    let store = PreferenceStore::new(prefs_path);
    let mut selections = store.load();
    apply_args(&mut selections, &args);

    let kind = selections.kind();
    let tense = selections.tense();
    let mut loader = VerbLoader::new(DirectorySource::new(&args.data));

    if args.check {
        return match loader.check(kind, selections.verb_index) {
            Ok(rows) => {
                println!("{} rows ok", rows.len());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let verb = kind.verbs().get(selections.verb_index).copied().unwrap_or_default();
    println!("{} | {} | {}", kind.name(), verb, tense.name());

    let rows = match loader.load(kind, selections.verb_index) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{}", LOADING_FAILED);
            Vec::<VerbRow>::new().into()
        }
    };
    let affixes = loader.load_affixes(kind, tense);
    let table = ConjugationTable::build(&rows, tense, &affixes, selections.show_pronouns);

    let color = stdout.is_terminal();
    if let Err(e) = write_table(&mut stdout, &table, selections.show_pronouns, color) {
        eprintln!("[ERROR] Could not write table: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = store.save(&selections) {
        tracing::warn!(path = %store.path().display(), "could not save selections: {e}");
    }
    ExitCode::SUCCESS
}
