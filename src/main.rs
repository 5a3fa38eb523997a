//! CLI for catechize - browse works, units, pages and proof texts of a corpus.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use catechize::{
    config::ConfigError, corpus::CorpusError, load_corpus, parse_position, slugger_from,
    EngineError, JsonCorpus, Library, Slugger,
};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Browse catechisms, creeds, confessions and books with their proof texts
#[derive(Parser)]
#[command(name = "catechize")]
#[command(version)]
#[command(after_help = "\
Examples:
  catechize works --corpus library.json
  catechize unit westminster-shorter-catechism 1 --corpus library.json --translation KJV
  catechize page institutes 12 --corpus library.json -o page.json
  catechize slug \"The Apostles' Creed\"")]
struct Cli {
    /// Corpus file (JSON)
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Slug override table (TOML); the built-in table is used when omitted
    #[arg(long, global = true)]
    slugs: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all works with their slugs and sizes
    Works,

    /// Show the top-level units of a work
    Outline {
        /// Work slug
        slug: String,
    },

    /// Show a top-level unit (question, article, chapter) with proof texts
    Unit {
        /// Work slug
        slug: String,

        /// Unit number, starting at 1
        #[arg(allow_hyphen_values = true)]
        number: String,

        /// Bible translation for proof-text verses
        #[arg(short, long, default_value = "ESV")]
        translation: String,
    },

    /// Show a book page with its chapter and proof texts
    Page {
        /// Work slug
        slug: String,

        /// Page number, starting at 1
        #[arg(allow_hyphen_values = true)]
        number: String,

        /// Bible translation for proof-text verses
        #[arg(short, long, default_value = "ESV")]
        translation: String,
    },

    /// Print the slug for a work title
    Slug {
        /// Work title
        title: String,
    },

    /// Print the title a slug resolves to
    Resolve {
        /// Work slug
        slug: String,
    },
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — corpus file missing, unreadable or invalid
    Corpus(String),
    /// Exit 11 — slug override file unreadable or invalid
    SlugConfig(String),
    /// Exit 12 — work, unit or page not found
    NotFound(String),
    /// Exit 13 — malformed position
    InvalidArgument(String),
    /// Exit 14 — slug matches several works
    Ambiguous(String),
    /// Exit 15 — cannot write output
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::Corpus(_) => 10,
            AppError::SlugConfig(_) => 11,
            AppError::NotFound(_) => 12,
            AppError::InvalidArgument(_) => 13,
            AppError::Ambiguous(_) => 14,
            AppError::OutputFile(_) => 15,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Corpus(msg) => {
                write!(
                    f,
                    "{}\n  hint: pass --corpus with a JSON file holding works, references, books, chapters and verses",
                    msg
                )
            }
            AppError::SlugConfig(msg) => {
                write!(
                    f,
                    "{}\n  hint: the file must contain [[slug]] tables with 'slug' and 'title' keys",
                    msg
                )
            }
            AppError::NotFound(msg) => {
                write!(f, "{}\n  hint: run 'catechize works' to list available slugs", msg)
            }
            AppError::InvalidArgument(msg) => {
                write!(f, "{}\n  hint: numbers start at 1", msg)
            }
            AppError::Ambiguous(msg) => {
                write!(
                    f,
                    "{}\n  hint: add a [[slug]] entry for the intended title to your --slugs file",
                    msg
                )
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the output directory exists and is writable",
                    msg
                )
            }
        }
    }
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::NotFound(_) => AppError::NotFound(e.to_string()),
            EngineError::InvalidArgument(_) => AppError::InvalidArgument(e.to_string()),
            EngineError::Ambiguous { .. } => AppError::Ambiguous(e.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    let slugger = slugger_from(cli.slugs.as_deref())
        .map_err(|e| map_config_error(cli.slugs.as_deref(), e))?;
    let output = cli.output.as_deref();

    match cli.command {
        Commands::Works => {
            let corpus = open_corpus(cli.corpus.as_deref())?;
            let library = Library::new(&corpus, &slugger);
            write_json(&library.work_summaries(), output)?;
        }
        Commands::Outline { slug } => {
            let corpus = open_corpus(cli.corpus.as_deref())?;
            let library = Library::new(&corpus, &slugger);
            write_json(&library.work_outline(&slug)?, output)?;
        }
        Commands::Unit {
            slug,
            number,
            translation,
        } => {
            let number = parse_position(&number)?;
            let corpus = open_corpus(cli.corpus.as_deref())?;
            let library = Library::new(&corpus, &slugger);
            write_json(&library.unit_view(&slug, number.into(), &translation)?, output)?;
        }
        Commands::Page {
            slug,
            number,
            translation,
        } => {
            let number = parse_position(&number)?;
            let corpus = open_corpus(cli.corpus.as_deref())?;
            let library = Library::new(&corpus, &slugger);
            write_json(&library.page_view(&slug, number.into(), &translation)?, output)?;
        }
        Commands::Slug { title } => {
            write_text(&slugger.slug_for_title(&title), output)?;
        }
        Commands::Resolve { slug } => {
            let title = resolve_title(&slugger, cli.corpus.as_deref(), &slug)?;
            write_text(&title, output)?;
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open_corpus(path: Option<&Path>) -> Result<JsonCorpus, AppError> {
    let path = path.ok_or_else(|| AppError::Corpus("no corpus file given".to_string()))?;
    let corpus = load_corpus(path).map_err(|e| map_corpus_error(path, e))?;
    debug!(path = %path.display(), "loaded corpus");
    Ok(corpus)
}

/// Resolves against the corpus titles when a corpus is given, else against
/// the titles of the override table.
fn resolve_title(slugger: &Slugger, corpus: Option<&Path>, slug: &str) -> Result<String, AppError> {
    match corpus {
        Some(_) => {
            let corpus = open_corpus(corpus)?;
            let library = Library::new(&corpus, slugger);
            Ok(library.resolve_work(slug)?.title.clone())
        }
        None => {
            let titles: Vec<&str> = slugger.overrides().iter().map(|o| o.title.as_str()).collect();
            Ok(slugger.resolve_slug(slug, &titles)?)
        }
    }
}

fn map_corpus_error(path: &Path, e: CorpusError) -> AppError {
    AppError::Corpus(format!("'{}': {}", path.display(), e))
}

fn map_config_error(path: Option<&Path>, e: ConfigError) -> AppError {
    match path {
        Some(path) => AppError::SlugConfig(format!("'{}': {}", path.display(), e)),
        None => AppError::SlugConfig(e.to_string()),
    }
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::OutputFile(format!("failed to serialize output: {}", e)))?;
    write_text(&json, output)
}

fn write_text(text: &str, output: Option<&Path>) -> Result<(), AppError> {
    if let Some(output_path) = output {
        fs::write(output_path, format!("{}\n", text)).map_err(|e| {
            AppError::OutputFile(format!("'{}': {}", output_path.display(), e))
        })?;
        info!(path = %output_path.display(), "wrote output");
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", text)
            .map_err(|e| AppError::OutputFile(format!("stdout: {}", e)))?;
    }
    Ok(())
}
