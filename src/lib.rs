//! catechize: content addressing and proof-text clustering for a library of
//! catechisms, creeds, confessions and books.
//!
//! This library provides functionality to:
//! - Derive and resolve work slugs
//! - Locate units and pages by their public number
//! - Split unit text into question/answer or prose
//! - Group scripture citations into labelled proof texts

pub mod config;
pub mod content;
pub mod corpus;
pub mod error;
pub mod library;
pub mod model;
pub mod navigator;
pub mod proof_texts;
pub mod slug;

pub use config::{builtin_overrides, load_slug_config, slugger_from};
pub use content::{parse_primary_secondary, parse_unit_display, QuestionAnswer, UnitDisplay};
pub use corpus::{load_corpus, parse_corpus, Corpus, JsonCorpus};
pub use error::EngineError;
pub use library::{Library, PageView, UnitView, WorkOutline, WorkSummary};
pub use model::{Citation, ProofTextGroup, ProofTextReference, Unit, Work, WorkType};
pub use navigator::{parse_position, UnitTree};
pub use proof_texts::{cluster_proof_texts, verse_text};
pub use slug::{slugify, SlugOverride, Slugger};
