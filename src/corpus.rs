//! Corpus access.
//!
//! The engine never fetches data itself. It reads through the [`Corpus`]
//! trait; [`JsonCorpus`] is the bundled implementation backed by a single
//! JSON document holding works, references and the scripture tables.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{BibleBook, BibleVerse, Chapter, Citation, Reference, Work};
use crate::proof_texts::verse_text;

/// Errors that can occur when loading a corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u64 },
}

/// Read-only queries the engine needs from storage.
pub trait Corpus {
    /// All works in stored order.
    fn list_works(&self) -> Vec<&Work>;

    /// A work with its unit forest.
    fn work_by_id(&self, id: u64) -> Option<&Work>;

    /// The citations of a unit, joined to verse, chapter and book, with text
    /// in `translation`. Order is unspecified.
    fn citations_for(&self, unit_id: u64, translation: &str) -> Vec<Citation>;
}

/// On-disk layout of a corpus file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusDocument {
    #[serde(default)]
    pub works: Vec<Work>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub books: Vec<BibleBook>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub verses: Vec<BibleVerse>,
}

/// In-memory corpus indexed by id.
#[derive(Debug, Clone, Default)]
pub struct JsonCorpus {
    works: Vec<Work>,
    work_index: HashMap<u64, usize>,
    references: HashMap<u64, Vec<u64>>,
    books: HashMap<u64, BibleBook>,
    chapters: HashMap<u64, Chapter>,
    verses: HashMap<u64, BibleVerse>,
}

fn index_by_id<T>(
    items: Vec<T>,
    kind: &'static str,
    id: impl Fn(&T) -> u64,
) -> Result<HashMap<u64, T>, CorpusError> {
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        let key = id(&item);
        if map.insert(key, item).is_some() {
            return Err(CorpusError::DuplicateId { kind, id: key });
        }
    }
    Ok(map)
}

impl JsonCorpus {
    /// Builds the indexes for a parsed document.
    pub fn from_document(document: CorpusDocument) -> Result<Self, CorpusError> {
        let mut work_index = HashMap::with_capacity(document.works.len());
        for (i, work) in document.works.iter().enumerate() {
            if work_index.insert(work.id, i).is_some() {
                return Err(CorpusError::DuplicateId {
                    kind: "work",
                    id: work.id,
                });
            }
        }

        let mut unit_ids = HashSet::new();
        for unit in document.works.iter().flat_map(|w| w.units.iter()) {
            if !unit_ids.insert(unit.id) {
                return Err(CorpusError::DuplicateId {
                    kind: "unit",
                    id: unit.id,
                });
            }
        }

        let mut references: HashMap<u64, Vec<u64>> = HashMap::new();
        for reference in &document.references {
            references
                .entry(reference.unit_id)
                .or_default()
                .push(reference.bible_verse_id);
        }

        debug!(
            works = document.works.len(),
            units = unit_ids.len(),
            references = document.references.len(),
            verses = document.verses.len(),
            "indexed corpus"
        );

        Ok(JsonCorpus {
            works: document.works,
            work_index,
            references,
            books: index_by_id(document.books, "book", |b| b.id)?,
            chapters: index_by_id(document.chapters, "chapter", |c| c.id)?,
            verses: index_by_id(document.verses, "verse", |v| v.id)?,
        })
    }

    fn citation(&self, verse_id: u64, translation: &str) -> Option<Citation> {
        let Some(verse) = self.verses.get(&verse_id) else {
            warn!(verse_id, "reference to unknown verse skipped");
            return None;
        };
        let Some(chapter) = self.chapters.get(&verse.chapter_id) else {
            warn!(verse_id, chapter_id = verse.chapter_id, "verse in unknown chapter skipped");
            return None;
        };
        let Some(book) = self.books.get(&chapter.book_id) else {
            warn!(verse_id, book_id = chapter.book_id, "verse in unknown book skipped");
            return None;
        };

        Some(Citation {
            book: book.canonical_name.clone(),
            chapter: chapter.chapter_number,
            verse: verse.verse_number,
            text: verse_text(&verse.text_segments, translation),
            canonical_order_index: verse.canonical_order_index,
        })
    }
}

impl Corpus for JsonCorpus {
    fn list_works(&self) -> Vec<&Work> {
        self.works.iter().collect()
    }

    fn work_by_id(&self, id: u64) -> Option<&Work> {
        self.work_index.get(&id).map(|&i| &self.works[i])
    }

    fn citations_for(&self, unit_id: u64, translation: &str) -> Vec<Citation> {
        self.references
            .get(&unit_id)
            .map(|verse_ids| {
                verse_ids
                    .iter()
                    .filter_map(|&id| self.citation(id, translation))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Loads a corpus from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid corpus
/// document, or repeats an id.
pub fn load_corpus(path: &Path) -> Result<JsonCorpus, CorpusError> {
    let content = fs::read_to_string(path)?;
    parse_corpus(&content)
}

/// Parses a corpus from JSON text. Blank input is an empty corpus.
pub fn parse_corpus(content: &str) -> Result<JsonCorpus, CorpusError> {
    if content.trim().is_empty() {
        return Ok(JsonCorpus::default());
    }
    let document: CorpusDocument = serde_json::from_str(content)?;
    JsonCorpus::from_document(document)
}
