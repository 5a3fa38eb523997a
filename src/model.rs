//! Corpus data model.
//!
//! Everything here is read-only input to the engine, fetched per request by
//! a [`Corpus`](crate::corpus::Corpus) implementation, plus the proof-text
//! output types the clusterer builds.

use serde::{Deserialize, Serialize};

/// Literary form of a work. Selects how unit display text is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    Catechism,
    Creed,
    Confession,
    Book,
    #[serde(other)]
    Other,
}

impl WorkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Catechism => "catechism",
            WorkType::Creed => "creed",
            WorkType::Confession => "confession",
            WorkType::Book => "book",
            WorkType::Other => "other",
        }
    }
}

/// A single catechism, creed, confession or book, with its unit forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    #[serde(default)]
    pub tradition: Option<String>,
    #[serde(default)]
    pub units: Vec<Unit>,
}

/// An addressable division of a work: a question, article, chapter or page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: u64,
    pub work_id: u64,
    #[serde(default)]
    pub parent_unit_id: Option<u64>,
    /// The public-facing "number" of the unit within its scope.
    pub position_index: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content_text: String,
    #[serde(default, rename = "type")]
    pub unit_type: Option<String>,
}

impl Unit {
    /// Unit type marking a book page beneath a chapter.
    pub const PAGE: &'static str = "page";

    pub fn is_top_level(&self) -> bool {
        self.parent_unit_id.is_none()
    }

    pub fn is_page(&self) -> bool {
        self.unit_type.as_deref() == Some(Self::PAGE)
    }
}

/// A unit citing a verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub unit_id: u64,
    pub bible_verse_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleBook {
    pub id: u64,
    pub canonical_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u64,
    pub book_id: u64,
    pub chapter_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleVerse {
    pub id: u64,
    /// Strictly increasing across the whole canon (book, chapter, verse).
    pub canonical_order_index: u64,
    pub chapter_id: u64,
    pub verse_number: u32,
    #[serde(default)]
    pub text_segments: Vec<TextSegment>,
}

/// A verse's text in one translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    pub translation_abbreviation: String,
    pub content_text: String,
}

/// A reference joined to its verse, chapter, book and translated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub canonical_order_index: u64,
}

/// One verse inside a proof-text group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofTextReference {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl From<&Citation> for ProofTextReference {
    fn from(citation: &Citation) -> Self {
        ProofTextReference {
            book: citation.book.clone(),
            chapter: citation.chapter,
            verse: citation.verse,
            text: citation.text.clone(),
        }
    }
}

/// A labelled cluster of citations from a single chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofTextGroup {
    /// Human-readable label, e.g. "Romans 8:28-30" or "John 3:16, 18".
    pub display_text: String,
    pub references: Vec<ProofTextReference>,
}
