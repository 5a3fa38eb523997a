//! Proof-text clustering.
//!
//! Citations are ordered by their canon-wide index and grouped chapter by
//! chapter. A group only closes when the book or chapter changes; a verse
//! gap inside a chapter switches the label from a range
//! (`Romans 8:28-30`) to a list (`John 3:16, 18`).

use crate::model::{Citation, ProofTextGroup, ProofTextReference, TextSegment};

/// Joins the segments of one translation with single spaces.
///
/// Returns an empty string when no segment matches.
pub fn verse_text(segments: &[TextSegment], translation: &str) -> String {
    segments
        .iter()
        .filter(|s| s.translation_abbreviation == translation)
        .map(|s| s.content_text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn single_label(first: &ProofTextReference) -> String {
    format!("{} {}:{}", first.book, first.chapter, first.verse)
}

fn range_label(references: &[ProofTextReference]) -> String {
    let first = &references[0];
    let last_verse = references[references.len() - 1].verse;
    let mut label = single_label(first);
    if last_verse > first.verse {
        label.push_str(&format!("-{}", last_verse));
    }
    label
}

fn list_label(references: &[ProofTextReference]) -> String {
    let first = &references[0];
    let verses: Vec<String> = references.iter().map(|r| r.verse.to_string()).collect();
    format!("{} {}:{}", first.book, first.chapter, verses.join(", "))
}

/// Groups citations into labelled proof texts.
///
/// # Examples
///
/// ```
/// use catechize::{cluster_proof_texts, Citation};
///
/// let cite = |verse: u32, order: u64| Citation {
///     book: "Romans".to_string(),
///     chapter: 8,
///     verse,
///     text: String::new(),
///     canonical_order_index: order,
/// };
///
/// let groups = cluster_proof_texts(&[cite(30, 3), cite(28, 1), cite(29, 2)]);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].display_text, "Romans 8:28-30");
/// ```
pub fn cluster_proof_texts(citations: &[Citation]) -> Vec<ProofTextGroup> {
    let mut ordered: Vec<&Citation> = citations.iter().collect();
    ordered.sort_by_key(|c| c.canonical_order_index);

    let mut groups: Vec<ProofTextGroup> = Vec::new();

    for citation in ordered {
        let reference = ProofTextReference::from(citation);

        let (same_chapter, consecutive) = match groups.last().and_then(|g| g.references.last()) {
            Some(last) => {
                let same_chapter =
                    last.book == reference.book && last.chapter == reference.chapter;
                (
                    same_chapter,
                    same_chapter && reference.verse.checked_sub(1) == Some(last.verse),
                )
            }
            None => (false, false),
        };

        match groups.last_mut().filter(|_| same_chapter) {
            Some(current) => {
                current.references.push(reference);
                current.display_text = if consecutive {
                    range_label(&current.references)
                } else {
                    list_label(&current.references)
                };
            }
            None => groups.push(ProofTextGroup {
                display_text: single_label(&reference),
                references: vec![reference],
            }),
        }
    }

    groups
}
