//! Shared fixtures for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// A small corpus covering each literary form.
///
/// - The Westminster Shorter Catechism: Q/A units, Q1 cites Romans 11:36,
///   1 Corinthians 10:31, Psalm 73:25-26 (stored out of order)
/// - The Apostles' Creed: one prose article citing John 3:16 and 3:18
/// - Institutes: a book with two chapters and three pages
/// - Canons of Dort / Canons of Dort!: two titles deriving the same slug
///
/// Canonical order indexes follow the real canon loosely: Psalms < John <
/// Romans < 1 Corinthians.
pub const CORPUS: &str = r#"{
  "works": [
    {"id": 1, "title": "The Westminster Shorter Catechism", "author": "Westminster Assembly",
     "type": "catechism", "tradition": "Presbyterian", "units": [
      {"id": 101, "work_id": 1, "position_index": 1,
       "content_text": "Q. What is the chief end of man?\nA. Man's chief end is to glorify God, and to enjoy him for ever."},
      {"id": 102, "work_id": 1, "position_index": 2,
       "content_text": "Q. What rule hath God given to direct us how we may glorify and enjoy him?\nA. The Word of God."}
    ]},
    {"id": 2, "title": "The Apostles' Creed", "type": "creed", "units": [
      {"id": 201, "work_id": 2, "position_index": 1,
       "content_text": "I believe in God the Father Almighty, Maker of heaven and earth."}
    ]},
    {"id": 3, "title": "Institutes", "author": "John Calvin", "type": "book", "units": [
      {"id": 302, "work_id": 3, "position_index": 2, "type": "chapter",
       "title": "What it is to know God\nChapter Two", "content_text": ""},
      {"id": 301, "work_id": 3, "position_index": 1, "type": "chapter",
       "title": "The knowledge of God and of ourselves\nChapter One", "content_text": ""},
      {"id": 311, "work_id": 3, "parent_unit_id": 301, "position_index": 1, "type": "page",
       "title": "Page 1", "content_text": "Nearly all the wisdom we possess consists of two parts."},
      {"id": 312, "work_id": 3, "parent_unit_id": 301, "position_index": 2, "type": "page",
       "content_text": "Without knowledge of self there is no knowledge of God."},
      {"id": 321, "work_id": 3, "parent_unit_id": 302, "position_index": 3, "type": "page",
       "content_text": "By the knowledge of God I understand that by which we conceive there is a God."}
    ]},
    {"id": 4, "title": "Canons of Dort", "type": "confession", "units": []},
    {"id": 5, "title": "Canons of Dort!", "type": "confession", "units": []}
  ],
  "references": [
    {"unit_id": 101, "bible_verse_id": 4},
    {"unit_id": 101, "bible_verse_id": 5},
    {"unit_id": 101, "bible_verse_id": 1},
    {"unit_id": 101, "bible_verse_id": 2},
    {"unit_id": 201, "bible_verse_id": 3},
    {"unit_id": 201, "bible_verse_id": 6},
    {"unit_id": 321, "bible_verse_id": 4}
  ],
  "books": [
    {"id": 19, "canonical_name": "Psalms"},
    {"id": 43, "canonical_name": "John"},
    {"id": 45, "canonical_name": "Romans"},
    {"id": 46, "canonical_name": "1 Corinthians"}
  ],
  "chapters": [
    {"id": 1973, "book_id": 19, "chapter_number": 73},
    {"id": 4303, "book_id": 43, "chapter_number": 3},
    {"id": 4511, "book_id": 45, "chapter_number": 11},
    {"id": 4610, "book_id": 46, "chapter_number": 10}
  ],
  "verses": [
    {"id": 1, "canonical_order_index": 14951, "chapter_id": 1973, "verse_number": 25,
     "text_segments": [{"translation_abbreviation": "KJV", "content_text": "Whom have I in heaven but thee?"}]},
    {"id": 2, "canonical_order_index": 14952, "chapter_id": 1973, "verse_number": 26,
     "text_segments": [{"translation_abbreviation": "KJV", "content_text": "My flesh and my heart faileth:"},
                       {"translation_abbreviation": "KJV", "content_text": "but God is the strength of my heart."}]},
    {"id": 3, "canonical_order_index": 26137, "chapter_id": 4303, "verse_number": 16,
     "text_segments": [{"translation_abbreviation": "KJV", "content_text": "For God so loved the world,"}]},
    {"id": 6, "canonical_order_index": 26139, "chapter_id": 4303, "verse_number": 18,
     "text_segments": []},
    {"id": 4, "canonical_order_index": 28272, "chapter_id": 4511, "verse_number": 36,
     "text_segments": [{"translation_abbreviation": "KJV", "content_text": "For of him, and through him, and to him, are all things."}]},
    {"id": 5, "canonical_order_index": 28593, "chapter_id": 4610, "verse_number": 31,
     "text_segments": [{"translation_abbreviation": "ESV", "content_text": "So, whether you eat or drink, do all to the glory of God."}]}
  ]
}"#;

/// Writes `content` to a temporary file with the given extension.
pub fn create_temp_file(content: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(extension)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
