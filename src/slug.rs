//! Work slugs.
//!
//! A slug is either curated (an entry in the override table supplied at
//! construction) or derived from the title with [`slugify`]. A curated entry
//! wins whenever its title is among the titles being resolved against.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A curated slug for an exact work title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugOverride {
    pub slug: String,
    pub title: String,
}

impl SlugOverride {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        SlugOverride {
            slug: slug.into(),
            title: title.into(),
        }
    }
}

fn non_slug_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Derives a slug from a title.
///
/// Lower-cases the title, collapses every run of characters outside
/// `[a-z0-9]` into one hyphen and trims hyphens from both ends.
///
/// # Examples
///
/// ```
/// use catechize::slugify;
///
/// assert_eq!(slugify("Westminster Shorter Catechism"), "westminster-shorter-catechism");
/// assert_eq!(slugify("The Apostles' Creed"), "the-apostles-creed");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    non_slug_run()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Maps between slugs and work titles.
#[derive(Debug, Clone, Default)]
pub struct Slugger {
    overrides: Vec<SlugOverride>,
}

impl Slugger {
    /// Creates a slugger over an ordered override table.
    ///
    /// Several slugs may point at the same title (accepted spellings); the
    /// first entry for a title is its canonical slug.
    pub fn new(overrides: Vec<SlugOverride>) -> Self {
        Slugger { overrides }
    }

    pub fn overrides(&self) -> &[SlugOverride] {
        &self.overrides
    }

    /// Resolves a slug to one of `candidate_titles`.
    ///
    /// The override table is consulted first; an entry only counts when its
    /// title is one of the candidates. Otherwise every candidate is
    /// slugified and compared; two or more distinct titles deriving the same
    /// slug is reported as [`EngineError::Ambiguous`].
    pub fn resolve_slug<S: AsRef<str>>(
        &self,
        slug: &str,
        candidate_titles: &[S],
    ) -> Result<String, EngineError> {
        let curated = self.overrides.iter().find(|o| {
            o.slug == slug && candidate_titles.iter().any(|t| t.as_ref() == o.title)
        });
        if let Some(entry) = curated {
            return Ok(entry.title.clone());
        }

        let mut matches: Vec<String> = Vec::new();
        for title in candidate_titles {
            let title = title.as_ref();
            if slugify(title) == slug && !matches.iter().any(|m| m == title) {
                matches.push(title.to_string());
            }
        }

        match matches.len() {
            0 => Err(EngineError::NotFound(format!("no work with slug '{}'", slug))),
            1 => Ok(matches.remove(0)),
            _ => Err(EngineError::Ambiguous {
                slug: slug.to_string(),
                titles: matches,
            }),
        }
    }

    /// Returns the public slug for a title: curated if listed, else derived.
    pub fn slug_for_title(&self, title: &str) -> String {
        self.overrides
            .iter()
            .find(|o| o.title == title)
            .map(|o| o.slug.clone())
            .unwrap_or_else(|| slugify(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slugger() -> Slugger {
        Slugger::new(vec![
            SlugOverride::new("apostles-creed", "The Apostles' Creed"),
            SlugOverride::new("apostles", "The Apostles' Creed"),
            SlugOverride::new("heidelberg", "Heidelberg Catechism"),
        ])
    }

    // --- slugify ---

    #[test]
    fn test_slugify_collapses_runs_and_trims() {
        assert_eq!(slugify("  The Nicene Creed (325)!  "), "the-nicene-creed-325");
        assert_eq!(slugify("Westminster -- Larger"), "westminster-larger");
    }

    #[test]
    fn test_slugify_only_punctuation_is_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_non_ascii_letters_become_hyphens() {
        assert_eq!(slugify("Confessio Belgicæ"), "confessio-belgic");
        assert_eq!(slugify("Über Glaube"), "ber-glaube");
    }

    #[test]
    fn test_slugify_output_charset_invariants() {
        let titles = [
            "Westminster Confession of Faith",
            "The Apostles' Creed",
            "--Canons of Dort--",
            "1689 London Baptist Confession",
            "A  B\tC\nD",
            "Q&A: 'Heidelberg'",
            "ÉGLISE réformée",
        ];
        for title in titles {
            let slug = slugify(title);
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected character in '{}'",
                slug
            );
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{}", slug);
            assert!(!slug.contains("--"), "{}", slug);
            assert_eq!(slugify(title), slug, "slugify must be deterministic");
            assert_eq!(slugify(&slug), slug);
        }
    }

    // --- resolve_slug ---

    #[test]
    fn test_resolve_slug_prefers_override() {
        // Given: an override slug that differs from the derived one
        let titles = ["The Apostles' Creed", "Heidelberg Catechism"];

        // When/Then: every accepted spelling resolves to the curated title
        assert_eq!(
            slugger().resolve_slug("apostles-creed", &titles).unwrap(),
            "The Apostles' Creed"
        );
        assert_eq!(
            slugger().resolve_slug("apostles", &titles).unwrap(),
            "The Apostles' Creed"
        );
    }

    #[test]
    fn test_resolve_slug_falls_back_to_derived() {
        let titles = ["Heidelberg Catechism", "Belgic Confession"];

        let result = slugger().resolve_slug("belgic-confession", &titles);

        assert_eq!(result.unwrap(), "Belgic Confession");
    }

    #[test]
    fn test_resolve_slug_derived_match_for_overridden_title_still_works() {
        let titles = ["Heidelberg Catechism"];

        let result = slugger().resolve_slug("heidelberg-catechism", &titles);

        assert_eq!(result.unwrap(), "Heidelberg Catechism");
    }

    #[test]
    fn test_resolve_slug_override_for_absent_title_falls_through() {
        // Given: "heidelberg-catechism" is curated for a title the candidates lack
        let slugger = Slugger::new(vec![SlugOverride::new(
            "heidelberg-catechism",
            "The Heidelberg Catechism",
        )]);
        let titles = ["Heidelberg Catechism"];

        // When: we resolve the slug the candidate title derives
        let result = slugger.resolve_slug("heidelberg-catechism", &titles);

        // Then: the derived match is used
        assert_eq!(result.unwrap(), "Heidelberg Catechism");
        assert_eq!(slugger.slug_for_title(titles[0]), "heidelberg-catechism");
    }

    #[test]
    fn test_resolve_slug_override_without_candidates_is_not_found() {
        let titles: [&str; 0] = [];

        let err = slugger().resolve_slug("apostles", &titles).unwrap_err();

        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[test]
    fn test_resolve_slug_not_found() {
        let titles = ["Heidelberg Catechism"];

        let err = slugger().resolve_slug("canons-of-dort", &titles).unwrap_err();

        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[test]
    fn test_resolve_slug_ambiguous_distinct_titles() {
        // Given: two distinct titles that derive the same slug
        let titles = ["Canons of Dort", "Canons of Dort!", "Belgic Confession"];

        // When: we resolve the shared slug
        let err = Slugger::default()
            .resolve_slug("canons-of-dort", &titles)
            .unwrap_err();

        // Then: resolution refuses to pick one
        assert_eq!(
            err,
            EngineError::Ambiguous {
                slug: "canons-of-dort".to_string(),
                titles: vec!["Canons of Dort".to_string(), "Canons of Dort!".to_string()],
            }
        );
    }

    #[test]
    fn test_resolve_slug_repeated_identical_title_is_not_ambiguous() {
        let titles = ["Canons of Dort", "Canons of Dort"];

        let result = Slugger::default().resolve_slug("canons-of-dort", &titles);

        assert_eq!(result.unwrap(), "Canons of Dort");
    }

    // --- slug_for_title ---

    #[test]
    fn test_slug_for_title_uses_first_curated_entry() {
        assert_eq!(slugger().slug_for_title("The Apostles' Creed"), "apostles-creed");
        assert_eq!(slugger().slug_for_title("Heidelberg Catechism"), "heidelberg");
    }

    #[test]
    fn test_slug_for_title_derives_when_not_curated() {
        assert_eq!(
            slugger().slug_for_title("Second Helvetic Confession"),
            "second-helvetic-confession"
        );
    }

    #[test]
    fn test_override_titles_round_trip() {
        let slugger = slugger();
        let all_titles: Vec<&str> = slugger.overrides().iter().map(|o| o.title.as_str()).collect();

        for entry in slugger.overrides() {
            let slug = slugger.slug_for_title(&entry.title);
            assert_eq!(slugger.resolve_slug(&slug, &all_titles).unwrap(), entry.title);
        }
    }
}
