//! Slug override configuration.
//!
//! Overrides come from a TOML file:
//!
//! ```toml
//! [[slug]]
//! slug = "apostles-creed"
//! title = "The Apostles' Creed"
//! ```
//!
//! or, when no file is given, from the built-in table.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::slug::{SlugOverride, Slugger};

/// Errors that can occur when loading slug configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Entry {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}

#[derive(Debug, Deserialize)]
struct SlugConfigFile {
    #[serde(default)]
    slug: Vec<SlugOverride>,
}

/// Curated slugs for titles whose derived slug is awkward, plus accepted
/// alternate spellings. Earlier entries are the canonical slug of a title.
const BUILTIN_OVERRIDES: &[(&str, &str)] = &[
    ("apostles-creed", "The Apostles' Creed"),
    ("apostles", "The Apostles' Creed"),
    ("nicene-creed", "The Nicene Creed"),
    ("athanasian-creed", "The Athanasian Creed"),
    ("heidelberg-catechism", "The Heidelberg Catechism"),
    ("heidelberg", "The Heidelberg Catechism"),
    ("westminster-shorter-catechism", "The Westminster Shorter Catechism"),
    ("wsc", "The Westminster Shorter Catechism"),
    ("westminster-larger-catechism", "The Westminster Larger Catechism"),
    ("wlc", "The Westminster Larger Catechism"),
    ("westminster-confession", "The Westminster Confession of Faith"),
    ("wcf", "The Westminster Confession of Faith"),
    ("canons-of-dort", "The Canons of Dort"),
    ("canons-of-dordt", "The Canons of Dort"),
    ("spurgeons-catechism", "Spurgeon's Catechism"),
];

/// Returns the built-in override table.
pub fn builtin_overrides() -> Vec<SlugOverride> {
    BUILTIN_OVERRIDES
        .iter()
        .map(|(slug, title)| SlugOverride::new(*slug, *title))
        .collect()
}

/// Parses an override table from TOML text.
pub fn parse_slug_config(content: &str) -> Result<Vec<SlugOverride>, ConfigError> {
    let file: SlugConfigFile = toml::from_str(content)?;
    for (index, entry) in file.slug.iter().enumerate() {
        if entry.slug.trim().is_empty() {
            return Err(ConfigError::EmptyField { index, field: "slug" });
        }
        if entry.title.trim().is_empty() {
            return Err(ConfigError::EmptyField { index, field: "title" });
        }
    }
    Ok(file.slug)
}

/// Loads an override table from a TOML file.
pub fn load_slug_config(path: &Path) -> Result<Vec<SlugOverride>, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_slug_config(&content)
}

/// Builds a slugger from an optional config file, falling back to the
/// built-in table.
pub fn slugger_from(path: Option<&Path>) -> Result<Slugger, ConfigError> {
    let overrides = match path {
        Some(path) => load_slug_config(path)?,
        None => builtin_overrides(),
    };
    Ok(Slugger::new(overrides))
}
