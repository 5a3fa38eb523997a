//! Request-level views over a corpus.
//!
//! Each view composes the engine the same way: resolve the slug, locate the
//! unit with the navigator, parse its text, then cluster its citations.

use serde::Serialize;
use tracing::debug;

use crate::content::{parse_primary_secondary, parse_unit_display};
use crate::corpus::Corpus;
use crate::error::EngineError;
use crate::model::{ProofTextGroup, Unit, Work};
use crate::navigator::UnitTree;
use crate::proof_texts::cluster_proof_texts;
use crate::slug::Slugger;

/// A work as listed in the library index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkSummary {
    pub slug: String,
    pub title: String,
    pub author: Option<String>,
    #[serde(rename = "type")]
    pub work_type: &'static str,
    pub tradition: Option<String>,
    pub unit_count: usize,
    pub page_count: usize,
}

/// One top-level unit in a work outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub number: u32,
    pub display_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkOutline {
    #[serde(flatten)]
    pub summary: WorkSummary,
    pub units: Vec<OutlineEntry>,
}

/// A top-level unit with its text and proof texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitView {
    pub number: u32,
    pub title: Option<String>,
    pub display_text: String,
    pub primary_text: String,
    pub secondary_text: String,
    pub proof_texts: Vec<ProofTextGroup>,
}

/// A book page with its chapter context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub number: u32,
    pub title: Option<String>,
    pub display_text: String,
    pub primary_text: String,
    pub secondary_text: String,
    pub chapter_number: Option<u32>,
    pub chapter_title: Option<String>,
    pub proof_texts: Vec<ProofTextGroup>,
}

/// Ties a corpus to a slugger.
pub struct Library<'a, C: Corpus> {
    corpus: &'a C,
    slugger: &'a Slugger,
}

impl<'a, C: Corpus> Library<'a, C> {
    pub fn new(corpus: &'a C, slugger: &'a Slugger) -> Self {
        Library { corpus, slugger }
    }

    fn summary(&self, work: &Work) -> WorkSummary {
        let tree = UnitTree::new(&work.units);
        WorkSummary {
            slug: self.slugger.slug_for_title(&work.title),
            title: work.title.clone(),
            author: work.author.clone(),
            work_type: work.work_type.as_str(),
            tradition: work.tradition.clone(),
            unit_count: tree.top_level_units().len(),
            page_count: tree.total_page_count(),
        }
    }

    /// Summaries of every work in stored order.
    pub fn work_summaries(&self) -> Vec<WorkSummary> {
        self.corpus
            .list_works()
            .into_iter()
            .map(|w| self.summary(w))
            .collect()
    }

    /// Finds the work a slug refers to.
    pub fn resolve_work(&self, slug: &str) -> Result<&'a Work, EngineError> {
        let works = self.corpus.list_works();
        let titles: Vec<&str> = works.iter().map(|w| w.title.as_str()).collect();
        let title = self.slugger.resolve_slug(slug, &titles)?;
        debug!(slug, title = %title, "resolved slug");

        works
            .into_iter()
            .find(|w| w.title == title)
            .and_then(|w| self.corpus.work_by_id(w.id))
            .ok_or_else(|| EngineError::NotFound(format!("no work titled '{}'", title)))
    }

    /// Top-level units of a work with their display excerpts.
    pub fn work_outline(&self, slug: &str) -> Result<WorkOutline, EngineError> {
        let work = self.resolve_work(slug)?;
        let tree = UnitTree::new(&work.units);

        let units = tree
            .top_level_units()
            .into_iter()
            .map(|unit| {
                let display = parse_unit_display(work, unit);
                OutlineEntry {
                    number: unit.position_index,
                    display_text: display.display_text,
                    first_page: display.first_page,
                }
            })
            .collect();

        Ok(WorkOutline {
            summary: self.summary(work),
            units,
        })
    }

    fn proof_texts(&self, unit: &Unit, translation: &str) -> Vec<ProofTextGroup> {
        cluster_proof_texts(&self.corpus.citations_for(unit.id, translation))
    }

    /// The top-level unit numbered `number`.
    pub fn unit_view(
        &self,
        slug: &str,
        number: i64,
        translation: &str,
    ) -> Result<UnitView, EngineError> {
        let work = self.resolve_work(slug)?;
        let unit = UnitTree::new(&work.units).find_unit_by_position(number)?;
        let display = parse_unit_display(work, unit);
        let text = parse_primary_secondary(&unit.content_text);

        Ok(UnitView {
            number: unit.position_index,
            title: unit.title.clone(),
            display_text: display.display_text,
            primary_text: text.primary_text,
            secondary_text: text.secondary_text,
            proof_texts: self.proof_texts(unit, translation),
        })
    }

    /// The page numbered `number`, with the chapter it belongs to.
    pub fn page_view(
        &self,
        slug: &str,
        number: i64,
        translation: &str,
    ) -> Result<PageView, EngineError> {
        let work = self.resolve_work(slug)?;
        let tree = UnitTree::new(&work.units);
        let page = tree.find_page_by_position(number)?;
        let chapter = tree.parent_of(page);
        let display = parse_unit_display(work, page);
        let text = parse_primary_secondary(&page.content_text);

        Ok(PageView {
            number: page.position_index,
            title: page.title.clone(),
            display_text: display.display_text,
            primary_text: text.primary_text,
            secondary_text: text.secondary_text,
            chapter_number: chapter.map(|c| c.position_index),
            chapter_title: chapter.and_then(|c| c.title.clone()),
            proof_texts: self.proof_texts(page, translation),
        })
    }
}
