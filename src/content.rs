//! Unit text parsing.
//!
//! Catechism units store a question and an answer as `Q.` / `A.` lines;
//! creeds, confessions and books store undivided prose. Book chapters and
//! pages carry a `Title\nSubtitle` title whose first line is shown.

use serde::Serialize;

use crate::model::{Unit, Work, WorkType};
use crate::navigator::UnitTree;

/// Longest display excerpt, in characters, before truncation.
pub const DISPLAY_LIMIT: usize = 150;

/// Appended to truncated display excerpts.
pub const ELLIPSIS: &str = "...";

/// Short display form of a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitDisplay {
    pub display_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page: Option<u32>,
}

/// Primary and secondary text of a unit (question and answer, or prose).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionAnswer {
    pub primary_text: String,
    pub secondary_text: String,
}

fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or("")
}

/// Cuts `text` to [`DISPLAY_LIMIT`] characters followed by [`ELLIPSIS`].
pub fn truncate_display(text: &str) -> String {
    if text.chars().count() <= DISPLAY_LIMIT {
        return text.to_string();
    }
    let mut out: String = text.chars().take(DISPLAY_LIMIT).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Builds the display excerpt of `unit` within `work`.
///
/// Titled units of books show the first line of their title; everything
/// else shows the first line of its content. `first_page` is the lowest
/// page number beneath the unit, if it has pages.
pub fn parse_unit_display(work: &Work, unit: &Unit) -> UnitDisplay {
    let source = match (&work.work_type, &unit.title) {
        (WorkType::Book, Some(title)) => first_line(title),
        _ => first_line(&unit.content_text),
    };

    UnitDisplay {
        display_text: truncate_display(source),
        first_page: UnitTree::new(&work.units).first_child_page(unit),
    }
}

/// Splits content into question and answer when both lines are present.
///
/// The split is decided from the text alone, regardless of the work type.
/// Without both a `Q.` and an `A.` line the whole raw text is primary and
/// secondary is empty.
///
/// # Examples
///
/// ```
/// use catechize::parse_primary_secondary;
///
/// let qa = parse_primary_secondary("Q. What is God?\nA. God is a Spirit.");
/// assert_eq!(qa.primary_text, "What is God?");
/// assert_eq!(qa.secondary_text, "God is a Spirit.");
///
/// let prose = parse_primary_secondary("I believe in God the Father Almighty.");
/// assert_eq!(prose.secondary_text, "");
/// ```
pub fn parse_primary_secondary(content_text: &str) -> QuestionAnswer {
    let question = content_text.lines().find(|l| l.starts_with("Q."));
    let answer = content_text.lines().find(|l| l.starts_with("A."));

    match (question, answer) {
        (Some(q), Some(a)) => QuestionAnswer {
            primary_text: q[2..].trim().to_string(),
            secondary_text: a[2..].trim().to_string(),
        },
        _ => QuestionAnswer {
            primary_text: content_text.to_string(),
            secondary_text: String::new(),
        },
    }
}
