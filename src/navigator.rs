//! Position lookup inside a work's unit tree.
//!
//! Units form two levels: top-level units (questions, articles, chapters)
//! and optional child pages beneath chapters. Positions are the 1-based
//! public numbers shown to readers.

use crate::error::EngineError;
use crate::model::Unit;

/// Parses a user-supplied position into a positive integer.
///
/// # Examples
///
/// ```
/// use catechize::navigator::parse_position;
///
/// assert_eq!(parse_position("12").unwrap(), 12);
/// assert!(parse_position("0").is_err());
/// assert!(parse_position("abc").is_err());
/// ```
pub fn parse_position(raw: &str) -> Result<u32, EngineError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(EngineError::InvalidArgument(format!(
            "position must be a positive integer, got '{}'",
            raw
        ))),
    }
}

fn validate(n: i64) -> Result<u32, EngineError> {
    if n < 1 {
        return Err(EngineError::InvalidArgument(format!(
            "position must be a positive integer, got {}",
            n
        )));
    }
    u32::try_from(n).map_err(|_| EngineError::NotFound(format!("no unit at position {}", n)))
}

/// Read-only view over a work's flat unit list.
#[derive(Debug, Clone, Copy)]
pub struct UnitTree<'a> {
    units: &'a [Unit],
}

impl<'a> UnitTree<'a> {
    pub fn new(units: &'a [Unit]) -> Self {
        UnitTree { units }
    }

    /// Units without a parent, ascending by position. Ties keep input order.
    pub fn top_level_units(&self) -> Vec<&'a Unit> {
        let mut top: Vec<&Unit> = self.units.iter().filter(|u| u.is_top_level()).collect();
        top.sort_by_key(|u| u.position_index);
        top
    }

    /// Children of `unit`, ascending by position.
    pub fn children_of(&self, unit: &Unit) -> Vec<&'a Unit> {
        let mut children: Vec<&Unit> = self
            .units
            .iter()
            .filter(|u| u.parent_unit_id == Some(unit.id))
            .collect();
        children.sort_by_key(|u| u.position_index);
        children
    }

    /// The unit directly above `unit`, if any.
    pub fn parent_of(&self, unit: &Unit) -> Option<&'a Unit> {
        let parent_id = unit.parent_unit_id?;
        self.units.iter().find(|u| u.id == parent_id)
    }

    /// Finds the top-level unit numbered `n`.
    pub fn find_unit_by_position(&self, n: i64) -> Result<&'a Unit, EngineError> {
        let position = validate(n)?;
        self.units
            .iter()
            .filter(|u| u.is_top_level())
            .find(|u| u.position_index == position)
            .ok_or_else(|| EngineError::NotFound(format!("no unit at position {}", n)))
    }

    /// Finds the page numbered `n`.
    pub fn find_page_by_position(&self, n: i64) -> Result<&'a Unit, EngineError> {
        let position = validate(n)?;
        self.units
            .iter()
            .filter(|u| u.is_page())
            .find(|u| u.position_index == position)
            .ok_or_else(|| EngineError::NotFound(format!("no page at position {}", n)))
    }

    /// Lowest page number beneath `unit`, if it has children.
    pub fn first_child_page(&self, unit: &Unit) -> Option<u32> {
        self.units
            .iter()
            .filter(|u| u.parent_unit_id == Some(unit.id))
            .map(|u| u.position_index)
            .min()
    }

    /// Number of child units across all top-level units.
    pub fn total_page_count(&self) -> usize {
        self.top_level_units()
            .iter()
            .map(|top| {
                self.units
                    .iter()
                    .filter(|u| u.parent_unit_id == Some(top.id))
                    .count()
            })
            .sum()
    }

    /// Count of addressable positions: pages when the work has any, else
    /// top-level units.
    pub fn addressable_count(&self) -> usize {
        match self.total_page_count() {
            0 => self.top_level_units().len(),
            pages => pages,
        }
    }
}
