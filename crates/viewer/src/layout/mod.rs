//! Assembly layout: bounds, explode offsets and label-driven colors

pub mod bounds;
pub mod explode;
pub mod palette;

pub use bounds::{compute_bounds, Bounds};
pub use explode::{explode_offset, DEFAULT_EXPLODE_DISTANCE};
pub use palette::{panel_color, DEFAULT_PANEL_COLOR};

/// Case-insensitive predicate on a panel label.
///
/// Rule tables are scanned top to bottom and the first match wins, so the
/// order of a table is part of its meaning.
#[derive(Debug, Clone, Copy)]
pub enum LabelRule {
    /// Label contains any of the (lowercase) needles
    Contains(&'static [&'static str]),
    /// Label equals the (lowercase) word
    Equals(&'static str),
}

impl LabelRule {
    /// `lowered` must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            LabelRule::Contains(needles) => needles.iter().any(|n| lowered.contains(n)),
            LabelRule::Equals(word) => lowered == *word,
        }
    }
}

/// First value in `table` whose rule matches `label`.
pub fn first_match<T: Copy>(table: &[(LabelRule, T)], label: &str) -> Option<T> {
    let lowered = label.to_lowercase();
    table
        .iter()
        .find(|(rule, _)| rule.matches(&lowered))
        .map(|(_, value)| *value)
}
