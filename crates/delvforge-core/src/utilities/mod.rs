//! Built-in utility categories.
//!
//! Each category is a plain function that builds its tables from the options
//! and feeds them through the [`RuleEngine`](crate::RuleEngine) with the axes
//! it needs. [`CATEGORIES`] fixes the order they run in; that order is part
//! of the output's cascade.

pub mod advanced;
pub mod align;
pub mod colors;
pub mod components;
pub mod containers;
pub mod enhanced;
pub mod flex;
pub mod grid;
pub mod sizing;
pub mod spacing;
pub mod transition;

use crate::engine::UtilityTable;
use crate::options::Options;
use crate::stylesheet::Stylesheet;

/// A utility category: appends its rules to the stylesheet.
pub type Category = fn(&Options, &mut Stylesheet);

/// Every built-in category, in emission order.
pub const CATEGORIES: &[(&str, Category)] = &[
    ("align", align::generate),
    ("color", colors::generate),
    ("flex", flex::generate),
    ("grid", grid::generate),
    ("spacing", spacing::generate),
    ("sizing", sizing::generate),
    ("transition", transition::generate),
    ("containers", containers::generate),
    ("components", components::generate),
    ("advanced", advanced::generate),
    ("enhanced", enhanced::generate),
    ("custom-properties", crate::variables::generate),
];

/// A literal table from static pairs.
pub(crate) fn table(pairs: &[(&str, &str)]) -> UtilityTable {
    pairs.iter().copied().collect()
}

/// `<prefix>-<key>` → CSS length for every entry of the spacing scale.
pub(crate) fn spacing_table(options: &Options, prefix: &str) -> UtilityTable {
    options
        .spacing_scale()
        .iter()
        .filter_map(|(key, value)| Some((format!("{prefix}-{key}"), value.to_css()?)))
        .collect()
}
