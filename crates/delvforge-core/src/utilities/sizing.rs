//! Width and height utilities.

use super::{spacing_table, table};
use crate::engine::{AxisConfig, RuleEngine, UtilityTable};
use crate::options::Options;
use crate::stylesheet::Stylesheet;

/// Fractional widths. Named as fractions so they never collide with
/// spacing-scale keys.
const FRACTIONS: &[(u32, u32)] = &[
    (1, 2),
    (1, 3),
    (2, 3),
    (1, 4),
    (3, 4),
    (1, 5),
    (2, 5),
    (3, 5),
    (4, 5),
    (1, 6),
    (5, 6),
];

fn percent(numerator: u32, denominator: u32) -> String {
    let value = f64::from(numerator) * 100.0 / f64::from(denominator);
    if value.fract() == 0.0 {
        format!("{value}%")
    } else {
        format!("{value:.6}%")
    }
}

fn widths(options: &Options) -> UtilityTable {
    let mut utilities = table(&[
        ("w-auto", "auto"),
        ("w-full", "100%"),
        ("w-screen", "100vw"),
        ("w-min", "min-content"),
        ("w-max", "max-content"),
        ("w-fit", "fit-content"),
    ]);
    utilities.extend(spacing_table(options, "w"));
    utilities.extend(
        FRACTIONS
            .iter()
            .map(|&(n, d)| (format!("w-{n}/{d}"), percent(n, d))),
    );
    utilities
}

fn heights(options: &Options) -> UtilityTable {
    let mut utilities = table(&[
        ("h-auto", "auto"),
        ("h-full", "100%"),
        ("h-screen", "100vh"),
        ("h-min", "min-content"),
        ("h-max", "max-content"),
        ("h-fit", "fit-content"),
    ]);
    utilities.extend(spacing_table(options, "h"));
    utilities
}

pub fn generate(options: &Options, out: &mut Stylesheet) {
    let engine = RuleEngine::new(options);
    engine.expand(&["width"], &widths(options), AxisConfig::RESPONSIVE, out);
    engine.expand(&["height"], &heights(options), AxisConfig::RESPONSIVE, out);
}
