//! Fluid typography, safe-area spacing, interaction, media-object and print
//! utilities.

use tracing::{debug, warn};

use super::table;
use crate::config::FontSize;
use crate::engine::{AxisConfig, RuleEngine, UtilityTable};
use crate::options::{Breakpoints, MediaCondition, Options};
use crate::stylesheet::Stylesheet;

const MIN_VIEWPORT_REM: f64 = 20.0;
const MAX_VIEWPORT_REM: f64 = 80.0;

/// Splits `0.875rem` into `(0.875, "rem")`.
fn split_length(value: &str) -> Option<(f64, &str)> {
    let value = value.trim();
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(value.len());
    let number = value[..end].parse().ok()?;
    Some((number, &value[end..]))
}

fn number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{rounded}")
}

/// A `clamp()` that grows from `min` to `1.5 × min` between 20rem and 80rem
/// viewports.
pub fn fluid_size(min: &str) -> Option<String> {
    let (size, unit) = split_length(min)?;
    let max = size * 1.5;
    Some(format!(
        "clamp({min}{unit}, {min}{unit} + {diff} * ((100vw - {low}rem) / {span}), {max}{unit})",
        min = number(size),
        diff = number(max - size),
        low = MIN_VIEWPORT_REM,
        span = MAX_VIEWPORT_REM - MIN_VIEWPORT_REM,
        max = number(max),
    ))
}

fn fluid_typography(options: &Options) -> UtilityTable {
    let mut utilities = UtilityTable::new();
    for (name, font) in options.font_sizes() {
        if !matches!(font, FontSize::WithMetrics(..)) {
            continue;
        }
        match fluid_size(font.size()) {
            Some(value) => utilities.insert(format!("text-fluid-{name}"), value),
            None => warn!(size = font.size(), name = %name, "font size is not a length; no fluid variant"),
        }
    }
    utilities
}

fn print_breakpoints() -> Breakpoints {
    Breakpoints::from_iter([("print".to_string(), MediaCondition::Raw("print".into()))])
}

pub fn generate(options: &Options, out: &mut Stylesheet) {
    let engine = RuleEngine::new(options);

    if options.features().fluid_typography {
        engine.expand(&["font-size"], &fluid_typography(options), AxisConfig::NONE, out);
    } else {
        debug!("fluidTypography feature is off; skipping fluid font sizes");
    }

    let spacing = table(&[
        ("space-safe-top", "env(safe-area-inset-top)"),
        ("space-safe-right", "env(safe-area-inset-right)"),
        ("space-safe-bottom", "env(safe-area-inset-bottom)"),
        ("space-safe-left", "env(safe-area-inset-left)"),
        ("space-viewport-sm", "min(2rem, 5vw)"),
        ("space-viewport-md", "min(4rem, 8vw)"),
        ("space-viewport-lg", "min(6rem, 12vw)"),
    ]);
    engine.expand(&["padding", "margin"], &spacing, AxisConfig::RESPONSIVE, out);

    let interaction = [
        (
            "user-select",
            table(&[
                ("select-none", "none"),
                ("select-text", "text"),
                ("select-all", "all"),
                ("select-auto", "auto"),
            ]),
        ),
        (
            "pointer-events",
            table(&[("pointer-none", "none"), ("pointer-auto", "auto")]),
        ),
        (
            "cursor",
            table(&[
                ("cursor-pointer", "pointer"),
                ("cursor-wait", "wait"),
                ("cursor-text", "text"),
                ("cursor-move", "move"),
                ("cursor-help", "help"),
                ("cursor-not-allowed", "not-allowed"),
            ]),
        ),
    ];
    for (property, utilities) in &interaction {
        engine.expand(&[*property], utilities, AxisConfig::INTERACTIVE, out);
    }

    let aspect = table(&[
        ("aspect-square", "1 / 1"),
        ("aspect-video", "16 / 9"),
        ("aspect-photo", "4 / 3"),
        ("aspect-auto", "auto"),
    ]);
    engine.expand(&["aspect-ratio"], &aspect, AxisConfig::RESPONSIVE, out);

    let object = table(&[
        ("object-contain", "contain"),
        ("object-cover", "cover"),
        ("object-fill", "fill"),
        ("object-none", "none"),
        ("object-scale-down", "scale-down"),
    ]);
    engine.expand(&["object-fit"], &object, AxisConfig::RESPONSIVE, out);

    let print = table(&[
        ("hidden", "none"),
        ("block", "block"),
        ("inline", "inline"),
        ("flex", "flex"),
    ]);
    RuleEngine::with_breakpoints(options, print_breakpoints()).expand(
        &["display"],
        &print,
        AxisConfig::RESPONSIVE,
        out,
    );
}
