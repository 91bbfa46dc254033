//! Transition property, duration and easing utilities.

use super::table;
use crate::engine::{AxisConfig, RuleEngine, UtilityTable};
use crate::options::Options;
use crate::stylesheet::Stylesheet;

pub fn generate(options: &Options, out: &mut Stylesheet) {
    let engine = RuleEngine::new(options);
    let animations = options.animations();

    let properties = table(&[
        ("transition-none", "none"),
        ("transition-all", "all"),
        (
            "transition",
            "color, background-color, border-color, text-decoration-color, fill, stroke, opacity, box-shadow, transform, filter, backdrop-filter",
        ),
        (
            "transition-colors",
            "color, background-color, border-color, text-decoration-color, fill, stroke",
        ),
        ("transition-opacity", "opacity"),
        ("transition-shadow", "box-shadow"),
        ("transition-transform", "transform"),
    ]);
    engine.expand(&["transition-property"], &properties, AxisConfig::NONE, out);

    let durations: UtilityTable = animations
        .durations
        .iter()
        .map(|(name, value)| (format!("duration-{name}"), value))
        .collect();
    engine.expand(&["transition-duration"], &durations, AxisConfig::NONE, out);

    let easings: UtilityTable = animations
        .easings
        .iter()
        .map(|(name, value)| (format!("ease-{name}"), value))
        .collect();
    engine.expand(&["transition-timing-function"], &easings, AxisConfig::NONE, out);
}
