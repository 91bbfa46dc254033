//! Text and vertical alignment.

use super::table;
use crate::engine::{AxisConfig, RuleEngine};
use crate::options::Options;
use crate::stylesheet::Stylesheet;

pub fn generate(options: &Options, out: &mut Stylesheet) {
    let engine = RuleEngine::new(options);

    let text_align = table(&[
        ("text-left", "left"),
        ("text-center", "center"),
        ("text-right", "right"),
        ("text-justify", "justify"),
        ("text-start", "start"),
        ("text-end", "end"),
    ]);
    engine.expand(&["text-align"], &text_align, AxisConfig::RESPONSIVE, out);

    let vertical_align = table(&[
        ("align-baseline", "baseline"),
        ("align-top", "top"),
        ("align-middle", "middle"),
        ("align-bottom", "bottom"),
        ("align-text-top", "text-top"),
        ("align-text-bottom", "text-bottom"),
        ("align-sub", "sub"),
        ("align-super", "super"),
    ]);
    engine.expand(&["vertical-align"], &vertical_align, AxisConfig::RESPONSIVE, out);
}
