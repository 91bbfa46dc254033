//! Text, background and border color utilities.
//!
//! Palettes expand through the opacity variant expander; flat colors give one
//! entry. Theme-only tokens (`background`, `surface-100`, …) become computed
//! entries that resolve against the theme variant being generated and fall
//! back to the matching custom property.

use std::collections::HashSet;

use crate::color::color_variants;
use crate::config::{TokenTable, TokenValue};
use crate::engine::{AxisConfig, RuleEngine, UtilityTable, Value};
use crate::options::Options;
use crate::stylesheet::Stylesheet;

const SPECIALS: &[(&str, &str)] = &[
    ("inherit", "inherit"),
    ("current", "currentColor"),
    ("transparent", "transparent"),
    ("black", "#000000"),
    ("white", "#ffffff"),
];

fn collect_paths(tokens: &TokenTable, prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    for (key, value) in tokens {
        prefix.push(key.clone());
        match value {
            TokenValue::Group(group) => collect_paths(group, prefix, out),
            _ => out.push(prefix.clone()),
        }
        prefix.pop();
    }
}

/// Token paths declared by themes but absent from the global palette, in
/// first-seen order.
fn semantic_paths(options: &Options) -> Vec<Vec<String>> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();
    for theme in options.themes().values() {
        let mut theme_paths = Vec::new();
        collect_paths(&theme.colors, &mut Vec::new(), &mut theme_paths);
        for path in theme_paths {
            if options.colors().contains_key(&path[0]) {
                continue;
            }
            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }
    }
    paths
}

fn semantic_value(options: &Options, path: Vec<String>) -> Value {
    let variable = options.css_variable(&path.join("-"));
    Value::computed(move |theme, options| {
        let segments: Vec<&str> = path.iter().map(String::as_str).collect();
        options
            .theme_color(theme, &segments)
            .unwrap_or_else(|| format!("var({variable})"))
    })
}

/// The full color table for one utility prefix (`text`, `bg`, `border`).
pub fn color_table(options: &Options, prefix: &str) -> UtilityTable {
    let mut utilities = UtilityTable::new();

    for (name, value) in options.colors() {
        match value {
            TokenValue::Group(shades) => {
                utilities.extend(color_variants(shades, &format!("{prefix}-{name}")))
            }
            leaf => {
                if let Some(raw) = leaf.to_raw() {
                    utilities.insert(format!("{prefix}-{name}"), raw);
                }
            }
        }
    }

    for (name, value) in SPECIALS {
        utilities.insert(format!("{prefix}-{name}"), *value);
    }

    for path in semantic_paths(options) {
        let name = format!("{prefix}-{}", path.join("-"));
        utilities.insert(name, semantic_value(options, path));
    }

    utilities
}

pub fn generate(options: &Options, out: &mut Stylesheet) {
    let engine = RuleEngine::new(options);
    let axes = AxisConfig::INTERACTIVE.with_theme();

    for (prefix, property) in [("text", "color"), ("bg", "background-color"), ("border", "border-color")] {
        engine.expand(&[property], &color_table(options, prefix), axes, out);
    }
}
