//! CSS custom property emission.
//!
//! Token trees flatten depth first: a leaf at path `[a, b, c]` becomes
//! `--<prefix>a-b-c: <value>`. Leaves are stringified as they are stored;
//! numbers get no unit here.
//!
//! ```rust
//! use delvforge_core::config::{TokenTable, TokenValue};
//! use delvforge_core::variables::custom_properties;
//! use delvforge_core::Options;
//!
//! let mut shades = TokenTable::new();
//! shades.insert("500".into(), "#2196f3".into());
//! let mut tokens = TokenTable::new();
//! tokens.insert("primary".into(), TokenValue::Group(shades));
//! tokens.insert("gap".into(), TokenValue::Number(0.5));
//!
//! let rule = custom_properties(":root", &tokens, &Options::default());
//! assert_eq!(rule.declaration("--df-primary-500").unwrap().value, "#2196f3");
//! assert_eq!(rule.declaration("--df-gap").unwrap().value, "0.5");
//! ```

use tracing::debug;

use crate::config::{TokenTable, TokenValue};
use crate::options::Options;
use crate::selector::{escape_class, SelectorBuilder};
use crate::stylesheet::{Declaration, StyleRule, Stylesheet};

/// Flattens `tokens` into `(dash-joined path, raw value)` pairs.
pub fn flatten_tokens(tokens: &TokenTable) -> Vec<(String, String)> {
    let mut out = Vec::new();
    flatten_into(tokens, &mut Vec::new(), &mut out);
    out
}

fn flatten_into<'a>(
    tokens: &'a TokenTable,
    path: &mut Vec<&'a str>,
    out: &mut Vec<(String, String)>,
) {
    for (key, value) in tokens {
        path.push(key);
        match value {
            TokenValue::Group(group) => flatten_into(group, path, out),
            leaf => {
                if let Some(raw) = leaf.to_raw() {
                    out.push((path.join("-"), raw));
                }
            }
        }
        path.pop();
    }
}

/// The custom property name for a flattened token path.
///
/// Characters that are not valid in an identifier (the `.` of `0.5`) are
/// escaped.
pub fn property_name(options: &Options, path: &str) -> String {
    escape_class(&options.css_variable(path))
}

/// One rule under `selector` declaring every leaf of `tokens`.
pub fn custom_properties(selector: &str, tokens: &TokenTable, options: &Options) -> StyleRule {
    flatten_tokens(tokens)
        .into_iter()
        .fold(StyleRule::new(selector), |rule, (path, value)| {
            rule.with(Declaration::new(property_name(options, &path), value))
        })
}

fn table(pairs: &[(&str, &str)]) -> TokenTable {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), TokenValue::from(*v)))
        .collect()
}

fn utility_tokens() -> TokenTable {
    let mut tokens = TokenTable::new();
    tokens.insert(
        "shadow".into(),
        table(&[
            ("xs", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
            ("sm", "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)"),
            ("DEFAULT", "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)"),
            ("md", "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)"),
            ("lg", "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)"),
            ("xl", "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)"),
            ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
            ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
            ("none", "0 0 #0000"),
        ])
        .into(),
    );
    tokens.insert(
        "radius".into(),
        table(&[
            ("none", "0px"),
            ("sm", "0.125rem"),
            ("DEFAULT", "0.25rem"),
            ("md", "0.375rem"),
            ("lg", "0.5rem"),
            ("xl", "0.75rem"),
            ("2xl", "1rem"),
            ("3xl", "1.5rem"),
            ("full", "9999px"),
        ])
        .into(),
    );
    tokens.insert(
        "transition".into(),
        table(&[
            ("none", "none"),
            ("all", "all 150ms cubic-bezier(0.4, 0, 0.2, 1)"),
            ("DEFAULT", "color, background-color, border-color, text-decoration-color, fill, stroke, opacity, box-shadow, transform, filter, backdrop-filter 150ms cubic-bezier(0.4, 0, 0.2, 1)"),
            ("colors", "color, background-color, border-color, text-decoration-color, fill, stroke 150ms cubic-bezier(0.4, 0, 0.2, 1)"),
            ("opacity", "opacity 150ms cubic-bezier(0.4, 0, 0.2, 1)"),
            ("shadow", "box-shadow 150ms cubic-bezier(0.4, 0, 0.2, 1)"),
            ("transform", "transform 150ms cubic-bezier(0.4, 0, 0.2, 1)"),
        ])
        .into(),
    );
    tokens.insert(
        "z-index".into(),
        table(&[
            ("0", "0"),
            ("10", "10"),
            ("20", "20"),
            ("30", "30"),
            ("40", "40"),
            ("50", "50"),
            ("auto", "auto"),
        ])
        .into(),
    );
    tokens
}

/// Spacing, font sizes, breakpoints and the global palettes, as one tree.
fn base_tokens(options: &Options) -> TokenTable {
    let mut tokens = TokenTable::new();
    tokens.insert("spacing".into(), options.spacing_scale().clone().into());
    tokens.insert(
        "fontSize".into(),
        options
            .font_sizes()
            .iter()
            .map(|(name, size)| (name.clone(), TokenValue::from(size.size())))
            .collect::<TokenTable>()
            .into(),
    );
    tokens.insert(
        "breakpoint".into(),
        options
            .breakpoints()
            .iter()
            .map(|(name, condition)| (name.clone(), TokenValue::from(condition.value())))
            .collect::<TokenTable>()
            .into(),
    );
    tokens.extend(options.colors().clone());
    tokens
}

/// Emits the custom property rules: global tokens, one rule per theme with
/// colors, then the shadow/radius/transition/z-index scales.
pub fn generate(options: &Options, out: &mut Stylesheet) {
    if !options.features().custom_properties {
        debug!("customProperties feature is off; skipping custom properties");
        return;
    }

    out.push_rule(custom_properties(":root", &base_tokens(options), options));

    let selectors = SelectorBuilder::from_options(options);
    let resolver = options.theme_resolver();
    for (_, theme, variant) in resolver.entries() {
        if theme.colors.is_empty() {
            continue;
        }
        let mut rule = custom_properties(&selectors.theme_root(variant), &theme.colors, options);
        if let Some(radius) = &theme.border_radius {
            rule.push(Declaration::new(
                property_name(options, "border-radius"),
                radius.as_str(),
            ));
        }
        if let Some(scheme) = &theme.color_scheme {
            rule.push(Declaration::new("color-scheme", scheme.as_str()));
        }
        out.push_rule(rule);
    }

    out.push_rule(custom_properties(":root", &utility_tokens(), options));
}
