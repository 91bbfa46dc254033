//! Margin, padding and gap utilities over the spacing scale.
//!
//! Every side is expanded with its own property list, so `mt-4` declares
//! only the top margin. With the `logicalProperties` feature the sides map to
//! block/inline properties instead of top/right/bottom/left.

use crate::engine::{AxisConfig, RuleEngine, UtilityTable};
use crate::options::Options;
use crate::stylesheet::Stylesheet;

/// Class letter suffix and the properties it sets.
fn sides(property: &str, logical: bool) -> Vec<(&'static str, Vec<String>)> {
    let props = |names: &[&str]| -> Vec<String> {
        names.iter().map(|side| format!("{property}-{side}")).collect()
    };
    if logical {
        vec![
            ("", vec![property.to_string()]),
            ("t", props(&["block-start"])),
            ("r", props(&["inline-end"])),
            ("b", props(&["block-end"])),
            ("l", props(&["inline-start"])),
            ("x", props(&["inline"])),
            ("y", props(&["block"])),
        ]
    } else {
        vec![
            ("", vec![property.to_string()]),
            ("t", props(&["top"])),
            ("r", props(&["right"])),
            ("b", props(&["bottom"])),
            ("l", props(&["left"])),
            ("x", props(&["left", "right"])),
            ("y", props(&["top", "bottom"])),
        ]
    }
}

fn negate(value: &str) -> String {
    match value.strip_prefix('-') {
        Some(positive) => positive.to_string(),
        None => format!("-{value}"),
    }
}

fn expand_sides(
    engine: &RuleEngine<'_>,
    letter: &str,
    property: &str,
    negative_and_auto: bool,
    out: &mut Stylesheet,
) {
    let options = engine.options();
    let scale: Vec<(&String, String)> = options
        .spacing_scale()
        .iter()
        .filter_map(|(key, value)| Some((key, value.to_css()?)))
        .collect();

    for (side, properties) in sides(property, options.features().logical_properties) {
        let class = format!("{letter}{side}");
        let mut utilities: UtilityTable = scale
            .iter()
            .map(|(key, css)| (format!("{class}-{key}"), css.as_str()))
            .collect();

        if negative_and_auto {
            utilities.extend(
                scale
                    .iter()
                    .filter(|(key, _)| key.as_str() != "0")
                    .map(|(key, css)| (format!("-{class}-{key}"), negate(css))),
            );
            utilities.insert(format!("{class}-auto"), "auto");
        }

        let properties: Vec<&str> = properties.iter().map(String::as_str).collect();
        engine.expand(&properties, &utilities, AxisConfig::RESPONSIVE, out);
    }
}

pub fn generate(options: &Options, out: &mut Stylesheet) {
    let engine = RuleEngine::new(options);

    expand_sides(&engine, "m", "margin", true, out);
    expand_sides(&engine, "p", "padding", false, out);

    for (class, property) in [("gap", "gap"), ("gap-x", "column-gap"), ("gap-y", "row-gap")] {
        let utilities = super::spacing_table(options, class);
        engine.expand(&[property], &utilities, AxisConfig::RESPONSIVE, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, TokenTable, TokenValue};

    fn options(logical: bool) -> Options {
        let mut spacing = TokenTable::new();
        spacing.insert("0".into(), TokenValue::Number(0.0));
        spacing.insert("4".into(), TokenValue::Number(1.0));
        spacing.insert("px".into(), TokenValue::from("1px"));
        let mut config = Config {
            spacing,
            ..Config::empty()
        };
        config.features.logical_properties = logical;
        Options::resolve(config).unwrap()
    }

    fn properties<'a>(sheet: &'a Stylesheet, selector: &str) -> Vec<&'a str> {
        sheet
            .find(selector)
            .unwrap()
            .declarations()
            .iter()
            .map(|d| d.property.as_str())
            .collect()
    }

    #[test]
    fn test_each_side_sets_only_its_property() {
        let mut sheet = Stylesheet::new();
        generate(&options(false), &mut sheet);

        assert_eq!(properties(&sheet, ".df-m-4"), ["margin"]);
        assert_eq!(properties(&sheet, ".df-mt-4"), ["margin-top"]);
        assert_eq!(properties(&sheet, ".df-mx-4"), ["margin-left", "margin-right"]);
        assert_eq!(properties(&sheet, ".df-py-px"), ["padding-top", "padding-bottom"]);
        assert_eq!(properties(&sheet, ".df-gap-x-4"), ["column-gap"]);
    }

    #[test]
    fn test_logical_properties() {
        let mut sheet = Stylesheet::new();
        generate(&options(true), &mut sheet);

        assert_eq!(properties(&sheet, ".df-mt-4"), ["margin-block-start"]);
        assert_eq!(properties(&sheet, ".df-px-4"), ["padding-inline"]);
    }

    #[test]
    fn test_negative_and_auto_margins() {
        let mut sheet = Stylesheet::new();
        generate(&options(false), &mut sheet);

        let negative = sheet.find(".df--mt-4").unwrap();
        assert_eq!(negative.declarations()[0].value, "-1rem");
        assert_eq!(sheet.find(".df--m-px").unwrap().declarations()[0].value, "-1px");
        assert!(sheet.find(".df--m-0").is_none());
        assert_eq!(sheet.find(".df-mx-auto").unwrap().declarations()[1].value, "auto");
        assert!(sheet.find(".df-p-auto").is_none());
    }
}
