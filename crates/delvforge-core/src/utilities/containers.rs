//! Layout containers: max-width utilities, container-type utilities, the
//! `container` / `container-fluid` base classes with per-breakpoint widths,
//! and the container padding variables.

use tracing::debug;

use super::table;
use crate::engine::{parse_block, AxisConfig, DeclarationTable, RuleEngine, UtilityTable};
use crate::options::Options;
use crate::selector::SelectorBuilder;
use crate::stylesheet::{AtRuleBlock, Declaration, StyleRule, Stylesheet};
use crate::variables::property_name;

fn max_widths(options: &Options) -> UtilityTable {
    let mut utilities = table(&[("container-fluid", "100%")]);
    utilities.extend(
        options
            .containers()
            .iter()
            .map(|(size, width)| (format!("container-{size}"), width)),
    );
    utilities.extend(table(&[
        ("container-prose", "65ch"),
        ("container-narrow", "36rem"),
        ("container-wide", "80rem"),
        ("container-full", "100vw"),
    ]));
    utilities
}

fn container_blocks() -> DeclarationTable {
    [
        ("container-square", "aspect-ratio: 1 / 1; width: 100%"),
        ("container-video", "aspect-ratio: 16 / 9; width: 100%"),
        ("container-portrait", "aspect-ratio: 3 / 4; width: 100%"),
        ("container-scroll", "overflow: auto; max-height: 100%"),
        ("container-scroll-x", "overflow-x: auto; overflow-y: hidden"),
        ("container-scroll-y", "overflow-y: auto; overflow-x: hidden"),
        (
            "container-safe",
            "padding-top: env(safe-area-inset-top); padding-right: env(safe-area-inset-right); padding-bottom: env(safe-area-inset-bottom); padding-left: env(safe-area-inset-left)",
        ),
    ]
    .into_iter()
    .map(|(name, block)| (name.to_string(), parse_block(block)))
    .collect()
}

fn container_types(options: &Options, engine: &RuleEngine<'_>, out: &mut Stylesheet) {
    if !options.features().container_queries {
        debug!("containerQueries feature is off; skipping container-type utilities");
        return;
    }

    let types = table(&[
        ("@container", "inline-size"),
        ("@container-normal", "normal"),
        ("@container-size", "size"),
    ]);
    engine.expand(&["container-type"], &types, AxisConfig::NONE, out);

    let named: UtilityTable = options
        .containers()
        .keys()
        .map(|name| (format!("@container-{name}"), format!("{name} / inline-size")))
        .collect();
    engine.expand(&["container"], &named, AxisConfig::NONE, out);
}

/// `.container` and `.container-fluid`, plus one `@media` block per
/// breakpoint that has a container width of the same name.
fn base_containers(options: &Options, out: &mut Stylesheet) {
    let selectors = SelectorBuilder::from_options(options);
    let important = options.important();
    let padding = format!("var({}, 1rem)", property_name(options, "container-padding"));
    let decl = |property: &str, value: &str| Declaration::new(property, value).important(important);

    let container = selectors.build("", &[], "container", None);
    out.push_rule(
        StyleRule::new(container.as_str())
            .with(decl("width", "100%"))
            .with(decl("margin-inline", "auto"))
            .with(decl("padding-inline", &padding)),
    );
    out.push_rule(
        StyleRule::new(selectors.build("", &[], "container-fluid", None))
            .with(decl("width", "100%"))
            .with(decl("padding-inline", &padding)),
    );

    for (breakpoint, condition) in options.breakpoints() {
        let Some(width) = options.containers().get(breakpoint) else {
            continue;
        };
        let mut block = AtRuleBlock::new("media", condition.media_params());
        block.push(StyleRule::new(container.as_str()).with(decl("max-width", width)));
        out.push_block(block);
    }
}

fn padding_variables(options: &Options, out: &mut Stylesheet) {
    let rule = [
        ("container-padding", "1rem"),
        ("container-padding-sm", "0.75rem"),
        ("container-padding-lg", "1.5rem"),
    ]
    .into_iter()
    .fold(StyleRule::new(":root"), |rule, (name, value)| {
        rule.with(Declaration::new(property_name(options, name), value))
    });
    out.push_rule(rule);
}

pub fn generate(options: &Options, out: &mut Stylesheet) {
    let engine = RuleEngine::new(options);

    container_types(options, &engine, out);
    engine.expand(&["max-width"], &max_widths(options), AxisConfig::RESPONSIVE, out);
    engine.expand_blocks(&container_blocks(), AxisConfig::RESPONSIVE, out);
    padding_variables(options, out);
    base_containers(options, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_base_container_and_breakpoint_widths() {
        let options = Options::default();
        let mut sheet = Stylesheet::new();
        generate(&options, &mut sheet);

        let container = sheet.find(".df-container").unwrap();
        assert_eq!(
            container.declaration("padding-inline").unwrap().value,
            "var(--df-container-padding, 1rem)"
        );

        let md = sheet
            .blocks()
            .find(|b| b.params() == "screen and (min-width: 768px)" && b.rules()[0].selector() == ".df-container")
            .unwrap();
        assert_eq!(md.rules()[0].declarations()[0].value, "768px");

        let vars = sheet.find(":root").unwrap();
        assert_eq!(vars.declaration("--df-container-padding-sm").unwrap().value, "0.75rem");
    }

    #[test]
    fn test_max_width_and_block_utilities() {
        let options = Options::default();
        let mut sheet = Stylesheet::new();
        generate(&options, &mut sheet);

        assert_eq!(
            sheet.find(".df-container-2xl").unwrap().declarations()[0].value,
            "1400px"
        );
        let scroll = sheet.find(".df-container-scroll-x").unwrap();
        assert_eq!(scroll.declarations().len(), 2);
        assert!(sheet.find(".df-\\@container").is_some());
        assert_eq!(
            sheet.find(".df-\\@container-md").unwrap().declarations()[0].value,
            "md / inline-size"
        );
    }

    #[test]
    fn test_container_types_need_feature() {
        let mut config = Config::empty();
        config.containers.insert("md".into(), "768px".into());
        let options = Options::resolve(config).unwrap();
        let mut sheet = Stylesheet::new();
        generate(&options, &mut sheet);

        assert!(sheet.find(".df-\\@container").is_none());
        assert!(sheet.find(".df-container-md").is_some());
    }
}
