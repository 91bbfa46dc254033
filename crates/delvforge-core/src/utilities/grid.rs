//! Grid display, templates, placement, auto flow and place-* alignment.

use super::table;
use crate::engine::{AxisConfig, RuleEngine, UtilityTable};
use crate::options::Options;
use crate::stylesheet::Stylesheet;

const ROWS: u32 = 12;

fn tracks(prefix: &str, count: u32) -> UtilityTable {
    let mut utilities = UtilityTable::new();
    utilities.insert(format!("{prefix}-none"), "none");
    utilities.insert(format!("{prefix}-subgrid"), "subgrid");
    utilities.extend(
        (1..=count).map(|i| (format!("{prefix}-{i}"), format!("repeat({i}, minmax(0, 1fr))"))),
    );
    utilities
}

/// `span`, `start` and `end` tables for one axis, each with its own property.
fn placement(prefix: &str, count: u32) -> [UtilityTable; 3] {
    let mut span = UtilityTable::new();
    span.insert(format!("{prefix}-auto"), "auto");
    span.insert(format!("{prefix}-span-full"), "1 / -1");
    span.extend((1..=count).map(|i| (format!("{prefix}-span-{i}"), format!("span {i} / span {i}"))));
    let start = (1..=count).map(|i| (format!("{prefix}-start-{i}"), i.to_string())).collect();
    let end = (1..=count).map(|i| (format!("{prefix}-end-{i}"), i.to_string())).collect();
    [span, start, end]
}

pub fn generate(options: &Options, out: &mut Stylesheet) {
    let engine = RuleEngine::new(options);
    let axes = AxisConfig::RESPONSIVE;
    let columns = options.grid().columns;

    engine.expand(
        &["display"],
        &table(&[("grid", "grid"), ("inline-grid", "inline-grid")]),
        axes,
        out,
    );
    engine.expand(&["grid-template-columns"], &tracks("grid-cols", columns), axes, out);

    let [span, start, end] = placement("col", columns);
    engine.expand(&["grid-column"], &span, axes, out);
    engine.expand(&["grid-column-start"], &start, axes, out);
    engine.expand(&["grid-column-end"], &end, axes, out);

    engine.expand(&["grid-template-rows"], &tracks("grid-rows", ROWS), axes, out);

    let [span, start, end] = placement("row", ROWS);
    engine.expand(&["grid-row"], &span, axes, out);
    engine.expand(&["grid-row-start"], &start, axes, out);
    engine.expand(&["grid-row-end"], &end, axes, out);

    let auto_flow = table(&[
        ("grid-flow-row", "row"),
        ("grid-flow-col", "column"),
        ("grid-flow-dense", "dense"),
        ("grid-flow-row-dense", "row dense"),
        ("grid-flow-col-dense", "column dense"),
    ]);
    engine.expand(&["grid-auto-flow"], &auto_flow, axes, out);

    for (prefix, property) in [("auto-cols", "grid-auto-columns"), ("auto-rows", "grid-auto-rows")] {
        let auto: UtilityTable = [
            ("auto", "auto"),
            ("min", "min-content"),
            ("max", "max-content"),
            ("fr", "minmax(0, 1fr)"),
        ]
        .into_iter()
        .map(|(size, value)| (format!("{prefix}-{size}"), value))
        .collect();
        engine.expand(&[property], &auto, axes, out);
    }

    let place_content = table(&[
        ("place-content-center", "center"),
        ("place-content-start", "start"),
        ("place-content-end", "end"),
        ("place-content-between", "space-between"),
        ("place-content-around", "space-around"),
        ("place-content-evenly", "space-evenly"),
        ("place-content-stretch", "stretch"),
    ]);
    engine.expand(&["place-content"], &place_content, axes, out);

    let place_items = table(&[
        ("place-items-start", "start"),
        ("place-items-end", "end"),
        ("place-items-center", "center"),
        ("place-items-stretch", "stretch"),
    ]);
    engine.expand(&["place-items"], &place_items, axes, out);

    let place_self = table(&[
        ("place-self-auto", "auto"),
        ("place-self-start", "start"),
        ("place-self-end", "end"),
        ("place-self-center", "center"),
        ("place-self-stretch", "stretch"),
    ]);
    engine.expand(&["place-self"], &place_self, axes, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GridConfig};

    fn sheet_for(columns: u32) -> Stylesheet {
        let config = Config {
            grid: GridConfig {
                columns,
                ..GridConfig::default()
            },
            ..Config::empty()
        };
        let options = Options::resolve(config).unwrap();
        let mut sheet = Stylesheet::new();
        generate(&options, &mut sheet);
        sheet
    }

    #[test]
    fn test_columns_follow_grid_config() {
        let sheet = sheet_for(6);
        assert!(sheet.find(".df-grid-cols-6").is_some());
        assert!(sheet.find(".df-grid-cols-7").is_none());
        assert_eq!(
            sheet.find(".df-grid-cols-3").unwrap().declarations()[0].value,
            "repeat(3, minmax(0, 1fr))"
        );
        assert!(sheet.find(".df-grid-rows-12").is_some());
    }

    #[test]
    fn test_placement_properties_are_separate() {
        let sheet = sheet_for(24);
        let start = sheet.find(".df-col-start-3").unwrap();
        assert_eq!(start.declarations().len(), 1);
        assert_eq!(start.declarations()[0].property, "grid-column-start");
        assert_eq!(
            sheet.find(".df-col-span-24").unwrap().declarations()[0].value,
            "span 24 / span 24"
        );
        assert_eq!(
            sheet.find(".df-place-self-center").unwrap().declarations()[0].property,
            "place-self"
        );
    }
}
