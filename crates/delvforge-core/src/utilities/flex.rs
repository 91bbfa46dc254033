//! Flexbox display, direction, wrapping, sizing, alignment and order.

use super::table;
use crate::engine::{AxisConfig, RuleEngine, UtilityTable};
use crate::options::Options;
use crate::stylesheet::Stylesheet;

pub fn generate(options: &Options, out: &mut Stylesheet) {
    let engine = RuleEngine::new(options);
    let axes = AxisConfig::RESPONSIVE;

    let groups: [(&str, UtilityTable); 10] = [
        ("display", table(&[("flex", "flex"), ("inline-flex", "inline-flex")])),
        (
            "flex-direction",
            table(&[
                ("flex-row", "row"),
                ("flex-row-reverse", "row-reverse"),
                ("flex-col", "column"),
                ("flex-col-reverse", "column-reverse"),
            ]),
        ),
        (
            "flex-wrap",
            table(&[
                ("flex-wrap", "wrap"),
                ("flex-wrap-reverse", "wrap-reverse"),
                ("flex-nowrap", "nowrap"),
            ]),
        ),
        (
            "flex",
            table(&[
                ("flex-1", "1 1 0%"),
                ("flex-auto", "1 1 auto"),
                ("flex-initial", "0 1 auto"),
                ("flex-none", "none"),
            ]),
        ),
        ("flex-grow", table(&[("grow", "1"), ("grow-0", "0")])),
        ("flex-shrink", table(&[("shrink", "1"), ("shrink-0", "0")])),
        (
            "justify-content",
            table(&[
                ("justify-start", "flex-start"),
                ("justify-end", "flex-end"),
                ("justify-center", "center"),
                ("justify-between", "space-between"),
                ("justify-around", "space-around"),
                ("justify-evenly", "space-evenly"),
                ("justify-stretch", "stretch"),
            ]),
        ),
        (
            "align-items",
            table(&[
                ("items-start", "flex-start"),
                ("items-end", "flex-end"),
                ("items-center", "center"),
                ("items-baseline", "baseline"),
                ("items-stretch", "stretch"),
            ]),
        ),
        (
            "align-content",
            table(&[
                ("content-start", "flex-start"),
                ("content-end", "flex-end"),
                ("content-center", "center"),
                ("content-between", "space-between"),
                ("content-around", "space-around"),
                ("content-evenly", "space-evenly"),
                ("content-stretch", "stretch"),
            ]),
        ),
        (
            "align-self",
            table(&[
                ("self-auto", "auto"),
                ("self-start", "flex-start"),
                ("self-end", "flex-end"),
                ("self-center", "center"),
                ("self-baseline", "baseline"),
                ("self-stretch", "stretch"),
            ]),
        ),
    ];
    for (property, utilities) in &groups {
        engine.expand(&[*property], utilities, axes, out);
    }

    let mut order: UtilityTable = (0..=12).map(|i| (format!("order-{i}"), i.to_string())).collect();
    order.insert("order-first", "-9999");
    order.insert("order-last", "9999");
    order.insert("order-none", "0");
    engine.expand(&["order"], &order, axes, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_grow_and_shrink_set_only_their_property() {
        let options = Options::resolve(Config::empty()).unwrap();
        let mut sheet = Stylesheet::new();
        generate(&options, &mut sheet);

        let grow = sheet.find(".df-grow").unwrap();
        assert_eq!(grow.declarations().len(), 1);
        assert_eq!(grow.declarations()[0].property, "flex-grow");
        assert_eq!(sheet.find(".df-flex-1").unwrap().declarations()[0].property, "flex");
        assert_eq!(sheet.find(".df-order-last").unwrap().declarations()[0].value, "9999");
    }
}
