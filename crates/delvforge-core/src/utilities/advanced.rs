//! Progressive-enhancement utilities: container-query layout switches,
//! intrinsic grid templates and the modern selector notice.
//!
//! Everything here sits behind a feature flag; a disabled flag is a silent
//! no-op apart from a debug event.

use tracing::debug;

use super::table;
use crate::engine::{AxisConfig, RuleEngine};
use crate::options::Options;
use crate::stylesheet::Stylesheet;

fn container_query_layout(engine: &RuleEngine<'_>, out: &mut Stylesheet) {
    let axes = AxisConfig::NONE.container_query();

    let display = table(&[
        ("cq-hidden", "none"),
        ("cq-block", "block"),
        ("cq-flex", "flex"),
        ("cq-grid", "grid"),
    ]);
    engine.expand(&["display"], &display, axes, out);

    let direction = table(&[("cq-row", "row"), ("cq-col", "column")]);
    engine.expand(&["flex-direction"], &direction, axes, out);
}

fn advanced_grid(engine: &RuleEngine<'_>, out: &mut Stylesheet) {
    let templates = table(&[
        ("grid-auto-fit", "repeat(auto-fit, minmax(250px, 1fr))"),
        ("grid-auto-fill", "repeat(auto-fill, minmax(250px, 1fr))"),
        ("subgrid", "subgrid"),
    ]);
    engine.expand(&["grid-template-columns"], &templates, AxisConfig::RESPONSIVE, out);

    let flow = table(&[("grid-dense", "dense")]);
    engine.expand(&["grid-auto-flow"], &flow, AxisConfig::RESPONSIVE, out);
}

pub fn generate(options: &Options, out: &mut Stylesheet) {
    let engine = RuleEngine::new(options);
    let features = options.features();

    if features.container_queries {
        container_query_layout(&engine, out);
    } else {
        debug!("containerQueries feature is off; skipping container query layout utilities");
    }

    if features.advanced_grid {
        advanced_grid(&engine, out);
    } else {
        debug!("advancedGrid feature is off; skipping advanced grid utilities");
    }

    if features.modern_selectors {
        debug!("modernSelectors feature is on; no modern selector utilities are emitted");
    }
}
