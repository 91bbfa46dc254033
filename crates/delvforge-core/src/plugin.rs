//! User plugins run after the built-in utility categories.
//!
//! A plugin receives the stylesheet built so far, the resolved options and
//! its own options value, and may append rules. Plugins run in registration
//! order.
//!
//! ```rust
//! use delvforge_core::{Declaration, FnPlugin, Generator, Options, StyleRule};
//! use serde_json::json;
//!
//! let brand = FnPlugin::new("brand", |sheet, options, opts| {
//!     let color = opts["color"].as_str().unwrap_or("black");
//!     sheet.push_rule(
//!         StyleRule::new(format!(".{}brand", options.prefix().class_name))
//!             .with(Declaration::new("color", color)),
//!     );
//! });
//!
//! let sheet = Generator::new(Options::default())
//!     .plugin(brand, json!({ "color": "#663399" }))
//!     .generate();
//! assert!(sheet.find(".df-brand").is_some());
//! ```

use std::fmt;

use crate::options::Options;
use crate::stylesheet::Stylesheet;

/// An extension that appends rules to a generated stylesheet.
pub trait Plugin {
    /// Name used in log events.
    fn name(&self) -> &str;

    fn apply(&self, sheet: &mut Stylesheet, options: &Options, plugin_options: &serde_json::Value);
}

type PluginFn = dyn Fn(&mut Stylesheet, &Options, &serde_json::Value);

/// A [`Plugin`] backed by a closure.
pub struct FnPlugin {
    name: String,
    apply: Box<PluginFn>,
}

impl FnPlugin {
    pub fn new<F>(name: impl Into<String>, apply: F) -> Self
    where
        F: Fn(&mut Stylesheet, &Options, &serde_json::Value) + 'static,
    {
        Self {
            name: name.into(),
            apply: Box::new(apply),
        }
    }
}

impl fmt::Debug for FnPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPlugin").field("name", &self.name).finish()
    }
}

impl Plugin for FnPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, sheet: &mut Stylesheet, options: &Options, plugin_options: &serde_json::Value) {
        (self.apply)(sheet, options, plugin_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylesheet::{Declaration, StyleRule};

    #[test]
    fn test_fn_plugin_receives_its_options() {
        let plugin = FnPlugin::new("echo", |sheet, _, opts| {
            let selector = opts["selector"].as_str().unwrap_or(".none");
            sheet.push_rule(StyleRule::new(selector).with(Declaration::new("color", "red")));
        });
        assert_eq!(plugin.name(), "echo");

        let mut sheet = Stylesheet::new();
        plugin.apply(
            &mut sheet,
            &Options::default(),
            &serde_json::json!({ "selector": ".x" }),
        );
        assert!(sheet.find(".x").is_some());
    }
}
