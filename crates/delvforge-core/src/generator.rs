//! The generation pass.
//!
//! [`Generator`] owns one resolved [`Options`] snapshot and a list of
//! plugins. [`Generator::generate`] runs every built-in utility category in
//! order, then each plugin, and returns the finished stylesheet. Two calls on
//! the same generator produce identical output.

use tracing::{debug, info, info_span};

use crate::config::Config;
use crate::error::Result;
use crate::options::Options;
use crate::plugin::Plugin;
use crate::stylesheet::Stylesheet;
use crate::utilities::CATEGORIES;

/// Runs a full generation pass over one options snapshot.
pub struct Generator {
    options: Options,
    plugins: Vec<(Box<dyn Plugin>, serde_json::Value)>,
}

impl Generator {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            plugins: Vec::new(),
        }
    }

    /// Registers a plugin with its options. Plugins run in registration order.
    pub fn plugin<P: Plugin + 'static>(mut self, plugin: P, plugin_options: serde_json::Value) -> Self {
        self.plugins.push((Box::new(plugin), plugin_options));
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Produces the stylesheet.
    pub fn generate(&self) -> Stylesheet {
        let _span = info_span!("generate").entered();
        let mut sheet = Stylesheet::new();

        for (name, category) in CATEGORIES {
            let before = sheet.rule_count();
            category(&self.options, &mut sheet);
            debug!(category = name, rules = sheet.rule_count() - before, "generated category");
        }

        for (plugin, plugin_options) in &self.plugins {
            let before = sheet.rule_count();
            plugin.apply(&mut sheet, &self.options, plugin_options);
            debug!(
                plugin = plugin.name(),
                rules = sheet.rule_count() - before,
                "applied plugin"
            );
        }

        info!(rules = sheet.rule_count(), "stylesheet generated");
        sheet
    }
}

/// Resolves `config` and runs a generation pass without plugins.
pub fn generate(config: Config) -> Result<Stylesheet> {
    Ok(Generator::new(Options::resolve(config)?).generate())
}
