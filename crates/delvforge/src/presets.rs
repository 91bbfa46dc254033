//! The three distributed build configurations.

use delvforge_core::config::Features;
use delvforge_core::Config;
use serde::Serialize;

/// One distributed stylesheet: a name, its file name and the overrides it
/// layers onto the base configuration.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub output: &'static str,
    apply: fn(&mut Config),
}

impl Preset {
    /// `base` with this preset's overrides applied.
    pub fn configure(&self, base: &Config) -> Config {
        let mut config = base.clone();
        (self.apply)(&mut config);
        config
    }
}

fn unchanged(_: &mut Config) {}

fn prefixed(config: &mut Config) {
    config.prefix.class_name = "df-".into();
    config.prefix.css_variable = "df-".into();
}

fn modern(config: &mut Config) {
    config.features = Features {
        container_queries: true,
        custom_properties: true,
        modern_selectors: true,
        advanced_grid: true,
        fluid_typography: true,
        logical_properties: true,
    };
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "default",
        output: "delvforge.css",
        apply: unchanged,
    },
    Preset {
        name: "prefixed",
        output: "delvforge-prefixed.css",
        apply: prefixed,
    },
    Preset {
        name: "modern",
        output: "delvforge-modern.css",
        apply: modern,
    },
];

/// One entry of `build-info.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildResult {
    pub config: String,
    pub output: String,
    pub size: usize,
}

/// Contents of `build-info.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub builds: Vec<BuildResult>,
}

impl BuildInfo {
    pub fn new(builds: Vec<BuildResult>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            builds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_and_outputs() {
        let names: Vec<_> = PRESETS.iter().map(|p| (p.name, p.output)).collect();
        assert_eq!(
            names,
            [
                ("default", "delvforge.css"),
                ("prefixed", "delvforge-prefixed.css"),
                ("modern", "delvforge-modern.css"),
            ]
        );
    }

    #[test]
    fn test_modern_enables_every_feature() {
        let mut base = Config::default();
        base.features = Features::none();
        let config = PRESETS[2].configure(&base);
        assert!(config.features.logical_properties);
        assert!(config.features.modern_selectors);
        // The base configuration is left as it was.
        assert!(!base.features.advanced_grid);
    }

    #[test]
    fn test_prefixed_overrides_custom_prefix() {
        let mut base = Config::default();
        base.prefix.class_name = "x-".into();
        assert_eq!(PRESETS[1].configure(&base).prefix.class_name, "df-");
        assert_eq!(PRESETS[0].configure(&base).prefix.class_name, "x-");
    }
}
