//! User-facing configuration.
//!
//! [`Config`] mirrors the recognized top-level options of a DelvForge build.
//! Every field is optional in the source document: a missing key takes its
//! built-in default, a provided map replaces the default map wholesale, and
//! the small records (`prefix`, `features`, `grid`, `animations`) merge
//! field by field.
//!
//! Configuration is plain data. Turn it into an immutable [`Options`]
//! snapshot with [`Options::resolve`] before generating anything.
//!
//! # From YAML
//!
//! ```rust
//! use delvforge_core::Config;
//!
//! let config = Config::from_yaml(r##"
//! important: true
//! prefix:
//!   className: "tw-"
//! breakpoints:
//!   sm: 640px
//!   md: 768px
//! features:
//!   containerQueries: false
//! "##).unwrap();
//!
//! assert!(config.important);
//! assert_eq!(config.prefix.class_name, "tw-");
//! // Not provided, so the default is kept
//! assert_eq!(config.prefix.css_variable, "df-");
//! assert_eq!(config.breakpoints.len(), 2);
//! assert!(!config.features.container_queries);
//! assert!(config.features.advanced_grid);
//! ```
//!
//! [`Options`]: crate::Options
//! [`Options::resolve`]: crate::Options::resolve

mod defaults;

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, Result};

/// Ordered mapping of design tokens. Leaves are numbers or strings, groups nest.
pub type TokenTable = IndexMap<String, TokenValue>;

/// A design token: a bare number, a string, or a nested group.
///
/// Bare numbers mean root-em quantities when used as lengths
/// (see [`TokenValue::to_css`]). Group keys may be written as numbers
/// (`500: "#2196f3"`); they are stored as their decimal text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Text(String),
    Group(TokenTable),
}

impl TokenValue {
    /// The leaf as a CSS length: numbers gain `rem`, strings pass through.
    ///
    /// Groups have no single value and yield `None`.
    pub fn to_css(&self) -> Option<String> {
        match self {
            TokenValue::Number(n) => Some(format!("{n}rem")),
            TokenValue::Text(s) => Some(s.clone()),
            TokenValue::Group(_) => None,
        }
    }

    /// The leaf stringified as-is, without any unit.
    pub fn to_raw(&self) -> Option<String> {
        match self {
            TokenValue::Number(n) => Some(n.to_string()),
            TokenValue::Text(s) => Some(s.clone()),
            TokenValue::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&TokenTable> {
        match self {
            TokenValue::Group(table) => Some(table),
            _ => None,
        }
    }

    /// Follows `path` through nested groups.
    pub fn lookup(&self, path: &[&str]) -> Option<&TokenValue> {
        match path.split_first() {
            None => Some(self),
            Some((head, rest)) => self.as_group()?.get(*head)?.lookup(rest),
        }
    }
}

/// A group key: a string, or a number written without quotes.
struct TokenKey(String);

impl<'de> Deserialize<'de> for TokenKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = TokenKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a token name or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<TokenKey, E> {
                Ok(TokenKey(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<TokenKey, E> {
                Ok(TokenKey(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<TokenKey, E> {
                Ok(TokenKey(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<TokenKey, E> {
                Ok(TokenKey(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<TokenKey, E> {
                Ok(TokenKey(v.to_string()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

impl<'de> Deserialize<'de> for TokenValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = TokenValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number, a string or a map of tokens")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<TokenValue, E> {
                Ok(TokenValue::Number(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<TokenValue, E> {
                Ok(TokenValue::Number(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<TokenValue, E> {
                Ok(TokenValue::Number(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<TokenValue, E> {
                Ok(TokenValue::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<TokenValue, E> {
                Ok(TokenValue::Text(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<TokenValue, A::Error> {
                let mut group = TokenTable::new();
                while let Some((TokenKey(key), value)) = map.next_entry::<TokenKey, TokenValue>()? {
                    group.insert(key, value);
                }
                Ok(TokenValue::Group(group))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Number(value)
    }
}

impl From<TokenTable> for TokenValue {
    fn from(value: TokenTable) -> Self {
        TokenValue::Group(value)
    }
}

/// Class-name and custom-property prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Prefix {
    pub class_name: String,
    pub css_variable: String,
}

impl Default for Prefix {
    fn default() -> Self {
        Self {
            class_name: "df-".to_string(),
            css_variable: "df-".to_string(),
        }
    }
}

/// Named feature switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Features {
    pub container_queries: bool,
    pub custom_properties: bool,
    pub modern_selectors: bool,
    pub advanced_grid: bool,
    pub fluid_typography: bool,
    pub logical_properties: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            container_queries: true,
            custom_properties: true,
            modern_selectors: true,
            advanced_grid: true,
            fluid_typography: true,
            logical_properties: true,
        }
    }
}

impl Features {
    /// Every flag off.
    pub fn none() -> Self {
        Self {
            container_queries: false,
            custom_properties: false,
            modern_selectors: false,
            advanced_grid: false,
            fluid_typography: false,
            logical_properties: false,
        }
    }
}

/// A font-size token: either a bare size or `[size, { lineHeight }]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSize {
    Plain(String),
    WithMetrics(String, FontMetrics),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontMetrics {
    pub line_height: Option<String>,
}

impl FontSize {
    pub fn size(&self) -> &str {
        match self {
            FontSize::Plain(size) | FontSize::WithMetrics(size, _) => size,
        }
    }

    pub fn line_height(&self) -> Option<&str> {
        match self {
            FontSize::Plain(_) => None,
            FontSize::WithMetrics(_, metrics) => metrics.line_height.as_deref(),
        }
    }
}

/// A composed component: a base class list plus named variant and size lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentSpec {
    pub base: String,
    pub variants: IndexMap<String, String>,
    pub sizes: IndexMap<String, String>,
}

/// One declared theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeSpec {
    /// Variant name; falls back to the theme's key when absent.
    pub name: Option<String>,
    pub default: bool,
    pub color_scheme: Option<String>,
    pub colors: TokenTable,
    pub components: IndexMap<String, ComponentSpec>,
    pub border_radius: Option<String>,
}

/// Grid system settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub columns: u32,
    pub gap: String,
    pub gutters: IndexMap<String, String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 24,
            gap: "0.5rem".to_string(),
            gutters: defaults::gutters(),
        }
    }
}

/// Motion tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Animations {
    pub durations: IndexMap<String, String>,
    pub easings: IndexMap<String, String>,
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            durations: defaults::durations(),
            easings: defaults::easings(),
        }
    }
}

/// The full configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Mark every generated declaration `!important`.
    pub important: bool,
    /// Copy global colors and components into each theme that lacks them.
    pub inherit_themes: bool,
    pub prefix: Prefix,
    /// Token placed between a variant name and the utility name.
    pub separator: String,
    /// Attribute that scopes non-default theme selectors.
    pub theme_attribute: String,
    /// Name → min-width, or a raw `@media …` query.
    pub breakpoints: IndexMap<String, String>,
    pub containers: IndexMap<String, String>,
    pub grid: GridConfig,
    pub spacing: TokenTable,
    pub font_size: IndexMap<String, FontSize>,
    pub colors: TokenTable,
    pub components: IndexMap<String, ComponentSpec>,
    pub themes: IndexMap<String, ThemeSpec>,
    pub animations: Animations,
    pub features: Features,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            important: false,
            inherit_themes: true,
            prefix: Prefix::default(),
            separator: ":".to_string(),
            theme_attribute: "data-theme".to_string(),
            breakpoints: defaults::breakpoints(),
            containers: defaults::containers(),
            grid: GridConfig::default(),
            spacing: defaults::spacing(),
            font_size: defaults::font_size(),
            colors: defaults::colors(),
            components: defaults::components(),
            themes: defaults::themes(),
            animations: Animations::default(),
            features: Features::default(),
        }
    }
}

impl Config {
    /// A configuration with no tokens, themes, breakpoints or containers.
    ///
    /// Prefixes, separator and theme attribute keep their defaults; every
    /// feature is off. Useful as a blank slate for tests and plugins.
    pub fn empty() -> Self {
        Self {
            breakpoints: IndexMap::new(),
            containers: IndexMap::new(),
            grid: GridConfig {
                gutters: IndexMap::new(),
                ..GridConfig::default()
            },
            spacing: TokenTable::new(),
            font_size: IndexMap::new(),
            colors: TokenTable::new(),
            components: IndexMap::new(),
            themes: IndexMap::new(),
            animations: Animations {
                durations: IndexMap::new(),
                easings: IndexMap::new(),
            },
            features: Features::none(),
            ..Self::default()
        }
    }

    /// Parses a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parses a JSON document.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reads a configuration file.
    ///
    /// `.yaml` / `.yml` files are parsed as YAML, anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_builtin_tokens() {
        let config = Config::default();
        assert_eq!(config.prefix.class_name, "df-");
        assert_eq!(config.separator, ":");
        assert_eq!(
            config.breakpoints.keys().collect::<Vec<_>>(),
            ["xs", "sm", "md", "lg", "xl", "2xl", "3xl"]
        );
        assert_eq!(config.themes.len(), 2);
        assert!(config.themes["light"].default);
        assert_eq!(config.grid.columns, 24);
    }

    #[test]
    fn test_token_value_to_css() {
        assert_eq!(TokenValue::Number(0.25).to_css().unwrap(), "0.25rem");
        assert_eq!(TokenValue::Number(1.0).to_css().unwrap(), "1rem");
        assert_eq!(TokenValue::Number(0.0).to_css().unwrap(), "0rem");
        assert_eq!(TokenValue::from("1px").to_css().unwrap(), "1px");
        assert!(TokenValue::Group(TokenTable::new()).to_css().is_none());
    }

    #[test]
    fn test_token_value_to_raw_keeps_numbers_unitless() {
        assert_eq!(TokenValue::Number(0.125).to_raw().unwrap(), "0.125");
        assert_eq!(TokenValue::Number(4.0).to_raw().unwrap(), "4");
    }

    #[test]
    fn test_token_lookup_follows_groups() {
        let config = Config::default();
        let colors = TokenValue::Group(config.colors.clone());
        let shade = colors.lookup(&["primary", "500"]).unwrap();
        assert_eq!(shade, &TokenValue::from("#2196f3"));
        assert!(colors.lookup(&["primary", "nope"]).is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("important: true\n").unwrap();
        assert!(config.important);
        assert_eq!(config.breakpoints.len(), 7);
        assert_eq!(config.separator, ":");
    }

    #[test]
    fn test_provided_map_replaces_default() {
        let config = Config::from_yaml("breakpoints:\n  tablet: 900px\n").unwrap();
        assert_eq!(config.breakpoints.len(), 1);
        assert_eq!(config.breakpoints["tablet"], "900px");
    }

    #[test]
    fn test_json_config_with_themes_and_font_sizes() {
        let config = Config::from_json(
            r##"{
                "themes": {
                    "paper": { "default": true, "colors": { "background": "#fff" } },
                    "ink": { "name": "night", "colorScheme": "dark", "borderRadius": "2px" }
                },
                "fontSize": { "sm": ["0.875rem", { "lineHeight": "1.25rem" }], "base": "1rem" },
                "spacing": { "1": 0.25, "px": "1px" }
            }"##,
        )
        .unwrap();

        assert!(config.themes["paper"].default);
        assert_eq!(config.themes["ink"].name.as_deref(), Some("night"));
        assert_eq!(config.themes["ink"].border_radius.as_deref(), Some("2px"));
        assert_eq!(config.font_size["sm"].size(), "0.875rem");
        assert_eq!(config.font_size["sm"].line_height(), Some("1.25rem"));
        assert_eq!(config.font_size["base"].line_height(), None);
        assert_eq!(config.spacing["1"], TokenValue::Number(0.25));
        assert_eq!(config.spacing["px"], TokenValue::from("1px"));
    }

    #[test]
    fn test_from_file_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("delvforge.yaml");
        std::fs::write(&yaml, "separator: \"_\"\n").unwrap();
        assert_eq!(Config::from_file(&yaml).unwrap().separator, "_");

        let json = dir.path().join("delvforge.json");
        std::fs::write(&json, r#"{"separator": "-"}"#).unwrap();
        assert_eq!(Config::from_file(&json).unwrap().separator, "-");
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_empty_config_has_no_tokens() {
        let config = Config::empty();
        assert!(config.breakpoints.is_empty());
        assert!(config.themes.is_empty());
        assert!(!config.features.container_queries);
        assert_eq!(config.prefix.class_name, "df-");
    }

    #[test]
    fn test_yaml_palettes_accept_numeric_shade_keys() {
        let config = Config::from_yaml(
            r##"
colors:
  brand:
    500: "#ff0000"
    0.5: "#00ff00"
themes:
  dark:
    colors:
      surface:
        100: "#111111"
"##,
        )
        .unwrap();

        let brand = config.colors["brand"].as_group().unwrap();
        assert_eq!(brand["500"], TokenValue::from("#ff0000"));
        assert_eq!(brand["0.5"], TokenValue::from("#00ff00"));
        let surface = config.themes["dark"].colors["surface"].as_group().unwrap();
        assert_eq!(surface["100"], TokenValue::from("#111111"));
    }

    #[test]
    fn test_token_values_keep_number_and_text_leaves() {
        let config = Config::from_yaml("spacing:\n  4: 1\n  px: 1px\n  half: 0.5\n").unwrap();
        assert_eq!(config.spacing["4"], TokenValue::Number(1.0));
        assert_eq!(config.spacing["px"], TokenValue::from("1px"));
        assert_eq!(config.spacing["half"], TokenValue::Number(0.5));
    }
}
