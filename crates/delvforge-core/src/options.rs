//! The resolved, immutable option snapshot consumed by every generator.
//!
//! [`Options::resolve`] is the single "resolve configuration" phase: it
//! validates a [`Config`], performs the theme inheritance merge exactly once,
//! and freezes the result. Nothing downstream mutates it; a generation pass
//! only ever holds `&Options`.
//!
//! ```rust
//! use delvforge_core::{Config, Options};
//!
//! let options = Options::resolve(Config::default()).unwrap();
//!
//! assert_eq!(options.class_name("p-4"), "df-p-4");
//! assert_eq!(options.css_variable("primary-500"), "--df-primary-500");
//! assert_eq!(options.spacing("4").as_deref(), Some("1rem"));
//! assert_eq!(options.color("primary", Some("500")), Some("#2196f3"));
//! assert_eq!(options.color("primary", None), Some("#2196f3"));
//! assert_eq!(options.breakpoint("md"), Some("768px"));
//! ```

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::config::{
    Animations, ComponentSpec, Config, Features, FontSize, GridConfig, Prefix, ThemeSpec,
    TokenTable, TokenValue,
};
use crate::error::{ConfigError, Result};
use crate::theme::{inherit_global_tokens, ThemeResolver};

/// The condition a breakpoint's media block is gated on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaCondition {
    /// `screen and (min-width: <width>)`.
    MinWidth(String),
    /// A verbatim media query such as `print`.
    Raw(String),
}

impl MediaCondition {
    /// Interprets a configured breakpoint value.
    ///
    /// Values starting with `@media ` are raw queries; everything else is a width.
    pub fn parse(value: &str) -> Self {
        match value.trim().strip_prefix("@media ") {
            Some(query) => MediaCondition::Raw(query.trim().to_string()),
            None => MediaCondition::MinWidth(value.trim().to_string()),
        }
    }

    /// The `@media` prelude for this condition.
    pub fn media_params(&self) -> String {
        match self {
            MediaCondition::MinWidth(width) => format!("screen and (min-width: {width})"),
            MediaCondition::Raw(query) => query.clone(),
        }
    }

    /// The width for `MinWidth`, the query text for `Raw`.
    pub fn value(&self) -> &str {
        match self {
            MediaCondition::MinWidth(value) | MediaCondition::Raw(value) => value,
        }
    }
}

/// Ordered breakpoint table.
pub type Breakpoints = IndexMap<String, MediaCondition>;

/// Immutable generation options.
#[derive(Debug, Clone)]
pub struct Options {
    prefix: Prefix,
    important: bool,
    separator: String,
    theme_attribute: String,
    breakpoints: Breakpoints,
    containers: IndexMap<String, String>,
    grid: GridConfig,
    spacing: TokenTable,
    font_size: IndexMap<String, FontSize>,
    colors: TokenTable,
    components: IndexMap<String, ComponentSpec>,
    themes: IndexMap<String, ThemeSpec>,
    animations: Animations,
    features: Features,
}

static DEFAULT_OPTIONS: Lazy<Options> = Lazy::new(|| Options::build(Config::default()));

impl Default for Options {
    /// The built-in option set, resolved once per process.
    fn default() -> Self {
        DEFAULT_OPTIONS.clone()
    }
}

impl Options {
    /// Validates `config` and produces the frozen snapshot.
    ///
    /// # Errors
    ///
    /// Fails when more than one theme is marked default, when a breakpoint or
    /// container has an empty width, or when the separator is empty.
    pub fn resolve(config: Config) -> Result<Self> {
        validate(&config)?;
        Ok(Self::build(config))
    }

    /// Builds the snapshot from an already valid configuration.
    fn build(config: Config) -> Self {
        let Config {
            important,
            inherit_themes,
            prefix,
            separator,
            theme_attribute,
            breakpoints,
            containers,
            grid,
            spacing,
            font_size,
            colors,
            components,
            mut themes,
            animations,
            features,
        } = config;

        if inherit_themes {
            inherit_global_tokens(&mut themes, &colors, &components);
        } else {
            debug!("theme inheritance disabled; themes keep only their own tokens");
        }

        let breakpoints = breakpoints
            .into_iter()
            .map(|(name, value)| {
                let condition = MediaCondition::parse(&value);
                (name, condition)
            })
            .collect();

        Self {
            prefix,
            important,
            separator,
            theme_attribute,
            breakpoints,
            containers,
            grid,
            spacing,
            font_size,
            colors,
            components,
            themes,
            animations,
            features,
        }
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn important(&self) -> bool {
        self.important
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn theme_attribute(&self) -> &str {
        &self.theme_attribute
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn containers(&self) -> &IndexMap<String, String> {
        &self.containers
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn spacing_scale(&self) -> &TokenTable {
        &self.spacing
    }

    pub fn font_sizes(&self) -> &IndexMap<String, FontSize> {
        &self.font_size
    }

    pub fn colors(&self) -> &TokenTable {
        &self.colors
    }

    pub fn components(&self) -> &IndexMap<String, ComponentSpec> {
        &self.components
    }

    /// Themes, already merged over the global colors and components.
    pub fn themes(&self) -> &IndexMap<String, ThemeSpec> {
        &self.themes
    }

    pub fn animations(&self) -> &Animations {
        &self.animations
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    /// A resolver over this snapshot's themes.
    pub fn theme_resolver(&self) -> ThemeResolver<'_> {
        ThemeResolver::new(&self.themes)
    }

    // ========================================================================
    // Token lookups
    // ========================================================================

    /// `prefix.className + utility`.
    pub fn class_name(&self, utility: &str) -> String {
        format!("{}{}", self.prefix.class_name, utility)
    }

    /// `--` + `prefix.cssVariable` + `name`.
    pub fn css_variable(&self, name: &str) -> String {
        format!("--{}{}", self.prefix.css_variable, name)
    }

    /// The width (or raw query) of a breakpoint.
    pub fn breakpoint(&self, name: &str) -> Option<&str> {
        self.breakpoints.get(name).map(MediaCondition::value)
    }

    /// A flat color, a palette shade, or the palette's `500` shade when no
    /// shade is requested.
    pub fn color(&self, name: &str, shade: Option<&str>) -> Option<&str> {
        match (self.colors.get(name)?, shade) {
            (TokenValue::Text(flat), _) => Some(flat.as_str()),
            (TokenValue::Group(group), shade) => match group.get(shade.unwrap_or("500"))? {
                TokenValue::Text(value) => Some(value.as_str()),
                _ => None,
            },
            (TokenValue::Number(_), _) => None,
        }
    }

    /// A spacing token as a CSS length (numbers in `rem`).
    pub fn spacing(&self, key: &str) -> Option<String> {
        self.spacing.get(key)?.to_css()
    }

    /// The class name a breakpoint-scoped utility is generated under.
    pub fn responsive(&self, breakpoint: &str, utility: &str) -> String {
        self.class_name(&format!("{breakpoint}{}{utility}", self.separator))
    }

    /// The class name a state-scoped utility is generated under.
    pub fn state(&self, state: &str, utility: &str) -> String {
        self.class_name(&format!("{state}{}{utility}", self.separator))
    }

    /// Looks up a color token for the theme variant currently being generated.
    ///
    /// The empty variant resolves to the default theme. Tokens the theme does
    /// not define fall back to the global color table.
    pub fn theme_color(&self, variant: &str, path: &[&str]) -> Option<String> {
        let resolver = self.theme_resolver();
        let from_theme = resolver
            .theme_for_variant(variant)
            .and_then(|theme| lookup(&theme.colors, path));

        from_theme
            .or_else(|| lookup(&self.colors, path))
            .and_then(TokenValue::to_raw)
    }
}

fn lookup<'a>(table: &'a TokenTable, path: &[&str]) -> Option<&'a TokenValue> {
    let (head, rest) = path.split_first()?;
    table.get(*head)?.lookup(rest)
}

fn validate(config: &Config) -> Result<()> {
    if config.separator.is_empty() {
        return Err(ConfigError::EmptySeparator);
    }

    let defaults: Vec<String> = config
        .themes
        .iter()
        .filter(|(_, theme)| theme.default)
        .map(|(key, _)| key.clone())
        .collect();
    if defaults.len() > 1 {
        return Err(ConfigError::MultipleDefaultThemes(defaults));
    }

    if let Some((name, _)) = config.breakpoints.iter().find(|(_, w)| w.trim().is_empty()) {
        return Err(ConfigError::EmptyBreakpoint(name.clone()));
    }
    if let Some((name, _)) = config.containers.iter().find(|(_, w)| w.trim().is_empty()) {
        return Err(ConfigError::EmptyContainer(name.clone()));
    }
    Ok(())
}

/// Joins the present, non-empty class names with single spaces.
///
/// ```rust
/// use delvforge_core::cn;
///
/// let active = true;
/// assert_eq!(cn([Some("df-btn"), None, Some(""), active.then_some("df-active")]), "df-btn df-active");
/// ```
pub fn cn<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    classes
        .into_iter()
        .flatten()
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_condition_parse() {
        assert_eq!(
            MediaCondition::parse("640px"),
            MediaCondition::MinWidth("640px".into())
        );
        assert_eq!(
            MediaCondition::parse("@media print"),
            MediaCondition::Raw("print".into())
        );
        assert_eq!(
            MediaCondition::parse("640px").media_params(),
            "screen and (min-width: 640px)"
        );
        assert_eq!(MediaCondition::Raw("print".into()).media_params(), "print");
    }

    #[test]
    fn test_resolve_rejects_two_default_themes() {
        let mut config = Config::default();
        config.themes.get_mut("dark").unwrap().default = true;
        let err = Options::resolve(config).unwrap_err();
        assert!(matches!(err, ConfigError::MultipleDefaultThemes(ref names) if names.len() == 2));
    }

    #[test]
    fn test_resolve_rejects_empty_breakpoint() {
        let mut config = Config::default();
        config.breakpoints.insert("bad".into(), " ".into());
        assert!(matches!(
            Options::resolve(config),
            Err(ConfigError::EmptyBreakpoint(name)) if name == "bad"
        ));
    }

    #[test]
    fn test_resolve_rejects_empty_separator() {
        let config = Config {
            separator: String::new(),
            ..Config::default()
        };
        assert!(matches!(
            Options::resolve(config),
            Err(ConfigError::EmptySeparator)
        ));
    }

    #[test]
    fn test_themes_inherit_global_colors() {
        let options = Options::default();
        let dark = &options.themes()["dark"];
        assert!(dark.colors.contains_key("primary"));
        assert_eq!(dark.colors["background"], TokenValue::from("#0a0a0a"));
        assert!(dark.components.contains_key("button"));
    }

    #[test]
    fn test_inheritance_can_be_disabled() {
        let config = Config {
            inherit_themes: false,
            ..Config::default()
        };
        let options = Options::resolve(config).unwrap();
        assert!(!options.themes()["dark"].colors.contains_key("primary"));
    }

    #[test]
    fn test_color_lookup_variants() {
        let mut config = Config::default();
        config.colors.insert("brand".into(), TokenValue::from("#123456"));
        let options = Options::resolve(config).unwrap();

        assert_eq!(options.color("brand", None), Some("#123456"));
        assert_eq!(options.color("brand", Some("900")), Some("#123456"));
        assert_eq!(options.color("danger", Some("600")), Some("#dc2626"));
        assert_eq!(options.color("danger", Some("1000")), None);
        assert_eq!(options.color("missing", None), None);
    }

    #[test]
    fn test_spacing_lookup() {
        let options = Options::default();
        assert_eq!(options.spacing("0.5").as_deref(), Some("0.125rem"));
        assert_eq!(options.spacing("px").as_deref(), Some("1px"));
        assert_eq!(options.spacing("nope"), None);
    }

    #[test]
    fn test_variant_class_names_follow_generated_selectors() {
        let options = Options::default();
        assert_eq!(options.responsive("md", "flex"), "df-md:flex");
        assert_eq!(options.state("hover", "bg-primary-600"), "df-hover:bg-primary-600");
    }

    #[test]
    fn test_theme_color_resolves_default_and_named_variants() {
        let options = Options::default();
        assert_eq!(options.theme_color("", &["background"]).as_deref(), Some("#ffffff"));
        assert_eq!(options.theme_color("dark", &["background"]).as_deref(), Some("#0a0a0a"));
        assert_eq!(
            options.theme_color("dark", &["surface", "100"]).as_deref(),
            Some("#1e293b")
        );
        // Unknown variant falls back to the global table
        assert_eq!(
            options.theme_color("sepia", &["primary", "500"]).as_deref(),
            Some("#2196f3")
        );
        assert_eq!(options.theme_color("sepia", &["background"]), None);
    }

    #[test]
    fn test_cn_skips_missing_and_empty() {
        assert_eq!(cn([None, Some("a"), Some(""), Some("b")]), "a b");
        assert_eq!(cn(Vec::<Option<&str>>::new()), "");
    }
}
