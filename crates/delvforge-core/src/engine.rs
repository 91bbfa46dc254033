//! The rule expansion engine.
//!
//! A [`UtilityTable`] maps utility suffixes to values. [`RuleEngine::expand`]
//! turns one table into style rules across the axes an [`AxisConfig`]
//! enables:
//!
//! - one base rule per entry, always
//! - `states`: one rule per entry and [`PseudoState`]
//! - `responsive`: one `@media` block per breakpoint holding the base rules,
//!   plus the state rules when `states` is also set
//! - `container_query`: one `@container` block per container, only when the
//!   `containerQueries` feature is on
//!
//! With `with_theme` the whole expansion repeats once per theme variant.
//!
//! ```rust
//! use delvforge_core::{AxisConfig, Options, RuleEngine, Stylesheet, UtilityTable};
//!
//! let options = Options::default();
//! let table: UtilityTable = [("red", "#ff0000")].into_iter().collect();
//!
//! let mut sheet = Stylesheet::new();
//! RuleEngine::new(&options).expand(&["color"], &table, AxisConfig::STATES, &mut sheet);
//!
//! assert_eq!(sheet.rule_count(), 6);
//! assert!(sheet.find(".df-hover\\:red:hover").is_some());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::options::{Breakpoints, Options};
use crate::selector::{PseudoState, SelectorBuilder};
use crate::stylesheet::{AtRuleBlock, Declaration, StyleRule, Stylesheet};

/// Signature of a theme-dependent value: `(theme variant, options) -> css`.
pub type ValueFn = dyn Fn(&str, &Options) -> String + Send + Sync;

/// The value of a utility entry.
#[derive(Clone)]
pub enum Value {
    Literal(String),
    /// Resolved per theme variant at emission time.
    Computed(Arc<ValueFn>),
}

impl Value {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&str, &Options) -> String + Send + Sync + 'static,
    {
        Value::Computed(Arc::new(f))
    }

    /// The literal value used in a declaration for `theme`.
    pub fn resolve(&self, theme: &str, options: &Options) -> String {
        match self {
            Value::Literal(value) => value.clone(),
            Value::Computed(f) => f(theme, options),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Value::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Literal(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Literal(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Literal(value.clone())
    }
}

/// Ordered mapping of utility suffix to value. Keys are unique.
#[derive(Debug, Clone, Default)]
pub struct UtilityTable {
    entries: IndexMap<String, Value>,
}

impl UtilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry; a repeated suffix replaces the earlier value in place.
    pub fn insert(&mut self, suffix: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(suffix.into(), value.into());
    }

    pub fn get(&self, suffix: &str) -> Option<&Value> {
        self.entries.get(suffix)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for UtilityTable
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = UtilityTable::new();
        table.extend(iter);
        table
    }
}

impl IntoIterator for UtilityTable {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> Extend<(K, V)> for UtilityTable
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// Suffix → declaration block, for utilities that set several different
/// properties per entry.
pub type DeclarationTable = IndexMap<String, Vec<(String, Value)>>;

/// Parses `"prop: value; prop2: value2"` into declaration pairs.
///
/// Each declaration is split at its first `:`, so values like
/// `url(http://…)` survive. Fragments without a `:` are ignored.
pub fn parse_block(block: &str) -> Vec<(String, Value)> {
    block
        .split(';')
        .filter_map(|decl| {
            let (property, value) = decl.split_once(':')?;
            let (property, value) = (property.trim(), value.trim());
            if property.is_empty() || value.is_empty() {
                return None;
            }
            Some((property.to_string(), Value::from(value)))
        })
        .collect()
}

/// Which expansion branches run for one table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisConfig {
    pub responsive: bool,
    pub states: bool,
    pub with_theme: bool,
    pub container_query: bool,
}

impl AxisConfig {
    /// Base rules only.
    pub const NONE: AxisConfig = AxisConfig {
        responsive: false,
        states: false,
        with_theme: false,
        container_query: false,
    };

    pub const STATES: AxisConfig = AxisConfig {
        states: true,
        ..AxisConfig::NONE
    };

    pub const RESPONSIVE: AxisConfig = AxisConfig {
        responsive: true,
        ..AxisConfig::NONE
    };

    /// Responsive and states together, the most common combination.
    pub const INTERACTIVE: AxisConfig = AxisConfig {
        responsive: true,
        states: true,
        ..AxisConfig::NONE
    };

    pub const fn responsive(mut self) -> Self {
        self.responsive = true;
        self
    }

    pub const fn states(mut self) -> Self {
        self.states = true;
        self
    }

    pub const fn with_theme(mut self) -> Self {
        self.with_theme = true;
        self
    }

    pub const fn container_query(mut self) -> Self {
        self.container_query = true;
        self
    }
}

/// Expands utility tables into rules against one options snapshot.
///
/// The breakpoint table defaults to the options' own but can be replaced for
/// a single engine via [`RuleEngine::with_breakpoints`]; the options are never
/// touched.
#[derive(Debug, Clone)]
pub struct RuleEngine<'a> {
    options: &'a Options,
    breakpoints: Cow<'a, Breakpoints>,
}

impl<'a> RuleEngine<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self {
            options,
            breakpoints: Cow::Borrowed(options.breakpoints()),
        }
    }

    /// An engine that uses `breakpoints` instead of the configured table.
    pub fn with_breakpoints(options: &'a Options, breakpoints: Breakpoints) -> Self {
        Self {
            options,
            breakpoints: Cow::Owned(breakpoints),
        }
    }

    pub fn options(&self) -> &'a Options {
        self.options
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Expands `table`, attaching each resolved value to every property in
    /// `properties`, in order.
    pub fn expand(
        &self,
        properties: &[&str],
        table: &UtilityTable,
        axes: AxisConfig,
        out: &mut Stylesheet,
    ) {
        let entries: Vec<(&str, &Value)> = table.iter().collect();
        self.run(&entries, axes, out, |(_, value), theme| {
            let value = value.resolve(theme, self.options);
            properties
                .iter()
                .map(|property| self.declaration(property, value.clone()))
                .collect()
        });
    }

    /// Expands a table whose entries carry whole declaration blocks.
    pub fn expand_blocks(&self, table: &DeclarationTable, axes: AxisConfig, out: &mut Stylesheet) {
        let entries: Vec<(&str, &Vec<(String, Value)>)> =
            table.iter().map(|(k, v)| (k.as_str(), v)).collect();
        self.run(&entries, axes, out, |(_, block), theme| {
            block
                .iter()
                .map(|(property, value)| {
                    self.declaration(property, value.resolve(theme, self.options))
                })
                .collect()
        });
    }

    fn declaration(&self, property: &str, value: String) -> Declaration {
        Declaration::new(property, value).important(self.options.important())
    }

    fn run<T, F>(&self, entries: &[(&str, T)], axes: AxisConfig, out: &mut Stylesheet, body: F)
    where
        T: Copy,
        F: Fn((&str, T), &str) -> Vec<Declaration>,
    {
        if entries.is_empty() {
            return;
        }

        if axes.with_theme {
            self.options
                .theme_resolver()
                .always(|theme| self.run_variant(theme, entries, axes, out, &body));
        } else {
            self.run_variant("", entries, axes, out, &body);
        }
    }

    fn run_variant<T, F>(
        &self,
        theme: &str,
        entries: &[(&str, T)],
        axes: AxisConfig,
        out: &mut Stylesheet,
        body: &F,
    ) where
        T: Copy,
        F: Fn((&str, T), &str) -> Vec<Declaration>,
    {
        let selectors = SelectorBuilder::from_options(self.options);
        let rule = |variants: &[&str], entry: (&str, T), pseudo: Option<PseudoState>| {
            let selector = selectors.build(theme, variants, entry.0, pseudo);
            body(entry, theme)
                .into_iter()
                .fold(StyleRule::new(selector), StyleRule::with)
        };

        for &entry in entries {
            out.push_rule(rule(&[], entry, None));
        }

        if axes.states {
            for &entry in entries {
                for state in PseudoState::ALL {
                    out.push_rule(rule(&[state.as_str()], entry, Some(state)));
                }
            }
        }

        if axes.responsive {
            for (name, condition) in self.breakpoints.iter() {
                let mut block = AtRuleBlock::new("media", condition.media_params());
                for &entry in entries {
                    block.push(rule(&[name.as_str()], entry, None));
                }
                if axes.states {
                    for &entry in entries {
                        for state in PseudoState::ALL {
                            block.push(rule(&[name.as_str(), state.as_str()], entry, Some(state)));
                        }
                    }
                }
                out.push_block(block);
            }
        }

        if axes.container_query {
            if !self.options.features().container_queries {
                debug!("containerQueries feature is off; skipping container query rules");
                return;
            }
            for (name, width) in self.options.containers() {
                let mut block = AtRuleBlock::new("container", format!("(min-width: {width})"));
                let variant = format!("@{name}");
                for &entry in entries {
                    block.push(rule(&[variant.as_str()], entry, None));
                }
                out.push_block(block);
            }
        }
    }
}

/// Expands one table into a fresh stylesheet.
pub fn expand(
    properties: &[&str],
    table: &UtilityTable,
    options: &Options,
    axes: AxisConfig,
) -> Stylesheet {
    let mut sheet = Stylesheet::new();
    RuleEngine::new(options).expand(properties, table, axes, &mut sheet);
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ThemeSpec};
    use crate::options::MediaCondition;
    use crate::stylesheet::Node;

    fn bare() -> Options {
        Options::resolve(Config::empty()).unwrap()
    }

    fn red() -> UtilityTable {
        [("red", "#ff0000")].into_iter().collect()
    }

    fn selectors(sheet: &Stylesheet) -> Vec<&str> {
        sheet.rules().map(StyleRule::selector).collect()
    }

    #[test]
    fn test_base_rule_only() {
        let sheet = expand(&["color"], &red(), &bare(), AxisConfig::NONE);
        assert_eq!(sheet.rule_count(), 1);
        let rule = sheet.find(".df-red").unwrap();
        assert_eq!(rule.declarations(), &[Declaration::new("color", "#ff0000")]);
    }

    #[test]
    fn test_states_emit_five_pseudo_rules() {
        let sheet = expand(&["color"], &red(), &bare(), AxisConfig::STATES);
        assert_eq!(
            selectors(&sheet),
            [
                ".df-red",
                ".df-hover\\:red:hover",
                ".df-focus\\:red:focus",
                ".df-active\\:red:active",
                ".df-focus-visible\\:red:focus-visible",
                ".df-disabled\\:red:disabled",
            ]
        );
    }

    #[test]
    fn test_responsive_blocks_follow_breakpoint_order() {
        let mut config = Config::empty();
        config.breakpoints.insert("sm".into(), "640px".into());
        config.breakpoints.insert("md".into(), "768px".into());
        let options = Options::resolve(config).unwrap();

        let sheet = expand(&["color"], &red(), &options, AxisConfig::RESPONSIVE);
        assert_eq!(sheet.rule_count(), 3);
        let params: Vec<_> = sheet.blocks().map(AtRuleBlock::params).collect();
        assert_eq!(
            params,
            ["screen and (min-width: 640px)", "screen and (min-width: 768px)"]
        );
        assert_eq!(selectors(&sheet), [".df-red", ".df-sm\\:red", ".df-md\\:red"]);
    }

    #[test]
    fn test_responsive_with_states_emits_both_forms() {
        let mut config = Config::empty();
        config.breakpoints.insert("md".into(), "768px".into());
        let options = Options::resolve(config).unwrap();

        let sheet = expand(&["color"], &red(), &options, AxisConfig::INTERACTIVE);
        assert_eq!(sheet.rule_count(), 1 + 5 + 6);
        assert!(sheet.find(".df-hover\\:red:hover").is_some());
        assert!(sheet.find(".df-md\\:hover\\:red:hover").is_some());
    }

    #[test]
    fn test_multiple_properties_share_value() {
        let table: UtilityTable = [("4", "1rem")].into_iter().collect();
        let sheet = expand(&["margin-left", "margin-right"], &table, &bare(), AxisConfig::NONE);
        let rule = sheet.find(".df-4").unwrap();
        let props: Vec<_> = rule.declarations().iter().map(|d| d.property.as_str()).collect();
        assert_eq!(props, ["margin-left", "margin-right"]);
        assert!(rule.declarations().iter().all(|d| d.value == "1rem"));
    }

    #[test]
    fn test_important_marks_declarations_not_selectors() {
        let config = Config {
            important: true,
            ..Config::empty()
        };
        let options = Options::resolve(config).unwrap();
        let sheet = expand(&["color"], &red(), &options, AxisConfig::NONE);
        let rule = sheet.find(".df-red").unwrap();
        assert!(rule.declarations()[0].important);
    }

    #[test]
    fn test_empty_table_emits_nothing() {
        let sheet = expand(
            &["color"],
            &UtilityTable::new(),
            &Options::default(),
            AxisConfig::INTERACTIVE.with_theme().container_query(),
        );
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_container_query_skipped_when_feature_off() {
        let mut config = Config::empty();
        config.containers.insert("md".into(), "768px".into());
        let options = Options::resolve(config).unwrap();
        let sheet = expand(&["color"], &red(), &options, AxisConfig::NONE.container_query());
        assert_eq!(sheet.rule_count(), 1);
        assert_eq!(sheet.blocks().count(), 0);
    }

    #[test]
    fn test_container_query_blocks() {
        let mut config = Config::empty();
        config.features.container_queries = true;
        config.containers.insert("md".into(), "768px".into());
        let options = Options::resolve(config).unwrap();

        let sheet = expand(
            &["color"],
            &red(),
            &options,
            AxisConfig::STATES.container_query(),
        );
        let block = sheet.blocks().next().unwrap();
        assert_eq!(block.name(), "container");
        assert_eq!(block.params(), "(min-width: 768px)");
        // No state cross product on this axis
        assert_eq!(block.rules().len(), 1);
        assert_eq!(block.rules()[0].selector(), ".df-\\@md\\:red");
    }

    #[test]
    fn test_with_theme_without_themes_runs_once() {
        let sheet = expand(&["color"], &red(), &bare(), AxisConfig::NONE.with_theme());
        assert_eq!(selectors(&sheet), [".df-red"]);
    }

    #[test]
    fn test_computed_value_sees_theme_variant() {
        let mut config = Config::empty();
        config.themes.insert(
            "light".into(),
            ThemeSpec {
                default: true,
                ..ThemeSpec::default()
            },
        );
        config.themes.insert("dark".into(), ThemeSpec::default());
        let options = Options::resolve(config).unwrap();

        let mut table = UtilityTable::new();
        table.insert(
            "surface",
            Value::computed(|theme, _| {
                let value = if theme.is_empty() { "white" } else { "black" };
                value.to_string()
            }),
        );
        let sheet = expand(&["background-color"], &table, &options, AxisConfig::NONE.with_theme());
        let values: Vec<_> = sheet
            .rules()
            .map(|r| r.declarations()[0].value.as_str())
            .collect();
        assert_eq!(values, ["white", "black"]);
        assert!(sheet.rules().nth(1).unwrap().selector().starts_with(":is([data-theme=\"dark\"]"));
    }

    #[test]
    fn test_local_breakpoints_do_not_touch_options() {
        let options = Options::default();
        let mut local = options.breakpoints().clone();
        local.insert("print".into(), MediaCondition::Raw("print".into()));

        let engine = RuleEngine::with_breakpoints(&options, local);
        let table: UtilityTable = [("hidden", "none")].into_iter().collect();
        let mut sheet = Stylesheet::new();
        engine.expand(&["display"], &table, AxisConfig::RESPONSIVE, &mut sheet);

        assert!(!options.breakpoints().contains_key("print"));
        let last = sheet.nodes().last().unwrap();
        match last {
            Node::Block(block) => {
                assert_eq!(block.params(), "print");
                assert_eq!(block.rules()[0].selector(), ".df-print\\:hidden");
            }
            Node::Rule(_) => panic!("expected a media block"),
        }
    }

    #[test]
    fn test_expand_blocks() {
        let mut table = DeclarationTable::new();
        table.insert("card".into(), parse_block("padding: 1rem; border-radius: 0.5rem;"));
        let mut sheet = Stylesheet::new();
        RuleEngine::new(&bare()).expand_blocks(&table, AxisConfig::NONE, &mut sheet);
        let rule = sheet.find(".df-card").unwrap();
        assert_eq!(rule.declarations().len(), 2);
        assert_eq!(rule.declaration("border-radius").unwrap().value, "0.5rem");
    }

    #[test]
    fn test_parse_block_splits_at_first_colon() {
        let decls = parse_block("background: url(http://x/y.png) ; ; broken; color:red");
        let pairs: Vec<_> = decls
            .iter()
            .map(|(p, v)| (p.as_str(), v.resolve("", &Options::default())))
            .collect();
        assert_eq!(
            pairs,
            [
                ("background", "url(http://x/y.png)".to_string()),
                ("color", "red".to_string())
            ]
        );
    }
}
