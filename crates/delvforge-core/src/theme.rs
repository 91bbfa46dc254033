//! Theme variant resolution.
//!
//! Every declared theme becomes one *variant name* that selectors are scoped
//! by. The default theme (the one marked `default: true`, or the first
//! declared one when none is) contributes the empty name and is generated
//! unscoped; every other theme contributes its `name`, or its key when it has
//! none.
//!
//! ```rust
//! use delvforge_core::Options;
//!
//! let options = Options::default();
//! let resolver = options.theme_resolver();
//!
//! assert_eq!(resolver.resolve_variants(), ["", "dark"]);
//! assert_eq!(resolver.default_key(), Some("light"));
//! ```

use indexmap::IndexMap;

use crate::config::{ComponentSpec, ThemeSpec, TokenTable};

/// Computes and iterates the theme variant names of a theme table.
#[derive(Debug, Clone)]
pub struct ThemeResolver<'a> {
    themes: &'a IndexMap<String, ThemeSpec>,
    default_key: Option<&'a str>,
    variants: Vec<String>,
}

impl<'a> ThemeResolver<'a> {
    pub fn new(themes: &'a IndexMap<String, ThemeSpec>) -> Self {
        let default_key = themes
            .iter()
            .find(|(_, theme)| theme.default)
            .or_else(|| themes.first())
            .map(|(key, _)| key.as_str());

        let variants = themes
            .iter()
            .map(|(key, theme)| {
                if Some(key.as_str()) == default_key {
                    String::new()
                } else {
                    theme.name.clone().unwrap_or_else(|| key.clone())
                }
            })
            .collect();

        Self {
            themes,
            default_key,
            variants,
        }
    }

    /// Variant names in declaration order; `[""]` when no theme is declared.
    pub fn resolve_variants(&self) -> Vec<&str> {
        if self.variants.is_empty() {
            vec![""]
        } else {
            self.variants.iter().map(String::as_str).collect()
        }
    }

    /// Calls `f` once per declared theme's variant name.
    ///
    /// Does nothing when no theme is declared; see [`always`](Self::always).
    pub fn for_each<F: FnMut(&str)>(&self, mut f: F) {
        for variant in &self.variants {
            f(variant);
        }
    }

    /// Like [`for_each`](Self::for_each), but calls `f("")` when no theme is declared.
    pub fn always<F: FnMut(&str)>(&self, mut f: F) {
        for variant in self.resolve_variants() {
            f(variant);
        }
    }

    /// Calls `f` with the theme stored under `key`, if there is one.
    ///
    /// A missing theme is not an error; callers fall back to global tokens.
    pub fn with_theme<F: FnOnce(&'a ThemeSpec)>(&self, key: &str, f: F) {
        if let Some(theme) = self.themes.get(key) {
            f(theme);
        }
    }

    /// Key of the default theme.
    pub fn default_key(&self) -> Option<&'a str> {
        self.default_key
    }

    pub fn is_default(&self, key: &str) -> bool {
        self.default_key == Some(key)
    }

    /// The theme a variant name was produced from. `""` is the default theme.
    pub fn theme_for_variant(&self, variant: &str) -> Option<&'a ThemeSpec> {
        let index = self.variants.iter().position(|v| v == variant)?;
        self.themes.get_index(index).map(|(_, theme)| theme)
    }

    /// Pairs of (theme key, variant name) in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a ThemeSpec, &str)> + '_ {
        self.themes
            .iter()
            .zip(self.variants.iter())
            .map(|((key, theme), variant)| (key.as_str(), theme, variant.as_str()))
    }
}

/// Layers each theme's colors and components over copies of the global tables.
///
/// Theme entries win; global entries the theme does not define are added.
/// Runs once while options are resolved, before any rule is emitted.
pub(crate) fn inherit_global_tokens(
    themes: &mut IndexMap<String, ThemeSpec>,
    colors: &TokenTable,
    components: &IndexMap<String, ComponentSpec>,
) {
    for theme in themes.values_mut() {
        let mut merged_colors = colors.clone();
        merged_colors.extend(std::mem::take(&mut theme.colors));
        theme.colors = merged_colors;

        let mut merged_components = components.clone();
        merged_components.extend(std::mem::take(&mut theme.components));
        theme.components = merged_components;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenValue;

    fn theme(name: Option<&str>, default: bool) -> ThemeSpec {
        ThemeSpec {
            name: name.map(str::to_string),
            default,
            ..ThemeSpec::default()
        }
    }

    #[test]
    fn test_no_themes_resolves_to_single_anonymous_variant() {
        let themes = IndexMap::new();
        let resolver = ThemeResolver::new(&themes);
        assert_eq!(resolver.resolve_variants(), [""]);
        assert_eq!(resolver.default_key(), None);
    }

    #[test]
    fn test_for_each_skips_when_empty_but_always_runs_once() {
        let themes = IndexMap::new();
        let resolver = ThemeResolver::new(&themes);

        let mut seen = Vec::new();
        resolver.for_each(|v| seen.push(v.to_string()));
        assert!(seen.is_empty());

        resolver.always(|v| seen.push(v.to_string()));
        assert_eq!(seen, [""]);
    }

    #[test]
    fn test_first_theme_is_default_when_none_marked() {
        let mut themes = IndexMap::new();
        themes.insert("paper".to_string(), theme(None, false));
        themes.insert("ink".to_string(), theme(None, false));
        let resolver = ThemeResolver::new(&themes);
        assert_eq!(resolver.resolve_variants(), ["", "ink"]);
        assert!(resolver.is_default("paper"));
    }

    #[test]
    fn test_marked_default_wins_over_position() {
        let mut themes = IndexMap::new();
        themes.insert("paper".to_string(), theme(None, false));
        themes.insert("ink".to_string(), theme(None, true));
        themes.insert("sepia".to_string(), theme(Some("warm"), false));
        let resolver = ThemeResolver::new(&themes);
        assert_eq!(resolver.resolve_variants(), ["paper", "", "warm"]);
    }

    #[test]
    fn test_for_each_preserves_declaration_order() {
        let mut themes = IndexMap::new();
        themes.insert("a".to_string(), theme(None, true));
        themes.insert("b".to_string(), theme(None, false));
        themes.insert("c".to_string(), theme(None, false));
        let resolver = ThemeResolver::new(&themes);

        let mut seen = Vec::new();
        resolver.for_each(|v| seen.push(v.to_string()));
        assert_eq!(seen, ["", "b", "c"]);
    }

    #[test]
    fn test_with_theme_is_noop_for_unknown_key() {
        let mut themes = IndexMap::new();
        themes.insert("dark".to_string(), theme(None, false));
        let resolver = ThemeResolver::new(&themes);

        let mut calls = 0;
        resolver.with_theme("nope", |_| calls += 1);
        assert_eq!(calls, 0);
        resolver.with_theme("dark", |_| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_theme_for_variant() {
        let mut themes = IndexMap::new();
        themes.insert("light".to_string(), theme(None, true));
        themes.insert("dark".to_string(), theme(Some("night"), false));
        let resolver = ThemeResolver::new(&themes);

        assert!(resolver.theme_for_variant("").unwrap().default);
        assert_eq!(
            resolver.theme_for_variant("night").unwrap().name.as_deref(),
            Some("night")
        );
        assert!(resolver.theme_for_variant("dark").is_none());
    }

    #[test]
    fn test_inherit_global_tokens_theme_wins() {
        let mut colors = TokenTable::new();
        colors.insert("background".into(), TokenValue::from("#fff"));
        colors.insert("accent".into(), TokenValue::from("#f00"));

        let mut dark = theme(None, false);
        dark.colors
            .insert("background".into(), TokenValue::from("#000"));

        let mut themes = IndexMap::new();
        themes.insert("dark".to_string(), dark);

        inherit_global_tokens(&mut themes, &colors, &IndexMap::new());

        let merged = &themes["dark"].colors;
        assert_eq!(merged["background"], TokenValue::from("#000"));
        assert_eq!(merged["accent"], TokenValue::from("#f00"));
        // Global table is untouched
        assert_eq!(colors["background"], TokenValue::from("#fff"));
    }
}
