//! Selector construction for generated utility classes.
//!
//! A class name is assembled from the class prefix, any variant names
//! (breakpoint, state, container) each followed by the separator, and the
//! utility suffix. The whole name is escaped as one CSS identifier, so a `:`
//! separator or a `/` in an opacity suffix comes out as `\:` and `\/`.
//!
//! ```rust
//! use delvforge_core::{Options, PseudoState, SelectorBuilder};
//!
//! let options = Options::default();
//! let selectors = SelectorBuilder::from_options(&options);
//!
//! assert_eq!(selectors.build("", &[], "red", None), ".df-red");
//! assert_eq!(
//!     selectors.build("", &["hover"], "red", Some(PseudoState::Hover)),
//!     ".df-hover\\:red:hover"
//! );
//! assert_eq!(selectors.build("", &["md"], "w-1/2", None), ".df-md\\:w-1\\/2");
//! ```

use cssparser::{serialize_identifier, serialize_string};

use crate::options::Options;

/// The pseudo-classes generated by the state axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoState {
    Hover,
    Focus,
    Active,
    FocusVisible,
    Disabled,
}

impl PseudoState {
    /// Every state, in emission order.
    pub const ALL: [PseudoState; 5] = [
        PseudoState::Hover,
        PseudoState::Focus,
        PseudoState::Active,
        PseudoState::FocusVisible,
        PseudoState::Disabled,
    ];

    /// The state name, used both as class variant and pseudo-class.
    pub fn as_str(&self) -> &'static str {
        match self {
            PseudoState::Hover => "hover",
            PseudoState::Focus => "focus",
            PseudoState::Active => "active",
            PseudoState::FocusVisible => "focus-visible",
            PseudoState::Disabled => "disabled",
        }
    }
}

/// Escapes `name` as a CSS identifier.
pub fn escape_class(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    // Writing into a String cannot fail.
    let _ = serialize_identifier(name, &mut out);
    out
}

/// `[attribute="value"]` with the value quoted as a CSS string.
fn attribute_selector(attribute: &str, value: &str) -> String {
    let mut out = String::with_capacity(attribute.len() + value.len() + 6);
    out.push('[');
    out.push_str(attribute);
    out.push('=');
    let _ = serialize_string(value, &mut out);
    out.push(']');
    out
}

/// Builds class names and selectors from the naming options.
#[derive(Debug, Clone)]
pub struct SelectorBuilder<'a> {
    prefix: &'a str,
    separator: &'a str,
    theme_attribute: &'a str,
}

impl<'a> SelectorBuilder<'a> {
    pub fn new(prefix: &'a str, separator: &'a str, theme_attribute: &'a str) -> Self {
        Self {
            prefix,
            separator,
            theme_attribute,
        }
    }

    pub fn from_options(options: &'a Options) -> Self {
        Self::new(
            &options.prefix().class_name,
            options.separator(),
            options.theme_attribute(),
        )
    }

    /// The unescaped class name: `prefix + (variant + separator)* + suffix`.
    pub fn class_name(&self, variants: &[&str], suffix: &str) -> String {
        let mut name = String::from(self.prefix);
        for variant in variants {
            name.push_str(variant);
            name.push_str(self.separator);
        }
        name.push_str(suffix);
        name
    }

    /// A full selector for one generated rule.
    ///
    /// With an empty `theme` the selector is a plain class. Otherwise the
    /// class is qualified by the theme name and the selector matches it
    /// both beneath and on an element carrying the theme attribute.
    pub fn build(
        &self,
        theme: &str,
        variants: &[&str],
        suffix: &str,
        pseudo: Option<PseudoState>,
    ) -> String {
        let pseudo = pseudo.map(|p| format!(":{}", p.as_str())).unwrap_or_default();
        let class_name = self.class_name(variants, suffix);

        if theme.is_empty() {
            return format!(".{}{pseudo}", escape_class(&class_name));
        }

        let class = escape_class(&format!("{theme}{}{class_name}", self.separator));
        let scope = attribute_selector(self.theme_attribute, theme);
        format!(":is({scope} .{class}{pseudo}, .{class}{scope}{pseudo})")
    }

    /// `:root` for the default theme, `:root[data-theme="name"]` otherwise.
    pub fn theme_root(&self, theme: &str) -> String {
        if theme.is_empty() {
            ":root".to_string()
        } else {
            format!(":root{}", attribute_selector(self.theme_attribute, theme))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> SelectorBuilder<'static> {
        SelectorBuilder::new("df-", ":", "data-theme")
    }

    #[test]
    fn test_base_selector() {
        assert_eq!(builder().build("", &[], "red", None), ".df-red");
    }

    #[test]
    fn test_state_selector_escapes_separator() {
        assert_eq!(
            builder().build("", &["hover"], "red", Some(PseudoState::Hover)),
            ".df-hover\\:red:hover"
        );
        assert_eq!(
            builder().build("", &["focus-visible"], "red", Some(PseudoState::FocusVisible)),
            ".df-focus-visible\\:red:focus-visible"
        );
    }

    #[test]
    fn test_breakpoint_and_state_selector() {
        assert_eq!(
            builder().build("", &["md", "hover"], "red", Some(PseudoState::Hover)),
            ".df-md\\:hover\\:red:hover"
        );
    }

    #[test]
    fn test_container_selector_escapes_at_sign() {
        assert_eq!(builder().build("", &["@md"], "red", None), ".df-\\@md\\:red");
    }

    #[test]
    fn test_opacity_suffix_escapes_slash() {
        assert_eq!(
            builder().build("", &[], "bg-primary-500/50", None),
            ".df-bg-primary-500\\/50"
        );
    }

    #[test]
    fn test_theme_scoped_selector() {
        assert_eq!(
            builder().build("dark", &[], "red", None),
            ":is([data-theme=\"dark\"] .dark\\:df-red, .dark\\:df-red[data-theme=\"dark\"])"
        );
        assert_eq!(
            builder().build("dark", &["hover"], "red", Some(PseudoState::Hover)),
            ":is([data-theme=\"dark\"] .dark\\:df-hover\\:red:hover, .dark\\:df-hover\\:red[data-theme=\"dark\"]:hover)"
        );
    }

    #[test]
    fn test_custom_separator_and_prefix() {
        let b = SelectorBuilder::new("tw-", "_", "data-mode");
        assert_eq!(b.build("", &["sm"], "p-4", None), ".tw-sm_p-4");
        assert_eq!(b.theme_root("dim"), ":root[data-mode=\"dim\"]");
    }

    #[test]
    fn test_empty_prefix_leading_digit_is_escaped() {
        let b = SelectorBuilder::new("", ":", "data-theme");
        assert_eq!(b.build("", &["2xl"], "flex", None), ".\\32 xl\\:flex");
    }

    #[test]
    fn test_theme_root() {
        assert_eq!(builder().theme_root(""), ":root");
        assert_eq!(builder().theme_root("dark"), ":root[data-theme=\"dark\"]");
    }

    #[test]
    fn test_pseudo_state_order() {
        let names: Vec<_> = PseudoState::ALL.iter().map(PseudoState::as_str).collect();
        assert_eq!(names, ["hover", "focus", "active", "focus-visible", "disabled"]);
    }
}
