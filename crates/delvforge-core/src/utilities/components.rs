//! Component classes.
//!
//! Two kinds of components exist. Configured components (`components` in the
//! config) are compositions of utility classes; [`manifest`] expands them into
//! the full class list for every base/variant/size combination. Built-in
//! components (cards, buttons, forms, navigation, badges) carry their own
//! declaration blocks and are expanded through the rule engine like any other
//! utility.

use indexmap::IndexMap;

use crate::engine::{parse_block, AxisConfig, DeclarationTable, RuleEngine};
use crate::options::Options;
use crate::stylesheet::Stylesheet;

const CARDS: &[(&str, &str)] = &[
    ("card", "background-color: var(--df-background); border: 1px solid var(--df-surface-200); border-radius: var(--df-border-radius, var(--df-radius-DEFAULT)); padding: 1rem; box-shadow: var(--df-shadow-sm)"),
    ("card-flat", "background-color: var(--df-background); border: 1px solid var(--df-surface-200); border-radius: var(--df-border-radius, var(--df-radius-DEFAULT)); padding: 1rem"),
    ("card-elevated", "background-color: var(--df-background); border-radius: var(--df-border-radius, var(--df-radius-DEFAULT)); padding: 1rem; box-shadow: var(--df-shadow-lg)"),
    ("card-outlined", "background-color: var(--df-background); border: 2px solid var(--df-primary-500); border-radius: var(--df-border-radius, var(--df-radius-DEFAULT)); padding: 1rem"),
    ("card-header", "padding: 1rem 1rem 0.5rem; border-bottom: 1px solid var(--df-surface-200)"),
    ("card-body", "padding: 1rem"),
    ("card-footer", "padding: 0.5rem 1rem 1rem; border-top: 1px solid var(--df-surface-200)"),
    ("card-sm", "padding: 0.75rem"),
    ("card-lg", "padding: 1.5rem"),
    ("card-xl", "padding: 2rem"),
];

const BUTTONS: &[(&str, &str)] = &[
    ("btn", "display: inline-flex; align-items: center; justify-content: center; border-radius: var(--df-border-radius, var(--df-radius-DEFAULT)); font-weight: 500; transition: all 150ms ease; cursor: pointer; text-decoration: none; border: 1px solid transparent; font-size: 0.875rem; padding: 0.5rem 1rem; line-height: 1.25rem"),
    ("btn-primary", "background-color: var(--df-primary-500); color: #ffffff; border-color: var(--df-primary-500)"),
    ("btn-secondary", "background-color: var(--df-surface-100); color: var(--df-foreground); border-color: var(--df-surface-300)"),
    ("btn-success", "background-color: var(--df-success-500); color: #ffffff; border-color: var(--df-success-500)"),
    ("btn-warning", "background-color: var(--df-warning-500); color: #ffffff; border-color: var(--df-warning-500)"),
    ("btn-danger", "background-color: var(--df-danger-500); color: #ffffff; border-color: var(--df-danger-500)"),
    ("btn-outline", "background-color: transparent; color: var(--df-primary-500); border-color: var(--df-primary-500)"),
    ("btn-ghost", "background-color: transparent; color: var(--df-foreground); border-color: transparent"),
    ("btn-xs", "padding: 0.25rem 0.5rem; font-size: 0.75rem; line-height: 1rem"),
    ("btn-sm", "padding: 0.375rem 0.75rem; font-size: 0.8125rem; line-height: 1.125rem"),
    ("btn-lg", "padding: 0.75rem 1.5rem; font-size: 1rem; line-height: 1.5rem"),
    ("btn-xl", "padding: 1rem 2rem; font-size: 1.125rem; line-height: 1.75rem"),
    ("btn-loading", "position: relative; color: transparent"),
    ("btn-disabled", "opacity: 0.5; cursor: not-allowed; pointer-events: none"),
];

const FORMS: &[(&str, &str)] = &[
    ("form-group", "display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 1rem"),
    ("form-row", "display: flex; gap: 1rem; align-items: end"),
    ("form-control", "display: block; width: 100%; padding: 0.5rem 0.75rem; font-size: 0.875rem; line-height: 1.5; background-color: var(--df-background); border: 1px solid var(--df-surface-200); border-radius: var(--df-border-radius, var(--df-radius-DEFAULT)); transition: border-color 150ms ease, box-shadow 150ms ease"),
    ("form-select", "display: block; width: 100%; padding: 0.5rem 2rem 0.5rem 0.75rem; font-size: 0.875rem; line-height: 1.5; background-color: var(--df-background); border: 1px solid var(--df-surface-200); border-radius: var(--df-border-radius, var(--df-radius-DEFAULT)); background-repeat: no-repeat; background-position: right 0.75rem center; background-size: 16px 12px"),
    ("form-label", "display: block; font-weight: 500; margin-bottom: 0.5rem; color: var(--df-foreground)"),
    ("form-help", "font-size: 0.75rem; color: var(--df-surface-500); margin-top: 0.25rem"),
    ("form-error", "font-size: 0.75rem; color: var(--df-danger-500); margin-top: 0.25rem"),
    ("form-valid", "border-color: var(--df-success-500)"),
    ("form-invalid", "border-color: var(--df-danger-500)"),
    ("form-check", "display: flex; align-items: center; gap: 0.5rem"),
    ("form-check-input", "width: 1rem; height: 1rem; border: 1px solid var(--df-surface-200); border-radius: 0.25rem"),
];

const NAVIGATION: &[(&str, &str)] = &[
    ("navbar", "display: flex; align-items: center; justify-content: space-between; padding: 1rem; background-color: var(--df-background); border-bottom: 1px solid var(--df-surface-200)"),
    ("navbar-brand", "font-size: 1.25rem; font-weight: 600; text-decoration: none; color: var(--df-foreground)"),
    ("navbar-nav", "display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0"),
    ("navbar-item", "color: var(--df-surface-500); text-decoration: none; padding: 0.5rem"),
    ("navbar-active", "color: var(--df-primary-500); font-weight: 500"),
    ("breadcrumb", "display: flex; align-items: center; gap: 0.5rem; list-style: none; margin: 0; padding: 0"),
    ("breadcrumb-item", "color: var(--df-surface-500)"),
    ("breadcrumb-separator", "color: var(--df-surface-500); user-select: none"),
    ("tabs", "display: flex; border-bottom: 1px solid var(--df-surface-200)"),
    ("tab", "padding: 0.75rem 1rem; cursor: pointer; border-bottom: 2px solid transparent; transition: all 150ms ease"),
    ("tab-active", "border-bottom-color: var(--df-primary-500); color: var(--df-primary-500); font-weight: 500"),
];

const BADGES: &[(&str, &str)] = &[
    ("badge", "display: inline-flex; align-items: center; padding: 0.25rem 0.5rem; font-size: 0.75rem; font-weight: 500; border-radius: 9999px; line-height: 1"),
    ("badge-primary", "background-color: var(--df-primary-500); color: #ffffff"),
    ("badge-secondary", "background-color: var(--df-surface-200); color: var(--df-foreground)"),
    ("badge-success", "background-color: var(--df-success-500); color: #ffffff"),
    ("badge-warning", "background-color: var(--df-warning-500); color: #ffffff"),
    ("badge-danger", "background-color: var(--df-danger-500); color: #ffffff"),
    ("badge-outline", "background-color: transparent; border: 1px solid var(--df-primary-500); color: var(--df-primary-500)"),
    ("badge-sm", "padding: 0.125rem 0.375rem; font-size: 0.6875rem"),
    ("badge-lg", "padding: 0.375rem 0.75rem; font-size: 0.875rem"),
    ("chip", "display: inline-flex; align-items: center; gap: 0.25rem; padding: 0.375rem 0.75rem; font-size: 0.875rem; background-color: var(--df-surface-100); border-radius: 9999px"),
    ("chip-remove", "cursor: pointer; opacity: 0.7; transition: opacity 150ms ease"),
];

/// The built-in component blocks, with `--df-` rewritten to the configured
/// custom property prefix.
pub fn builtin_blocks(options: &Options) -> DeclarationTable {
    let variable_prefix = format!("--{}", options.prefix().css_variable);
    [CARDS, BUTTONS, FORMS, NAVIGATION, BADGES]
        .into_iter()
        .flatten()
        .map(|(name, block)| {
            let block = block.replace("--df-", &variable_prefix);
            (name.to_string(), parse_block(&block))
        })
        .collect()
}

/// Prefixes every class of a space separated list.
///
/// Variant prefixes inside a token (`hover:bg-primary-600`) keep their
/// position and use the configured separator.
fn prefix_classes(options: &Options, classes: &str) -> String {
    classes
        .split_whitespace()
        .map(|class| options.class_name(&class.replace(':', options.separator())))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Class lists for every configured component combination.
///
/// Keys are `<name>`, `<name>-<variant>`, `<name>-<size>` and
/// `<name>-<size>-<variant>`; values are the prefixed class lists.
pub fn manifest(options: &Options) -> IndexMap<String, String> {
    let mut out = IndexMap::new();

    for (name, component) in options.components() {
        let base = component.base.as_str();
        out.insert(name.clone(), prefix_classes(options, base));

        for (variant, classes) in &component.variants {
            out.insert(
                format!("{name}-{variant}"),
                prefix_classes(options, &format!("{base} {classes}")),
            );
        }

        for (size, size_classes) in &component.sizes {
            out.insert(
                format!("{name}-{size}"),
                prefix_classes(options, &format!("{base} {size_classes}")),
            );
            for (variant, classes) in &component.variants {
                out.insert(
                    format!("{name}-{size}-{variant}"),
                    prefix_classes(options, &format!("{base} {size_classes} {classes}")),
                );
            }
        }
    }

    out
}

pub fn generate(options: &Options, out: &mut Stylesheet) {
    let engine = RuleEngine::new(options);
    engine.expand_blocks(
        &builtin_blocks(options),
        AxisConfig::INTERACTIVE.with_theme(),
        out,
    );
}
