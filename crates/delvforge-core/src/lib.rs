//! # DelvForge Core - Utility-Class CSS Generation
//!
//! `delvforge-core` turns a set of design tokens (colors, spacing, type
//! scale, breakpoints, themes, components) into a deterministic stylesheet of
//! atomic utility classes such as `.df-p-4`, `.df-md\:flex` or
//! `.df-hover\:bg-primary-500\/50:hover`.
//!
//! This crate is the engine behind the `delvforge` command-line builder, but
//! can be embedded directly by anything that needs the stylesheet in memory.
//!
//! ## Core Concepts
//!
//! - [`Config`]: Serde mirror of the configuration file, with built-in defaults
//! - [`Options`]: The resolved, immutable snapshot every generator reads
//! - [`RuleEngine`]: Expands a [`UtilityTable`] across the responsive, state,
//!   theme and container-query axes selected by an [`AxisConfig`]
//! - [`Stylesheet`]: Ordered rules and at-rule blocks, serialized with
//!   [`Stylesheet::to_css`] or [`Stylesheet::to_minified_css`]
//! - [`Generator`]: Runs every built-in utility category, then any [`Plugin`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use delvforge_core::{generate, Config};
//!
//! let sheet = generate(Config::default()).unwrap();
//! let css = sheet.to_css();
//!
//! assert!(css.contains(".df-flex {"));
//! assert!(css.contains("@media screen and (min-width: 768px)"));
//! ```
//!
//! ## Expanding a Single Table
//!
//! Every built-in category is a table fed through the engine. The same entry
//! point is available to callers:
//!
//! ```rust
//! use delvforge_core::{expand, AxisConfig, Options, UtilityTable};
//!
//! let options = Options::default();
//! let table: UtilityTable = [("red", "#f00")].into_iter().collect();
//!
//! let sheet = expand(&["color"], &table, &options, AxisConfig::STATES);
//! assert_eq!(sheet.rule_count(), 1 + 5);
//! assert!(sheet.find(".df-focus-visible\\:red:focus-visible").is_some());
//! ```
//!
//! ## Themes
//!
//! Tables expanded with [`AxisConfig::with_theme`] emit one pass per theme
//! variant. The default theme's pass is unscoped; every other variant's rules
//! match both descendants of, and elements carrying, `[data-theme="<name>"]`.
//! Variant names are listed by [`ThemeResolver::resolve_variants`].
//!
//! ## Errors and Logging
//!
//! Only configuration loading and explicit color parsing return errors
//! ([`ConfigError`], [`ColorError`]). Generation never fails: malformed
//! colors, missing theme tokens and disabled features fall back quietly and
//! emit `tracing` events.

pub mod color;
pub mod config;
pub mod engine;
mod error;
pub mod generator;
pub mod options;
pub mod plugin;
pub mod selector;
pub mod stylesheet;
pub mod theme;
pub mod utilities;
pub mod variables;

// Error types
pub use error::{ColorError, ConfigError, Result};

// Configuration and resolved options
pub use config::Config;
pub use options::{cn, Breakpoints, MediaCondition, Options};

// Output model
pub use stylesheet::{AtRuleBlock, Declaration, Node, StyleRule, Stylesheet};

// Rule engine
pub use engine::{expand, parse_block, AxisConfig, DeclarationTable, RuleEngine, UtilityTable, Value};
pub use selector::{escape_class, PseudoState, SelectorBuilder};
pub use theme::ThemeResolver;

// Generation
pub use generator::{generate, Generator};
pub use plugin::{FnPlugin, Plugin};
