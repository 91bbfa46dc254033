//! Generated output: style rules, at-rule blocks and their serialization.
//!
//! A [`Stylesheet`] is append-only. Rules are built, pushed, and from then on
//! only readable; two rules with the same selector are never merged, so the
//! cascade resolves ties by source order exactly as the rules were produced.
//!
//! ```rust
//! use delvforge_core::{Declaration, StyleRule, Stylesheet};
//!
//! let mut sheet = Stylesheet::new();
//! sheet.push_rule(StyleRule::new(".df-red").with(Declaration::new("color", "#ff0000")));
//!
//! assert_eq!(sheet.to_css(), ".df-red {\n  color: #ff0000;\n}\n");
//! assert_eq!(sheet.to_minified_css(), ".df-red{color:#ff0000}");
//! ```

use std::fmt::{self, Write};

/// A single `property: value` pair inside a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Sets the `!important` flag, returning `self` for chaining.
    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }
}

/// A selector with its ordered declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    selector: String,
    declarations: Vec<Declaration>,
}

impl StyleRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Appends a declaration, returning `self` for chaining.
    pub fn with(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Returns the first declaration for `property`, if any.
    pub fn declaration(&self, property: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.property == property)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// A conditional group rule (`@media`, `@container`) holding style rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRuleBlock {
    name: String,
    params: String,
    rules: Vec<StyleRule>,
}

impl AtRuleBlock {
    pub fn new(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            rules: Vec::new(),
        }
    }

    pub fn push(&mut self, rule: StyleRule) {
        self.rules.push(rule);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &str {
        &self.params
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }
}

impl Extend<StyleRule> for AtRuleBlock {
    fn extend<T: IntoIterator<Item = StyleRule>>(&mut self, iter: T) {
        self.rules.extend(iter);
    }
}

/// A top-level item of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Rule(StyleRule),
    Block(AtRuleBlock),
}

/// The ordered output of a generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    nodes: Vec<Node>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rule(&mut self, rule: StyleRule) {
        self.nodes.push(Node::Rule(rule));
    }

    pub fn push_block(&mut self, block: AtRuleBlock) {
        self.nodes.push(Node::Block(block));
    }

    /// Appends every node of `other`, preserving its order.
    pub fn append(&mut self, other: Stylesheet) {
        self.nodes.extend(other.nodes);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of top-level nodes (rules and blocks).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates every style rule in output order, descending into blocks.
    pub fn rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.nodes.iter().flat_map(|node| match node {
            Node::Rule(rule) => std::slice::from_ref(rule).iter(),
            Node::Block(block) => block.rules.iter(),
        })
    }

    /// Total number of style rules, including those nested in blocks.
    pub fn rule_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Rule(_) => 1,
                Node::Block(block) => block.rules.len(),
            })
            .sum()
    }

    /// Iterates the top-level at-rule blocks.
    pub fn blocks(&self) -> impl Iterator<Item = &AtRuleBlock> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Block(block) => Some(block),
            Node::Rule(_) => None,
        })
    }

    /// Returns the first rule (at any depth) with exactly this selector.
    pub fn find(&self, selector: &str) -> Option<&StyleRule> {
        self.rules().find(|rule| rule.selector == selector)
    }

    /// Serializes with one declaration per line and two-space indentation.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Serializes without insignificant whitespace.
    pub fn to_minified_css(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_css(&mut out, true);
        out
    }

    /// Writes the stylesheet text into `dest`.
    pub fn write_css<W: Write>(&self, dest: &mut W, minify: bool) -> fmt::Result {
        for node in &self.nodes {
            match node {
                Node::Rule(rule) => write_rule(dest, rule, 0, minify)?,
                Node::Block(block) => {
                    if minify {
                        write!(dest, "@{} {}{{", block.name, block.params)?;
                    } else {
                        writeln!(dest, "@{} {} {{", block.name, block.params)?;
                    }
                    for rule in &block.rules {
                        write_rule(dest, rule, 1, minify)?;
                    }
                    if minify {
                        dest.write_char('}')?;
                    } else {
                        dest.write_str("}\n")?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_css(f, false)
    }
}

fn write_rule<W: Write>(dest: &mut W, rule: &StyleRule, depth: usize, minify: bool) -> fmt::Result {
    if minify {
        write!(dest, "{}{{", rule.selector)?;
        for (i, decl) in rule.declarations.iter().enumerate() {
            if i > 0 {
                dest.write_char(';')?;
            }
            write!(dest, "{}:{}", decl.property, decl.value)?;
            if decl.important {
                dest.write_str("!important")?;
            }
        }
        return dest.write_char('}');
    }

    let indent = "  ".repeat(depth);
    writeln!(dest, "{indent}{} {{", rule.selector)?;
    for decl in &rule.declarations {
        write!(dest, "{indent}  {}: {}", decl.property, decl.value)?;
        if decl.important {
            dest.write_str(" !important")?;
        }
        dest.write_str(";\n")?;
    }
    writeln!(dest, "{indent}}}")
}
