//! The attribute tree: a fixed arena of named highlighter attributes with
//! parent-child inheritance and luma-adaptive default resolution.
//!
//! Nodes are addressed by [`AttrId`] indices into the arena. The tree is
//! acyclic by construction: the builder consumes specs in declaration order
//! and refuses a spec whose parent has not been registered yet.

use std::collections::HashMap;

use thiserror::Error;

use crate::catalog::defaults::{DefaultAttr, DefaultAttributes};
use crate::color;

/// Extra luma pushed into an inverted background that has no paired custom
/// foreground, so background-only highlights stay visible on a light canvas.
const LONE_BACKGROUND_LUMA: f64 = 0.15;

/// Errors from building the attribute tree.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A spec referenced a parent declared later (or never).
    #[error("attribute `{id}` references unregistered parent `{parent}`")]
    UnknownParent {
        /// The offending attribute id.
        id: String,
        /// The parent id it referenced.
        parent: String,
    },

    /// The same attribute id was declared twice.
    #[error("duplicate attribute id `{0}`")]
    DuplicateId(String),

    /// The spec list did not start with a single parentless root.
    #[error("attribute `{0}` must declare a parent (only the root may omit it)")]
    MissingParent(String),
}

/// Index of an attribute in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttrId(usize);

impl AttrId {
    /// The root attribute (`TEXT`), always at index 0.
    pub const ROOT: AttrId = AttrId(0);
}

/// A resolved color: either a concrete hex value or the explicit marker that
/// this field must never receive a color, whatever inheritance says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    /// A bare 6-digit lowercase hex color.
    Hex(String),
    /// Never assign a color to this field.
    Ignore,
}

impl ColorValue {
    /// The hex string, if this is a concrete color.
    pub fn hex(&self) -> Option<&str> {
        match self {
            ColorValue::Hex(h) => Some(h),
            ColorValue::Ignore => None,
        }
    }
}

/// A default color in an attribute spec: a concrete RGB triple or the
/// ignore marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// Concrete color as 0-255 channels.
    Rgb(u8, u8, u8),
    /// Suppress this field entirely.
    Ignore,
}

impl ColorSpec {
    fn to_value(self) -> ColorValue {
        match self {
            ColorSpec::Rgb(r, g, b) => {
                ColorValue::Hex(format!("{:02x}{:02x}{:02x}", r, g, b))
            }
            ColorSpec::Ignore => ColorValue::Ignore,
        }
    }
}

/// A concrete, already-computed attribute styling. Produced when a theme rule
/// matches; immutable once created.
#[derive(Debug, Clone, Default)]
pub struct ResolvedValue {
    /// Explicit foreground, if any.
    pub foreground: Option<String>,
    /// Explicit background, if any.
    pub background: Option<String>,
    /// Font style bits (1 = bold, 2 = italic).
    pub font_style: u8,
    /// Effect type (1 = underline, 2 = box, ...); 0 means none.
    pub effect_type: u32,
    /// Explicit effect color, if any.
    pub effect_color: Option<String>,
    /// Error stripe color, if any.
    pub error_stripe: Option<String>,
}

/// Lazily-resolved attribute styling: defaults plus a parent to fall back to.
/// The actual colors come out of the tree-level resolution functions.
#[derive(Debug, Clone, Default)]
pub struct DerivedValue {
    /// Default foreground, or the ignore marker.
    pub default_fore: Option<ColorValue>,
    /// Default background, or the ignore marker.
    pub default_back: Option<ColorValue>,
    /// Default font style bits.
    pub default_font: u8,
    /// Default effect color.
    pub default_effect_color: Option<String>,
    /// Effect type, if the defaults declared one.
    pub effect_type: Option<u32>,
    /// Error stripe color, if the defaults declared one.
    pub error_stripe: Option<String>,
}

impl DerivedValue {
    fn from_seed(seed: &DefaultAttr) -> Self {
        DerivedValue {
            default_fore: seed.foreground.clone().map(ColorValue::Hex),
            default_back: seed.background.clone().map(ColorValue::Hex),
            default_font: seed.font_type,
            default_effect_color: seed.effect_color.clone(),
            effect_type: seed.effect_type,
            error_stripe: seed.error_stripe.clone(),
        }
    }
}

/// The two states an attribute's styling can be in.
#[derive(Debug, Clone)]
pub enum Value {
    /// Explicitly set (by the theme import).
    Resolved(ResolvedValue),
    /// Still derived from defaults and the parent chain.
    Derived(DerivedValue),
}

/// One highlightable construct in the output scheme.
#[derive(Debug, Clone)]
pub struct Attribute {
    /// Unique name, the key in the output catalog.
    pub id: String,
    /// Parent attribute; `None` only for the root.
    pub parent: Option<AttrId>,
    /// Lexical scope to look up in the theme, if any.
    pub scope: Option<String>,
    /// Current styling.
    pub value: Value,
}

/// Declarative description of one attribute, consumed by the tree builder.
/// Specs must arrive in dependency order (parent before child).
#[derive(Debug, Clone)]
pub struct AttrSpec {
    id: &'static str,
    parent: Option<&'static str>,
    scope: Option<&'static str>,
    foreground: Option<ColorSpec>,
    background: Option<ColorSpec>,
    font_style: u8,
    effect_type: Option<u32>,
}

impl AttrSpec {
    /// The root spec; only `TEXT` uses this.
    pub fn root(id: &'static str) -> Self {
        AttrSpec {
            id,
            parent: None,
            scope: None,
            foreground: None,
            background: None,
            font_style: 0,
            effect_type: None,
        }
    }

    /// A spec with the given id and parent id.
    pub fn new(id: &'static str, parent: &'static str) -> Self {
        AttrSpec {
            parent: Some(parent),
            ..AttrSpec::root(id)
        }
    }

    /// Attach a TextMate scope to import this attribute from.
    pub fn scope(mut self, scope: &'static str) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Default foreground color.
    pub fn fg(mut self, r: u8, g: u8, b: u8) -> Self {
        self.foreground = Some(ColorSpec::Rgb(r, g, b));
        self
    }

    /// Default background color.
    pub fn bg(mut self, r: u8, g: u8, b: u8) -> Self {
        self.background = Some(ColorSpec::Rgb(r, g, b));
        self
    }

    /// Suppress the foreground entirely, whatever defaults or the theme say.
    pub fn ignore_fg(mut self) -> Self {
        self.foreground = Some(ColorSpec::Ignore);
        self
    }

    /// Suppress the background entirely, whatever defaults or the theme say.
    pub fn ignore_bg(mut self) -> Self {
        self.background = Some(ColorSpec::Ignore);
        self
    }

    /// Default font style bits (1 = bold, 2 = italic).
    pub fn font(mut self, style: u8) -> Self {
        self.font_style = style;
        self
    }

    /// Default effect type (1 = underline).
    pub fn effect(mut self, effect_type: u32) -> Self {
        self.effect_type = Some(effect_type);
        self
    }
}

/// The attribute arena. Built once, mutated once during theme import, then
/// read-only during export.
#[derive(Debug)]
pub struct AttributeTree {
    nodes: Vec<Attribute>,
    index: HashMap<String, AttrId>,
}

impl AttributeTree {
    /// Build the tree from a topologically ordered spec list, seeding derived
    /// values from the baseline attribute catalog where ids match.
    ///
    /// The first spec must be the parentless root; every other spec must name
    /// an already-registered parent.
    pub fn build(defaults: &DefaultAttributes, specs: &[AttrSpec]) -> Result<Self, CatalogError> {
        let mut tree = AttributeTree {
            nodes: Vec::with_capacity(specs.len()),
            index: HashMap::with_capacity(specs.len()),
        };
        for spec in specs {
            tree.insert(defaults, spec)?;
        }
        Ok(tree)
    }

    fn insert(&mut self, defaults: &DefaultAttributes, spec: &AttrSpec) -> Result<(), CatalogError> {
        if self.index.contains_key(spec.id) {
            return Err(CatalogError::DuplicateId(spec.id.to_string()));
        }
        let parent = match spec.parent {
            Some(pid) => Some(self.index.get(pid).copied().ok_or_else(|| {
                CatalogError::UnknownParent {
                    id: spec.id.to_string(),
                    parent: pid.to_string(),
                }
            })?),
            None if self.nodes.is_empty() => None,
            None => return Err(CatalogError::MissingParent(spec.id.to_string())),
        };

        let mut derived = match defaults.get(spec.id) {
            // A baseline entry wins over the spec's own colors; an explicit
            // ignore still punches through to suppress the seeded default.
            Some(seed) => DerivedValue::from_seed(seed),
            None => DerivedValue {
                default_fore: spec.foreground.map(ColorSpec::to_value),
                default_back: spec.background.map(ColorSpec::to_value),
                default_font: spec.font_style,
                effect_type: spec.effect_type,
                ..DerivedValue::default()
            },
        };
        if spec.foreground == Some(ColorSpec::Ignore) {
            derived.default_fore = Some(ColorValue::Ignore);
        }
        if spec.background == Some(ColorSpec::Ignore) {
            derived.default_back = Some(ColorValue::Ignore);
        }

        let id = AttrId(self.nodes.len());
        self.index.insert(spec.id.to_string(), id);
        self.nodes.push(Attribute {
            id: spec.id.to_string(),
            parent,
            scope: spec.scope.map(str::to_string),
            value: Value::Derived(derived),
        });
        Ok(())
    }

    /// Number of attributes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up an attribute id.
    pub fn lookup(&self, id: &str) -> Option<AttrId> {
        self.index.get(id).copied()
    }

    /// All attribute ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = AttrId> + '_ {
        (0..self.nodes.len()).map(AttrId)
    }

    /// Borrow an attribute node.
    pub fn node(&self, id: AttrId) -> &Attribute {
        &self.nodes[id.0]
    }

    /// Replace an attribute's value (theme import).
    pub fn set_value(&mut self, id: AttrId, value: ResolvedValue) {
        self.nodes[id.0].value = Value::Resolved(value);
    }

    /// The derived value of an attribute, if it still holds one.
    pub fn derived(&self, id: AttrId) -> Option<&DerivedValue> {
        match &self.nodes[id.0].value {
            Value::Derived(d) => Some(d),
            Value::Resolved(_) => None,
        }
    }

    /// True when the attribute should mirror its parent verbatim: the node
    /// still holds a derived value, the parent is not the root, and the theme
    /// explicitly set the parent. An attribute the theme resolved directly is
    /// never inherited, whatever its parent holds.
    pub fn inherited(&self, id: AttrId) -> bool {
        let node = &self.nodes[id.0];
        if matches!(node.value, Value::Resolved(_)) {
            return false;
        }
        match node.parent {
            Some(parent) if parent != AttrId::ROOT => {
                matches!(self.nodes[parent.0].value, Value::Resolved(_))
            }
            _ => false,
        }
    }

    /// True when the nearest ancestor background is dark: the baseline
    /// defaults assume a light canvas, so dark reference backgrounds flip
    /// the hard-coded colors.
    pub fn inverted(&self, id: AttrId) -> bool {
        let mut cursor = self.nodes[id.0].parent;
        while let Some(parent) = cursor {
            match self.background(parent) {
                Some(ColorValue::Hex(hex)) => return color::luma(&hex) < 0.5,
                _ => cursor = self.nodes[parent.0].parent,
            }
        }
        false
    }

    /// Contrast-adapt a default color against the attribute's reference
    /// background: identity when not inverted, otherwise flip the luma and
    /// nudge it lighter by `add_luma` if it is still dark.
    pub fn transform(&self, id: AttrId, hex: &str, add_luma: f64) -> String {
        if !self.inverted(id) {
            return hex.to_string();
        }
        let (mut y, i, q) = color::hex_to_yiq(hex);
        y = 1.0 - y;
        if y < 0.5 {
            y += add_luma;
        }
        let (r, g, b) = color::yiq_to_rgb(y, i, q);
        color::rgb_to_hex(r, g, b)
    }

    /// Resolved foreground.
    pub fn foreground(&self, id: AttrId) -> Option<ColorValue> {
        self.resolve_color(id, Field::Foreground)
    }

    /// Resolved background. A lone default background (no paired default
    /// foreground) gets the extra lightening nudge when inverted.
    pub fn background(&self, id: AttrId) -> Option<ColorValue> {
        self.resolve_color(id, Field::Background)
    }

    /// Resolved effect color.
    pub fn effect_color(&self, id: AttrId) -> Option<ColorValue> {
        self.resolve_color(id, Field::EffectColor)
    }

    /// Resolved font style: cumulative OR down the parent chain, never
    /// short-circuited by inheritance.
    pub fn font_style(&self, id: AttrId) -> u8 {
        let node = &self.nodes[id.0];
        match &node.value {
            Value::Resolved(v) => v.font_style,
            Value::Derived(d) => {
                let parent_font = node.parent.map_or(0, |p| self.font_style(p));
                parent_font | d.default_font
            }
        }
    }

    /// Resolved effect type. Derived values use their own field only.
    pub fn effect_type(&self, id: AttrId) -> u32 {
        match &self.nodes[id.0].value {
            Value::Resolved(v) => v.effect_type,
            Value::Derived(d) => d.effect_type.unwrap_or(0),
        }
    }

    /// Resolved error stripe color. Derived values use their own field only.
    pub fn error_stripe(&self, id: AttrId) -> Option<String> {
        match &self.nodes[id.0].value {
            Value::Resolved(v) => v.error_stripe.clone(),
            Value::Derived(d) => d.error_stripe.clone(),
        }
    }

    /// Shared resolution walk for the three color fields:
    ///   1. inherited: mirror the parent verbatim;
    ///   2. own default: transform a concrete color, stop dead on ignore;
    ///   3. non-root parent: soft fallback (re-evaluated at the parent,
    ///      including its own lone-background nudge);
    ///   4. nothing.
    fn resolve_color(&self, id: AttrId, field: Field) -> Option<ColorValue> {
        let node = &self.nodes[id.0];
        match &node.value {
            Value::Resolved(v) => {
                let hex = match field {
                    Field::Foreground => v.foreground.as_deref(),
                    Field::Background => v.background.as_deref(),
                    Field::EffectColor => v.effect_color.as_deref(),
                };
                hex.map(|h| ColorValue::Hex(h.to_string()))
            }
            Value::Derived(d) => {
                if self.inherited(id) {
                    return self.resolve_color(node.parent?, field);
                }
                let own = match field {
                    Field::Foreground => d.default_fore.clone(),
                    Field::Background => d.default_back.clone(),
                    Field::EffectColor => d.default_effect_color.clone().map(ColorValue::Hex),
                };
                match own {
                    Some(ColorValue::Ignore) => Some(ColorValue::Ignore),
                    Some(ColorValue::Hex(hex)) => {
                        let add_luma = match field {
                            Field::Background if d.default_fore.is_none() => LONE_BACKGROUND_LUMA,
                            _ => 0.0,
                        };
                        Some(ColorValue::Hex(self.transform(id, &hex, add_luma)))
                    }
                    None => match node.parent {
                        Some(parent) if parent != AttrId::ROOT => {
                            self.resolve_color(parent, field)
                        }
                        _ => None,
                    },
                }
            }
        }
    }
}

/// Which color field a resolution walk is reading.
#[derive(Debug, Clone, Copy)]
enum Field {
    Foreground,
    Background,
    EffectColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> Vec<AttrSpec> {
        vec![
            AttrSpec::root("TEXT"),
            AttrSpec::new("KEYWORD", "TEXT").scope("keyword"),
            AttrSpec::new("KEYWORD_CHILD", "KEYWORD"),
            AttrSpec::new("BRACE", "TEXT").bg(153, 204, 255),
            AttrSpec::new("EMBEDDED", "TEXT").ignore_bg().scope("source.embedded"),
            AttrSpec::new("BOLD", "TEXT").font(1),
            AttrSpec::new("BOLD_ITALIC", "BOLD").font(2),
        ]
    }

    fn tree() -> AttributeTree {
        AttributeTree::build(&DefaultAttributes::empty(), &specs()).unwrap()
    }

    fn resolve_root(tree: &mut AttributeTree, fore: &str, back: &str) {
        tree.set_value(
            AttrId::ROOT,
            ResolvedValue {
                foreground: Some(fore.to_string()),
                background: Some(back.to_string()),
                ..ResolvedValue::default()
            },
        );
    }

    #[test]
    fn forward_parent_reference_is_rejected() {
        let bad = vec![AttrSpec::root("TEXT"), AttrSpec::new("A", "B"), AttrSpec::new("B", "TEXT")];
        let err = AttributeTree::build(&DefaultAttributes::empty(), &bad).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownParent { .. }));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let bad = vec![AttrSpec::root("TEXT"), AttrSpec::new("A", "TEXT"), AttrSpec::new("A", "TEXT")];
        let err = AttributeTree::build(&DefaultAttributes::empty(), &bad).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(_)));
    }

    #[test]
    fn inherited_mirrors_parent_exactly() {
        let mut tree = tree();
        resolve_root(&mut tree, "ffffff", "000000");
        let keyword = tree.lookup("KEYWORD").unwrap();
        tree.set_value(
            keyword,
            ResolvedValue {
                foreground: Some("ff0000".to_string()),
                ..ResolvedValue::default()
            },
        );
        let child = tree.lookup("KEYWORD_CHILD").unwrap();
        assert!(tree.inherited(child));
        assert_eq!(tree.foreground(child), tree.foreground(keyword));
        assert_eq!(tree.background(child), tree.background(keyword));
    }

    #[test]
    fn resolved_child_under_resolved_parent_keeps_its_own_colors() {
        let mut tree = tree();
        resolve_root(&mut tree, "ffffff", "000000");
        let keyword = tree.lookup("KEYWORD").unwrap();
        let child = tree.lookup("KEYWORD_CHILD").unwrap();
        tree.set_value(
            keyword,
            ResolvedValue {
                foreground: Some("00ff00".to_string()),
                ..ResolvedValue::default()
            },
        );
        tree.set_value(
            child,
            ResolvedValue {
                foreground: Some("ff0000".to_string()),
                ..ResolvedValue::default()
            },
        );
        // Both ends of the edge are theme-set: the child is not inherited
        // and keeps its own foreground.
        assert!(!tree.inherited(child));
        assert_eq!(tree.foreground(child), Some(ColorValue::Hex("ff0000".to_string())));
        assert_ne!(tree.foreground(child), tree.foreground(keyword));
    }

    #[test]
    fn root_parented_attribute_resolves_to_nothing() {
        let mut tree = tree();
        resolve_root(&mut tree, "ffffff", "000000");
        let keyword = tree.lookup("KEYWORD").unwrap();
        // Parent is the root: no inheritance, no defaults, no colors.
        assert!(!tree.inherited(keyword));
        assert_eq!(tree.foreground(keyword), None);
        assert_eq!(tree.background(keyword), None);
    }

    #[test]
    fn transform_is_identity_on_light_reference_background() {
        let mut tree = tree();
        resolve_root(&mut tree, "000000", "ffffff");
        let brace = tree.lookup("BRACE").unwrap();
        assert!(!tree.inverted(brace));
        assert_eq!(tree.transform(brace, "99ccff", 0.0), "99ccff");
        assert_eq!(tree.background(brace), Some(ColorValue::Hex("99ccff".to_string())));
    }

    #[test]
    fn transform_flips_luma_on_dark_reference_background() {
        let mut tree = tree();
        resolve_root(&mut tree, "ffffff", "000000");
        let brace = tree.lookup("BRACE").unwrap();
        assert!(tree.inverted(brace));
        let flipped = tree.transform(brace, "99ccff", 0.0);
        assert_ne!(flipped, "99ccff");
        // A light default must come out dark.
        assert!(crate::color::luma(&flipped) < 0.5);
    }

    #[test]
    fn lone_background_gets_extra_luma_when_inverted() {
        let mut tree = tree();
        resolve_root(&mut tree, "ffffff", "000000");
        let brace = tree.lookup("BRACE").unwrap();
        let with_nudge = tree.background(brace).unwrap();
        let bare_flip = tree.transform(brace, "99ccff", 0.0);
        // BRACE has no default foreground, so resolution adds 0.15 luma
        // on top of the plain flip.
        assert!(crate::color::luma(with_nudge.hex().unwrap()) > crate::color::luma(&bare_flip));
    }

    #[test]
    fn ignore_background_stops_resolution() {
        let mut tree = tree();
        resolve_root(&mut tree, "ffffff", "000000");
        let embedded = tree.lookup("EMBEDDED").unwrap();
        assert_eq!(tree.background(embedded), Some(ColorValue::Ignore));
    }

    #[test]
    fn font_style_accumulates_down_the_chain() {
        let mut tree = tree();
        resolve_root(&mut tree, "ffffff", "000000");
        let bold_italic = tree.lookup("BOLD_ITALIC").unwrap();
        assert_eq!(tree.font_style(bold_italic), 3);
    }

    #[test]
    fn seeded_default_survives_but_ignore_punches_through() {
        let mut defaults = DefaultAttributes::empty();
        defaults.insert(
            "EMBEDDED",
            DefaultAttr {
                background: Some("112233".to_string()),
                foreground: Some("445566".to_string()),
                ..DefaultAttr::default()
            },
        );
        let tree = AttributeTree::build(&defaults, &specs()).unwrap();
        let embedded = tree.lookup("EMBEDDED").unwrap();
        let derived = tree.derived(embedded).unwrap();
        // The spec's ignore_bg overrides the seeded background; the seeded
        // foreground stays.
        assert_eq!(derived.default_back, Some(ColorValue::Ignore));
        assert_eq!(derived.default_fore, Some(ColorValue::Hex("445566".to_string())));
    }
}
