//! Theme import: walk the attribute tree, pull overrides out of the theme
//! via the scope matcher, and derive the editor-wide colors.

use std::collections::{BTreeMap, HashSet};

use crate::catalog::{AttrId, AttributeTree, ColorValue, DerivedValue, ResolvedValue};
use crate::color;
use crate::theme::{find_by_scope, ThemeSettings, TmTheme};

/// Embedded-script visualization attributes whose backgrounds are fixed
/// accent hues alpha-blended over the theme's base background.
const SCRIPTING_BLENDS: &[(&str, &str)] = &[
    ("PHP_SCRIPTING_BACKGROUND", "8080ff2e"),
    ("SMARTY_BACKGROUND", "8080ff2e"),
    ("TWIG_BACKGROUND", "8080ff2e"),
    ("RHTML_SCRIPTING_BACKGROUND_ID", "80ff802e"),
    ("INJECTED_LANGUAGE_FRAGMENT", "ffff802e"),
];

/// What a theme import produced: the editor-wide color map and which theme
/// selectors were actually consulted.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Editor-wide color roles (caret, selection, gutter guides, ...).
    pub colors: BTreeMap<String, String>,
    /// Selectors of theme rules that matched some attribute.
    pub used_scopes: HashSet<String>,
    /// Whether the theme carried a global default rule.
    pub default_rule_found: bool,
    /// How many attributes received a theme override.
    pub imported: usize,
}

impl ImportReport {
    /// Theme selectors that were never consulted (informational).
    pub fn unused_scopes<'a>(&self, theme: &'a TmTheme) -> Vec<&'a str> {
        theme
            .settings
            .iter()
            .filter_map(|rule| rule.scope.as_deref())
            .filter(|scope| !self.used_scopes.contains(*scope))
            .collect()
    }
}

/// Apply `theme` to the tree and derive the auxiliary colors.
///
/// A theme without a global default rule is reported and yields a no-op
/// import: the tree keeps its baseline-derived values and the color map
/// stays empty. Individual missed scopes are diagnostics, never errors.
pub fn apply_theme(tree: &mut AttributeTree, theme: &TmTheme) -> ImportReport {
    let mut report = ImportReport::default();

    let Some(default_rule) = theme.default_rule() else {
        println!("cannot find default settings in theme; nothing imported");
        return report;
    };
    report.default_rule_found = true;

    let defaults = default_rule.settings.clone();
    tree.set_value(AttrId::ROOT, resolve_settings(&defaults, None));

    // Base background for alpha compositing; themes are expected to carry
    // one, but its absence only disables the blended colors.
    let base = defaults
        .background
        .as_deref()
        .and_then(|bg| color::from_theme(bg, None));
    let base = base.as_deref();

    derive_global_colors(&mut report.colors, &defaults, base, tree);
    import_scoped_attributes(tree, theme, &mut report);
    blend_scripting_backgrounds(tree, base);

    report
}

/// Build the editor-wide color map from the theme's global settings.
fn derive_global_colors(
    colors: &mut BTreeMap<String, String>,
    defaults: &ThemeSettings,
    base: Option<&str>,
    tree: &AttributeTree,
) {
    if let Some(caret) = defaults.caret.as_deref().and_then(|c| color::from_theme(c, None)) {
        colors.insert("CARET_COLOR".to_string(), caret);
    }
    if let Some(invisibles) = defaults
        .invisibles
        .as_deref()
        .and_then(|c| color::from_theme(c, base))
    {
        colors.insert("INDENT_GUIDE".to_string(), invisibles.clone());
        colors.insert("WHITESPACES".to_string(), invisibles);
    }

    let selection = defaults
        .selection
        .as_deref()
        .and_then(|c| color::from_theme(c, base));
    let caret_row = defaults
        .line_highlight
        .as_deref()
        .and_then(|c| color::from_theme(c, base));
    if let Some(selection) = selection {
        let caret_row = match caret_row {
            // Identical selection and caret-row colors would make the two
            // indistinguishable; nudge the caret row's luma apart.
            Some(row) if row == selection => Some(nudge_luma(&row)),
            other => other,
        };
        if let Some(row) = caret_row {
            colors.insert("CARET_ROW_COLOR".to_string(), row);
        }
        colors.insert("SELECTION_BACKGROUND".to_string(), selection);
    } else if let Some(row) = caret_row {
        colors.insert("CARET_ROW_COLOR".to_string(), row);
    }

    if let Some(ColorValue::Hex(bg)) = tree.background(AttrId::ROOT) {
        colors.insert("CONSOLE_BACKGROUND_KEY".to_string(), bg);
    }
}

/// Shift a color's luma to visually separate it from an identical neighbor:
/// dark colors get darker (halved), light colors lighter (+0.2).
fn nudge_luma(hex: &str) -> String {
    let (mut y, i, q) = color::hex_to_yiq(hex);
    if y < 0.5 {
        y /= 2.0;
    } else {
        y += 0.2;
    }
    let (r, g, b) = color::yiq_to_rgb(y, i, q);
    color::rgb_to_hex(r, g, b)
}

/// Run the scope matcher for every scoped attribute and install the matched
/// settings as resolved values.
fn import_scoped_attributes(tree: &mut AttributeTree, theme: &TmTheme, report: &mut ImportReport) {
    let scoped: Vec<(AttrId, String)> = tree
        .ids()
        .filter_map(|id| {
            let node = tree.node(id);
            node.scope.clone().map(|scope| (id, scope))
        })
        .collect();

    for (id, scope) in scoped {
        let attr_name = tree.node(id).id.clone();
        match find_by_scope(&theme.settings, Some(&scope)) {
            Some(rule) => {
                if let Some(selector) = rule.scope.as_deref() {
                    println!("converting attribute {attr_name} from TextMate scope {selector}");
                    report.used_scopes.insert(selector.to_string());
                }
                let value = resolve_settings(&rule.settings, tree.derived(id));
                tree.set_value(id, value);
                report.imported += 1;
            }
            None => {
                println!("no TextMate rule for {attr_name} (scope {scope})");
            }
        }
    }
}

/// Give the embedded-script visualization attributes backgrounds blended
/// from fixed accent hues over the theme's base background. An attribute the
/// scope pass already resolved keeps its theme value; only attributes still
/// holding derived values are blended.
fn blend_scripting_backgrounds(tree: &mut AttributeTree, base: Option<&str>) {
    let Some(base) = base else { return };
    for (attr_name, accent) in SCRIPTING_BLENDS {
        let (Some(id), Some(background)) =
            (tree.lookup(attr_name), color::from_theme(accent, Some(base)))
        else {
            continue;
        };
        if tree.derived(id).is_none() {
            continue;
        }
        tree.set_value(
            id,
            ResolvedValue {
                background: Some(background),
                ..ResolvedValue::default()
            },
        );
    }
}

/// Convert a theme settings bag into a resolved value, honoring the ignore
/// markers of the value being replaced: an ignored field never takes a theme
/// color.
fn resolve_settings(settings: &ThemeSettings, old: Option<&DerivedValue>) -> ResolvedValue {
    let mut result = ResolvedValue::default();

    let fore_ignored = old.is_some_and(|d| d.default_fore == Some(ColorValue::Ignore));
    if !fore_ignored {
        if let Some(fore) = settings.foreground.as_deref() {
            result.foreground = color::from_theme(fore, None);
        }
    }

    let back_ignored = old.is_some_and(|d| d.default_back == Some(ColorValue::Ignore));
    if !back_ignored {
        if let Some(back) = settings.background.as_deref() {
            result.background = color::from_theme(back, None);
        }
    }

    if let Some(style) = settings.font_style.as_deref() {
        if style.contains("bold") {
            result.font_style |= 1;
        }
        if style.contains("italic") {
            result.font_style |= 2;
        }
        if style.contains("underline") {
            result.effect_type = 1;
        }
    }
    result
}
