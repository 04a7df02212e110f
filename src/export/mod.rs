//! Scheme export: serialize the resolved attribute tree and the editor-wide
//! colors into the destination XML document.

use std::collections::BTreeMap;
use std::path::Path;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use thiserror::Error;

use crate::catalog::{AttrId, AttributeTree, ColorValue, Value};
use crate::color;

/// Errors writing the output scheme.
#[derive(Debug, Error)]
pub enum ExportError {
    /// XML serialization failed.
    #[error("failed to serialize scheme: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Writing the output file failed.
    #[error("failed to write scheme: {0}")]
    Io(#[from] std::io::Error),

    /// The serialized document was not valid UTF-8 (cannot happen with the
    /// data this tool produces, but the conversion is fallible).
    #[error("scheme serialization produced invalid utf-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Serialize the scheme into an XML string, two-space indented.
pub fn scheme_to_xml(
    name: &str,
    tree: &AttributeTree,
    colors: &BTreeMap<String, String>,
) -> Result<String, ExportError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    let mut scheme = BytesStart::new("scheme");
    scheme.push_attribute(("name", name));
    scheme.push_attribute(("version", "1"));
    scheme.push_attribute(("parent_scheme", parent_scheme(tree)));
    writer.write_event(Event::Start(scheme))?;

    write_option(&mut writer, "LINE_SPACING", "1.0")?;
    write_option(&mut writer, "EDITOR_FONT_SIZE", "12")?;
    write_option(&mut writer, "EDITOR_FONT_NAME", "Monaco")?;

    writer.write_event(Event::Start(BytesStart::new("colors")))?;
    for (role, value) in colors {
        write_option(&mut writer, role, &value.to_uppercase())?;
    }
    writer.write_event(Event::End(BytesEnd::new("colors")))?;

    writer.write_event(Event::Start(BytesStart::new("attributes")))?;
    let mut ids: Vec<AttrId> = tree.ids().collect();
    ids.sort_by(|a, b| tree.node(*a).id.cmp(&tree.node(*b).id));
    for id in ids {
        write_attribute(&mut writer, tree, id)?;
    }
    writer.write_event(Event::End(BytesEnd::new("attributes")))?;

    writer.write_event(Event::End(BytesEnd::new("scheme")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Serialize the scheme and write it to `path`. The scheme name is the
/// output file's stem.
pub fn write_scheme_file(
    path: &Path,
    tree: &AttributeTree,
    colors: &BTreeMap<String, String>,
) -> Result<(), ExportError> {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scheme".to_string());
    let xml = scheme_to_xml(&name, tree, colors)?;
    std::fs::write(path, xml)?;
    Ok(())
}

/// Base scheme to inherit from: the dark variant when the theme's canvas is
/// dark, the light one otherwise.
fn parent_scheme(tree: &AttributeTree) -> &'static str {
    match tree.background(AttrId::ROOT) {
        Some(ColorValue::Hex(bg)) if color::luma(&bg) < 0.5 => "Darcula",
        _ => "Default",
    }
}

fn write_option<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), quick_xml::Error> {
    let mut option = BytesStart::new("option");
    option.push_attribute(("name", name));
    option.push_attribute(("value", value));
    writer.write_event(Event::Empty(option))
}

/// Emit one attribute: either a reference to its parent's settings (when it
/// resolved to nothing of its own) or an explicit value block.
fn write_attribute<W: std::io::Write>(
    writer: &mut Writer<W>,
    tree: &AttributeTree,
    id: AttrId,
) -> Result<(), quick_xml::Error> {
    let node = tree.node(id);
    if tree.inherited(id) {
        let parent = node.parent.map(|p| tree.node(p).id.as_str()).unwrap_or("?");
        println!("inheriting {} from {}", node.id, parent);
    } else if matches!(node.value, Value::Derived(_)) {
        println!("transforming default color for {}", node.id);
    }

    let foreground = tree.foreground(id);
    let background = tree.background(id);
    let font_style = tree.font_style(id);
    let effect_type = tree.effect_type(id);
    let error_stripe = tree.error_stripe(id);

    let fore_hex = foreground.as_ref().and_then(ColorValue::hex);
    let back_hex = background.as_ref().and_then(ColorValue::hex);

    let empty = fore_hex.is_none()
        && back_hex.is_none()
        && font_style == 0
        && effect_type == 0
        && error_stripe.is_none();
    if empty {
        // Nothing of its own: defer to the parent attribute in the live
        // scheme rather than freezing copied values.
        if let Some(parent) = node.parent {
            let mut option = BytesStart::new("option");
            option.push_attribute(("name", node.id.as_str()));
            option.push_attribute(("baseAttributes", tree.node(parent).id.as_str()));
            writer.write_event(Event::Empty(option))?;
        } else {
            let mut option = BytesStart::new("option");
            option.push_attribute(("name", node.id.as_str()));
            writer.write_event(Event::Start(option))?;
            writer.write_event(Event::Empty(BytesStart::new("value")))?;
            writer.write_event(Event::End(BytesEnd::new("option")))?;
        }
        return Ok(());
    }

    let mut option = BytesStart::new("option");
    option.push_attribute(("name", node.id.as_str()));
    writer.write_event(Event::Start(option))?;
    writer.write_event(Event::Start(BytesStart::new("value")))?;

    if let Some(fore) = fore_hex {
        write_option(writer, "FOREGROUND", fore)?;
    }
    if let Some(back) = back_hex {
        write_option(writer, "BACKGROUND", back)?;
    }
    if font_style != 0 {
        write_option(writer, "FONT_TYPE", &font_style.to_string())?;
    }
    if effect_type != 0 {
        write_option(writer, "EFFECT_TYPE", &effect_type.to_string())?;
        let effect_color = tree.effect_color(id);
        let effect_hex = effect_color.as_ref().and_then(ColorValue::hex);
        let root_fore = tree.foreground(AttrId::ROOT);
        let fallback = effect_hex
            .or(fore_hex)
            .or(root_fore.as_ref().and_then(ColorValue::hex));
        if let Some(color) = fallback {
            write_option(writer, "EFFECT_COLOR", color)?;
        }
    }
    if let Some(stripe) = error_stripe.as_deref() {
        write_option(writer, "ERROR_STRIPE_COLOR", stripe)?;
    }

    writer.write_event(Event::End(BytesEnd::new("value")))?;
    writer.write_event(Event::End(BytesEnd::new("option")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AttrSpec, DefaultAttributes, ResolvedValue};

    fn tree_with(specs: Vec<AttrSpec>) -> AttributeTree {
        AttributeTree::build(&DefaultAttributes::empty(), &specs).unwrap()
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
    fn dark_root_selects_darcula_parent() {
        let mut tree = tree_with(vec![AttrSpec::root("TEXT")]);
        resolve_root(&mut tree, "ffffff", "000000");
        let xml = scheme_to_xml("t", &tree, &BTreeMap::new()).unwrap();
        assert!(xml.contains(r#"parent_scheme="Darcula""#), "{xml}");
    }

    #[test]
    fn light_root_selects_default_parent() {
        let mut tree = tree_with(vec![AttrSpec::root("TEXT")]);
        resolve_root(&mut tree, "000000", "ffffff");
        let xml = scheme_to_xml("t", &tree, &BTreeMap::new()).unwrap();
        assert!(xml.contains(r#"parent_scheme="Default""#), "{xml}");
    }

    #[test]
    fn empty_attribute_becomes_parent_reference() {
        let mut tree = tree_with(vec![
            AttrSpec::root("TEXT"),
            AttrSpec::new("PLAIN", "TEXT"),
        ]);
        resolve_root(&mut tree, "ffffff", "000000");
        let xml = scheme_to_xml("t", &tree, &BTreeMap::new()).unwrap();
        assert!(
            xml.contains(r#"<option name="PLAIN" baseAttributes="TEXT"/>"#),
            "{xml}"
        );
    }

    #[test]
    fn ignored_background_is_never_emitted() {
        let mut tree = tree_with(vec![
            AttrSpec::root("TEXT"),
            AttrSpec::new("EMBEDDED", "TEXT").ignore_bg().fg(16, 32, 48),
        ]);
        resolve_root(&mut tree, "000000", "ffffff");
        let xml = scheme_to_xml("t", &tree, &BTreeMap::new()).unwrap();
        let entry = xml
            .split(r#"<option name="EMBEDDED">"#)
            .nth(1)
            .and_then(|rest| rest.split("</option>").next())
            .expect("EMBEDDED entry present");
        assert!(entry.contains("FOREGROUND"), "{entry}");
        assert!(!entry.contains("BACKGROUND"), "{entry}");
    }

    #[test]
    fn effect_color_falls_back_to_foreground_then_root() {
        let mut tree = tree_with(vec![
            AttrSpec::root("TEXT"),
            AttrSpec::new("UNDERLINED", "TEXT").effect(1),
        ]);
        resolve_root(&mut tree, "ffffff", "000000");
        let xml = scheme_to_xml("t", &tree, &BTreeMap::new()).unwrap();
        let entry = xml
            .split(r#"<option name="UNDERLINED">"#)
            .nth(1)
            .and_then(|rest| rest.split("</option>").next())
            .expect("UNDERLINED entry present");
        // No own foreground and no explicit effect color: the root's
        // foreground is the effect color of last resort.
        assert!(entry.contains(r#"name="EFFECT_TYPE" value="1""#), "{entry}");
        assert!(entry.contains(r#"name="EFFECT_COLOR" value="ffffff""#), "{entry}");
    }

    #[test]
    fn colors_are_uppercased() {
        let mut tree = tree_with(vec![AttrSpec::root("TEXT")]);
        resolve_root(&mut tree, "ffffff", "000000");
        let mut colors = BTreeMap::new();
        colors.insert("CARET_COLOR".to_string(), "a1b2c3".to_string());
        let xml = scheme_to_xml("t", &tree, &colors).unwrap();
        assert!(
            xml.contains(r#"<option name="CARET_COLOR" value="A1B2C3"/>"#),
            "{xml}"
        );
    }
}
