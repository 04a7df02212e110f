//! End-to-end conversion: a minimal dark theme through the whole pipeline,
//! checked against the written scheme file.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use tmscheme::catalog::{self, AttributeTree, DefaultAttr, DefaultAttributes};
use tmscheme::export::write_scheme_file;
use tmscheme::import::apply_theme;
use tmscheme::theme::TmTheme;

const DARK_THEME: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
  <key>name</key><string>Minimal Dark</string>
  <key>settings</key>
  <array>
    <dict>
      <key>settings</key>
      <dict>
        <key>background</key><string>#000000</string>
        <key>foreground</key><string>#FFFFFF</string>
        <key>caret</key><string>#FFFFFF</string>
        <key>selection</key><string>#888888</string>
        <key>lineHighlight</key><string>#888888</string>
      </dict>
    </dict>
    <dict>
      <key>name</key><string>Keyword</string>
      <key>scope</key><string>keyword</string>
      <key>settings</key>
      <dict>
        <key>foreground</key><string>#FF0000</string>
      </dict>
    </dict>
    <dict>
      <key>name</key><string>Never consulted</string>
      <key>scope</key><string>markup.underline.link</string>
      <key>settings</key>
      <dict>
        <key>foreground</key><string>#00FF00</string>
      </dict>
    </dict>
  </array>
</dict>
</plist>
"#;

fn convert(defaults: &DefaultAttributes) -> (String, BTreeMap<String, String>) {
    let dir = tempfile::tempdir().unwrap();
    let theme_path = dir.path().join("minimal.tmTheme");
    let scheme_path = dir.path().join("Minimal.xml");
    std::fs::File::create(&theme_path)
        .unwrap()
        .write_all(DARK_THEME.as_bytes())
        .unwrap();

    let mut tree = AttributeTree::build(defaults, &catalog::default_specs()).unwrap();
    let theme = TmTheme::load(&theme_path).unwrap();
    let report = apply_theme(&mut tree, &theme);
    write_scheme_file(&scheme_path, &tree, &report.colors).unwrap();

    let xml = std::fs::read_to_string(&scheme_path).unwrap();
    (xml, report.colors)
}

fn entry<'a>(xml: &'a str, id: &str) -> &'a str {
    let open = format!(r#"<option name="{id}">"#);
    xml.split(&open)
        .nth(1)
        .and_then(|rest| rest.split("</option>").next())
        .unwrap_or_else(|| panic!("no explicit entry for {id}"))
}

#[test]
fn scheme_name_comes_from_the_output_stem() {
    let (xml, _) = convert(&DefaultAttributes::empty());
    assert!(xml.starts_with(r#"<scheme name="Minimal" version="1""#), "{xml}");
}

#[test]
fn dark_theme_parents_onto_darcula() {
    let (xml, _) = convert(&DefaultAttributes::empty());
    assert!(xml.contains(r#"parent_scheme="Darcula""#));
}

#[test]
fn keyword_gets_the_theme_foreground() {
    let (xml, _) = convert(&DefaultAttributes::empty());
    let keyword = entry(&xml, "JAVA_KEYWORD");
    assert!(keyword.contains(r#"name="FOREGROUND" value="ff0000""#), "{keyword}");
}

#[test]
fn root_text_carries_the_global_colors() {
    let (xml, _) = convert(&DefaultAttributes::empty());
    let text = entry(&xml, "TEXT");
    assert!(text.contains(r#"name="FOREGROUND" value="ffffff""#), "{text}");
    assert!(text.contains(r#"name="BACKGROUND" value="000000""#), "{text}");
}

#[test]
fn caret_row_is_nudged_apart_from_selection() {
    let (_, colors) = convert(&DefaultAttributes::empty());
    let selection = colors.get("SELECTION_BACKGROUND").unwrap();
    let caret_row = colors.get("CARET_ROW_COLOR").unwrap();
    // Both source values were #888888; the caret row must come out distinct.
    assert_eq!(selection, "888888");
    assert_ne!(selection, caret_row);
}

#[test]
fn unstyled_attribute_defers_to_its_parent() {
    let (xml, _) = convert(&DefaultAttributes::empty());
    // No scope, no defaults: in the live scheme this rides on TEXT, i.e. the
    // theme's white-on-black.
    assert!(
        xml.contains(r#"<option name="LOCAL_VARIABLE_ATTRIBUTES" baseAttributes="TEXT"/>"#),
        "{xml}"
    );
}

#[test]
fn colors_are_emitted_uppercase() {
    let (xml, _) = convert(&DefaultAttributes::empty());
    assert!(xml.contains(r#"<option name="CARET_COLOR" value="FFFFFF"/>"#), "{xml}");
    assert!(xml.contains(r#"<option name="CONSOLE_BACKGROUND_KEY" value="000000"/>"#));
}

#[test]
fn seeded_light_defaults_are_inverted_for_a_dark_theme() {
    let mut defaults = DefaultAttributes::empty();
    defaults.insert(
        "SEARCH_RESULT_ATTRIBUTES",
        DefaultAttr {
            background: Some("ccccff".to_string()),
            ..DefaultAttr::default()
        },
    );
    let (xml, _) = convert(&defaults);
    let search = entry(&xml, "SEARCH_RESULT_ATTRIBUTES");
    // The light baseline background must not survive unchanged on a dark
    // canvas.
    assert!(search.contains("BACKGROUND"), "{search}");
    assert!(!search.contains("ccccff"), "{search}");
}

#[test]
fn missing_theme_file_fails_without_writing_output() {
    let err = TmTheme::load(Path::new("does/not/exist.tmTheme"));
    assert!(err.is_err());
}

#[test]
fn scripting_fragments_get_blended_backgrounds() {
    let (xml, _) = convert(&DefaultAttributes::empty());
    let injected = entry(&xml, "INJECTED_LANGUAGE_FRAGMENT");
    assert!(injected.contains("BACKGROUND"), "{injected}");
}
