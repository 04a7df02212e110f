//! Baseline attribute defaults, read from the bundled IDE scheme.
//!
//! The document lists per-attribute default styling:
//!
//! ```xml
//! <attributes>
//!   <option name="JAVA_KEYWORD">
//!     <value>
//!       <option name="FOREGROUND" value="000080"/>
//!       <option name="FONT_TYPE" value="1"/>
//!     </value>
//!   </option>
//! </attributes>
//! ```
//!
//! A missing document or missing field is not an error; those defaults just
//! stay unset.

use std::collections::HashMap;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// Errors reading the baseline scheme document.
#[derive(Debug, Error)]
pub enum DefaultsError {
    /// Reading the file failed (other than it not existing).
    #[error("failed to read baseline scheme: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed XML.
    #[error("malformed baseline scheme: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Default styling for one attribute, as found in the baseline scheme.
#[derive(Debug, Clone, Default)]
pub struct DefaultAttr {
    /// Default foreground hex.
    pub foreground: Option<String>,
    /// Default background hex.
    pub background: Option<String>,
    /// Font style bits (1 = bold, 2 = italic).
    pub font_type: u8,
    /// Error stripe color hex.
    pub error_stripe: Option<String>,
    /// Effect type (1 = underline, 2 = box, ...).
    pub effect_type: Option<u32>,
    /// Effect color hex.
    pub effect_color: Option<String>,
}

impl DefaultAttr {
    fn set(&mut self, name: &str, value: &str) {
        match name {
            "FOREGROUND" => self.foreground = Some(value.to_string()),
            "BACKGROUND" => self.background = Some(value.to_string()),
            "FONT_TYPE" => self.font_type = value.parse().unwrap_or(0),
            "ERROR_STRIPE_COLOR" => self.error_stripe = Some(value.to_string()),
            "EFFECT_TYPE" => self.effect_type = value.parse().ok(),
            "EFFECT_COLOR" => self.effect_color = Some(value.to_string()),
            _ => {}
        }
    }
}

/// Lookup table from attribute id to its baseline defaults.
#[derive(Debug, Default)]
pub struct DefaultAttributes {
    map: HashMap<String, DefaultAttr>,
}

impl DefaultAttributes {
    /// An empty catalog (what a missing baseline document yields).
    pub fn empty() -> Self {
        DefaultAttributes::default()
    }

    /// Load the catalog from `path`. A missing file yields an empty catalog;
    /// unreadable or malformed content is an error.
    pub fn load(path: &Path) -> Result<Self, DefaultsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(DefaultAttributes::empty())
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(&content)
    }

    /// Parse the catalog from an XML string.
    pub fn parse(content: &str) -> Result<Self, DefaultsError> {
        let mut reader = Reader::from_str(content);
        let mut map = HashMap::new();

        // Path of open element names plus the id of the attribute entry we
        // are currently inside, if any.
        let mut path: Vec<String> = Vec::new();
        let mut current: Option<(String, DefaultAttr)> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    if name == "option" && path.last().is_some_and(|p| p == "attributes") {
                        if let Some(id) = attr_of(&e, "name")? {
                            current = Some((id, DefaultAttr::default()));
                        }
                    }
                    path.push(name);
                }
                Event::Empty(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    if name == "option" && path.last().is_some_and(|p| p == "value") {
                        if let Some((_, attr)) = current.as_mut() {
                            if let (Some(opt), Some(value)) =
                                (attr_of(&e, "name")?, attr_of(&e, "value")?)
                            {
                                if !value.is_empty() {
                                    attr.set(&opt, &value);
                                }
                            }
                        }
                    }
                }
                Event::End(_) => {
                    let name = path.pop();
                    if name.as_deref() == Some("option")
                        && path.last().is_some_and(|p| p == "attributes")
                    {
                        if let Some((id, attr)) = current.take() {
                            map.insert(id, attr);
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }
        Ok(DefaultAttributes { map })
    }

    /// Look up one attribute's defaults.
    pub fn get(&self, id: &str) -> Option<&DefaultAttr> {
        self.map.get(id)
    }

    /// Insert or replace one entry (used to seed catalogs in tests).
    pub fn insert(&mut self, id: &str, attr: DefaultAttr) {
        self.map.insert(id.to_string(), attr);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Read one XML attribute off an element, unescaped.
fn attr_of(
    e: &quick_xml::events::BytesStart<'_>,
    name: &str,
) -> Result<Option<String>, quick_xml::Error> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == name.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <scheme name="Default" version="1">
          <colors>
            <option name="CARET_COLOR" value="000000"/>
          </colors>
          <attributes>
            <option name="JAVA_KEYWORD">
              <value>
                <option name="FOREGROUND" value="000080"/>
                <option name="FONT_TYPE" value="1"/>
              </value>
            </option>
            <option name="ERRORS_ATTRIBUTES">
              <value>
                <option name="EFFECT_TYPE" value="1"/>
                <option name="EFFECT_COLOR" value="ff0000"/>
                <option name="ERROR_STRIPE_COLOR" value="cf5b56"/>
              </value>
            </option>
            <option name="EMPTY_VALUE">
              <value>
                <option name="FOREGROUND" value=""/>
              </value>
            </option>
          </attributes>
        </scheme>
    "#;

    #[test]
    fn parses_attribute_entries() {
        let defaults = DefaultAttributes::parse(SAMPLE).unwrap();
        assert_eq!(defaults.len(), 3);

        let keyword = defaults.get("JAVA_KEYWORD").unwrap();
        assert_eq!(keyword.foreground.as_deref(), Some("000080"));
        assert_eq!(keyword.font_type, 1);
        assert_eq!(keyword.background, None);

        let errors = defaults.get("ERRORS_ATTRIBUTES").unwrap();
        assert_eq!(errors.effect_type, Some(1));
        assert_eq!(errors.effect_color.as_deref(), Some("ff0000"));
        assert_eq!(errors.error_stripe.as_deref(), Some("cf5b56"));
    }

    #[test]
    fn empty_values_stay_unset() {
        let defaults = DefaultAttributes::parse(SAMPLE).unwrap();
        assert!(defaults.get("EMPTY_VALUE").unwrap().foreground.is_none());
    }

    #[test]
    fn colors_section_is_not_an_attribute() {
        let defaults = DefaultAttributes::parse(SAMPLE).unwrap();
        assert!(defaults.get("CARET_COLOR").is_none());
    }

    #[test]
    fn missing_file_is_an_empty_catalog() {
        let defaults = DefaultAttributes::load(Path::new("no/such/file.xml")).unwrap();
        assert!(defaults.is_empty());
    }
}
