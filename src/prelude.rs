//! Common re-exports for convenient importing.
//!
//! # Example
//!
//! ```rust,ignore
//! use tmscheme::prelude::*;
//! ```

pub use crate::catalog::{
    AttrId, AttrSpec, AttributeTree, CatalogError, ColorValue, DefaultAttributes, ResolvedValue,
};
pub use crate::export::{scheme_to_xml, write_scheme_file, ExportError};
pub use crate::import::{apply_theme, ImportReport};
pub use crate::theme::{find_by_scope, ThemeError, ThemeRule, ThemeSettings, TmTheme};
