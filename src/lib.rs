//! tmscheme - convert TextMate color themes to JetBrains IDE color schemes.
//!
//! The interesting part is the attribute resolution engine: a static tree of
//! named highlighter attributes with parent-child inheritance, a
//! specificity-ranked scope matcher against the source theme, and a
//! luma-based contrast inversion for baseline defaults that assume the
//! wrong canvas polarity.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tmscheme::prelude::*;
//!
//! let defaults = DefaultAttributes::empty();
//! let mut tree = AttributeTree::build(&defaults, &tmscheme::catalog::default_specs())?;
//! let theme = TmTheme::load(std::path::Path::new("Monokai.tmTheme"))?;
//! let report = tmscheme::import::apply_theme(&mut tree, &theme);
//! ```

#![deny(missing_docs)]

pub mod catalog;
pub mod color;
pub mod export;
pub mod import;
pub mod prelude;
pub mod theme;
