//! The attribute catalog: baseline defaults, the attribute tree, and the
//! built-in registry of attribute specs.

mod defaults;
mod registry;
mod tree;

pub use defaults::*;
pub use registry::*;
pub use tree::*;
