//! Intermediate Representation (IR) for declaration trees
//!
//! This module provides the tree a declaration parser produces: modules,
//! namespaces, declarations, members, parameters and type references.

pub mod module;
pub mod symbol;
pub mod types;

pub use module::*;
pub use symbol::*;
pub use types::*;
