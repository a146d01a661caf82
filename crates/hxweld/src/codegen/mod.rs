//! Code generation for Haxe externs
//!
//! This module provides:
//! - The Haxe extern generator (declarations, members, types)
//! - Reserved word escaping
//! - The indentation-aware output writer

pub mod haxe;
pub mod keywords;
pub mod writer;

pub use haxe::{HaxeGenerator, GLOBALS_CLASS};
pub use keywords::{escape_ident, escape_package, is_keyword, HAXE_KEYWORDS};
pub use writer::HaxeWriter;
