//! Hxweld: Haxe extern generation from declaration trees
//!
//! This crate renders a parsed tree of TypeScript-style type declarations
//! (namespaces, classes, interfaces, enums, global variables and
//! functions) into Haxe extern declarations that describe the same API to
//! the Haxe type checker.
//!
//! # Architecture
//!
//! - `ir`: The declaration tree handed over by a parser
//! - `codegen`: Haxe emission (types, members, declarations, modules)
//! - `config`: Render options, loadable from TOML
//!
//! Rendering is a pure function of the tree: every call owns its output
//! buffer and namespace stack, so independent trees can be rendered in
//! parallel.
//!
//! # Usage
//!
//! ```rust
//! use hxweld::{Declaration, Module, Property, TypeRef};
//!
//! let module = Module::new().declaration(
//!     Declaration::class("Point").member(Property::field("x", TypeRef::number())),
//! );
//!
//! let haxe = hxweld::render(&module);
//! assert!(haxe.contains("var x :Float;"));
//! ```

pub mod codegen;
pub mod config;
pub mod ir;

// Re-export commonly used types
pub use codegen::{escape_ident, HaxeGenerator, HaxeWriter, GLOBALS_CLASS, HAXE_KEYWORDS};
pub use config::{ConfigError, RenderOptions, DEFAULT_VARARGS_ARITY};
pub use ir::{
    haxe_type_name, Declaration, DeclarationKind, Module, ModuleValidationError, Parameter,
    Property, Statement, TypeKind, TypeRef, HAXE_TYPES,
};

/// Render a module with default options
pub fn render(module: &Module) -> String {
    render_with(module, &RenderOptions::default())
}

/// Render a module with the given options
pub fn render_with(module: &Module, options: &RenderOptions) -> String {
    HaxeGenerator::new(module, options).generate()
}
