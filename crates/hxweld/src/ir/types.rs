//! Type references for Hxweld
//!
//! This module provides the type representation carried by members and
//! parameters of a declaration tree, and the fixed table that maps
//! source primitive names to Haxe type names.
//!
//! # Type Mapping Overview
//!
//! | Source Type | Haxe Type | Notes |
//! |-------------|-----------|-------|
//! | `any` | `Dynamic` | Untyped value |
//! | `Object` | `Dynamic` | Untyped object |
//! | `number` | `Float` | IEEE 754 double precision |
//! | `boolean` | `Bool` | Direct mapping |
//! | `string` | `String` | Passes through, capitalized |
//! | `Foo` | `Foo` | Unknown names pass through unchanged |
//! | `T[]` | `Array<T>` | One wrapper per array level |
//! | `(a: A) => R` | `(A -> R)` | Function signature |
//! | `{ a: A }` | `{ a :A, }` | Anonymous structure |
//! | absent | `Dynamic` | Unknown type |
//!
//! The first character of every resolved name is upper-cased, since
//! Haxe type identifiers are capitalized.
//!
//! See [`TypeRef`] for the IR type representation and [`TypeKind`] for
//! the three shapes a type can take.

use crate::ir::{Parameter, Property};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Fixed mapping from source primitive names to Haxe type names.
///
/// Extend by adding entries; names not listed pass through unchanged.
pub const HAXE_TYPES: &[(&str, &str)] = &[
    ("any", "Dynamic"),
    ("Object", "Dynamic"),
    ("number", "Float"),
    ("boolean", "Bool"),
];

/// The shape of a type reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeKind {
    /// Named type: `number`, `Foo`
    Named { name: String },

    /// Function signature: `(a: A, b?: B) => R`
    Function {
        #[serde(default)]
        params: Vec<Parameter>,
        /// Return type (absent means dynamic)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        returns: Option<Box<TypeRef>>,
    },

    /// Anonymous structural type: `{ a: A; (x: X): R; [key: string]: V }`
    Structural {
        #[serde(default)]
        members: Vec<Property>,
    },
}

/// A type reference with its array nesting depth
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    /// The base type
    #[serde(flatten)]
    pub kind: TypeKind,

    /// Number of array levels wrapping the base type (0 = unwrapped)
    #[serde(default)]
    pub array_depth: usize,
}

impl TypeRef {
    /// Create a type reference of the given kind, unwrapped
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            array_depth: 0,
        }
    }

    /// Create a named type reference
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Named { name: name.into() })
    }

    /// Create a function signature type
    pub fn function(params: Vec<Parameter>, returns: Option<TypeRef>) -> Self {
        Self::new(TypeKind::Function {
            params,
            returns: returns.map(Box::new),
        })
    }

    /// Create an anonymous structural type
    pub fn structural(members: Vec<Property>) -> Self {
        Self::new(TypeKind::Structural { members })
    }

    /// Create a `number` type
    pub fn number() -> Self {
        Self::named("number")
    }

    /// Create a `string` type
    pub fn string() -> Self {
        Self::named("string")
    }

    /// Create a `boolean` type
    pub fn boolean() -> Self {
        Self::named("boolean")
    }

    /// Create a `void` type
    pub fn void() -> Self {
        Self::named("void")
    }

    /// Set the array nesting depth
    pub fn array(mut self, depth: usize) -> Self {
        self.array_depth = depth;
        self
    }

    /// Check if this is a function signature
    pub fn is_function(&self) -> bool {
        matches!(self.kind, TypeKind::Function { .. })
    }

    /// Array depth to emit, optionally skipping the outermost level
    ///
    /// Variadic parameters carry one array level for "the element type,
    /// repeated"; the expanded parameters drop it.
    pub fn effective_array_depth(&self, skip_one_level: bool) -> usize {
        if skip_one_level {
            self.array_depth.saturating_sub(1)
        } else {
            self.array_depth
        }
    }
}

/// Resolve a named type to its Haxe spelling
///
/// Looks the name up in [`HAXE_TYPES`] and capitalizes the first
/// character of the result.
pub fn haxe_type_name(name: &str) -> Cow<'_, str> {
    let resolved = HAXE_TYPES
        .iter()
        .find(|(source, _)| *source == name)
        .map_or(name, |(_, haxe)| *haxe);

    let mut chars = resolved.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            Cow::Owned(first.to_uppercase().chain(chars).collect())
        }
        _ => Cow::Borrowed(resolved),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_mapping() {
        assert_eq!(haxe_type_name("any"), "Dynamic");
        assert_eq!(haxe_type_name("Object"), "Dynamic");
        assert_eq!(haxe_type_name("number"), "Float");
        assert_eq!(haxe_type_name("boolean"), "Bool");
    }

    #[test]
    fn test_unknown_names_are_capitalized() {
        assert_eq!(haxe_type_name("string"), "String");
        assert_eq!(haxe_type_name("void"), "Void");
        assert_eq!(haxe_type_name("int"), "Int");
        assert_eq!(haxe_type_name("HTMLElement"), "HTMLElement");
        assert_eq!(haxe_type_name(""), "");
    }

    #[test]
    fn test_effective_array_depth() {
        let ty = TypeRef::number().array(2);
        assert_eq!(ty.effective_array_depth(false), 2);
        assert_eq!(ty.effective_array_depth(true), 1);

        let scalar = TypeRef::number();
        assert_eq!(scalar.effective_array_depth(true), 0);
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{ "kind": "named", "name": "number", "arrayDepth": 1 }"#;
        let ty: TypeRef = serde_json::from_str(json).unwrap();
        assert_eq!(ty, TypeRef::number().array(1));

        let json = r#"{ "kind": "function", "params": [], "returns": { "kind": "named", "name": "void" } }"#;
        let ty: TypeRef = serde_json::from_str(json).unwrap();
        assert!(ty.is_function());
        assert_eq!(ty.array_depth, 0);
    }
}
