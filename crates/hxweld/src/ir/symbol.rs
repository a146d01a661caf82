//! Member and parameter metadata
//!
//! This module provides the structures for members of declarations
//! (fields, methods, constructors, call and index signatures) and the
//! parameters of methods and function types.

use crate::ir::TypeRef;
use serde::{Deserialize, Serialize};

/// Parameter of a method or function type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Parameter type (absent means dynamic)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeRef>,
    /// Whether this parameter is optional (`a?: T`)
    #[serde(default)]
    pub optional: bool,
    /// Whether this is a rest parameter (`...a: T[]`)
    #[serde(default)]
    pub varargs: bool,
}

impl Parameter {
    /// Create a new parameter
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            optional: false,
            varargs: false,
        }
    }

    /// Create a parameter without a type annotation
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            optional: false,
            varargs: false,
        }
    }

    /// Mark as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark as a rest parameter
    pub fn varargs(mut self) -> Self {
        self.varargs = true;
        self
    }
}

/// A member of a declaration or structural type, or a global binding
///
/// `params` distinguishes fields from methods: `None` is a field,
/// `Some(list)` is a method, even when the list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Member name (empty when the front end could not name it)
    #[serde(default)]
    pub name: String,
    /// Field type, or return type for methods (absent means dynamic)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeRef>,
    /// Whether this member is optional (`a?: T`)
    #[serde(default)]
    pub optional: bool,
    /// Whether this member is static
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// Whether this member is a constructor
    #[serde(default)]
    pub constructor: bool,
    /// Parameter list for methods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Parameter>>,
    /// Index signature (`[key: string]: T`), structural types only
    #[serde(default)]
    pub dictionary: bool,
    /// Call signature (`(a: A): R`), structural types only
    #[serde(default)]
    pub invoke: bool,
}

impl Property {
    fn blank(name: String) -> Self {
        Self {
            name,
            ty: None,
            optional: false,
            is_static: false,
            constructor: false,
            params: None,
            dictionary: false,
            invoke: false,
        }
    }

    /// Create a field
    pub fn field(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::blank(name.into()).with_type(ty)
    }

    /// Create a field without a type annotation
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::blank(name.into())
    }

    /// Create a method
    pub fn method(name: impl Into<String>, params: Vec<Parameter>, returns: TypeRef) -> Self {
        Self::blank(name.into()).with_params(params).with_type(returns)
    }

    /// Create a constructor
    pub fn constructor(params: Vec<Parameter>) -> Self {
        let mut prop = Self::blank(String::new()).with_params(params);
        prop.constructor = true;
        prop
    }

    /// Create a call signature
    pub fn call_signature(params: Vec<Parameter>, returns: TypeRef) -> Self {
        let mut prop = Self::blank(String::new())
            .with_params(params)
            .with_type(returns);
        prop.invoke = true;
        prop
    }

    /// Create an index signature
    pub fn index_signature(value: TypeRef) -> Self {
        let mut prop = Self::blank(String::new()).with_type(value);
        prop.dictionary = true;
        prop
    }

    /// Set the type
    pub fn with_type(mut self, ty: TypeRef) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Set the parameter list, making this a method
    pub fn with_params(mut self, params: Vec<Parameter>) -> Self {
        self.params = Some(params);
        self
    }

    /// Mark as optional
    pub fn as_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark as static
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Check if this member is a method
    pub fn is_method(&self) -> bool {
        self.params.is_some()
    }

    /// Check if this member is a call or index signature
    pub fn is_signature(&self) -> bool {
        self.dictionary || self.invoke
    }

    /// Parameters, empty for fields
    pub fn parameters(&self) -> &[Parameter] {
        self.params.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_and_method() {
        let field = Property::field("size", TypeRef::number());
        assert!(!field.is_method());
        assert!(field.parameters().is_empty());

        let method = Property::method("close", vec![], TypeRef::void());
        assert!(method.is_method());
        assert!(method.parameters().is_empty());
    }

    #[test]
    fn test_signatures() {
        let call = Property::call_signature(vec![], TypeRef::void());
        assert!(call.invoke && call.is_signature());

        let index = Property::index_signature(TypeRef::string());
        assert!(index.dictionary && index.is_signature());
        assert!(!index.is_method());
    }

    #[test]
    fn test_property_from_json() {
        let json = r#"{
            "name": "on",
            "static": true,
            "params": [
                { "name": "event", "type": { "kind": "named", "name": "string" } },
                { "name": "args", "type": { "kind": "named", "name": "any", "arrayDepth": 1 }, "varargs": true }
            ],
            "type": { "kind": "named", "name": "void" }
        }"#;

        let prop: Property = serde_json::from_str(json).unwrap();
        assert_eq!(prop.name, "on");
        assert!(prop.is_static);
        assert_eq!(prop.parameters().len(), 2);
        assert!(prop.parameters()[1].varargs);
        assert_eq!(prop.ty, Some(TypeRef::void()));
    }

    #[test]
    fn test_field_without_params_from_json() {
        let prop: Property = serde_json::from_str(r#"{ "name": "length" }"#).unwrap();
        assert!(!prop.is_method());
        assert!(prop.ty.is_none());
    }
}
