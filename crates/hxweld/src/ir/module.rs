//! Declaration tree structure
//!
//! This module provides the [`Module`] tree handed over by a declaration
//! parser: namespaces, declarations (classes, interfaces, enums, type
//! aliases) and global variables/functions.

use crate::ir::{Parameter, Property, TypeKind, TypeRef};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::warn;

/// Ordered sequence of statements at one nesting level
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Module {
    pub statements: Vec<Statement>,
}

/// One statement of a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Statement {
    /// `declare namespace a { ... }`
    Namespace { name: String, body: Module },

    /// Class, interface, enum or type alias
    Declaration(Declaration),

    /// Variable or function declared outside any declaration
    Global(Property),
}

/// How a declaration is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    /// Classes and interfaces -> `extern class`
    #[default]
    Class,
    /// Enums -> `@:fakeEnum(Int) extern enum`
    Enum,
    /// Bare object types -> `typedef`
    Structural,
}

/// A named top-level declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    /// Declaration name
    pub name: String,
    /// Emission kind
    #[serde(default, rename = "declarationKind")]
    pub kind: DeclarationKind,
    /// Single supertype
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    /// Implemented interfaces
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<String>,
    /// Members in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Property>,
    /// Enum value names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl Declaration {
    fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            extends: None,
            implements: Vec::new(),
            members: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create a class or interface declaration
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Class)
    }

    /// Create an enum declaration
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Enum)
    }

    /// Create a structural type alias
    pub fn structural(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Structural)
    }

    /// Set the supertype
    pub fn extends(mut self, name: impl Into<String>) -> Self {
        self.extends = Some(name.into());
        self
    }

    /// Add an implemented interface
    pub fn implements(mut self, name: impl Into<String>) -> Self {
        self.implements.push(name.into());
        self
    }

    /// Add a member
    pub fn member(mut self, prop: Property) -> Self {
        self.members.push(prop);
        self
    }

    /// Add an enum value
    pub fn value(mut self, name: impl Into<String>) -> Self {
        self.values.push(name.into());
        self
    }
}

impl Module {
    /// Create an empty module
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration
    pub fn declaration(mut self, decl: Declaration) -> Self {
        self.statements.push(Statement::Declaration(decl));
        self
    }

    /// Add a global variable or function
    pub fn global(mut self, prop: Property) -> Self {
        self.statements.push(Statement::Global(prop));
        self
    }

    /// Add a nested namespace
    pub fn namespace(mut self, name: impl Into<String>, body: Module) -> Self {
        self.statements.push(Statement::Namespace {
            name: name.into(),
            body,
        });
        self
    }

    /// Check if the module has no statements
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Validate the tree against the shape the renderer expects
    ///
    /// Rendering never calls this; it is total over any tree. Callers that
    /// accept trees from outside should validate first.
    pub fn validate(&self) -> Result<(), ModuleValidationError> {
        let mut path = Vec::new();
        self.validate_in(&mut path)
    }

    fn validate_in<'a>(&'a self, path: &mut Vec<&'a str>) -> Result<(), ModuleValidationError> {
        let mut seen = HashSet::new();

        for statement in &self.statements {
            match statement {
                Statement::Namespace { name, body } => {
                    if name.is_empty() {
                        return Err(ModuleValidationError::EmptyNamespace(path.join(".")));
                    }
                    path.push(name);
                    let result = body.validate_in(path);
                    path.pop();
                    result?;
                }
                Statement::Declaration(decl) => {
                    if decl.name.is_empty() {
                        return Err(ModuleValidationError::EmptyDeclarationName(path.join(".")));
                    }
                    // Merged declarations (`interface Window` twice) are valid
                    if !seen.insert(decl.name.as_str()) {
                        warn!(
                            declaration = %qualified(path, &decl.name),
                            "hxweld.repeated_declaration"
                        );
                    }
                    for member in &decl.members {
                        validate_property(member)?;
                    }
                }
                Statement::Global(prop) => validate_property(prop)?,
            }
        }

        Ok(())
    }
}

fn qualified(path: &[&str], name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path.join("."), name)
    }
}

fn validate_property(prop: &Property) -> Result<(), ModuleValidationError> {
    if prop.dictionary && prop.invoke {
        return Err(ModuleValidationError::ConflictingSignatureFlags(
            prop.name.clone(),
        ));
    }
    if let Some(ty) = &prop.ty {
        validate_type(ty)?;
    }
    prop.parameters().iter().try_for_each(validate_param)
}

fn validate_param(param: &Parameter) -> Result<(), ModuleValidationError> {
    match &param.ty {
        Some(ty) => validate_type(ty),
        None => Ok(()),
    }
}

fn validate_type(ty: &TypeRef) -> Result<(), ModuleValidationError> {
    match &ty.kind {
        TypeKind::Named { .. } => Ok(()),
        TypeKind::Function { params, returns } => {
            params.iter().try_for_each(validate_param)?;
            match returns {
                Some(returns) => validate_type(returns),
                None => Ok(()),
            }
        }
        TypeKind::Structural { members } => members.iter().try_for_each(validate_property),
    }
}

/// Errors that can occur during module validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleValidationError {
    /// Namespace with an empty name (carries the enclosing path)
    #[error("empty namespace name inside `{0}`")]
    EmptyNamespace(String),
    /// Declaration with an empty name (carries the enclosing path)
    #[error("empty declaration name inside `{0}`")]
    EmptyDeclarationName(String),
    /// A member is both an index signature and a call signature
    #[error("member `{0}` is both an index signature and a call signature")]
    ConflictingSignatureFlags(String),
}
