//! Render configuration
//!
//! [`RenderOptions`] controls the few knobs of Haxe emission. Options can
//! be built in code or loaded from a TOML file:
//!
//! ```toml
//! varargs_arity = 5
//! indent = "\t"
//! emit_packages = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default number of optional parameters a rest parameter expands to
pub const DEFAULT_VARARGS_ARITY: usize = 9;

/// Errors that can occur while loading render options
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid TOML for [`RenderOptions`]
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Rest parameters must expand to at least one parameter
    #[error("varargs_arity must be at least 1")]
    InvalidVarargsArity,

    /// Indentation unit contains non-whitespace characters
    #[error("indent must only contain whitespace, got {0:?}")]
    InvalidIndent(String),
}

/// Options for Haxe rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Number of optional parameters (`name1`..`nameN`) a rest parameter
    /// expands to
    pub varargs_arity: usize,

    /// Indentation unit, repeated once per nesting level
    pub indent: String,

    /// Write a `package a.b;` header before the first declaration of each
    /// namespace level. Off by default: a Haxe file holds a single package,
    /// so only trees with one namespace level per output file produce a
    /// valid file; other namespaces are addressed through `@:native`.
    pub emit_packages: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            varargs_arity: DEFAULT_VARARGS_ARITY,
            indent: "    ".to_string(),
            emit_packages: false,
        }
    }
}

impl RenderOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rest parameter expansion arity
    pub fn with_varargs_arity(mut self, arity: usize) -> Self {
        self.varargs_arity = arity;
        self
    }

    /// Set the indentation unit
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Enable package headers
    pub fn with_packages(mut self) -> Self {
        self.emit_packages = true;
        self
    }

    /// Parse and validate options from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let options: RenderOptions = toml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Read, parse and validate options from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Validate option values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.varargs_arity == 0 {
            return Err(ConfigError::InvalidVarargsArity);
        }
        if !self.indent.chars().all(char::is_whitespace) {
            return Err(ConfigError::InvalidIndent(self.indent.clone()));
        }
        Ok(())
    }
}
