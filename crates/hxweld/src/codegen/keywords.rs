//! Haxe reserved words and identifier escaping

use std::borrow::Cow;

/// Haxe reserved words, sorted for binary search
pub const HAXE_KEYWORDS: &[&str] = &[
    "break", "callback", "case", "cast", "catch", "class", "continue", "default", "do", "dynamic",
    "else", "enum", "extends", "extern", "false", "for", "function", "if", "implements", "import",
    "in", "inline", "interface", "never", "null", "override", "package", "private", "public",
    "return", "static", "super", "switch", "this", "throw", "true", "try", "typedef", "untyped",
    "using", "var", "while",
];

/// Suffix appended to identifiers that collide with a reserved word
pub const ESCAPE_SUFFIX: char = '_';

/// Check if `ident` is a Haxe reserved word
pub fn is_keyword(ident: &str) -> bool {
    HAXE_KEYWORDS.binary_search(&ident).is_ok()
}

/// Escape an identifier that collides with a reserved word
pub fn escape_ident(ident: &str) -> Cow<'_, str> {
    if is_keyword(ident) {
        Cow::Owned(format!("{}{}", ident, ESCAPE_SUFFIX))
    } else {
        Cow::Borrowed(ident)
    }
}

/// Escape a namespace segment for use in a package path
///
/// Haxe packages are lower case, so the segment is lower-cased before the
/// reserved word check.
pub fn escape_package(segment: &str) -> String {
    let mut package = segment.to_lowercase();
    if is_keyword(&package) {
        package.push(ESCAPE_SUFFIX);
    }
    package
}
