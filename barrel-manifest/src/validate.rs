//! Validation utilities for TypeScript identifiers

use miette::SourceSpan;

use crate::{Error, Result};

/// TypeScript reserved words that cannot be used as identifiers in generated
/// code. Covers strict keywords plus contextual names that break when used as
/// a class name or class field.
pub(crate) const TYPESCRIPT_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "as",
    "implements",
    "interface",
    "let",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "yield",
    "any",
    "boolean",
    "constructor",
    "declare",
    "module",
    "number",
    "require",
    "string",
    "symbol",
    "type",
    "from",
    "of",
    "async",
    "await",
];

/// Check if a name is a TypeScript reserved word
pub(crate) fn is_ts_keyword(name: &str) -> bool {
    TYPESCRIPT_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source.
/// Names validated here appear as quoted string values (`name = "Services"`)
/// or as bare keys (`userService = "UsrSvc"`).
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    // Fallback: just find the name anywhere (less precise)
    if let Some(pos) = src.find(name) {
        return Some(SourceSpan::from((pos, name.len())));
    }

    None
}

/// Validate that a name is a valid TypeScript identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    let mut chars = name.chars();

    // First character must be a letter, underscore, or dollar sign
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '$', or underscore"),
        None => return Some("name cannot be empty"),
    }

    // Remaining characters must be alphanumeric, underscore, or dollar sign
    for c in chars {
        if !(c.is_ascii_alphanumeric() || c == '_' || c == '$') {
            return Some("name must contain only letters, numbers, '$', and underscores");
        }
    }

    None
}

/// Validate a name destined for generated TypeScript, with source context
pub(crate) fn validate_name(
    name: &str,
    context: &str,
    src: &str,
    filename: &str,
) -> Result<()> {
    let span = find_name_span(src, name);

    if is_ts_keyword(name) {
        return Err(Error::reserved_keyword(name, context, src, filename, span));
    }

    if let Some(reason) = validate_identifier(name) {
        return Err(Error::invalid_identifier(
            name, context, reason, src, filename, span,
        ));
    }

    Ok(())
}
