//! Typed errors for token parsing and validation.

use crate::tokens::Role;

/// Errors produced while parsing or validating design tokens.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
    /// A color string was not `#rgb` or `#rrggbb` hex.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
    /// The font stack contained no families.
    #[error("font stack must list at least one family")]
    EmptyFontStack,
    /// Two semantic roles resolved to byte-identical ramps.
    #[error("roles {0} and {1} share an identical color ramp")]
    DuplicateRamp(Role, Role),
    /// Two tokens rendered to the same name.
    #[error("duplicate token name: {0}")]
    DuplicateTokenName(String),
}
