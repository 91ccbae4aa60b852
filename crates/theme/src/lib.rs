//! # statskit-theme
//!
//! Pure design-token model for the statskit dashboard.
//!
//! ## Responsibilities
//! - Define the **Color** value type (`#rrggbb` hex)
//! - Define the token set: base colors, five semantic color **Ramps**
//!   (primary, secondary, success, warning, error), and the **FontStack**
//! - Enforce token invariants (unique names, distinct ramps, non-empty
//!   font stack)
//! - Derive the concrete CSS vocabulary from the token set: custom
//!   properties plus the `text-*` / `bg-*` utility classes that component
//!   markup references by name
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Writing the rendered stylesheet to disk is the job of the `themegen`
//! binary; consuming the class names is the job of the dashboard crate.

pub mod color;
pub mod css;
pub mod error;
pub mod tokens;

pub use color::Color;
pub use error::ThemeError;
pub use tokens::{DesignTokens, FontStack, Ramp, Role, Scheme, Step};
