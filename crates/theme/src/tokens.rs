//! Design tokens — semantic color ramps, base colors, and the font stack.
//!
//! Tokens are referenced by *name* from component markup (`text-primary-500`,
//! `bg-success-100`); the [`css`](crate::css) module turns the set into the
//! concrete rules. Consumers that need a class string should go through
//! [`text_class`] / [`bg_class`] so both sides agree on naming by
//! construction.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ThemeError;

/// Semantic color roles, one ramp each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
}

impl Role {
    /// All roles, in stylesheet order.
    pub const ALL: [Role; 5] = [
        Role::Primary,
        Role::Secondary,
        Role::Success,
        Role::Warning,
        Role::Error,
    ];

    /// The role's token-name segment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Success => "success",
            Role::Warning => "warning",
            Role::Error => "error",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ramp steps, light to dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    S100,
    S300,
    S500,
    S700,
    S900,
}

impl Step {
    /// All steps, light to dark.
    pub const ALL: [Step; 5] = [Step::S100, Step::S300, Step::S500, Step::S700, Step::S900];

    /// The step's token-name segment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Step::S100 => "100",
            Step::S300 => "300",
            Step::S500 => "500",
            Step::S700 => "700",
            Step::S900 => "900",
        }
    }
}

/// A five-step color ramp for one semantic role.
///
/// Each entry is an independent named value; there is no interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ramp {
    pub s100: Color,
    pub s300: Color,
    pub s500: Color,
    pub s700: Color,
    pub s900: Color,
}

impl Ramp {
    /// Look up the color for a step.
    #[must_use]
    pub const fn get(&self, step: Step) -> Color {
        match step {
            Step::S100 => self.s100,
            Step::S300 => self.s300,
            Step::S500 => self.s500,
            Step::S700 => self.s700,
            Step::S900 => self.s900,
        }
    }
}

/// Ordered list of font families, primary first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontStack {
    families: Vec<String>,
}

impl FontStack {
    /// Build a font stack from family names.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::EmptyFontStack`] when no families are given.
    pub fn new<I, S>(families: I) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let families: Vec<String> = families.into_iter().map(Into::into).collect();
        if families.is_empty() {
            return Err(ThemeError::EmptyFontStack);
        }
        Ok(Self { families })
    }

    /// The primary (first) family.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.families[0]
    }

    /// All families in order.
    #[must_use]
    pub fn families(&self) -> &[String] {
        &self.families
    }

    /// Render the stack as a CSS `font-family` value.
    ///
    /// Families containing whitespace are quoted.
    #[must_use]
    pub fn css_value(&self) -> String {
        let mut out = String::new();
        for (i, family) in self.families.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if family.contains(char::is_whitespace) {
                out.push('"');
                out.push_str(family);
                out.push('"');
            } else {
                out.push_str(family);
            }
        }
        out
    }
}

/// The color schemes the stylesheet defines.
///
/// Light is the `:root` default; dark is an override block keyed on the
/// [`Scheme::ATTRIBUTE`] attribute of `<html>`. Consumers that flip the
/// scheme at runtime should go through this type so the attribute value
/// and the stylesheet selector stay in agreement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Scheme {
    #[default]
    Light,
    Dark,
}

impl Scheme {
    /// Attribute on `<html>` that selects the scheme override.
    pub const ATTRIBUTE: &'static str = "data-theme";

    /// The scheme's attribute value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Scheme::Light => "light",
            Scheme::Dark => "dark",
        }
    }

    /// The other scheme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Scheme::Light => Scheme::Dark,
            Scheme::Dark => Scheme::Light,
        }
    }

    /// Resolve a stored preference; anything but `"dark"` is light.
    #[must_use]
    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some(v) if v == Scheme::Dark.name() => Scheme::Dark,
            _ => Scheme::Light,
        }
    }
}

/// Base (non-ramp) colors for one color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseColors {
    /// Page background.
    pub background: Color,
    /// Card/surface background.
    pub surface: Color,
    /// Default text color.
    pub foreground: Color,
    /// Secondary/muted text color.
    pub muted: Color,
    /// Hairline border color.
    pub border: Color,
}

impl BaseColors {
    /// Named entries in stylesheet order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, Color); 5] {
        [
            ("background", self.background),
            ("surface", self.surface),
            ("foreground", self.foreground),
            ("muted", self.muted),
            ("border", self.border),
        ]
    }
}

/// The complete token set consumed by the stylesheet renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignTokens {
    /// Base colors for the light scheme.
    pub base: BaseColors,
    /// Base colors for the dark scheme override.
    pub dark: BaseColors,
    pub primary: Ramp,
    pub secondary: Ramp,
    pub success: Ramp,
    pub warning: Ramp,
    pub error: Ramp,
    /// Sans-serif font stack.
    pub font: FontStack,
}

/// The utility class token for a text color (`text-primary-500`).
#[must_use]
pub fn text_class(role: Role, step: Step) -> String {
    format!("text-{}-{}", role.name(), step.name())
}

/// The utility class token for a background color (`bg-primary-100`).
#[must_use]
pub fn bg_class(role: Role, step: Step) -> String {
    format!("bg-{}-{}", role.name(), step.name())
}

/// The custom-property name for a ramp entry (`--color-primary-500`).
#[must_use]
pub fn var_name(role: Role, step: Step) -> String {
    format!("--color-{}-{}", role.name(), step.name())
}

impl DesignTokens {
    /// Create a builder for constructing a [`DesignTokens`] set.
    #[must_use]
    pub fn builder() -> DesignTokensBuilder {
        DesignTokensBuilder::default()
    }

    /// Look up the ramp for a role.
    #[must_use]
    pub const fn ramp(&self, role: Role) -> &Ramp {
        match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Success => &self.success,
            Role::Warning => &self.warning,
            Role::Error => &self.error,
        }
    }

    /// Every custom-property name the set defines, in stylesheet order.
    #[must_use]
    pub fn token_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for (name, _) in self.base.entries() {
            names.push(format!("--color-{name}"));
        }
        for role in Role::ALL {
            for step in Step::ALL {
                names.push(var_name(role, step));
            }
        }
        names.push("--font-sans".to_string());
        names
    }

    /// Check token invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::EmptyFontStack`] when the font stack has no
    /// families, [`ThemeError::DuplicateRamp`] when two roles carry
    /// identical ramps, or [`ThemeError::DuplicateTokenName`] when two
    /// tokens render to the same name.
    pub fn validate(&self) -> Result<(), ThemeError> {
        // Deserialization bypasses FontStack::new, so re-check here.
        if self.font.families().is_empty() {
            return Err(ThemeError::EmptyFontStack);
        }

        let mut seen = HashSet::new();
        for name in self.token_names() {
            if !seen.insert(name.clone()) {
                return Err(ThemeError::DuplicateTokenName(name));
            }
        }

        for (i, a) in Role::ALL.iter().enumerate() {
            for b in &Role::ALL[i + 1..] {
                if self.ramp(*a) == self.ramp(*b) {
                    return Err(ThemeError::DuplicateRamp(*a, *b));
                }
            }
        }
        Ok(())
    }
}

impl Default for DesignTokens {
    /// The stock statskit palette.
    fn default() -> Self {
        const fn ramp(a: Color, b: Color, c: Color, d: Color, e: Color) -> Ramp {
            Ramp {
                s100: a,
                s300: b,
                s500: c,
                s700: d,
                s900: e,
            }
        }
        const fn c(rgb: u32) -> Color {
            Color::rgb(
                ((rgb >> 16) & 0xff) as u8,
                ((rgb >> 8) & 0xff) as u8,
                (rgb & 0xff) as u8,
            )
        }

        Self {
            base: BaseColors {
                background: c(0xf8_fafc),
                surface: c(0xff_ffff),
                foreground: c(0x0f_172a),
                muted: c(0x64_748b),
                border: c(0xe2_e8f0),
            },
            dark: BaseColors {
                background: c(0x0f_172a),
                surface: c(0x1e_293b),
                foreground: c(0xf1_f5f9),
                muted: c(0x94_a3b8),
                border: c(0x33_4155),
            },
            primary: ramp(
                c(0xdb_eafe),
                c(0x93_c5fd),
                c(0x3b_82f6),
                c(0x1d_4ed8),
                c(0x1e_3a8a),
            ),
            secondary: ramp(
                c(0xed_e9fe),
                c(0xc4_b5fd),
                c(0x8b_5cf6),
                c(0x6d_28d9),
                c(0x4c_1d95),
            ),
            success: ramp(
                c(0xdc_fce7),
                c(0x86_efac),
                c(0x22_c55e),
                c(0x15_803d),
                c(0x14_532d),
            ),
            warning: ramp(
                c(0xfe_f3c7),
                c(0xfc_d34d),
                c(0xf5_9e0b),
                c(0xb4_5309),
                c(0x78_350f),
            ),
            error: ramp(
                c(0xfe_e2e2),
                c(0xfc_a5a5),
                c(0xef_4444),
                c(0xb9_1c1c),
                c(0x7f_1d1d),
            ),
            font: FontStack {
                families: vec![
                    "Inter".to_string(),
                    "Segoe UI".to_string(),
                    "Helvetica Neue".to_string(),
                    "sans-serif".to_string(),
                ],
            },
        }
    }
}

/// Step-by-step builder for [`DesignTokens`].
///
/// Unset fields fall back to the stock palette, so a builder is mostly
/// useful for swapping out individual ramps or the font stack.
#[derive(Debug, Default)]
pub struct DesignTokensBuilder {
    base: Option<BaseColors>,
    dark: Option<BaseColors>,
    ramps: Vec<(Role, Ramp)>,
    font: Option<FontStack>,
}

impl DesignTokensBuilder {
    #[must_use]
    pub fn base(mut self, base: BaseColors) -> Self {
        self.base = Some(base);
        self
    }

    #[must_use]
    pub fn dark(mut self, dark: BaseColors) -> Self {
        self.dark = Some(dark);
        self
    }

    #[must_use]
    pub fn ramp(mut self, role: Role, ramp: Ramp) -> Self {
        self.ramps.push((role, ramp));
        self
    }

    #[must_use]
    pub fn font(mut self, font: FontStack) -> Self {
        self.font = Some(font);
        self
    }

    /// Consume the builder, validate, and return a [`DesignTokens`] set.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] when the assembled set fails
    /// [`DesignTokens::validate`].
    pub fn build(self) -> Result<DesignTokens, ThemeError> {
        let mut tokens = DesignTokens::default();
        if let Some(base) = self.base {
            tokens.base = base;
        }
        if let Some(dark) = self.dark {
            tokens.dark = dark;
        }
        for (role, ramp) in self.ramps {
            match role {
                Role::Primary => tokens.primary = ramp,
                Role::Secondary => tokens.secondary = ramp,
                Role::Success => tokens.success = ramp,
                Role::Warning => tokens.warning = ramp,
                Role::Error => tokens.error = ramp,
            }
        }
        if let Some(font) = self.font {
            tokens.font = font;
        }
        tokens.validate()?;
        Ok(tokens)
    }
}
