//! Icon collaborator — a fixed set of inline-SVG glyphs.
//!
//! Glyphs are drawn with `stroke="currentColor"`, so the foreground is
//! controlled entirely by the color class passed in (`text-primary-700`
//! and friends from the theme vocabulary).

use leptos::prelude::*;

/// Identifier for a renderable glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Users,
    Activity,
    Clock,
    Alert,
    TrendingUp,
}

impl IconName {
    /// All glyphs the set provides.
    pub const ALL: [IconName; 5] = [
        IconName::Users,
        IconName::Activity,
        IconName::Clock,
        IconName::Alert,
        IconName::TrendingUp,
    ];

    /// The glyph's identifier, emitted as `data-icon` on the rendered
    /// element.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            IconName::Users => "users",
            IconName::Activity => "activity",
            IconName::Clock => "clock",
            IconName::Alert => "alert",
            IconName::TrendingUp => "trending-up",
        }
    }

    /// SVG path data for a 24x24 viewport.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            IconName::Users => {
                "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0m10 14v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"
            }
            IconName::Activity => "M22 12h-4l-3 9L9 3l-3 9H2",
            IconName::Clock => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20m0 4v6l4 2",
            IconName::Alert => {
                "M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0M12 9v4m0 4h.01"
            }
            IconName::TrendingUp => "m23 6-9.5 9.5-5-5L1 18M17 6h6v6",
        }
    }
}

/// A scalable glyph, sized in pixels and colored via a class token.
#[component]
pub fn Icon(
    /// Which glyph to draw.
    name: IconName,
    /// Width and height in pixels.
    #[prop(default = 24)]
    size: u32,
    /// Color class applied to the `<svg>` element.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <svg
            class=class
            data-icon=name.name()
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=name.path()/>
        </svg>
    }
}
