//! Stats card component — a labelled metric with an icon badge.

use leptos::prelude::*;

use super::icon::{Icon, IconName};

/// Assemble the icon badge's class list from the background token.
fn badge_class(bg_color: &str) -> String {
    format!("stats-card-icon {bg_color}")
}

/// A card displaying a primary metric above a subtitle, next to a
/// circular icon badge.
///
/// Pure presentation: no signals, no effects, no validation. The
/// `color` / `bg_color` props are style-class tokens from the theme
/// vocabulary (`text-primary-700`, `bg-primary-100`, …) and only ever
/// affect the badge, never the text block.
#[component]
pub fn StatsCard(
    /// Accessible label for the card; not visibly rendered.
    #[prop(into)]
    title: String,
    /// The primary metric, rendered large and bold.
    #[prop(into)]
    value: String,
    /// Secondary descriptive text below the value.
    #[prop(into)]
    subtitle: String,
    /// Glyph shown in the badge.
    icon: IconName,
    /// Color class token for the icon foreground.
    #[prop(into)]
    color: String,
    /// Color class token for the badge background.
    #[prop(into)]
    bg_color: String,
) -> impl IntoView {
    view! {
        <div class="stats-card" aria-label=title>
            <span class=badge_class(&bg_color)>
                <Icon name=icon class=color/>
            </span>
            <div class="stats-card-body">
                <span class="stats-card-value">{value}</span>
                <span class="stats-card-subtitle">{subtitle}</span>
            </div>
        </div>
    }
}
