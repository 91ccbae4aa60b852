//! Color-scheme toggle button.
//!
//! The scheme vocabulary lives in `statskit-theme`: [`Scheme::ATTRIBUTE`]
//! is the `<html>` attribute the generated stylesheet keys its dark
//! override on, and [`Scheme::name`] supplies the attribute values. This
//! component only handles persistence and the DOM round-trip.

use leptos::prelude::*;
use statskit_theme::Scheme;

/// Key used to persist the scheme preference in `localStorage`.
const STORAGE_KEY: &str = "statskit-scheme";

/// Load the persisted scheme preference, defaulting to light.
fn stored_scheme() -> Scheme {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    Scheme::from_preference(stored.as_deref())
}

/// Reflect the scheme on `<html>` and persist the choice.
fn set_scheme(scheme: Scheme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute(Scheme::ATTRIBUTE, scheme.name());
    }
    if let Some(storage) = window.local_storage().ok().flatten() {
        let _ = storage.set_item(STORAGE_KEY, scheme.name());
    }
}

/// A button that flips between the light and dark schemes.
///
/// Applies the stored preference on mount; each click toggles, updates
/// the document attribute, and persists the new choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (scheme, set_next) = signal(stored_scheme());
    set_scheme(scheme.get_untracked());

    let flip = move |_| {
        let next = scheme.get_untracked().toggled();
        set_scheme(next);
        set_next.set(next);
    };

    let glyph = move || match scheme.get() {
        Scheme::Dark => "\u{263E}",
        Scheme::Light => "\u{2600}",
    };

    view! {
        <button class="theme-toggle" on:click=flip title="Switch color scheme">
            {glyph}
        </button>
    }
}
