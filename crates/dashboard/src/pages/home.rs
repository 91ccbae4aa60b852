//! Overview page — a grid of stat cards with representative metrics.

use leptos::prelude::*;
use statskit_theme::tokens::{bg_class, text_class};
use statskit_theme::{Role, Step};

use crate::components::{IconName, StatsCard};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Overview"</h1>
            <div class="stats-grid">
                <StatsCard
                    title="Users"
                    value="1,204"
                    subtitle="Active this week"
                    icon=IconName::Users
                    color=text_class(Role::Primary, Step::S700)
                    bg_color=bg_class(Role::Primary, Step::S100)
                />
                <StatsCard
                    title="Throughput"
                    value="98.2%"
                    subtitle="Requests served"
                    icon=IconName::Activity
                    color=text_class(Role::Success, Step::S700)
                    bg_color=bg_class(Role::Success, Step::S100)
                />
                <StatsCard
                    title="Latency"
                    value="184 ms"
                    subtitle="p95 over 24h"
                    icon=IconName::Clock
                    color=text_class(Role::Warning, Step::S700)
                    bg_color=bg_class(Role::Warning, Step::S100)
                />
                <StatsCard
                    title="Incidents"
                    value="3"
                    subtitle="Open alerts"
                    icon=IconName::Alert
                    color=text_class(Role::Error, Step::S700)
                    bg_color=bg_class(Role::Error, Step::S100)
                />
            </div>
        </div>
    }
}
