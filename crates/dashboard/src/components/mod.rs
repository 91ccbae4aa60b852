mod icon;
mod stat_card;
mod theme_toggle;

pub use icon::{Icon, IconName};
pub use stat_card::StatsCard;
pub use theme_toggle::ThemeToggle;
