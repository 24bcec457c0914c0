//! Styles for the farmdesk terminal client.
//!
//! Templates only ever name semantic styles (`name`, `muted`, `status_premium`, ...).
//! This module maps those names to concrete `console` styles, so a look-and-feel
//! change never touches a template.
//!
//! Avatar tints from the query layer get one style each, named `avatar_<color>`.

use console::Style;
use farmdesk::model::FarmerStatus;
use farmdesk::query::AvatarColor;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub static FARMDESK_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        ("title", Style::new().bold().underlined()),
        ("label", Style::new().bold()),
        ("count", Style::new().bold().cyan()),
        ("name", Style::new().bold()),
        ("muted", Style::new().color256(246)),
        ("notes", Style::new().color256(246).italic()),
        ("id", Style::new().yellow()),
        ("status_premium", Style::new().black().on_green()),
        ("status_regular", Style::new().black().on_yellow()),
        ("avatar_blue", Style::new().bold().white().on_blue()),
        ("avatar_green", Style::new().bold().black().on_green()),
        ("avatar_purple", Style::new().bold().white().on_magenta()),
        ("avatar_orange", Style::new().bold().black().on_color256(214)),
        ("avatar_pink", Style::new().bold().black().on_color256(218)),
        ("avatar_indigo", Style::new().bold().white().on_color256(61)),
    ])
});

pub fn status_style(status: FarmerStatus) -> &'static str {
    match status {
        FarmerStatus::Premium => "status_premium",
        FarmerStatus::Regular => "status_regular",
    }
}

pub fn avatar_style(color: AvatarColor) -> String {
    format!("avatar_{}", color.as_str())
}

/// Applies a named style. Unknown names and `use_color == false` give plain text.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match FARMDESK_THEME.get(name) {
        Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
        _ => text.to_string(),
    }
}
