//! # Rendering Module
//!
//! Turns command results into terminal text. Layout calculations (width, truncation,
//! padding) stay in Rust because they need Unicode-aware processing; the templates
//! in `templates.rs` handle structure and pick semantic styles.
//!
//! Every `render_*` function takes `use_color` explicitly. The caller decides it once
//! from `--no-color` and terminal detection.

use super::styles::{self, avatar_style, status_style};
use super::templates::{CONFIG_TEMPLATE, DASHBOARD_TEMPLATE, FARMER_TEMPLATE, LIST_TEMPLATE};
use chrono::NaiveDate;
use colored::Colorize;
use farmdesk::api::{CmdMessage, DashboardSummary, MessageLevel};
use farmdesk::config::FarmdeskConfig;
use farmdesk::error::Result;
use farmdesk::query::DisplayFarmer;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const NAME_WIDTH: usize = 24;
pub const NOTES_WIDTH: usize = 48;
const EMPTY_INITIALS: &str = "?";

#[derive(Serialize)]
struct RowData {
    id: String,
    avatar: String,
    avatar_style: String,
    name: String,
    padding: String,
    indent: String,
    email: String,
    status: String,
    status_style: &'static str,
    notes: Option<String>,
    last_active: String,
}

impl RowData {
    fn new(dp: &DisplayFarmer, today: NaiveDate) -> Self {
        let avatar = avatar_text(&dp.initials);
        let name = truncate_to_width(&dp.farmer.name, NAME_WIDTH);
        let padding = " ".repeat(NAME_WIDTH.saturating_sub(name.width()));
        let indent = " ".repeat(avatar.width() + 1);
        let notes = dp
            .farmer
            .notes
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .map(|n| format!("\u{201c}{}\u{201d}", truncate_to_width(n, NOTES_WIDTH)));

        Self {
            id: dp.farmer.id.to_string(),
            avatar,
            avatar_style: avatar_style(dp.avatar),
            name,
            padding,
            indent,
            email: dp.farmer.email.clone(),
            status: format!(" {} ", dp.farmer.status),
            status_style: status_style(dp.farmer.status),
            notes,
            last_active: format_last_active(dp.farmer.last_active, today),
        }
    }
}

#[derive(Serialize)]
struct ListData {
    rows: Vec<RowData>,
    empty: bool,
}

#[derive(Serialize)]
struct DashboardData {
    total: usize,
    premium: usize,
    regular: usize,
    recent: Vec<RowData>,
}

#[derive(Serialize)]
struct FieldData {
    label: String,
    value: String,
}

#[derive(Serialize)]
struct FarmerData {
    avatar: String,
    avatar_style: String,
    name: String,
    status: String,
    status_style: &'static str,
    fields: Vec<FieldData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

pub fn render_dashboard(summary: &DashboardSummary, today: NaiveDate, use_color: bool) -> String {
    let data = DashboardData {
        total: summary.total,
        premium: summary.premium,
        regular: summary.regular,
        recent: summary
            .recent
            .iter()
            .map(|dp| RowData::new(dp, today))
            .collect(),
    };
    render_template(DASHBOARD_TEMPLATE, &data, use_color)
}

pub fn render_farmer_list(farmers: &[DisplayFarmer], today: NaiveDate, use_color: bool) -> String {
    let data = ListData {
        rows: farmers.iter().map(|dp| RowData::new(dp, today)).collect(),
        empty: farmers.is_empty(),
    };
    render_template(LIST_TEMPLATE, &data, use_color)
}

/// Full record, the edit form's read-only counterpart.
pub fn render_farmer(dp: &DisplayFarmer, today: NaiveDate, use_color: bool) -> String {
    let f = &dp.farmer;
    let fields = [
        ("ID", f.id.to_string()),
        ("Email", f.email.clone()),
        ("Phone", f.phone.clone()),
        ("Aadhaar", f.aadhaar.clone()),
        ("Address", f.address.clone()),
        ("Date of Birth", f.dob.clone()),
        ("Last active", format_last_active(f.last_active, today)),
        ("Notes", f.notes.clone().unwrap_or_default()),
    ];
    let label_width = fields.iter().map(|(l, _)| l.width()).max().unwrap_or(0);

    let data = FarmerData {
        avatar: avatar_text(&dp.initials),
        avatar_style: avatar_style(dp.avatar),
        name: f.name.clone(),
        status: format!(" {} ", f.status),
        status_style: status_style(f.status),
        fields: fields
            .into_iter()
            .map(|(label, value)| FieldData {
                label: format!("{:<width$}", label, width = label_width),
                value,
            })
            .collect(),
    };
    render_template(FARMER_TEMPLATE, &data, use_color)
}

pub fn render_config(config: &FarmdeskConfig, use_color: bool) -> String {
    let data = ConfigData {
        entries: config
            .entries()
            .into_iter()
            .map(|(key, value)| ConfigEntry { key, value })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, use_color)
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

/// One line per message, colored by level.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    messages
        .iter()
        .map(|msg| {
            let line = if use_color {
                match msg.level {
                    MessageLevel::Info => msg.content.dimmed().to_string(),
                    MessageLevel::Success => msg.content.green().to_string(),
                }
            } else {
                msg.content.clone()
            };
            format!("{}\n", line)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    print!("{}", render_messages(messages, use_color));
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles::apply(&name, &value.to_string(), use_color)
    });

    env.render_str(template, data)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn avatar_text(initials: &str) -> String {
    if initials.is_empty() {
        format!(" {} ", EMPTY_INITIALS)
    } else {
        format!(" {} ", initials)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// `2024-09-10 (3 weeks ago)`, or `(today)` for the current date.
fn format_last_active(date: NaiveDate, today: NaiveDate) -> String {
    let days = today.signed_duration_since(date).num_days();
    if days <= 0 {
        return format!("{} (today)", date);
    }

    let elapsed = std::time::Duration::from_secs(days as u64 * 24 * 60 * 60);
    let ago = timeago::Formatter::new().convert(elapsed);
    format!("{} ({})", date, ago)
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmdesk::model::{Farmer, FarmerId, FarmerStatus};
    use farmdesk::query::{AvatarColor, LIST_PALETTE};
    use farmdesk::seed::mock_farmers;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 12).unwrap()
    }

    fn seeded() -> Vec<DisplayFarmer> {
        mock_farmers()
            .into_iter()
            .map(|f| DisplayFarmer::new(f, &LIST_PALETTE))
            .collect()
    }

    #[test]
    fn test_render_empty_list() {
        let output = render_farmer_list(&[], today(), false);
        assert_eq!(output.trim(), "No farmers found.");
    }

    #[test]
    fn test_render_list_rows() {
        let output = render_farmer_list(&seeded(), today(), false);

        assert!(output.contains(" JD  John Doe"));
        assert!(output.contains("Premium"));
        assert!(output.contains("#3"));
        assert!(output.contains("jane@example.com"));
        assert!(output.contains("\u{201c}Owns a large plot of land.\u{201d}"));
        assert!(output.contains("Last active: 2024-09-05"));
    }

    #[test]
    fn test_blank_notes_are_hidden() {
        let farmers = seeded();
        // Jane Smith carries an empty note
        let output = render_farmer_list(&farmers[1..2], today(), false);
        assert!(!output.contains('\u{201c}'));
    }

    #[test]
    fn test_render_without_color_has_no_ansi() {
        let output = render_farmer_list(&seeded(), today(), false);
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_render_with_color_includes_ansi() {
        let output = render_farmer_list(&seeded(), today(), true);
        assert!(output.contains('\u{1b}'));
        assert!(output.contains("John Doe"));
    }

    #[test]
    fn test_render_dashboard() {
        let summary = DashboardSummary {
            total: 4,
            premium: 2,
            regular: 2,
            recent: seeded().into_iter().rev().take(3).collect(),
        };
        let output = render_dashboard(&summary, today(), false);

        assert!(output.contains("Total Farmers  4"));
        assert!(output.contains("Premium        2"));
        let sarah = output.find("Sarah Wilson").unwrap();
        let mike = output.find("Mike Johnson").unwrap();
        assert!(sarah < mike);
        assert!(!output.contains("John Doe"));
    }

    #[test]
    fn test_render_empty_dashboard() {
        let summary = DashboardSummary {
            total: 0,
            premium: 0,
            regular: 0,
            recent: vec![],
        };
        let output = render_dashboard(&summary, today(), false);
        assert!(output.contains("No farmers yet."));
    }

    #[test]
    fn test_render_single_farmer() {
        let output = render_farmer(&seeded()[0], today(), false);
        assert!(output.contains("John Doe"));
        assert!(output.contains("Aadhaar        1111 1111 1111"));
        assert!(output.contains("Date of Birth  1985-05-15"));
    }

    #[test]
    fn test_empty_name_gets_placeholder_avatar() {
        let mut farmer: Farmer = mock_farmers().remove(0);
        farmer.name = String::new();
        let dp = DisplayFarmer {
            farmer,
            initials: String::new(),
            avatar: AvatarColor::Blue,
        };
        let output = render_farmer(&dp, today(), false);
        assert!(output.starts_with(" ? "));
    }

    #[test]
    fn test_render_config() {
        let output = render_config(&FarmdeskConfig::default(), false);
        assert!(output.contains("recent-count = 3"));
        assert!(output.contains("seed-mock-data = true"));
    }

    #[test]
    fn test_render_messages_plain() {
        let messages = vec![
            CmdMessage::success("Farmer added successfully!"),
            CmdMessage::info("Delete cancelled."),
        ];
        let output = render_messages(&messages, false);
        assert_eq!(output, "Farmer added successfully!\nDelete cancelled.\n");
    }

    #[test]
    fn test_render_json_list() {
        let output = render_json(&seeded()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["name"], "John Doe");
        assert_eq!(parsed[0]["initials"], "JD");
        assert_eq!(parsed[0]["lastActive"], "2024-09-10");
        assert_eq!(parsed[3]["avatar"], "pink");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_format_last_active() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 10).unwrap();
        assert_eq!(format_last_active(date, date), "2024-09-10 (today)");
        assert_eq!(format_last_active(date, today()), "2024-09-10 (2 days ago)");
    }

    #[test]
    fn test_status_badge_names_status() {
        let farmer = Farmer {
            status: FarmerStatus::Regular,
            id: FarmerId::from("9"),
            ..mock_farmers().remove(0)
        };
        let dp = DisplayFarmer::new(farmer, &LIST_PALETTE);
        let output = render_farmer_list(&[dp], today(), false);
        assert!(output.contains(" Regular "));
    }
}
