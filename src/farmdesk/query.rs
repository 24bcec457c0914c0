//! # View Query Layer
//!
//! Pure projections over a snapshot of the store. Nothing here mutates records or
//! touches I/O; every function takes a slice and returns new values.
//!
//! - [`filter_list`]: the list view's search box plus status chips
//! - [`recent_activity`]: the dashboard's "most recently added" strip
//! - [`count_by_status`]: dashboard counters
//! - [`derive_initials`] / [`derive_avatar_color`]: avatar decoration
//!
//! [`DisplayFarmer`] bundles a record with its derived avatar so renderers do not
//! recompute it.

use crate::model::{Farmer, FarmerId, FarmerStatus, StatusFilter};
use serde::Serialize;

/// How many records the dashboard shows by default.
pub const DEFAULT_RECENT_COUNT: usize = 3;

/// Avatar tints. Renderers map these onto whatever styling they have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarColor {
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Indigo,
}

impl AvatarColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarColor::Blue => "blue",
            AvatarColor::Green => "green",
            AvatarColor::Purple => "purple",
            AvatarColor::Orange => "orange",
            AvatarColor::Pink => "pink",
            AvatarColor::Indigo => "indigo",
        }
    }
}

pub const DASHBOARD_PALETTE: [AvatarColor; 4] = [
    AvatarColor::Blue,
    AvatarColor::Green,
    AvatarColor::Purple,
    AvatarColor::Orange,
];

pub const LIST_PALETTE: [AvatarColor; 6] = [
    AvatarColor::Blue,
    AvatarColor::Green,
    AvatarColor::Purple,
    AvatarColor::Orange,
    AvatarColor::Pink,
    AvatarColor::Indigo,
];

/// A record plus its derived avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayFarmer {
    #[serde(flatten)]
    pub farmer: Farmer,
    pub initials: String,
    pub avatar: AvatarColor,
}

impl DisplayFarmer {
    pub fn new(farmer: Farmer, palette: &[AvatarColor]) -> Self {
        let initials = derive_initials(&farmer.name);
        let avatar = derive_avatar_color(&farmer.id, palette)
            .copied()
            .unwrap_or(AvatarColor::Blue);
        Self {
            farmer,
            initials,
            avatar,
        }
    }
}

pub fn decorate(farmers: Vec<Farmer>, palette: &[AvatarColor]) -> Vec<DisplayFarmer> {
    farmers
        .into_iter()
        .map(|f| DisplayFarmer::new(f, palette))
        .collect()
}

/// Status narrowing first, then a case-insensitive substring match on name or email.
/// Relative order is preserved.
pub fn filter_list(records: &[Farmer], search_term: &str, status: StatusFilter) -> Vec<Farmer> {
    let term = search_term.to_lowercase();

    records
        .iter()
        .filter(|f| status.matches(f.status))
        .filter(|f| f.name.to_lowercase().contains(&term) || f.email.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// The last `n` records in insertion order, newest first.
pub fn recent_activity(records: &[Farmer], n: usize) -> Vec<Farmer> {
    let start = records.len().saturating_sub(n);
    records[start..].iter().rev().cloned().collect()
}

/// First character of each whitespace-separated token.
pub fn derive_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

/// Picks a palette entry from the first UTF-16 code unit of the id.
///
/// Stable for a given id and palette; different ids can share a color. An empty id
/// maps to the first entry, an empty palette to `None`.
pub fn derive_avatar_color<'a, T>(id: &FarmerId, palette: &'a [T]) -> Option<&'a T> {
    if palette.is_empty() {
        return None;
    }
    let code = id.as_str().encode_utf16().next().unwrap_or(0) as usize;
    palette.get(code % palette.len())
}

pub fn count_by_status(records: &[Farmer], status: FarmerStatus) -> usize {
    records.iter().filter(|f| f.status == status).count()
}
