use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque record identifier. Assigned once at creation and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FarmerId(String);

impl FarmerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, when it is a plain decimal number.
    pub fn sequence(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for FarmerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FarmerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FarmerStatus {
    Premium,
    Regular,
}

impl FarmerStatus {
    pub const ALL: [FarmerStatus; 2] = [FarmerStatus::Premium, FarmerStatus::Regular];

    pub fn as_str(&self) -> &'static str {
        match self {
            FarmerStatus::Premium => "Premium",
            FarmerStatus::Regular => "Regular",
        }
    }
}

impl fmt::Display for FarmerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FarmerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "premium" => Ok(FarmerStatus::Premium),
            "regular" => Ok(FarmerStatus::Regular),
            other => Err(format!("unknown status '{}' (expected premium or regular)", other)),
        }
    }
}

/// Status narrowing used by the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(FarmerStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: FarmerStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status.as_str().to_lowercase()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

impl From<FarmerStatus> for StatusFilter {
    fn from(status: FarmerStatus) -> Self {
        StatusFilter::Only(status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    pub id: FarmerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub aadhaar: String,
    pub address: String,
    pub status: FarmerStatus,
    /// Stamped at creation; edits leave it alone.
    pub last_active: NaiveDate,
    pub dob: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Farmer {
    /// Builds a record from a draft. Only the create command should call this.
    pub fn from_draft(id: FarmerId, draft: FarmerDraft, last_active: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            aadhaar: draft.aadhaar,
            address: draft.address,
            status: draft.status,
            last_active,
            dob: draft.dob,
            notes: draft.notes,
        }
    }

    /// Replaces every editable field. `id` and `last_active` are kept.
    pub fn apply(&mut self, draft: FarmerDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.phone = draft.phone;
        self.aadhaar = draft.aadhaar;
        self.address = draft.address;
        self.status = draft.status;
        self.dob = draft.dob;
        self.notes = draft.notes;
    }

    pub fn to_draft(&self) -> FarmerDraft {
        FarmerDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            aadhaar: self.aadhaar.clone(),
            address: self.address.clone(),
            status: self.status,
            dob: self.dob.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// The editable fields of a farmer, as submitted by the add and edit forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub aadhaar: String,
    pub address: String,
    pub status: FarmerStatus,
    pub dob: String,
    pub notes: Option<String>,
}

impl Default for FarmerDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            aadhaar: String::new(),
            address: String::new(),
            status: FarmerStatus::Regular,
            dob: String::new(),
            notes: None,
        }
    }
}

impl FarmerDraft {
    /// Names of the required fields left blank, in form order.
    ///
    /// Whitespace-only input counts as blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("aadhaar", &self.aadhaar),
            ("address", &self.address),
            ("email", &self.email),
            ("dob", &self.dob),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}
