use crate::config::FarmdeskConfig;
use crate::model::Farmer;
use crate::query::DisplayFarmer;

pub mod config;
pub mod create;
pub mod dashboard;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod update;

pub use dashboard::DashboardSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, updated or removed by the command, in the state it left them.
    pub affected_farmers: Vec<Farmer>,
    pub listed_farmers: Vec<DisplayFarmer>,
    pub dashboard: Option<DashboardSummary>,
    pub config: Option<FarmdeskConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_farmers(mut self, farmers: Vec<Farmer>) -> Self {
        self.affected_farmers = farmers;
        self
    }

    pub fn with_listed_farmers(mut self, farmers: Vec<DisplayFarmer>) -> Self {
        self.listed_farmers = farmers;
        self
    }

    pub fn with_dashboard(mut self, summary: DashboardSummary) -> Self {
        self.dashboard = Some(summary);
        self
    }

    pub fn with_config(mut self, config: FarmdeskConfig) -> Self {
        self.config = Some(config);
        self
    }
}
