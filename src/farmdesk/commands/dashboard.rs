use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::FarmerStatus;
use crate::query::{count_by_status, decorate, recent_activity, DisplayFarmer, DASHBOARD_PALETTE};
use crate::store::DataStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub premium: usize,
    pub regular: usize,
    /// Most recently added first.
    pub recent: Vec<DisplayFarmer>,
}

pub fn run<S: DataStore>(store: &S, recent_count: usize) -> Result<CmdResult> {
    let farmers = store.list_farmers()?;
    let summary = DashboardSummary {
        total: farmers.len(),
        premium: count_by_status(&farmers, FarmerStatus::Premium),
        regular: count_by_status(&farmers, FarmerStatus::Regular),
        recent: decorate(recent_activity(&farmers, recent_count), &DASHBOARD_PALETTE),
    };
    Ok(CmdResult::default().with_dashboard(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::AvatarColor;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn summarizes_the_snapshot() {
        let store = StoreFixture::new().abcd().store;
        let summary = run(&store, 3).unwrap().dashboard.unwrap();

        assert_eq!(summary.total, 4);
        assert_eq!(summary.premium, 2);
        assert_eq!(summary.regular, 2);
        let recent: Vec<_> = summary
            .recent
            .iter()
            .map(|dp| dp.farmer.id.to_string())
            .collect();
        assert_eq!(recent, vec!["4", "3", "2"]);
    }

    #[test]
    fn recent_strip_uses_the_dashboard_palette() {
        let store = StoreFixture::new().abcd().store;
        let summary = run(&store, 1).unwrap().dashboard.unwrap();
        // '4' is 52: 52 % 4 == 0
        assert_eq!(summary.recent[0].avatar, AvatarColor::Blue);
    }

    #[test]
    fn empty_store() {
        let store = StoreFixture::new().store;
        let summary = run(&store, 3).unwrap().dashboard.unwrap();
        assert_eq!(summary.total, 0);
        assert!(summary.recent.is_empty());
    }
}
