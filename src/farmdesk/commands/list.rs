use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::StatusFilter;
use crate::query::{decorate, filter_list, LIST_PALETTE};
use crate::store::DataStore;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct FarmerFilter {
    pub status: StatusFilter,
    pub search_term: Option<String>,
}

pub fn run<S: DataStore>(store: &S, filter: &FarmerFilter) -> Result<CmdResult> {
    let farmers = store.list_farmers()?;
    let term = filter.search_term.as_deref().unwrap_or("");
    let listed = filter_list(&farmers, term, filter.status);
    debug!(
        total = farmers.len(),
        shown = listed.len(),
        status = %filter.status,
        "listed farmers"
    );

    Ok(CmdResult::default().with_listed_farmers(decorate(listed, &LIST_PALETTE)))
}
