use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Farmer, FarmerDraft};
use crate::store::DataStore;
use chrono::NaiveDate;
use tracing::info;

use super::helpers::validate_draft;

/// Validates the draft, then appends a new record stamped with `today`.
pub fn run<S: DataStore>(store: &mut S, draft: FarmerDraft, today: NaiveDate) -> Result<CmdResult> {
    validate_draft(&draft)?;

    let id = store.allocate_id()?;
    let farmer = Farmer::from_draft(id, draft, today);
    store.insert_farmer(farmer.clone())?;
    info!(id = %farmer.id, count = store.len(), "farmer created");

    let mut result = CmdResult::default().with_affected_farmers(vec![farmer]);
    result.add_message(CmdMessage::success("Farmer added successfully!"));
    Ok(result)
}
