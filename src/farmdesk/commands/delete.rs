use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FarmerId;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, id: &FarmerId) -> Result<CmdResult> {
    let removed = store.remove_farmer(id)?;
    info!(id = %removed.id, count = store.len(), "farmer deleted");

    let mut result = CmdResult::default().with_affected_farmers(vec![removed]);
    result.add_message(CmdMessage::success("Farmer deleted."));
    Ok(result)
}
