use crate::error::{FarmdeskError, Result};
use crate::model::FarmerDraft;
use tracing::warn;

/// Rejects a draft with any blank required field.
pub fn validate_draft(draft: &FarmerDraft) -> Result<()> {
    let missing = draft.missing_fields();
    if missing.is_empty() {
        return Ok(());
    }
    warn!(missing = ?missing, "rejected farmer draft");
    Err(FarmdeskError::Validation { missing })
}
