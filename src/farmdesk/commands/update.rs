use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{FarmerDraft, FarmerId};
use crate::store::DataStore;
use tracing::info;

use super::helpers::validate_draft;

/// Replaces every editable field of `id` with the draft's values.
///
/// A missing id is reported before the draft is validated.
pub fn run<S: DataStore>(store: &mut S, id: &FarmerId, draft: FarmerDraft) -> Result<CmdResult> {
    let mut farmer = store.get_farmer(id)?;
    validate_draft(&draft)?;

    farmer.apply(draft);
    store.replace_farmer(farmer.clone())?;
    info!(id = %farmer.id, "farmer updated");

    let mut result = CmdResult::default().with_affected_farmers(vec![farmer]);
    result.add_message(CmdMessage::success("Farmer updated successfully!"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FarmdeskError;
    use crate::model::FarmerStatus;
    use crate::store::memory::fixtures::{draft, fixture_date, StoreFixture};

    #[test]
    fn replaces_fields_but_keeps_id_date_and_position() {
        let mut store = StoreFixture::new().abcd().store;
        let mut edit = draft("Bea Brown", FarmerStatus::Regular);
        edit.notes = Some("Switched to drip irrigation".into());
        edit.dob = "1991-02-03".into();

        let result = run(&mut store, &"2".into(), edit.clone()).unwrap();
        let updated = &result.affected_farmers[0];

        assert_eq!(updated.id.as_str(), "2");
        assert_eq!(updated.last_active, fixture_date());
        assert_eq!(updated.to_draft(), edit);

        let all = store.list_farmers().unwrap();
        assert_eq!(all[1], *updated);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn unknown_id_is_not_found_and_changes_nothing() {
        let mut store = StoreFixture::new().abcd().store;
        let before = store.list_farmers().unwrap();

        let err = run(&mut store, &"42".into(), draft("X Y", FarmerStatus::Regular)).unwrap_err();

        assert!(matches!(err, FarmdeskError::FarmerNotFound(id) if id.as_str() == "42"));
        assert_eq!(store.list_farmers().unwrap(), before);
    }

    #[test]
    fn unknown_id_wins_over_validation() {
        let mut store = StoreFixture::new().abcd().store;
        let err = run(&mut store, &"42".into(), Default::default()).unwrap_err();
        assert!(matches!(err, FarmdeskError::FarmerNotFound(_)));
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut store = StoreFixture::new().abcd().store;
        let before = store.list_farmers().unwrap();
        let mut edit = draft("Bob Brown", FarmerStatus::Premium);
        edit.email = " ".into();

        let err = run(&mut store, &"2".into(), edit).unwrap_err();

        assert!(err.is_recoverable_by_form());
        assert_eq!(store.list_farmers().unwrap(), before);
    }
}
