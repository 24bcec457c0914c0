use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::FarmerId;
use crate::query::{DisplayFarmer, LIST_PALETTE};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: &FarmerId) -> Result<CmdResult> {
    let farmer = store.get_farmer(id)?;
    Ok(CmdResult::default().with_listed_farmers(vec![DisplayFarmer::new(farmer, &LIST_PALETTE)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FarmdeskError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_the_decorated_record() {
        let store = StoreFixture::new().abcd().store;
        let result = run(&store, &"3".into()).unwrap();
        assert_eq!(result.listed_farmers.len(), 1);
        assert_eq!(result.listed_farmers[0].farmer.name, "Carol Clark");
        assert_eq!(result.listed_farmers[0].initials, "CC");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = StoreFixture::new().abcd().store;
        assert!(matches!(
            run(&store, &"0".into()),
            Err(FarmdeskError::FarmerNotFound(_))
        ));
    }
}
