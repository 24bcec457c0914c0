use super::DataStore;
use crate::error::{FarmdeskError, Result};
use crate::model::{Farmer, FarmerId};

/// Process-lifetime storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    farmers: Vec<Farmer>,
    // Highest sequence number ever issued or inserted; never decreases.
    last_sequence: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the given records, in order.
    pub fn with_farmers(farmers: impl IntoIterator<Item = Farmer>) -> Result<Self> {
        let mut store = Self::new();
        for farmer in farmers {
            store.insert_farmer(farmer)?;
        }
        Ok(store)
    }

    fn position(&self, id: &FarmerId) -> Option<usize> {
        self.farmers.iter().position(|f| &f.id == id)
    }
}

impl DataStore for InMemoryStore {
    fn list_farmers(&self) -> Result<Vec<Farmer>> {
        Ok(self.farmers.clone())
    }

    fn get_farmer(&self, id: &FarmerId) -> Result<Farmer> {
        self.farmers
            .iter()
            .find(|f| &f.id == id)
            .cloned()
            .ok_or_else(|| FarmdeskError::FarmerNotFound(id.clone()))
    }

    fn insert_farmer(&mut self, farmer: Farmer) -> Result<()> {
        if self.position(&farmer.id).is_some() {
            return Err(FarmdeskError::Api(format!(
                "Farmer id {} is already in use",
                farmer.id
            )));
        }
        if let Some(seq) = farmer.id.sequence() {
            self.last_sequence = self.last_sequence.max(seq);
        }
        self.farmers.push(farmer);
        Ok(())
    }

    fn replace_farmer(&mut self, farmer: Farmer) -> Result<()> {
        let idx = self
            .position(&farmer.id)
            .ok_or_else(|| FarmdeskError::FarmerNotFound(farmer.id.clone()))?;
        self.farmers[idx] = farmer;
        Ok(())
    }

    fn remove_farmer(&mut self, id: &FarmerId) -> Result<Farmer> {
        let idx = self
            .position(id)
            .ok_or_else(|| FarmdeskError::FarmerNotFound(id.clone()))?;
        Ok(self.farmers.remove(idx))
    }

    fn allocate_id(&mut self) -> Result<FarmerId> {
        loop {
            self.last_sequence = self.last_sequence.checked_add(1).ok_or_else(|| {
                FarmdeskError::Api("Farmer id sequence exhausted".to_string())
            })?;
            let candidate = FarmerId::new(self.last_sequence.to_string());
            if self.position(&candidate).is_none() {
                return Ok(candidate);
            }
        }
    }

    fn len(&self) -> usize {
        self.farmers.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{FarmerDraft, FarmerStatus};
    use chrono::NaiveDate;

    pub fn fixture_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    pub fn draft(name: &str, status: FarmerStatus) -> FarmerDraft {
        let slug = name.to_lowercase().replace(' ', ".");
        FarmerDraft {
            name: name.to_string(),
            email: format!("{}@example.com", slug),
            phone: "123-456-0000".to_string(),
            aadhaar: "0000 0000 0000".to_string(),
            address: "1 Test Field".to_string(),
            status,
            dob: "1980-01-01".to_string(),
            notes: None,
        }
    }

    pub fn farmer(id: &str, name: &str, status: FarmerStatus) -> Farmer {
        Farmer::from_draft(FarmerId::from(id), draft(name, status), fixture_date())
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_farmer(mut self, id: &str, name: &str, status: FarmerStatus) -> Self {
            self.store
                .insert_farmer(farmer(id, name, status))
                .unwrap();
            self
        }

        /// Records A(1, Regular), B(2, Premium), C(3, Premium), D(4, Regular).
        pub fn abcd(self) -> Self {
            self.with_farmer("1", "Alice Adams", FarmerStatus::Regular)
                .with_farmer("2", "Bob Brown", FarmerStatus::Premium)
                .with_farmer("3", "Carol Clark", FarmerStatus::Premium)
                .with_farmer("4", "Dan Davis", FarmerStatus::Regular)
        }
    }
}
