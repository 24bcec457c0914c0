//! Demo records loaded on every fresh start (unless `seed-mock-data` is off).

use crate::error::Result;
use crate::model::{Farmer, FarmerId, FarmerStatus};
use crate::store::memory::InMemoryStore;
use chrono::NaiveDate;

struct Seed {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    aadhaar: &'static str,
    address: &'static str,
    status: FarmerStatus,
    last_active: (i32, u32, u32),
    dob: &'static str,
    notes: Option<&'static str>,
}

const SEEDS: [Seed; 4] = [
    Seed {
        id: "1",
        name: "John Doe",
        email: "john@example.com",
        phone: "123-456-7890",
        aadhaar: "1111 1111 1111",
        address: "123 Farm Lane",
        status: FarmerStatus::Premium,
        last_active: (2024, 9, 10),
        dob: "1985-05-15",
        notes: Some("Interested in organic farming techniques."),
    },
    Seed {
        id: "2",
        name: "Jane Smith",
        email: "jane@example.com",
        phone: "123-456-7891",
        aadhaar: "2222 2222 2222",
        address: "456 Farmer Rd",
        status: FarmerStatus::Regular,
        last_active: (2024, 9, 8),
        dob: "1992-11-20",
        notes: Some(""),
    },
    Seed {
        id: "3",
        name: "Mike Johnson",
        email: "mike@example.com",
        phone: "123-456-7892",
        aadhaar: "3333 3333 3333",
        address: "789 Cultivator Ave",
        status: FarmerStatus::Premium,
        last_active: (2024, 9, 9),
        dob: "1978-02-10",
        notes: Some("Owns a large plot of land."),
    },
    Seed {
        id: "4",
        name: "Sarah Wilson",
        email: "sarah@example.com",
        phone: "123-456-7893",
        aadhaar: "4444 4444 4444",
        address: "101 Harvest St",
        status: FarmerStatus::Regular,
        last_active: (2024, 9, 5),
        dob: "1995-08-30",
        notes: None,
    },
];

pub fn mock_farmers() -> Vec<Farmer> {
    SEEDS
        .iter()
        .filter_map(|seed| {
            let (y, m, d) = seed.last_active;
            Some(Farmer {
                id: FarmerId::new(seed.id),
                name: seed.name.to_string(),
                email: seed.email.to_string(),
                phone: seed.phone.to_string(),
                aadhaar: seed.aadhaar.to_string(),
                address: seed.address.to_string(),
                status: seed.status,
                last_active: NaiveDate::from_ymd_opt(y, m, d)?,
                dob: seed.dob.to_string(),
                notes: seed.notes.map(str::to_string),
            })
        })
        .collect()
}

/// An empty store, or one holding the demo records.
pub fn initial_store(seed_mock_data: bool) -> Result<InMemoryStore> {
    if seed_mock_data {
        InMemoryStore::with_farmers(mock_farmers())
    } else {
        Ok(InMemoryStore::new())
    }
}
