//! Client directory trait and in-memory implementation.

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;

/// One directory entry. Ids are assigned by the owning store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl ClientRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Read-only lookup into the store's client directory.
///
/// All matching is case-insensitive. Lookups that find nothing return
/// `Ok(None)` / an empty vec; `Err` is reserved for backend failures.
pub trait ClientDirectory: Send + Sync {
    fn find_by_username(&self, username: &str) -> CatalogResult<Option<ClientRecord>>;

    fn find_by_full_name(&self, first: &str, last: &str) -> CatalogResult<Vec<ClientRecord>>;

    fn find_by_first_name(&self, first: &str) -> CatalogResult<Vec<ClientRecord>>;
}

/// Directory backed by a plain vector. Used in tests and small deployments.
#[derive(Debug, Default)]
pub struct InMemoryClientDirectory {
    records: Vec<ClientRecord>,
}

impl InMemoryClientDirectory {
    pub fn new(records: Vec<ClientRecord>) -> Self {
        Self { records }
    }

    pub fn add(&mut self, record: ClientRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ClientDirectory for InMemoryClientDirectory {
    fn find_by_username(&self, username: &str) -> CatalogResult<Option<ClientRecord>> {
        Ok(self
            .records
            .iter()
            .find(|r| r.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    fn find_by_full_name(&self, first: &str, last: &str) -> CatalogResult<Vec<ClientRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| {
                r.first_name.eq_ignore_ascii_case(first) && r.last_name.eq_ignore_ascii_case(last)
            })
            .cloned()
            .collect())
    }

    fn find_by_first_name(&self, first: &str) -> CatalogResult<Vec<ClientRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.first_name.eq_ignore_ascii_case(first))
            .cloned()
            .collect())
    }
}
