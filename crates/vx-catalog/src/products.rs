//! Product catalog trait and in-memory implementation.

use serde::{Deserialize, Serialize};
use vx_protocol::normalize;

use crate::error::CatalogResult;

/// One catalog entry. Ids are assigned by the owning store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub name: String,
}

/// Read-only lookup into the store's product catalog.
pub trait ProductCatalog: Send + Sync {
    /// All products whose name contains the phrase (normalized,
    /// case-insensitive). Empty phrase yields nothing.
    fn find_by_name_substring(&self, phrase: &str) -> CatalogResult<Vec<ProductRecord>>;
}

/// Catalog backed by a plain vector with pre-normalized names.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    records: Vec<(ProductRecord, String)>,
}

impl InMemoryProductCatalog {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| {
                let folded = normalize(&r.name);
                (r, folded)
            })
            .collect();
        Self { records }
    }

    pub fn add(&mut self, record: ProductRecord) {
        let folded = normalize(&record.name);
        self.records.push((record, folded));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProductCatalog for InMemoryProductCatalog {
    fn find_by_name_substring(&self, phrase: &str) -> CatalogResult<Vec<ProductRecord>> {
        let phrase = normalize(phrase);
        if phrase.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .records
            .iter()
            .filter(|(_, folded)| folded.contains(&phrase))
            .map(|(record, _)| record.clone())
            .collect())
    }
}
