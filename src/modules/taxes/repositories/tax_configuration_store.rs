use std::collections::HashMap;

use async_trait::async_trait;

use crate::core::Result;
use crate::modules::taxes::models::TaxConfiguration;

/// Read-only access to the per-store tax settings document.
///
/// The store hands back the raw persisted JSON; parsing it (and treating a
/// malformed document as a configuration error) is the tax service's job.
#[async_trait]
pub trait TaxConfigurationStore: Send + Sync {
    async fn get(&self, store_code: &str) -> Result<Option<String>>;
}

/// In-memory settings store keyed by store code
#[derive(Default)]
pub struct InMemoryTaxConfigurationStore {
    documents: HashMap<String, String>,
}

impl InMemoryTaxConfigurationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a parsed configuration for a store
    pub fn put(&mut self, store_code: impl Into<String>, config: &TaxConfiguration) -> Result<()> {
        self.documents.insert(store_code.into(), config.to_json()?);
        Ok(())
    }

    /// Stores a raw settings document verbatim
    pub fn put_raw(&mut self, store_code: impl Into<String>, document: impl Into<String>) {
        self.documents.insert(store_code.into(), document.into());
    }
}

#[async_trait]
impl TaxConfigurationStore for InMemoryTaxConfigurationStore {
    async fn get(&self, store_code: &str) -> Result<Option<String>> {
        Ok(self.documents.get(store_code).cloned())
    }
}
