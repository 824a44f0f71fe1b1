use std::collections::HashMap;

use async_trait::async_trait;

use crate::core::Result;
use crate::modules::taxes::models::TaxClass;

/// Read-only lookup of tax classes by code
#[async_trait]
pub trait TaxClassRepository: Send + Sync {
    async fn get_by_code(&self, code: &str) -> Result<Option<TaxClass>>;
}

/// In-memory tax class catalog
pub struct InMemoryTaxClassRepository {
    classes: HashMap<String, TaxClass>,
}

impl InMemoryTaxClassRepository {
    pub fn new(classes: Vec<TaxClass>) -> Self {
        Self {
            classes: classes
                .into_iter()
                .map(|c| (c.code.clone(), c))
                .collect(),
        }
    }
}

#[async_trait]
impl TaxClassRepository for InMemoryTaxClassRepository {
    async fn get_by_code(&self, code: &str) -> Result<Option<TaxClass>> {
        Ok(self.classes.get(code).cloned())
    }
}
