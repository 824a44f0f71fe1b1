use async_trait::async_trait;

use crate::core::Result;
use crate::modules::taxes::models::TaxRate;

/// Read-only lookup of applicable tax rates for a jurisdiction and class.
///
/// Implementations return rates in application order (ascending priority);
/// the rate applier honors that order when chaining compound rates.
#[async_trait]
pub trait TaxRateRepository: Send + Sync {
    /// Rates applicable within a country + zone for a tax class
    async fn list_by_zone(
        &self,
        country_code: &str,
        zone_id: i64,
        tax_class_code: &str,
    ) -> Result<Vec<TaxRate>>;

    /// Rates applicable within a country + state/province string for a
    /// tax class
    async fn list_by_state_province(
        &self,
        country_code: &str,
        state_province: &str,
        tax_class_code: &str,
    ) -> Result<Vec<TaxRate>>;
}

/// In-memory rate catalog
pub struct InMemoryTaxRateRepository {
    rates: Vec<TaxRate>,
}

impl InMemoryTaxRateRepository {
    /// Builds a catalog from a set of rates, validating each and sorting
    /// by priority
    pub fn new(mut rates: Vec<TaxRate>) -> Result<Self> {
        for rate in &rates {
            rate.validate()?;
        }

        rates.sort_by_key(|r| r.priority);

        Ok(Self { rates })
    }
}

#[async_trait]
impl TaxRateRepository for InMemoryTaxRateRepository {
    async fn list_by_zone(
        &self,
        country_code: &str,
        zone_id: i64,
        tax_class_code: &str,
    ) -> Result<Vec<TaxRate>> {
        Ok(self
            .rates
            .iter()
            .filter(|r| {
                r.country_code == country_code
                    && r.zone_id == Some(zone_id)
                    && r.tax_class_code == tax_class_code
            })
            .cloned()
            .collect())
    }

    async fn list_by_state_province(
        &self,
        country_code: &str,
        state_province: &str,
        tax_class_code: &str,
    ) -> Result<Vec<TaxRate>> {
        Ok(self
            .rates
            .iter()
            .filter(|r| {
                r.country_code == country_code
                    && r.state_province.as_deref() == Some(state_province)
                    && r.tax_class_code == tax_class_code
            })
            .cloned()
            .collect())
    }
}
