use std::sync::Arc;

use tracing::{debug, info};

use crate::core::{AppError, Result};
use crate::modules::customers::models::Customer;
use crate::modules::orders::models::OrderSummary;
use crate::modules::stores::models::Store;
use crate::modules::taxes::models::{TaxClass, TaxComputation, TaxConfiguration};
use crate::modules::taxes::repositories::{
    TaxClassRepository, TaxConfigurationStore, TaxRateRepository,
};
use crate::modules::taxes::services::basis_resolver::resolve_tax_basis;
use crate::modules::taxes::services::class_aggregator::aggregate_by_tax_class;
use crate::modules::taxes::services::item_consolidator::consolidate_tax_items;
use crate::modules::taxes::services::rate_applier::apply_tax_rates;

/// Service computing order tax.
///
/// A single linear pipeline over immutable snapshots: resolve jurisdiction,
/// aggregate taxable amounts by tax class, apply the applicable rates per
/// bucket, consolidate same-code items. All lookups go through injected
/// read-only repositories; the computation holds no state of its own.
pub struct TaxService {
    configuration_store: Arc<dyn TaxConfigurationStore>,
    rate_repository: Arc<dyn TaxRateRepository>,
    class_repository: Arc<dyn TaxClassRepository>,
}

impl TaxService {
    pub fn new(
        configuration_store: Arc<dyn TaxConfigurationStore>,
        rate_repository: Arc<dyn TaxRateRepository>,
        class_repository: Arc<dyn TaxClassRepository>,
    ) -> Self {
        Self {
            configuration_store,
            rate_repository,
            class_repository,
        }
    }

    /// Compute the tax items for an order.
    ///
    /// Returns `TaxComputation::NoTax` for every valid no-tax outcome
    /// (empty order, customer without addresses, unmatched jurisdiction,
    /// no applicable rates). Errors are reserved for failures: a malformed
    /// stored configuration, a failing lookup, or a missing default tax
    /// class.
    pub async fn calculate_order_tax(
        &self,
        order: &OrderSummary,
        customer: &Customer,
        store: &Store,
        language: &str,
    ) -> Result<TaxComputation> {
        if order.line_items.is_empty() {
            debug!("Order has no line items, no tax applies");
            return Ok(TaxComputation::NoTax);
        }

        if customer.has_no_address() {
            debug!("Customer has no address information, no tax applies");
            return Ok(TaxComputation::NoTax);
        }

        let configuration = self.load_configuration(&store.code).await?;

        let Some(jurisdiction) = resolve_tax_basis(&configuration, customer, store) else {
            return Ok(TaxComputation::NoTax);
        };

        let default_class = self
            .class_repository
            .get_by_code(TaxClass::DEFAULT_CODE)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Default tax class '{}' is not configured",
                    TaxClass::DEFAULT_CODE
                ))
            })?;

        let buckets = aggregate_by_tax_class(order, &default_class.code);

        let mut computed_items = Vec::new();
        for (tax_class_code, subtotal) in &buckets {
            let rates = if jurisdiction.uses_state_province() {
                self.rate_repository
                    .list_by_state_province(
                        &jurisdiction.country_code,
                        jurisdiction.state_province.as_deref().unwrap_or_default(),
                        tax_class_code,
                    )
                    .await?
            } else if let Some(zone) = jurisdiction.zone.as_ref() {
                self.rate_repository
                    .list_by_zone(&jurisdiction.country_code, zone.id, tax_class_code)
                    .await?
            } else {
                Vec::new()
            };

            if rates.is_empty() {
                debug!(
                    "No rates for tax class '{}' in {}, bucket skipped",
                    tax_class_code, jurisdiction.country_code
                );
                continue;
            }

            computed_items.extend(apply_tax_rates(*subtotal, &rates, language));
        }

        let consolidated = consolidate_tax_items(computed_items);
        if consolidated.is_empty() {
            debug!("No tax items produced for store {}", store.code);
            return Ok(TaxComputation::NoTax);
        }

        info!(
            "Computed {} tax item(s) for store {}",
            consolidated.len(),
            store.code
        );

        Ok(TaxComputation::Computed(consolidated))
    }

    /// Loads the store's settings document, synthesizing the default
    /// configuration when none is stored. A document that exists but does
    /// not parse is an error, never a silent default.
    async fn load_configuration(&self, store_code: &str) -> Result<TaxConfiguration> {
        match self.configuration_store.get(store_code).await? {
            Some(document) => TaxConfiguration::from_json(&document),
            None => {
                debug!(
                    "No tax configuration stored for {}, using ship-to default",
                    store_code
                );
                Ok(TaxConfiguration::default())
            }
        }
    }
}
