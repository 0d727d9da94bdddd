use crate::domain::model::{Event, EventId, GlobalTaxSettings, TaxRate};
use crate::utils::error::Result;
use rust_decimal::Decimal;

/// Read access to the host's global booking tax configuration.
pub trait SettingsProvider {
    fn tax_settings(&self) -> GlobalTaxSettings;
}

/// The host's keyed metadata store on event entities. The override lives here
/// under [`EVENT_TAX_META_KEY`](crate::domain::model::EVENT_TAX_META_KEY);
/// transactional guarantees are the host's concern.
pub trait EventMetadataStore {
    fn get_meta(&self, event: EventId, key: &str) -> Result<Option<String>>;
    fn set_meta(&mut self, event: EventId, key: &str, value: &str) -> Result<()>;
    fn delete_meta(&mut self, event: EventId, key: &str) -> Result<()>;
}

/// Auth facts for one admin request: anti-forgery token verification and the
/// actor's edit capability.
pub trait AuthContext {
    fn verify_nonce(&self, action: &str) -> bool;
    fn can_edit_event(&self, event: EventId) -> bool;
}

/// The host's per-ticket price primitives. Net/tax display values are derived
/// from these; the extension owns no price state of its own.
pub trait TicketPricing {
    fn price_with_tax(&self) -> Decimal;
    fn price_without_tax(&self) -> Decimal;
    fn format_price(&self, amount: Decimal) -> String;
}

/// Capability the host's pricing engine accepts as a dependency. This replaces
/// the string-keyed filter the original integration point used.
pub trait TaxRateProvider {
    fn effective_rate(&self, event: &Event) -> Result<TaxRate>;
}
