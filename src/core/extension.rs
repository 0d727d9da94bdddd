use crate::core::display::TicketPriceDisplay;
use crate::core::form::TaxSettingsForm;
use crate::core::resolver::{parse_stored_override, resolve};
use crate::domain::model::{Event, SaveOutcome, TaxRate, TicketColumn, EVENT_TAX_META_KEY};
use crate::domain::ports::{
    AuthContext, EventMetadataStore, SettingsProvider, TaxRateProvider, TicketPricing,
};
use crate::utils::error::Result;

/// The host-facing surface of the extension. One of these is composed into the
/// host with its settings and metadata ports; each public method corresponds to
/// one integration point (edit-page section, save hook, ticket table columns,
/// per-ticket cells), and the `TaxRateProvider` impl is what the host's pricing
/// engine takes as a dependency.
pub struct TaxPerEventExtension<C: SettingsProvider, S: EventMetadataStore> {
    settings: C,
    store: S,
}

impl<C: SettingsProvider, S: EventMetadataStore> TaxPerEventExtension<C, S> {
    pub fn new(settings: C, store: S) -> Self {
        Self { settings, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Admin edit-page section for the event.
    pub fn edit_page_section(&self, event: &Event) -> Result<String> {
        tracing::debug!(event = %event.id, "rendering tax settings section");
        TaxSettingsForm::render(event, &self.settings, &self.store)
    }

    /// Save hook: called by the host before the event itself is persisted.
    pub fn on_event_save(
        &mut self,
        event: &Event,
        submitted: Option<&str>,
        auth: &impl AuthContext,
    ) -> Result<SaveOutcome> {
        TaxSettingsForm::save(event, submitted, auth, &self.settings, &mut self.store)
    }

    /// Column layout for the ticket booking table under the current settings.
    pub fn ticket_columns(&self) -> Vec<TicketColumn> {
        TicketPriceDisplay::ticket_columns(&self.settings.tax_settings())
    }

    /// Formatted net-price cell for one ticket.
    pub fn ticket_net_field(&self, ticket: &impl TicketPricing) -> String {
        TicketPriceDisplay::render_net_cell(ticket)
    }

    /// Formatted tax-amount cell for one ticket.
    pub fn ticket_tax_field(&self, ticket: &impl TicketPricing) -> String {
        TicketPriceDisplay::render_tax_cell(ticket)
    }
}

impl<C: SettingsProvider, S: EventMetadataStore> TaxRateProvider for TaxPerEventExtension<C, S> {
    fn effective_rate(&self, event: &Event) -> Result<TaxRate> {
        let stored = self.store.get_meta(event.id, EVENT_TAX_META_KEY)?;
        let override_rate = parse_stored_override(stored.as_deref());
        Ok(resolve(
            self.settings.tax_settings().tax_rate,
            override_rate,
        ))
    }
}
