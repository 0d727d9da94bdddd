use crate::core::resolver::parse_stored_override;
use crate::domain::model::{Event, SaveOutcome, SkipReason, EVENT_TAX_META_KEY};
use crate::domain::ports::{AuthContext, EventMetadataStore, SettingsProvider};
use crate::utils::error::Result;
use crate::utils::validation::parse_rate_input;
use std::fmt::Write as _;

/// Nonce action the edit form's anti-forgery token is scoped to.
pub const EDIT_EVENT_ACTION: &str = "edit_event";

/// Name of the form field carrying the submitted override.
pub const RATE_FIELD: &str = "event_tax_rate";

/// The admin-side "Tax Rules" section of an event's edit page.
pub struct TaxSettingsForm;

impl TaxSettingsForm {
    /// Markup for the section. Pure: reads the stored override and the global
    /// settings, mutates nothing.
    pub fn render(
        event: &Event,
        settings: &impl SettingsProvider,
        store: &impl EventMetadataStore,
    ) -> Result<String> {
        let global = settings.tax_settings();
        let mut out = String::new();

        if global.multiple_bookings {
            out.push_str(
                "<p>Tax cannot be set per event when multiple bookings mode is enabled.</p>\n",
            );
            return Ok(out);
        }

        let stored = store.get_meta(event.id, EVENT_TAX_META_KEY)?;
        let current = stored.as_deref().unwrap_or("");

        out.push_str(
            "<p>To override the global tax settings for this event, adjust the settings below.</p>\n",
        );
        out.push_str("<p><strong>Global Settings:</strong><br />\n");
        if global.tax_inclusive {
            out.push_str("Ticket price is inclusive of tax.<br />\n");
        } else {
            out.push_str("Tax is added to the ticket price.<br />\n");
        }
        let _ = writeln!(out, "Tax rate: {}%</p>", global.tax_rate);

        let _ = writeln!(
            out,
            "<p><label for=\"{field}\"><strong>Event Tax Rate</strong></label><br />\n\
             <input type=\"number\" name=\"{field}\" min=\"0\" max=\"100\" value=\"{current}\">%<br />",
            field = RATE_FIELD,
        );
        if parse_stored_override(stored.as_deref()).is_some() {
            out.push_str("<em>Leave blank to revert to the global tax setting.</em>\n");
        } else {
            out.push_str("<em>Enter 0 for no tax.</em>\n");
        }
        out.push_str("</p>\n");

        Ok(out)
    }

    /// Persist a submitted override, or clear it when the submission is absent
    /// or blank. The host fires its save hook for many actions besides this
    /// form, so every guard below skips without touching the store.
    pub fn save(
        event: &Event,
        submitted: Option<&str>,
        auth: &impl AuthContext,
        settings: &impl SettingsProvider,
        store: &mut impl EventMetadataStore,
    ) -> Result<SaveOutcome> {
        if !auth.verify_nonce(EDIT_EVENT_ACTION) {
            tracing::debug!(event = %event.id, "nonce check failed, override left untouched");
            return Ok(SaveOutcome::Skipped(SkipReason::NonceInvalid));
        }
        if !auth.can_edit_event(event.id) {
            tracing::debug!(event = %event.id, "actor may not edit this event");
            return Ok(SaveOutcome::Skipped(SkipReason::NotPermitted));
        }
        // Writing to a revision snapshot would duplicate the metadata.
        if event.is_revision() {
            return Ok(SaveOutcome::Skipped(SkipReason::Revision));
        }
        if settings.tax_settings().multiple_bookings {
            tracing::debug!(event = %event.id, "multiple bookings mode is on, per-event tax is disabled");
            return Ok(SaveOutcome::Skipped(SkipReason::MultipleBookings));
        }

        match submitted.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => {
                let rate = parse_rate_input(RATE_FIELD, raw)?;
                store.set_meta(event.id, EVENT_TAX_META_KEY, raw)?;
                tracing::info!(event = %event.id, rate = %rate, "event tax override saved");
                Ok(SaveOutcome::Saved(rate))
            }
            None => {
                store.delete_meta(event.id, EVENT_TAX_META_KEY)?;
                tracing::info!(event = %event.id, "event tax override cleared");
                Ok(SaveOutcome::Cleared)
            }
        }
    }
}
