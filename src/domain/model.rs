use crate::utils::error::{ExtensionError, Result};
use crate::utils::validation::validate_rate_range;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata key the per-event override is stored under on the host's Event
/// entity. Fixed so hosts migrating existing data keep their values.
pub const EVENT_TAX_META_KEY: &str = "_event_tax_rate";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The host persists transient revision snapshots alongside the canonical
/// record; metadata writes only ever target the canonical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Canonical,
    Revision,
}

/// The slice of the host's event entity this extension needs. Always passed
/// explicitly; nothing here reads ambient request state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub kind: EventKind,
}

impl Event {
    pub fn new(id: u64) -> Self {
        Self {
            id: EventId(id),
            kind: EventKind::Canonical,
        }
    }

    pub fn revision_of(id: u64) -> Self {
        Self {
            id: EventId(id),
            kind: EventKind::Revision,
        }
    }

    pub fn is_revision(&self) -> bool {
        self.kind == EventKind::Revision
    }
}

/// A tax rate as a percentage in [0, 100]. Zero is a real rate meaning
/// "no tax", distinct from having no rate at all; code that needs the latter
/// uses `Option<TaxRate>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TaxRate(Decimal);

impl TaxRate {
    pub const ZERO: TaxRate = TaxRate(Decimal::ZERO);

    pub fn new(percent: Decimal) -> Result<Self> {
        validate_rate_range("tax_rate", percent)?;
        Ok(Self(percent))
    }

    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// Tax amount this rate adds on top of a net amount.
    pub fn apply_to(&self, net: Decimal) -> Decimal {
        net * self.0 / Decimal::ONE_HUNDRED
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = ExtensionError;

    fn try_from(percent: Decimal) -> Result<Self> {
        TaxRate::new(percent)
    }
}

impl From<TaxRate> for Decimal {
    fn from(rate: TaxRate) -> Decimal {
        rate.0
    }
}

/// Host-owned booking tax configuration, read through the `SettingsProvider`
/// port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalTaxSettings {
    pub tax_rate: TaxRate,
    /// Listed ticket prices already contain tax. When false, tax is added on
    /// top of the net price.
    #[serde(default)]
    pub tax_inclusive: bool,
    /// Host mode where one booking spans several ticket types. Per-event
    /// overrides are disabled while it is on.
    #[serde(default)]
    pub multiple_bookings: bool,
}

/// Columns of the ticket booking table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketColumn {
    Type,
    Net,
    Tax,
    Price,
    Spaces,
}

impl TicketColumn {
    /// Stable identifier hosts use to key column templates.
    pub fn key(&self) -> &'static str {
        match self {
            TicketColumn::Type => "type",
            TicketColumn::Net => "net",
            TicketColumn::Tax => "tax",
            TicketColumn::Price => "price",
            TicketColumn::Spaces => "spaces",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketColumn::Type => "Ticket Type",
            TicketColumn::Net => "Net Price",
            TicketColumn::Tax => "Tax",
            TicketColumn::Price => "Price",
            TicketColumn::Spaces => "Spaces",
        }
    }
}

/// What a save request did. Skips are normal outcomes, not errors: the host
/// fires its save hook for many actions that are not a tax-form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(TaxRate),
    Cleared,
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NonceInvalid,
    NotPermitted,
    Revision,
    MultipleBookings,
}
