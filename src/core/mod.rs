pub mod display;
pub mod extension;
pub mod form;
pub mod resolver;

pub use crate::domain::model::{
    Event, EventId, EventKind, GlobalTaxSettings, SaveOutcome, SkipReason, TaxRate, TicketColumn,
};
pub use crate::domain::ports::{
    AuthContext, EventMetadataStore, SettingsProvider, TaxRateProvider, TicketPricing,
};
pub use crate::utils::error::Result;
