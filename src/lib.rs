pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{InMemoryMetadataStore, RequestAuth, StaticSettings};
pub use config::TomlConfig;
pub use core::display::TicketPriceDisplay;
pub use core::extension::TaxPerEventExtension;
pub use core::form::{TaxSettingsForm, EDIT_EVENT_ACTION, RATE_FIELD};
pub use core::resolver::{parse_stored_override, resolve};
pub use domain::model::{
    Event, EventId, EventKind, GlobalTaxSettings, SaveOutcome, SkipReason, TaxRate, TicketColumn,
    EVENT_TAX_META_KEY,
};
pub use domain::ports::{
    AuthContext, EventMetadataStore, SettingsProvider, TaxRateProvider, TicketPricing,
};
pub use utils::error::{ExtensionError, Result};
