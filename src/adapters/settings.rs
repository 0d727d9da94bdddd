use crate::domain::model::GlobalTaxSettings;
use crate::domain::ports::SettingsProvider;

/// Fixed snapshot of the host's booking settings. Request-scoped code reads
/// settings once per request anyway, so a copy taken at request start is all
/// most embeddings need.
#[derive(Debug, Clone, Copy)]
pub struct StaticSettings(GlobalTaxSettings);

impl StaticSettings {
    pub fn new(settings: GlobalTaxSettings) -> Self {
        Self(settings)
    }
}

impl SettingsProvider for StaticSettings {
    fn tax_settings(&self) -> GlobalTaxSettings {
        self.0
    }
}
