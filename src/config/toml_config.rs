use crate::domain::model::{GlobalTaxSettings, TaxRate};
use crate::domain::ports::SettingsProvider;
use crate::utils::error::{ExtensionError, Result};
use crate::utils::validation::{validate_rate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Snapshot of the host's booking settings, loadable from a TOML file. Hosts
/// that keep their options outside the process hand the extension one of these
/// instead of a live settings port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub bookings: BookingsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingsConfig {
    pub tax_rate: TaxRate,
    #[serde(default)]
    pub tax_inclusive: bool,
    #[serde(default)]
    pub multiple_bookings: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ExtensionError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        let config: TomlConfig =
            toml::from_str(&processed).map_err(|e| ExtensionError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Substitute `${VAR}` references from the environment. Unknown variables
    /// are left in place so the parse error points at them.
    fn substitute_env_vars(content: &str) -> String {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();
        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_rate_range("bookings.tax_rate", self.bookings.tax_rate.percent())
    }
}

impl SettingsProvider for TomlConfig {
    fn tax_settings(&self) -> GlobalTaxSettings {
        GlobalTaxSettings {
            tax_rate: self.bookings.tax_rate,
            tax_inclusive: self.bookings.tax_inclusive,
            multiple_bookings: self.bookings.multiple_bookings,
        }
    }
}
