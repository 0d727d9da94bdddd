use crate::domain::model::EventId;
use crate::domain::ports::EventMetadataStore;
use crate::utils::error::Result;
use std::collections::HashMap;

/// HashMap-backed metadata store. Stands in for the host's persistence layer
/// in tests and embedding demos; one value per (event, key).
#[derive(Debug, Default)]
pub struct InMemoryMetadataStore {
    meta: HashMap<(EventId, String), String>,
}

impl InMemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
    }

    /// JSON snapshot of everything stored, for assertions and debugging.
    pub fn export(&self) -> serde_json::Value {
        let mut by_event: HashMap<String, serde_json::Map<String, serde_json::Value>> =
            HashMap::new();
        for ((event, key), value) in &self.meta {
            by_event
                .entry(event.to_string())
                .or_default()
                .insert(key.clone(), serde_json::Value::String(value.clone()));
        }
        serde_json::to_value(by_event).unwrap_or(serde_json::Value::Null)
    }
}

impl EventMetadataStore for InMemoryMetadataStore {
    fn get_meta(&self, event: EventId, key: &str) -> Result<Option<String>> {
        Ok(self.meta.get(&(event, key.to_string())).cloned())
    }

    fn set_meta(&mut self, event: EventId, key: &str, value: &str) -> Result<()> {
        self.meta.insert((event, key.to_string()), value.to_string());
        Ok(())
    }

    fn delete_meta(&mut self, event: EventId, key: &str) -> Result<()> {
        self.meta.remove(&(event, key.to_string()));
        Ok(())
    }
}
