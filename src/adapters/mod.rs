// Adapters layer: concrete implementations of the domain ports for hosts that
// have no live backing store, and for tests.

pub mod auth;
pub mod memory;
pub mod settings;

pub use auth::RequestAuth;
pub use memory::InMemoryMetadataStore;
pub use settings::StaticSettings;
