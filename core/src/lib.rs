// Core client functionality for the mood shop backend:
// - HTTP client and the `ShopApi` seam used by the UI layer
// - Configuration loading
// - Persisted anonymous user identity
// - Shared error types

// Export client module - typed calls against the backend HTTP contract
pub mod client;
pub use client::*;

// Export config module - Configuration loading
pub mod config;
pub use config::*;

// Export identity module - locally persisted user id
pub mod identity;
pub use identity::*;

// Export errors module - Shared error types
pub mod errors;
pub use errors::*;

// Re-export wire types so callers need a single dependency
pub use moodshop_api as api;
