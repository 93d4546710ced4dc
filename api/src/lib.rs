// This crate centralizes the JSON shapes exchanged with the shop backend.

pub mod entities; // Products, sentiment and scored results
pub mod requests; // Bodies sent by the client
pub mod responses; // `{success, ...}` envelopes returned by every endpoint

pub use entities::*;
pub use requests::*;
pub use responses::*;

/// Maximum number of recommendations requested per call.
pub const RECOMMENDATION_LIMIT: usize = 8;

/// Maximum number of search results requested per call.
pub const SEARCH_LIMIT: usize = 10;
