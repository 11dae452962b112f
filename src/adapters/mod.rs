// Adapters layer: concrete implementations for external systems
// (in-memory stores, outbound HTTP client).

pub mod http;
pub mod store;
