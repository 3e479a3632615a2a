// Adapters layer: concrete implementations for external systems (dataset sources, http)

pub mod http;
pub mod source;
