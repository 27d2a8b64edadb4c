// Adapters layer: concrete implementations for external systems.

pub mod numbers_api;

pub use numbers_api::NumbersApiClient;
