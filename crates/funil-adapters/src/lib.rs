//! Infrastructure adapters for Funil.
//!
//! This crate implements the ports defined in `funil-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod form;
pub mod http;
pub mod memory;

// Re-export commonly used adapters
pub use form::AddressFormState;
pub use http::{
    HttpAppointmentBook, HttpClient, HttpCompanyDirectory, HttpContactDirectory, HttpLeadPipeline,
    HttpPostalCodeLookup,
};
pub use memory::{InMemoryCrm, RecordingNotifications, StaticPostalCodeLookup};
