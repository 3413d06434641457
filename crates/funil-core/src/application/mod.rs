//! Application layer for Funil.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (AddressAutofill, CompanyService, ...)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AddressAutofill,
    AppointmentService,
    CompanyService,
    ContactService,
    LeadService,
    LookupTag, // correlation token for in-flight lookups
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    AddressField, AddressForm, AppointmentBook, CompanyDirectory, ContactDirectory, LeadPipeline,
    NotificationSink, PostalCodeLookup,
};

pub use error::ApplicationError;
