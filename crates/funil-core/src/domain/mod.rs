//! Core domain layer for Funil.
//!
//! This module contains pure business logic with ZERO external dependencies
//! beyond serde/chrono wire derives. All I/O (REST calls, postal-code
//! lookups) is handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Pure formatters**: Masking/normalisation in `postal` has no state

// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod postal;
pub mod validation;

// Re-exports for convenience
pub use entities::{
    appointment::{
        Appointment, AppointmentFilters, AppointmentStatus, CreateAppointment, UpdateAppointment,
    },
    common::{PageRequest, Paginated, PaginationMeta},
    company::{Company, CreateCompany, UpdateCompany},
    contact::{Contact, CreateContact, UpdateContact},
    lead::{
        CreateLead, Lead, LeadFilters, LeadMetrics, LeadOrigin, LeadSortBy, LeadStage,
        PaginatedLeads, UpdateLead,
    },
    postal_code::{PostalCodeCity, PostalCodeResult, PostalCodeState},
};

pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
