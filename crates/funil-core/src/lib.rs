//! Funil Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Funil
//! CRM client, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            funil-cli (CLI)              │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (AddressAutofill, CompanyService, …)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Directories, PostalCodeLookup, Sink)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     funil-adapters (Infrastructure)     │
//! │   (HTTP REST client, in-memory CRM)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Company, Lead, Appointment, postal)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use funil_core::application::services::AddressAutofill;
//!
//! // Drive the postal-code autofill state machine over a form:
//! let mut autofill = AddressAutofill::new();
//! if let Some(tag) = autofill.on_query_changed("01310-100", &mut form) {
//!     let outcome = lookup.lookup(tag.digits());
//!     autofill.apply_outcome(&tag, outcome, &mut form, &notifications);
//! }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ports::{
            AddressForm, AppointmentBook, CompanyDirectory, ContactDirectory, LeadPipeline,
            NotificationSink, PostalCodeLookup,
        },
        services::{
            AddressAutofill, AppointmentService, CompanyService, ContactService, LeadService,
            LookupTag,
        },
    };
    pub use crate::domain::{
        Appointment, AppointmentStatus, Company, Contact, Lead, LeadOrigin, LeadStage, Paginated,
        PostalCodeResult,
    };
    pub use crate::error::{FunilError, FunilResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
