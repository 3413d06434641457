//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `funil-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CompanyDirectory` / `ContactDirectory` / `LeadPipeline` / `AppointmentBook`:
//!     REST resources
//!   - `PostalCodeLookup`: address resolution by CEP
//!   - `NotificationSink`: user-facing toasts
//!   - `AddressForm`: the host form the autofill controller writes into
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    AddressField, AddressForm, AppointmentBook, CompanyDirectory, ContactDirectory, LeadPipeline,
    NotificationSink, PostalCodeLookup,
};
