//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish high-level
//! use cases like "autofill the address from a CEP" or "move a lead".

pub mod appointments;
pub mod autofill;
pub mod companies;
pub mod contacts;
pub mod leads;

pub use appointments::AppointmentService;
pub use autofill::{AddressAutofill, LookupTag};
pub use companies::CompanyService;
pub use contacts::ContactService;
pub use leads::LeadService;
