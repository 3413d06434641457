pub mod appointment;
pub mod common;
pub mod company;
pub mod contact;
pub mod lead;
pub mod postal_code;

pub use appointment::{Appointment, AppointmentFilters, AppointmentStatus};
pub use common::{PageRequest, Paginated, PaginationMeta};
pub use company::{Company, CreateCompany, UpdateCompany};
pub use contact::{Contact, CreateContact, UpdateContact};
pub use lead::{Lead, LeadFilters, LeadMetrics, LeadOrigin, LeadStage, PaginatedLeads};
pub use postal_code::{PostalCodeCity, PostalCodeResult, PostalCodeState};
