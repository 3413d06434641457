//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `funil-adapters` crate provides implementations.

use crate::domain::{
    Appointment, AppointmentFilters, Company, Contact, CreateAppointment, CreateCompany,
    CreateContact, CreateLead, Lead, LeadFilters, LeadMetrics, LeadStage, PageRequest, Paginated,
    PaginatedLeads, PostalCodeResult, UpdateAppointment, UpdateCompany, UpdateContact, UpdateLead,
};
use crate::error::FunilResult;

/// Port for resolving a complete postal code into an address.
///
/// Implemented by:
/// - `funil_adapters::http::HttpPostalCodeLookup` (production)
/// - `funil_adapters::memory::StaticPostalCodeLookup` (testing)
///
/// ## Contract
///
/// - `digits` is always exactly 8 digits — the caller normalises first
/// - `Ok(None)` means the service knows no address for the code (expected,
///   recoverable)
/// - `Err(_)` means a transport or server failure
/// - Must resolve; never hangs indefinitely (adapters enforce timeouts)
#[cfg_attr(test, mockall::automock)]
pub trait PostalCodeLookup: Send + Sync {
    /// Resolve an 8-digit postal code.
    fn lookup(&self, digits: &str) -> FunilResult<Option<PostalCodeResult>>;
}

/// Port for user-facing notifications (toasts in the original UI).
///
/// Fire-and-forget: implementations must not fail and must not block.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    /// Surface a success message.
    fn notify_success(&self, title: &str, detail: &str);

    /// Surface a failure message.
    fn notify_error(&self, title: &str, detail: &str);
}

/// The address-related fields of the company form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Cep,
    Endereco,
    Numero,
    Complemento,
    Bairro,
    Cidade,
    Estado,
}

impl AddressField {
    /// The five fields populated (and reset) together by a lookup outcome.
    /// `Numero` is governed separately and `Cep` is the driver, not a target.
    pub const DEPENDENT: [AddressField; 5] = [
        Self::Endereco,
        Self::Bairro,
        Self::Cidade,
        Self::Estado,
        Self::Complemento,
    ];
}

/// Port onto the host form that owns the address fields.
///
/// The autofill controller is the only writer for the dependent fields;
/// `numero` is only ever written when a lookup succeeds, and its editability
/// is toggled through [`AddressForm::set_numero_editable`].
pub trait AddressForm {
    /// Current value of a field.
    fn value(&self, field: AddressField) -> String;

    /// Write a field, optionally marking it dirty.
    fn set_value(&mut self, field: AddressField, value: &str, dirty: bool);

    /// Attach a field-level error to the CEP field.
    fn set_cep_error(&mut self, message: &str);

    /// Clear any field-level error on the CEP field.
    fn clear_cep_error(&mut self);

    /// Enable or disable editing of the house-number field.
    fn set_numero_editable(&mut self, editable: bool);
}

/// Port for the `/company` REST resource.
pub trait CompanyDirectory: Send + Sync {
    /// Paginated listing with optional free-text search.
    fn list(&self, request: &PageRequest) -> FunilResult<Paginated<Company>>;

    /// Fetch one company by id.
    fn get(&self, id: i64) -> FunilResult<Company>;

    /// Create a company (with its first contact).
    fn create(&self, payload: &CreateCompany) -> FunilResult<Company>;

    /// Partially update a company.
    fn update(&self, id: i64, payload: &UpdateCompany) -> FunilResult<Company>;

    /// Delete a company.
    fn remove(&self, id: i64) -> FunilResult<()>;
}

/// Port for the `/contact` REST resource.
pub trait ContactDirectory: Send + Sync {
    /// Paginated listing, optionally scoped to one company.
    fn list(
        &self,
        request: &PageRequest,
        company_id: Option<i64>,
    ) -> FunilResult<Paginated<Contact>>;

    fn get(&self, id: i64) -> FunilResult<Contact>;

    fn create(&self, payload: &CreateContact) -> FunilResult<Contact>;

    fn update(&self, id: i64, payload: &UpdateContact) -> FunilResult<Contact>;

    fn remove(&self, id: i64) -> FunilResult<()>;
}

/// Port for the `/lead` REST resource.
pub trait LeadPipeline: Send + Sync {
    /// Filtered, paginated, sorted listing.
    fn list(&self, filters: &LeadFilters) -> FunilResult<PaginatedLeads>;

    fn get(&self, id: i64) -> FunilResult<Lead>;

    /// Aggregate counters per stage and origin.
    fn metrics(&self) -> FunilResult<LeadMetrics>;

    fn create(&self, payload: &CreateLead) -> FunilResult<Lead>;

    fn update(&self, id: i64, payload: &UpdateLead) -> FunilResult<Lead>;

    /// Move a lead to another pipeline stage (`PATCH /lead/{id}/stage`).
    fn move_stage(&self, id: i64, stage: LeadStage) -> FunilResult<Lead>;

    fn remove(&self, id: i64) -> FunilResult<()>;
}

/// Port for the `/appointment` REST resource.
pub trait AppointmentBook: Send + Sync {
    fn list(&self, filters: &AppointmentFilters) -> FunilResult<Paginated<Appointment>>;

    fn get(&self, id: i64) -> FunilResult<Appointment>;

    fn create(&self, payload: &CreateAppointment) -> FunilResult<Appointment>;

    fn update(&self, id: i64, payload: &UpdateAppointment) -> FunilResult<Appointment>;

    fn remove(&self, id: i64) -> FunilResult<()>;
}
