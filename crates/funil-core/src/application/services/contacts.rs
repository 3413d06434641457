//! Contact Service - use cases for the `/contact` resource.

use tracing::{info, instrument};

use crate::{
    application::ports::ContactDirectory,
    domain::{
        Contact, CreateContact, DomainValidator as validator, PageRequest, Paginated,
        UpdateContact,
    },
    error::{FunilError, FunilResult},
};

/// Orchestrates contact use cases.
pub struct ContactService {
    directory: Box<dyn ContactDirectory>,
}

impl ContactService {
    pub fn new(directory: Box<dyn ContactDirectory>) -> Self {
        Self { directory }
    }

    /// Paginated listing, optionally scoped to one company.
    #[instrument(skip_all, fields(page = request.page, company_id))]
    pub fn list(
        &self,
        request: &PageRequest,
        company_id: Option<i64>,
    ) -> FunilResult<Paginated<Contact>> {
        self.directory.list(request, company_id)
    }

    pub fn get(&self, id: i64) -> FunilResult<Contact> {
        self.directory.get(id)
    }

    #[instrument(skip_all, fields(name = %payload.name))]
    pub fn create(&self, payload: &CreateContact) -> FunilResult<Contact> {
        validator::validate_contact(payload).map_err(FunilError::Domain)?;

        let contact = self.directory.create(payload)?;
        info!(id = ?contact.id, "contact created");
        Ok(contact)
    }

    #[instrument(skip_all, fields(id))]
    pub fn update(&self, id: i64, payload: &UpdateContact) -> FunilResult<Contact> {
        if let Some(email) = &payload.email {
            validator::validate_email(email).map_err(FunilError::Domain)?;
        }
        if let Some(phone) = &payload.phone {
            validator::validate_phone(phone).map_err(FunilError::Domain)?;
        }

        let contact = self.directory.update(id, payload)?;
        info!(id, "contact updated");
        Ok(contact)
    }

    #[instrument(skip_all, fields(id))]
    pub fn remove(&self, id: i64) -> FunilResult<()> {
        self.directory.remove(id)?;
        info!(id, "contact removed");
        Ok(())
    }
}
