//! Company Service - use cases for the `/company` resource.
//!
//! Validates payloads against the domain rules, then delegates persistence
//! to the injected [`CompanyDirectory`] port.

use tracing::{info, instrument};

use crate::{
    application::ports::CompanyDirectory,
    domain::{
        Company, CreateCompany, DomainValidator as validator, PageRequest, Paginated,
        UpdateCompany,
    },
    error::{FunilError, FunilResult},
};

/// Orchestrates company use cases.
pub struct CompanyService {
    directory: Box<dyn CompanyDirectory>,
}

impl CompanyService {
    pub fn new(directory: Box<dyn CompanyDirectory>) -> Self {
        Self { directory }
    }

    /// Paginated listing with optional free-text search.
    #[instrument(skip_all, fields(page = request.page, search = ?request.search))]
    pub fn list(&self, request: &PageRequest) -> FunilResult<Paginated<Company>> {
        self.directory.list(request)
    }

    pub fn get(&self, id: i64) -> FunilResult<Company> {
        self.directory.get(id)
    }

    /// Create a company together with its first contact.
    #[instrument(skip_all, fields(razao_social = %payload.razao_social))]
    pub fn create(&self, payload: &CreateCompany) -> FunilResult<Company> {
        validator::validate_company(payload).map_err(FunilError::Domain)?;

        let company = self.directory.create(payload)?;
        info!(id = company.id, "company created");
        Ok(company)
    }

    /// Partially update a company.
    #[instrument(skip_all, fields(id))]
    pub fn update(&self, id: i64, payload: &UpdateCompany) -> FunilResult<Company> {
        if let Some(cnpj) = &payload.cnpj {
            validator::validate_cnpj(cnpj).map_err(FunilError::Domain)?;
        }
        if let Some(cep) = &payload.cep {
            validator::validate_cep(cep).map_err(FunilError::Domain)?;
        }
        if let Some(estado) = &payload.estado {
            validator::validate_state(estado).map_err(FunilError::Domain)?;
        }

        let company = self.directory.update(id, payload)?;
        info!(id, "company updated");
        Ok(company)
    }

    #[instrument(skip_all, fields(id))]
    pub fn remove(&self, id: i64) -> FunilResult<()> {
        self.directory.remove(id)?;
        info!(id, "company removed");
        Ok(())
    }
}
