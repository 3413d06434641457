//! REST adapter for the `/company` resource.

use tracing::instrument;

use funil_core::application::ports::CompanyDirectory;
use funil_core::domain::{Company, CreateCompany, PageRequest, Paginated, UpdateCompany};
use funil_core::error::FunilResult;

use super::{HttpClient, page_query};

/// [`CompanyDirectory`] backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpCompanyDirectory {
    client: HttpClient,
}

impl HttpCompanyDirectory {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl CompanyDirectory for HttpCompanyDirectory {
    #[instrument(skip_all, fields(page = request.page))]
    fn list(&self, request: &PageRequest) -> FunilResult<Paginated<Company>> {
        self.client.get_json("/company", &page_query(request))
    }

    fn get(&self, id: i64) -> FunilResult<Company> {
        self.client
            .get_record(&format!("/company/{id}"), "company", id)
    }

    fn create(&self, payload: &CreateCompany) -> FunilResult<Company> {
        self.client.post_json("/company", payload)
    }

    fn update(&self, id: i64, payload: &UpdateCompany) -> FunilResult<Company> {
        self.client
            .put_json(&format!("/company/{id}"), payload, "company", id)
    }

    fn remove(&self, id: i64) -> FunilResult<()> {
        self.client.delete(&format!("/company/{id}"), "company", id)
    }
}
