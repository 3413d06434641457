//! REST adapter for the `/contact` resource.

use tracing::instrument;

use funil_core::application::ports::ContactDirectory;
use funil_core::domain::{Contact, CreateContact, PageRequest, Paginated, UpdateContact};
use funil_core::error::FunilResult;

use super::{HttpClient, page_query};

/// [`ContactDirectory`] backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpContactDirectory {
    client: HttpClient,
}

impl HttpContactDirectory {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl ContactDirectory for HttpContactDirectory {
    #[instrument(skip_all, fields(page = request.page, company_id))]
    fn list(
        &self,
        request: &PageRequest,
        company_id: Option<i64>,
    ) -> FunilResult<Paginated<Contact>> {
        let mut query = page_query(request);
        if let Some(company_id) = company_id {
            query.push(("companyId", company_id.to_string()));
        }
        self.client.get_json("/contact", &query)
    }

    fn get(&self, id: i64) -> FunilResult<Contact> {
        self.client
            .get_record(&format!("/contact/{id}"), "contact", id)
    }

    fn create(&self, payload: &CreateContact) -> FunilResult<Contact> {
        self.client.post_json("/contact", payload)
    }

    fn update(&self, id: i64, payload: &UpdateContact) -> FunilResult<Contact> {
        self.client
            .put_json(&format!("/contact/{id}"), payload, "contact", id)
    }

    fn remove(&self, id: i64) -> FunilResult<()> {
        self.client.delete(&format!("/contact/{id}"), "contact", id)
    }
}
