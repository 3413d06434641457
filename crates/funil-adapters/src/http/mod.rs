//! HTTP adapters for the Funil REST API.
//!
//! One shared [`HttpClient`] plus one adapter per backend resource. All
//! requests are blocking with hard timeouts, so a dead backend surfaces as a
//! transport error instead of a hang.

mod appointments;
mod cep;
mod client;
mod companies;
mod contacts;
mod leads;

pub use appointments::HttpAppointmentBook;
pub use cep::HttpPostalCodeLookup;
pub use client::HttpClient;
pub use companies::HttpCompanyDirectory;
pub use contacts::HttpContactDirectory;
pub use leads::HttpLeadPipeline;

use funil_core::domain::PageRequest;

/// Standard pagination/search query parameters shared by listing endpoints.
fn page_query(request: &PageRequest) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(page) = request.page {
        query.push(("page", page.to_string()));
    }
    if let Some(page_size) = request.page_size {
        query.push(("pageSize", page_size.to_string()));
    }
    if let Some(search) = &request.search {
        query.push(("search", search.clone()));
    }
    query
}
