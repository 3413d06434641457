//! Postal-code lookup against the backend's `/cep/{code}` endpoint.

use tracing::instrument;

use funil_core::application::ports::PostalCodeLookup;
use funil_core::domain::PostalCodeResult;
use funil_core::error::FunilResult;

use super::HttpClient;

/// [`PostalCodeLookup`] backed by the REST API.
///
/// The backend answers 404 or a JSON `null` for unknown codes; both are
/// reported as `Ok(None)` per the port contract.
#[derive(Debug, Clone)]
pub struct HttpPostalCodeLookup {
    client: HttpClient,
}

impl HttpPostalCodeLookup {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl PostalCodeLookup for HttpPostalCodeLookup {
    #[instrument(skip(self))]
    fn lookup(&self, digits: &str) -> FunilResult<Option<PostalCodeResult>> {
        self.client.get_optional(&format!("/cep/{digits}"))
    }
}
