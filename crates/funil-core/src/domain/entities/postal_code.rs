//! Postal-code lookup result shapes.
//!
//! These are owned by the remote postal-code service; the application only
//! ever reads them once per lookup. Absence of a result (the service knows
//! no address for the code) is modelled as `Option::None` at the port
//! boundary, not as an error.

use serde::{Deserialize, Serialize};

/// A federative state as returned by the postal-code service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCodeState {
    pub id: i64,
    pub acronym: String,
    pub name: String,
}

/// A city, nested under its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCodeCity {
    pub id: i64,
    pub name: String,
    pub state: PostalCodeState,
}

/// A successful postal-code resolution.
///
/// Street, complement and neighborhood may each be absent for rural or
/// city-wide codes; the state is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCodeResult {
    pub cep: String,
    pub street: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<PostalCodeCity>,
    pub state: PostalCodeState,
}

impl PostalCodeResult {
    /// City name, or empty when the service returned no city.
    pub fn city_name(&self) -> &str {
        self.city.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    /// Two-letter state acronym.
    pub fn state_acronym(&self) -> &str {
        &self.state.acronym
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp() -> PostalCodeState {
        PostalCodeState {
            id: 26,
            acronym: "SP".into(),
            name: "São Paulo".into(),
        }
    }

    #[test]
    fn city_name_defaults_to_empty() {
        let result = PostalCodeResult {
            cep: "01310100".into(),
            street: None,
            complement: None,
            neighborhood: None,
            city: None,
            state: sp(),
        };
        assert_eq!(result.city_name(), "");
        assert_eq!(result.state_acronym(), "SP");
    }

    #[test]
    fn deserializes_service_payload() {
        let json = r#"{
            "cep": "01310100",
            "street": "Av. Paulista",
            "complement": null,
            "neighborhood": "Bela Vista",
            "city": {"id": 1, "name": "São Paulo", "state": {"id": 26, "acronym": "SP", "name": "São Paulo"}},
            "state": {"id": 26, "acronym": "SP", "name": "São Paulo"}
        }"#;
        let result: PostalCodeResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.street.as_deref(), Some("Av. Paulista"));
        assert_eq!(result.city_name(), "São Paulo");
    }
}
