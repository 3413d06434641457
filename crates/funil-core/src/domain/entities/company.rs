//! Company ("client") records and their write DTOs.
//!
//! Field names follow the backend's Portuguese vocabulary (razão social,
//! nome fantasia, endereço…) with camelCase on the wire.

use serde::{Deserialize, Serialize};

use super::contact::Contact;

/// A company as returned by `GET /company/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub cnpj: String,
    pub razao_social: String,
    pub nome_fantasia: String,
    pub industria: String,
    pub endereco: String,
    #[serde(default)]
    pub complemento: Option<String>,
    pub numero: String,
    pub bairro: String,
    pub cep: String,
    pub cidade: String,
    pub estado: String,
    pub is_active: bool,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for `POST /company`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompany {
    pub cnpj: String,
    pub razao_social: String,
    pub nome_fantasia: String,
    pub industria: String,
    pub endereco: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complemento: Option<String>,
    pub numero: String,
    pub bairro: String,
    pub cep: String,
    pub cidade: String,
    pub estado: String,
    pub contact: super::contact::CreateContact,
}

/// Payload for `PATCH /company/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompany {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub razao_social: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_fantasia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complemento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_deserializes_camel_case() {
        let json = r#"{
            "id": 7, "cnpj": "12345678000190",
            "razaoSocial": "ACME Ltda", "nomeFantasia": "ACME",
            "industria": "Tecnologia", "endereco": "Av. Paulista",
            "numero": "1000", "bairro": "Bela Vista",
            "cep": "01310-100", "cidade": "São Paulo", "estado": "SP",
            "isActive": true
        }"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.razao_social, "ACME Ltda");
        assert!(company.contacts.is_empty());
        assert!(company.complemento.is_none());
    }

    #[test]
    fn update_skips_absent_fields() {
        let patch = UpdateCompany {
            nome_fantasia: Some("ACME Corp".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"nomeFantasia":"ACME Corp"}"#);
    }
}
