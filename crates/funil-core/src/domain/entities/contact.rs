//! Contact records and their write DTOs.

use serde::{Deserialize, Serialize};

/// A lightweight company reference embedded in contact listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCompanySummary {
    pub id: i64,
    pub nome_fantasia: String,
    pub razao_social: String,
}

/// A contact person at a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub company: Option<ContactCompanySummary>,
}

/// Payload for `POST /contact`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Payload for `PATCH /contact/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_tolerates_sparse_payloads() {
        let json = r#"{"name": "Ana", "email": "ana@acme.com"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.name, "Ana");
        assert!(contact.id.is_none());
        assert!(contact.phone.is_none());
    }

    #[test]
    fn create_contact_serializes_company_id_camel_case() {
        let dto = CreateContact {
            name: "Ana".into(),
            email: "ana@acme.com".into(),
            phone: None,
            company_id: Some(3),
            is_active: Some(true),
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains(r#""companyId":3"#));
        assert!(!json.contains("phone"));
    }
}
