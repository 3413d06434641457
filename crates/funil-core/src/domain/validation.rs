//! Field-level validation for write payloads.
//!
//! The backend enforces these rules too; validating here gives the user an
//! actionable error before a request is ever sent.

use crate::domain::entities::{CreateCompany, CreateContact};
use crate::domain::error::DomainError;
use crate::domain::postal::{CEP_LEN, sanitize_digits};

/// Validator for write payloads. Stateless; groups the rules in one place.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a company creation payload.
    pub fn validate_company(dto: &CreateCompany) -> Result<(), DomainError> {
        Self::require("cnpj", &dto.cnpj)?;
        Self::validate_cnpj(&dto.cnpj)?;
        Self::require("razaoSocial", &dto.razao_social)?;
        Self::require("nomeFantasia", &dto.nome_fantasia)?;
        Self::require("industria", &dto.industria)?;
        Self::require("endereco", &dto.endereco)?;
        Self::require("numero", &dto.numero)?;
        Self::require("bairro", &dto.bairro)?;
        Self::validate_cep(&dto.cep)?;
        Self::require("cidade", &dto.cidade)?;
        Self::validate_state(&dto.estado)?;
        Self::validate_contact(&dto.contact)?;
        Ok(())
    }

    /// Validate a contact creation payload.
    pub fn validate_contact(dto: &CreateContact) -> Result<(), DomainError> {
        Self::require("name", &dto.name)?;
        Self::validate_email(&dto.email)?;
        if let Some(phone) = dto.phone.as_deref() {
            Self::validate_phone(phone)?;
        }
        Ok(())
    }

    /// CNPJ: masked (`00.000.000/0000-00`) or bare 14 digits.
    pub fn validate_cnpj(value: &str) -> Result<(), DomainError> {
        let digits = sanitize_digits(value);
        let bare_ok = value.chars().all(|c| c.is_ascii_digit()) && value.len() == 14;
        let masked_ok = digits.len() == 14 && is_masked_cnpj(value);
        if bare_ok || masked_ok {
            Ok(())
        } else {
            Err(DomainError::InvalidCnpj {
                value: value.to_string(),
            })
        }
    }

    /// CEP: `00000-000` or bare 8 digits.
    pub fn validate_cep(value: &str) -> Result<(), DomainError> {
        if value.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "cep" });
        }
        let well_formed = match value.len() {
            8 => value.chars().all(|c| c.is_ascii_digit()),
            9 => {
                value.as_bytes()[5] == b'-'
                    && value
                        .chars()
                        .enumerate()
                        .all(|(i, c)| i == 5 || c.is_ascii_digit())
            }
            _ => false,
        };
        if well_formed && sanitize_digits(value).len() == CEP_LEN {
            Ok(())
        } else {
            Err(DomainError::InvalidCep {
                value: value.to_string(),
            })
        }
    }

    /// Two-letter uppercase state acronym.
    pub fn validate_state(value: &str) -> Result<(), DomainError> {
        if value.len() == 2 && value.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(())
        } else {
            Err(DomainError::InvalidState {
                value: value.to_string(),
            })
        }
    }

    /// Phone: 10 or 11 digits after sanitization.
    pub fn validate_phone(value: &str) -> Result<(), DomainError> {
        let digits = sanitize_digits(value);
        if digits.len() == 10 || digits.len() == 11 {
            Ok(())
        } else {
            Err(DomainError::InvalidPhone {
                value: value.to_string(),
            })
        }
    }

    /// Minimal email shape check: something, `@`, something, `.`, something.
    pub fn validate_email(value: &str) -> Result<(), DomainError> {
        let parts: Vec<&str> = value.splitn(2, '@').collect();
        let ok = parts.len() == 2
            && !parts[0].is_empty()
            && parts[1].contains('.')
            && !parts[1].starts_with('.')
            && !parts[1].ends_with('.');
        if ok {
            Ok(())
        } else {
            Err(DomainError::InvalidEmail {
                value: value.to_string(),
            })
        }
    }

    fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            Err(DomainError::MissingRequiredField { field })
        } else {
            Ok(())
        }
    }
}

fn is_masked_cnpj(value: &str) -> bool {
    // 00.000.000/0000-00
    let bytes = value.as_bytes();
    value.len() == 18
        && bytes[2] == b'.'
        && bytes[6] == b'.'
        && bytes[10] == b'/'
        && bytes[15] == b'-'
        && value
            .chars()
            .enumerate()
            .all(|(i, c)| matches!(i, 2 | 6 | 10 | 15) || c.is_ascii_digit())
}
