use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid CNPJ '{value}': expected 00.000.000/0000-00 or 14 digits")]
    InvalidCnpj { value: String },

    #[error("Invalid CEP '{value}': expected 00000-000 or 8 digits")]
    InvalidCep { value: String },

    #[error("Invalid state '{value}': use the two-letter acronym (e.g. SP)")]
    InvalidState { value: String },

    #[error("Invalid phone '{value}': expected 10 or 11 digits")]
    InvalidPhone { value: String },

    #[error("Invalid email '{value}'")]
    InvalidEmail { value: String },

    #[error("Unknown lead stage: {value}")]
    UnknownLeadStage { value: String },

    #[error("Unknown lead origin: {value}")]
    UnknownLeadOrigin { value: String },

    #[error("Unknown appointment status: {value}")]
    UnknownAppointmentStatus { value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("The field '{}' is required", field),
                "Provide a non-empty value and try again".into(),
            ],
            Self::InvalidCnpj { .. } => vec![
                "CNPJ must be 14 digits, masked or not".into(),
                "Example: 12.345.678/0001-90".into(),
            ],
            Self::InvalidCep { .. } => vec![
                "CEP must be 8 digits".into(),
                "Example: 01310-100".into(),
            ],
            Self::InvalidState { .. } => vec![
                "Use the two-letter state acronym".into(),
                "Examples: SP, RJ, MG".into(),
            ],
            Self::InvalidPhone { .. } => vec![
                "Phone numbers carry the area code plus 8 or 9 digits".into(),
                "Example: (11) 91234-5678".into(),
            ],
            Self::UnknownLeadStage { .. } => vec![
                "Valid stages: new, qualification, proposal, follow-up, won, lost".into(),
            ],
            Self::UnknownLeadOrigin { .. } => vec![
                "Valid origins: website, campaign, referral, outbound, other".into(),
            ],
            Self::UnknownAppointmentStatus { .. } => {
                vec!["Valid statuses: scheduled, done, cancelled".into()]
            }
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
