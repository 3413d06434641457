//! Scheduled appointments with companies and contacts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── AppointmentStatus ─────────────────────────────────────────────────────────

/// Lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Scheduled,
    Done,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [Self::Scheduled, Self::Done, Self::Cancelled];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Done => "DONE",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "Agendado",
            Self::Done => "Realizado",
            Self::Cancelled => "Cancelado",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "done" => Ok(Self::Done),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            other => Err(DomainError::UnknownAppointmentStatus {
                value: other.to_string(),
            }),
        }
    }
}

// ── Appointment ───────────────────────────────────────────────────────────────

/// Contact summary embedded in an appointment's company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentContactSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Company summary embedded in an appointment, address included so the
/// meeting location can be shown without a second request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCompanySummary {
    pub id: i64,
    pub nome_fantasia: String,
    pub razao_social: String,
    pub endereco: String,
    pub numero: String,
    #[serde(default)]
    pub complemento: Option<String>,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    #[serde(default)]
    pub primary_contact: Option<AppointmentContactSummary>,
}

/// An appointment as returned by `GET /appointment/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub title: String,
    pub date: DateTime<Utc>,
    pub company_id: i64,
    #[serde(default)]
    pub contact_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    pub status: AppointmentStatus,
    pub is_active: bool,
    #[serde(default)]
    pub company: Option<AppointmentCompanySummary>,
    #[serde(default)]
    pub contact: Option<AppointmentContactSummary>,
}

/// Payload for `POST /appointment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointment {
    pub title: String,
    pub date: DateTime<Utc>,
    pub company_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
}

/// Payload for `PATCH /appointment/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
}

/// Query parameters for `GET /appointment`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentFilters {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub status: Option<AppointmentStatus>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub search: Option<String>,
    pub company_id: Option<i64>,
}
