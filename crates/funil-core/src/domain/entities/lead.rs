//! Sales leads: pipeline stages, origins, filters and metrics.
//!
//! # Design
//!
//! `LeadStage` and `LeadOrigin` are pure value types — `Copy`,
//! equality-by-value, no identity. This file's job is the types, their wire
//! representation (SCREAMING_SNAKE, matching the backend), their `FromStr`
//! parsers for CLI input, and the human-readable labels shown in listings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

use super::common::PaginationMeta;

// ── LeadStage ─────────────────────────────────────────────────────────────────

/// Position of a lead in the sales pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStage {
    New,
    Qualification,
    Proposal,
    FollowUp,
    Won,
    Lost,
}

impl LeadStage {
    /// Every stage, in pipeline order.
    pub const ALL: [LeadStage; 6] = [
        Self::New,
        Self::Qualification,
        Self::Proposal,
        Self::FollowUp,
        Self::Won,
        Self::Lost,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Qualification => "QUALIFICATION",
            Self::Proposal => "PROPOSAL",
            Self::FollowUp => "FOLLOW_UP",
            Self::Won => "WON",
            Self::Lost => "LOST",
        }
    }

    /// Human-readable label for listings.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::New => "Novo",
            Self::Qualification => "Qualificação",
            Self::Proposal => "Proposta",
            Self::FollowUp => "Acompanhamento",
            Self::Won => "Ganho",
            Self::Lost => "Perdido",
        }
    }

    /// Whether the lead has left the active pipeline.
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for LeadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "new" | "novo" => Ok(Self::New),
            "qualification" => Ok(Self::Qualification),
            "proposal" => Ok(Self::Proposal),
            "follow_up" | "followup" => Ok(Self::FollowUp),
            "won" => Ok(Self::Won),
            "lost" => Ok(Self::Lost),
            other => Err(DomainError::UnknownLeadStage {
                value: other.to_string(),
            }),
        }
    }
}

// ── LeadOrigin ────────────────────────────────────────────────────────────────

/// How a lead first reached us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadOrigin {
    Website,
    Campaign,
    Referral,
    Outbound,
    Other,
}

impl LeadOrigin {
    pub const ALL: [LeadOrigin; 5] = [
        Self::Website,
        Self::Campaign,
        Self::Referral,
        Self::Outbound,
        Self::Other,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "WEBSITE",
            Self::Campaign => "CAMPAIGN",
            Self::Referral => "REFERRAL",
            Self::Outbound => "OUTBOUND",
            Self::Other => "OTHER",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Campaign => "Campanha",
            Self::Referral => "Indicação",
            Self::Outbound => "Prospecção ativa",
            Self::Other => "Outra origem",
        }
    }
}

impl fmt::Display for LeadOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadOrigin {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "website" => Ok(Self::Website),
            "campaign" => Ok(Self::Campaign),
            "referral" => Ok(Self::Referral),
            "outbound" => Ok(Self::Outbound),
            "other" => Ok(Self::Other),
            other => Err(DomainError::UnknownLeadOrigin {
                value: other.to_string(),
            }),
        }
    }
}

// ── Lead ──────────────────────────────────────────────────────────────────────

/// Company summary embedded in a lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadCompanySummary {
    pub id: i64,
    pub nome_fantasia: String,
    pub razao_social: String,
}

/// Contact summary embedded in a lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadContactSummary {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A sales lead as returned by `GET /lead/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub contact_id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub origin: Option<LeadOrigin>,
    pub stage: LeadStage,
    #[serde(default)]
    pub estimated_value: Option<f64>,
    #[serde(default)]
    pub last_interaction_at: Option<String>,
    #[serde(default)]
    pub next_step: Option<String>,
    #[serde(default)]
    pub next_step_at: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub company: Option<LeadCompanySummary>,
    #[serde(default)]
    pub contact: Option<LeadContactSummary>,
}

/// Sort keys accepted by the lead listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadSortBy {
    #[default]
    CreatedAt,
    UpdatedAt,
    Name,
    Stage,
}

impl LeadSortBy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
            Self::Name => "name",
            Self::Stage => "stage",
        }
    }
}

/// Query parameters for `GET /lead`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFilters {
    pub stage: Option<LeadStage>,
    pub origin: Option<LeadOrigin>,
    pub search: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub company_id: Option<i64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_by: Option<LeadSortBy>,
    pub descending: bool,
}

/// Paginated lead listing (the lead endpoint names its meta `pagination`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedLeads {
    pub data: Vec<Lead>,
    pub pagination: PaginationMeta,
}

/// Aggregate counters from `GET /lead/metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadMetrics {
    pub total: u64,
    pub per_stage: std::collections::HashMap<String, u64>,
    pub per_origin: std::collections::HashMap<String, u64>,
}

/// Payload for `POST /lead`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLead {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<LeadOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<LeadStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for `PATCH /lead/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLead {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<LeadOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<LeadStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_parses_aliases() {
        assert_eq!("follow-up".parse::<LeadStage>().unwrap(), LeadStage::FollowUp);
        assert_eq!("WON".parse::<LeadStage>().unwrap(), LeadStage::Won);
        assert!("closed".parse::<LeadStage>().is_err());
    }

    #[test]
    fn stage_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&LeadStage::FollowUp).unwrap(),
            r#""FOLLOW_UP""#
        );
    }

    #[test]
    fn closed_stages() {
        assert!(LeadStage::Won.is_closed());
        assert!(LeadStage::Lost.is_closed());
        assert!(!LeadStage::Proposal.is_closed());
    }

    #[test]
    fn origin_parses_and_labels() {
        assert_eq!("referral".parse::<LeadOrigin>().unwrap(), LeadOrigin::Referral);
        assert_eq!(LeadOrigin::Referral.label(), "Indicação");
        assert!("carrier-pigeon".parse::<LeadOrigin>().is_err());
    }

    #[test]
    fn lead_deserializes_sparse_payload() {
        let json = r#"{
            "id": 1, "name": "Big deal", "stage": "NEW",
            "isActive": true,
            "createdAt": "2026-01-10T12:00:00Z",
            "updatedAt": "2026-01-10T12:00:00Z"
        }"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.stage, LeadStage::New);
        assert!(lead.origin.is_none());
        assert!(lead.company.is_none());
    }

    #[test]
    fn sort_key_matches_wire_name() {
        assert_eq!(LeadSortBy::CreatedAt.as_str(), "createdAt");
        assert_eq!(LeadSortBy::Stage.as_str(), "stage");
    }
}
