//! Lead Service - use cases for the `/lead` resource.
//!
//! Covers the pipeline board: filtered listings, per-stage/per-origin
//! metrics, and the stage-move operation used by drag-and-drop hosts.

use tracing::{info, instrument};

use crate::{
    application::ports::LeadPipeline,
    domain::{
        CreateLead, Lead, LeadFilters, LeadMetrics, LeadStage, PaginatedLeads, UpdateLead,
    },
    error::{FunilError, FunilResult},
};

/// Orchestrates lead use cases.
pub struct LeadService {
    pipeline: Box<dyn LeadPipeline>,
}

impl LeadService {
    pub fn new(pipeline: Box<dyn LeadPipeline>) -> Self {
        Self { pipeline }
    }

    /// Filtered, paginated, sorted listing.
    #[instrument(skip_all, fields(stage = ?filters.stage, page = filters.page))]
    pub fn list(&self, filters: &LeadFilters) -> FunilResult<PaginatedLeads> {
        self.pipeline.list(filters)
    }

    pub fn get(&self, id: i64) -> FunilResult<Lead> {
        self.pipeline.get(id)
    }

    /// Aggregate counters per stage and origin.
    pub fn metrics(&self) -> FunilResult<LeadMetrics> {
        self.pipeline.metrics()
    }

    #[instrument(skip_all, fields(name = %payload.name))]
    pub fn create(&self, payload: &CreateLead) -> FunilResult<Lead> {
        if payload.name.trim().is_empty() {
            return Err(FunilError::Domain(
                crate::domain::DomainError::MissingRequiredField { field: "name" },
            ));
        }

        let lead = self.pipeline.create(payload)?;
        info!(id = lead.id, "lead created");
        Ok(lead)
    }

    #[instrument(skip_all, fields(id))]
    pub fn update(&self, id: i64, payload: &UpdateLead) -> FunilResult<Lead> {
        let lead = self.pipeline.update(id, payload)?;
        info!(id, "lead updated");
        Ok(lead)
    }

    /// Move a lead to another pipeline stage.
    ///
    /// A move to the stage the lead is already in is a no-op at the backend;
    /// the service forwards it unchanged.
    #[instrument(skip_all, fields(id, stage = %stage))]
    pub fn move_stage(&self, id: i64, stage: LeadStage) -> FunilResult<Lead> {
        let lead = self.pipeline.move_stage(id, stage)?;
        info!(id, stage = %stage, "lead moved");
        Ok(lead)
    }

    #[instrument(skip_all, fields(id))]
    pub fn remove(&self, id: i64) -> FunilResult<()> {
        self.pipeline.remove(id)?;
        info!(id, "lead removed");
        Ok(())
    }
}
