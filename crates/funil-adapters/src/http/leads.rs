//! REST adapter for the `/lead` resource.

use serde::Serialize;
use tracing::instrument;

use funil_core::application::ports::LeadPipeline;
use funil_core::domain::{
    CreateLead, Lead, LeadFilters, LeadMetrics, LeadStage, PaginatedLeads, UpdateLead,
};
use funil_core::error::FunilResult;

use super::HttpClient;

/// Body of `PATCH /lead/{id}/stage`.
#[derive(Serialize)]
struct MoveStageBody {
    stage: LeadStage,
}

/// [`LeadPipeline`] backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpLeadPipeline {
    client: HttpClient,
}

impl HttpLeadPipeline {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    fn filter_query(filters: &LeadFilters) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = filters.page {
            query.push(("page", page.to_string()));
        }
        if let Some(page_size) = filters.page_size {
            query.push(("pageSize", page_size.to_string()));
        }
        if let Some(stage) = filters.stage {
            query.push(("stage", stage.as_str().to_string()));
        }
        if let Some(origin) = filters.origin {
            query.push(("origin", origin.as_str().to_string()));
        }
        if let Some(search) = &filters.search {
            query.push(("search", search.clone()));
        }
        if let Some(start_date) = &filters.start_date {
            query.push(("startDate", start_date.clone()));
        }
        if let Some(end_date) = &filters.end_date {
            query.push(("endDate", end_date.clone()));
        }
        if let Some(company_id) = filters.company_id {
            query.push(("companyId", company_id.to_string()));
        }
        if let Some(sort_by) = filters.sort_by {
            query.push(("sortBy", sort_by.as_str().to_string()));
            query.push((
                "order",
                if filters.descending { "desc" } else { "asc" }.to_string(),
            ));
        }
        query
    }
}

impl LeadPipeline for HttpLeadPipeline {
    #[instrument(skip_all, fields(stage = ?filters.stage, page = filters.page))]
    fn list(&self, filters: &LeadFilters) -> FunilResult<PaginatedLeads> {
        self.client.get_json("/lead", &Self::filter_query(filters))
    }

    fn get(&self, id: i64) -> FunilResult<Lead> {
        self.client.get_record(&format!("/lead/{id}"), "lead", id)
    }

    fn metrics(&self) -> FunilResult<LeadMetrics> {
        self.client.get_json("/lead/metrics", &[])
    }

    fn create(&self, payload: &CreateLead) -> FunilResult<Lead> {
        self.client.post_json("/lead", payload)
    }

    fn update(&self, id: i64, payload: &UpdateLead) -> FunilResult<Lead> {
        self.client
            .patch_json(&format!("/lead/{id}"), payload, "lead", id)
    }

    fn move_stage(&self, id: i64, stage: LeadStage) -> FunilResult<Lead> {
        self.client.patch_json(
            &format!("/lead/{id}/stage"),
            &MoveStageBody { stage },
            "lead",
            id,
        )
    }

    fn remove(&self, id: i64) -> FunilResult<()> {
        self.client.delete(&format!("/lead/{id}"), "lead", id)
    }
}
