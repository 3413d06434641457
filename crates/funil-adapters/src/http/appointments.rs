//! REST adapter for the `/appointment` resource.

use tracing::instrument;

use funil_core::application::ports::AppointmentBook;
use funil_core::domain::{
    Appointment, AppointmentFilters, CreateAppointment, Paginated, UpdateAppointment,
};
use funil_core::error::FunilResult;

use super::HttpClient;

/// [`AppointmentBook`] backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpAppointmentBook {
    client: HttpClient,
}

impl HttpAppointmentBook {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    fn filter_query(filters: &AppointmentFilters) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = filters.page {
            query.push(("page", page.to_string()));
        }
        if let Some(page_size) = filters.page_size {
            query.push(("pageSize", page_size.to_string()));
        }
        if let Some(status) = filters.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(start_date) = &filters.start_date {
            query.push(("startDate", start_date.clone()));
        }
        if let Some(end_date) = &filters.end_date {
            query.push(("endDate", end_date.clone()));
        }
        if let Some(search) = &filters.search {
            query.push(("search", search.clone()));
        }
        if let Some(company_id) = filters.company_id {
            query.push(("companyId", company_id.to_string()));
        }
        query
    }
}

impl AppointmentBook for HttpAppointmentBook {
    #[instrument(skip_all, fields(status = ?filters.status, page = filters.page))]
    fn list(&self, filters: &AppointmentFilters) -> FunilResult<Paginated<Appointment>> {
        self.client
            .get_json("/appointment", &Self::filter_query(filters))
    }

    fn get(&self, id: i64) -> FunilResult<Appointment> {
        self.client
            .get_record(&format!("/appointment/{id}"), "appointment", id)
    }

    fn create(&self, payload: &CreateAppointment) -> FunilResult<Appointment> {
        self.client.post_json("/appointment", payload)
    }

    fn update(&self, id: i64, payload: &UpdateAppointment) -> FunilResult<Appointment> {
        self.client
            .patch_json(&format!("/appointment/{id}"), payload, "appointment", id)
    }

    fn remove(&self, id: i64) -> FunilResult<()> {
        self.client
            .delete(&format!("/appointment/{id}"), "appointment", id)
    }
}
