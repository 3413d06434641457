//! Appointment Service - use cases for the `/appointment` resource.

use tracing::{info, instrument};

use crate::{
    application::ports::AppointmentBook,
    domain::{
        Appointment, AppointmentFilters, CreateAppointment, DomainError, Paginated,
        UpdateAppointment,
    },
    error::{FunilError, FunilResult},
};

/// Orchestrates appointment use cases.
pub struct AppointmentService {
    book: Box<dyn AppointmentBook>,
}

impl AppointmentService {
    pub fn new(book: Box<dyn AppointmentBook>) -> Self {
        Self { book }
    }

    #[instrument(skip_all, fields(status = ?filters.status, page = filters.page))]
    pub fn list(&self, filters: &AppointmentFilters) -> FunilResult<Paginated<Appointment>> {
        self.book.list(filters)
    }

    pub fn get(&self, id: i64) -> FunilResult<Appointment> {
        self.book.get(id)
    }

    #[instrument(skip_all, fields(title = %payload.title))]
    pub fn create(&self, payload: &CreateAppointment) -> FunilResult<Appointment> {
        if payload.title.trim().is_empty() {
            return Err(FunilError::Domain(DomainError::MissingRequiredField {
                field: "title",
            }));
        }

        let appointment = self.book.create(payload)?;
        info!(id = appointment.id, "appointment created");
        Ok(appointment)
    }

    #[instrument(skip_all, fields(id))]
    pub fn update(&self, id: i64, payload: &UpdateAppointment) -> FunilResult<Appointment> {
        let appointment = self.book.update(id, payload)?;
        info!(id, "appointment updated");
        Ok(appointment)
    }

    #[instrument(skip_all, fields(id))]
    pub fn remove(&self, id: i64) -> FunilResult<()> {
        self.book.remove(id)?;
        info!(id, "appointment removed");
        Ok(())
    }
}
