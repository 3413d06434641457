//! Implementation of `funil appointment`.

use funil_adapters::HttpAppointmentBook;
use funil_core::application::AppointmentService;
use funil_core::domain::{AppointmentFilters, CreateAppointment, UpdateAppointment};

use crate::{
    cli::{AppointmentCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: AppointmentCommands,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let client = super::http_client(&config)?;
    let service = AppointmentService::new(Box::new(HttpAppointmentBook::new(client)));

    match cmd {
        AppointmentCommands::List(args) => {
            let filters = AppointmentFilters {
                page: args.listing.page,
                page_size: args.listing.page_size,
                status: args.status.map(Into::into),
                start_date: args.start_date,
                end_date: args.end_date,
                search: args.listing.search,
                company_id: args.company_id,
            };
            let page = service.list(&filters).map_err(CliError::Core)?;

            if output.format() == OutputFormat::Json {
                return super::print_json(&page);
            }
            output.header(&format!(
                "Appointments (page {}/{}, {} total)",
                page.meta.page, page.meta.total_pages, page.meta.total_items
            ))?;
            for appointment in &page.data {
                output.print(&format!(
                    "  {:>5}  {}  {:<10}  {}",
                    appointment.id,
                    appointment.date.format("%Y-%m-%d %H:%M"),
                    appointment.status.label(),
                    appointment.title
                ))?;
            }
            Ok(())
        }

        AppointmentCommands::Get { id } => {
            let appointment = service.get(id).map_err(CliError::Core)?;
            if output.format() == OutputFormat::Json {
                return super::print_json(&appointment);
            }
            output.header(&appointment.title)?;
            output.print(&format!(
                "  Data:   {}",
                appointment.date.format("%Y-%m-%d %H:%M")
            ))?;
            output.print(&format!("  Status: {}", appointment.status.label()))?;
            if let Some(minutes) = appointment.duration_minutes {
                output.print(&format!("  Duração: {minutes} min"))?;
            }
            if let Some(company) = &appointment.company {
                output.print(&format!(
                    "  Local:  {}, {} - {}/{}",
                    company.endereco, company.numero, company.cidade, company.estado
                ))?;
            }
            if let Some(description) = appointment.description.as_deref() {
                output.print(&format!("  Descrição: {description}"))?;
            }
            Ok(())
        }

        AppointmentCommands::Create(args) => {
            let payload = CreateAppointment {
                title: args.title,
                date: super::parse_datetime(&args.date)?,
                company_id: args.company_id,
                contact_id: args.contact_id,
                description: args.description,
                duration_minutes: args.duration_minutes,
                status: args.status.map(Into::into),
            };
            let appointment = service.create(&payload).map_err(CliError::Core)?;
            output.success(&format!(
                "Appointment {} created: {}",
                appointment.id, appointment.title
            ))?;
            if output.format() == OutputFormat::Json {
                super::print_json(&appointment)?;
            }
            Ok(())
        }

        AppointmentCommands::Update(args) => {
            let date = args.date.as_deref().map(super::parse_datetime).transpose()?;
            let payload = UpdateAppointment {
                title: args.title,
                date,
                company_id: args.company_id,
                contact_id: args.contact_id,
                description: args.description,
                duration_minutes: args.duration_minutes,
                status: args.status.map(Into::into),
            };
            let appointment = service.update(args.id, &payload).map_err(CliError::Core)?;
            output.success(&format!("Appointment {} updated", appointment.id))?;
            if output.format() == OutputFormat::Json {
                super::print_json(&appointment)?;
            }
            Ok(())
        }

        AppointmentCommands::Delete { id } => {
            service.remove(id).map_err(CliError::Core)?;
            output.success(&format!("Appointment {id} deleted"))?;
            Ok(())
        }
    }
}
