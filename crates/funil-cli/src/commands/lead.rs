//! Implementation of `funil lead`: pipeline listings, metrics and stage moves.

use funil_adapters::HttpLeadPipeline;
use funil_core::application::LeadService;
use funil_core::domain::{CreateLead, LeadFilters, LeadSortBy, LeadStage, UpdateLead};

use crate::{
    cli::{GlobalArgs, LeadCommands, LeadListArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: LeadCommands,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let client = super::http_client(&config)?;
    let service = LeadService::new(Box::new(HttpLeadPipeline::new(client)));

    match cmd {
        LeadCommands::List(args) => list(args, &service, &output),

        LeadCommands::Get { id } => {
            let lead = service.get(id).map_err(CliError::Core)?;
            if output.format() == OutputFormat::Json {
                return super::print_json(&lead);
            }
            output.header(&format!("{} [{}]", lead.name, lead.stage.label()))?;
            if let Some(origin) = lead.origin {
                output.print(&format!("  Origem: {}", origin.label()))?;
            }
            if let Some(value) = lead.estimated_value {
                output.print(&format!("  Valor estimado: R$ {value:.2}"))?;
            }
            if let Some(company) = &lead.company {
                output.print(&format!("  Empresa: {}", company.nome_fantasia))?;
            }
            if let Some(notes) = lead.notes.as_deref() {
                output.print(&format!("  Notas: {notes}"))?;
            }
            Ok(())
        }

        LeadCommands::Metrics => {
            let metrics = service.metrics().map_err(CliError::Core)?;
            if output.format() == OutputFormat::Json {
                return super::print_json(&metrics);
            }
            output.header(&format!("Pipeline ({} leads)", metrics.total))?;
            for stage in LeadStage::ALL {
                let count = metrics.per_stage.get(stage.as_str()).copied().unwrap_or(0);
                output.print(&format!("  {:<16} {}", stage.label(), count))?;
            }
            if !metrics.per_origin.is_empty() {
                output.print("")?;
                output.header("Por origem")?;
                let mut origins: Vec<_> = metrics.per_origin.iter().collect();
                origins.sort();
                for (origin, count) in origins {
                    output.print(&format!("  {origin:<16} {count}"))?;
                }
            }
            Ok(())
        }

        LeadCommands::Create(args) => {
            let payload = CreateLead {
                name: args.name,
                email: args.email,
                phone: args.phone,
                company_id: args.company_id,
                contact_id: args.contact_id,
                origin: args.origin.map(Into::into),
                stage: args.stage.map(Into::into),
                estimated_value: args.estimated_value,
                next_step: None,
                next_step_at: None,
                notes: args.notes,
            };
            let lead = service.create(&payload).map_err(CliError::Core)?;
            output.success(&format!("Lead {} created: {}", lead.id, lead.name))?;
            if output.format() == OutputFormat::Json {
                super::print_json(&lead)?;
            }
            Ok(())
        }

        LeadCommands::Update(args) => {
            let payload = UpdateLead {
                name: args.name,
                email: args.email,
                phone: args.phone,
                company_id: None,
                contact_id: None,
                origin: args.origin.map(Into::into),
                stage: args.stage.map(Into::into),
                estimated_value: args.estimated_value,
                next_step: None,
                next_step_at: None,
                notes: args.notes,
            };
            let lead = service.update(args.id, &payload).map_err(CliError::Core)?;
            output.success(&format!("Lead {} updated", lead.id))?;
            if output.format() == OutputFormat::Json {
                super::print_json(&lead)?;
            }
            Ok(())
        }

        LeadCommands::Move { id, stage } => {
            let stage: LeadStage = stage.into();
            let lead = service.move_stage(id, stage).map_err(CliError::Core)?;
            output.success(&format!("Lead {} moved to {}", lead.id, stage.label()))?;
            Ok(())
        }

        LeadCommands::Delete { id } => {
            service.remove(id).map_err(CliError::Core)?;
            output.success(&format!("Lead {id} deleted"))?;
            Ok(())
        }
    }
}

fn list(args: LeadListArgs, service: &LeadService, output: &OutputManager) -> CliResult<()> {
    let filters = LeadFilters {
        stage: args.stage.map(Into::into),
        origin: args.origin.map(Into::into),
        search: args.listing.search,
        start_date: args.start_date,
        end_date: args.end_date,
        company_id: args.company_id,
        page: args.listing.page,
        page_size: args.listing.page_size,
        sort_by: Some(LeadSortBy::CreatedAt),
        descending: args.newest,
    };
    let page = service.list(&filters).map_err(CliError::Core)?;

    if output.format() == OutputFormat::Json {
        return super::print_json(&page);
    }

    output.header(&format!(
        "Leads (page {}/{}, {} total)",
        page.pagination.page, page.pagination.total_pages, page.pagination.total_items
    ))?;
    for lead in &page.data {
        let value = lead
            .estimated_value
            .map(|v| format!("R$ {v:.2}"))
            .unwrap_or_default();
        output.print(&format!(
            "  {:>5}  {:<14}  {}  {}",
            lead.id,
            lead.stage.label(),
            lead.name,
            value
        ))?;
    }
    Ok(())
}
