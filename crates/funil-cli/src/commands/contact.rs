//! Implementation of `funil contact`.

use funil_adapters::HttpContactDirectory;
use funil_core::application::ContactService;
use funil_core::domain::postal::format_phone;
use funil_core::domain::{CreateContact, PageRequest, UpdateContact};

use crate::{
    cli::{ContactCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: ContactCommands,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let client = super::http_client(&config)?;
    let service = ContactService::new(Box::new(HttpContactDirectory::new(client)));

    match cmd {
        ContactCommands::List(args) => {
            let request = PageRequest {
                page: args.listing.page,
                page_size: args.listing.page_size,
                search: args.listing.search,
            };
            let page = service
                .list(&request, args.company_id)
                .map_err(CliError::Core)?;

            if output.format() == OutputFormat::Json {
                return super::print_json(&page);
            }
            output.header(&format!(
                "Contacts (page {}/{}, {} total)",
                page.meta.page, page.meta.total_pages, page.meta.total_items
            ))?;
            for contact in &page.data {
                let phone = contact
                    .phone
                    .as_deref()
                    .map(format_phone)
                    .unwrap_or_default();
                output.print(&format!(
                    "  {:>5}  {}  <{}>  {}",
                    contact.id.unwrap_or_default(),
                    contact.name,
                    contact.email,
                    phone
                ))?;
            }
            Ok(())
        }

        ContactCommands::Get { id } => {
            let contact = service.get(id).map_err(CliError::Core)?;
            if output.format() == OutputFormat::Json {
                return super::print_json(&contact);
            }
            output.header(&contact.name)?;
            output.print(&format!("  Email: {}", contact.email))?;
            if let Some(phone) = contact.phone.as_deref() {
                output.print(&format!("  Fone:  {}", format_phone(phone)))?;
            }
            if let Some(company) = &contact.company {
                output.print(&format!("  Empresa: {}", company.nome_fantasia))?;
            }
            Ok(())
        }

        ContactCommands::Create(args) => {
            let payload = CreateContact {
                name: args.name,
                email: args.email,
                phone: args.phone,
                company_id: args.company_id,
                is_active: None,
            };
            let contact = service.create(&payload).map_err(CliError::Core)?;
            output.success(&format!(
                "Contact {} created: {}",
                contact.id.unwrap_or_default(),
                contact.name
            ))?;
            if output.format() == OutputFormat::Json {
                super::print_json(&contact)?;
            }
            Ok(())
        }

        ContactCommands::Update(args) => {
            let payload = UpdateContact {
                name: args.name,
                email: args.email,
                phone: args.phone,
                company_id: args.company_id,
                is_active: args.is_active,
            };
            let contact = service.update(args.id, &payload).map_err(CliError::Core)?;
            output.success(&format!("Contact {} updated", args.id))?;
            if output.format() == OutputFormat::Json {
                super::print_json(&contact)?;
            }
            Ok(())
        }

        ContactCommands::Delete { id } => {
            service.remove(id).map_err(CliError::Core)?;
            output.success(&format!("Contact {id} deleted"))?;
            Ok(())
        }
    }
}
