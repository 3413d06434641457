//! Implementation of `funil company`: CRUD plus CEP-driven address autofill.
//!
//! `create` and `update` drive the same [`AddressAutofill`] controller the
//! form UI uses: the CEP resolves once, the dependent address fields are
//! filled atomically, and explicit flags always override autofilled values.

use funil_adapters::{AddressFormState, HttpCompanyDirectory, HttpPostalCodeLookup};
use funil_core::application::ports::AddressField;
use funil_core::application::{AddressAutofill, AddressForm, CompanyService};
use funil_core::domain::postal::format_cnpj;
use funil_core::domain::{Company, CreateCompany, CreateContact, PageRequest, UpdateCompany};

use crate::{
    cli::{
        CompanyCommands, CompanyCreateArgs, CompanyListArgs, CompanyUpdateArgs, GlobalArgs,
        OutputFormat,
    },
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, TerminalNotifications},
};

pub fn execute(
    cmd: CompanyCommands,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let client = super::http_client(&config)?;
    let service = CompanyService::new(Box::new(HttpCompanyDirectory::new(client.clone())));
    let lookup = HttpPostalCodeLookup::new(client);

    match cmd {
        CompanyCommands::List(args) => list(args, &service, &output),
        CompanyCommands::Get { id } => get(id, &service, &output),
        CompanyCommands::Create(args) => create(args, &service, &lookup, &output),
        CompanyCommands::Update(args) => update(args, &service, &lookup, &output),
        CompanyCommands::Delete { id } => {
            service.remove(id).map_err(CliError::Core)?;
            output.success(&format!("Company {id} deleted"))?;
            Ok(())
        }
    }
}

fn list(args: CompanyListArgs, service: &CompanyService, output: &OutputManager) -> CliResult<()> {
    let request = PageRequest {
        page: args.listing.page,
        page_size: args.listing.page_size,
        search: args.listing.search,
    };
    let page = service.list(&request).map_err(CliError::Core)?;

    if output.format() == OutputFormat::Json {
        return super::print_json(&page);
    }

    output.header(&format!(
        "Companies (page {}/{}, {} total)",
        page.meta.page, page.meta.total_pages, page.meta.total_items
    ))?;
    for company in &page.data {
        output.print(&format!(
            "  {:>5}  {}  {}  {}/{}",
            company.id,
            format_cnpj(&company.cnpj),
            company.nome_fantasia,
            company.cidade,
            company.estado
        ))?;
    }
    Ok(())
}

fn get(id: i64, service: &CompanyService, output: &OutputManager) -> CliResult<()> {
    let company = service.get(id).map_err(CliError::Core)?;
    if output.format() == OutputFormat::Json {
        return super::print_json(&company);
    }
    print_company(&company, output)
}

fn create(
    args: CompanyCreateArgs,
    service: &CompanyService,
    lookup: &HttpPostalCodeLookup,
    output: &OutputManager,
) -> CliResult<()> {
    let mut form = AddressFormState::new();
    let mut autofill = AddressAutofill::new();

    // Resolve the address only when some field was left for the autofill.
    let needs_autofill = args.endereco.is_none()
        || args.bairro.is_none()
        || args.cidade.is_none()
        || args.estado.is_none();
    if needs_autofill {
        let sink = TerminalNotifications::new(output);
        autofill.run_lookup(&args.cep, &mut form, lookup, &sink);
        if let Some(message) = form.cep_error() {
            return Err(CliError::InvalidInput {
                message: format!("{message} ({})", args.cep),
                source: None,
            });
        }
    }

    let filled = |field: AddressField, explicit: Option<String>| {
        explicit.unwrap_or_else(|| form.value(field))
    };

    let payload = CreateCompany {
        cnpj: args.cnpj,
        razao_social: args.razao_social,
        nome_fantasia: args.nome_fantasia,
        industria: args.industria,
        endereco: filled(AddressField::Endereco, args.endereco),
        complemento: args
            .complemento
            .or_else(|| Some(form.value(AddressField::Complemento)).filter(|v| !v.is_empty())),
        numero: args.numero,
        bairro: filled(AddressField::Bairro, args.bairro),
        cep: args.cep,
        cidade: filled(AddressField::Cidade, args.cidade),
        estado: filled(AddressField::Estado, args.estado),
        contact: CreateContact {
            name: args.contact_name,
            email: args.contact_email,
            phone: args.contact_phone,
            company_id: None,
            is_active: None,
        },
    };

    let company = service.create(&payload).map_err(CliError::Core)?;
    output.success(&format!(
        "Company {} created: {}",
        company.id, company.razao_social
    ))?;
    if output.format() == OutputFormat::Json {
        super::print_json(&company)?;
    }
    Ok(())
}

fn update(
    args: CompanyUpdateArgs,
    service: &CompanyService,
    lookup: &HttpPostalCodeLookup,
    output: &OutputManager,
) -> CliResult<()> {
    let current = service.get(args.id).map_err(CliError::Core)?;

    // When the CEP changes, re-run the autofill seeded with the stored
    // record so the house-number preservation policy applies.
    let mut autofilled = None;
    if let Some(new_cep) = &args.cep {
        let mut form = AddressFormState::from_record(&[
            (AddressField::Cep, current.cep.as_str()),
            (AddressField::Endereco, current.endereco.as_str()),
            (AddressField::Numero, current.numero.as_str()),
            (AddressField::Bairro, current.bairro.as_str()),
            (AddressField::Cidade, current.cidade.as_str()),
            (AddressField::Estado, current.estado.as_str()),
        ]);
        let mut autofill = AddressAutofill::for_existing_record(&current.cep, &mut form);
        let sink = TerminalNotifications::new(output);
        autofill.run_lookup(new_cep, &mut form, lookup, &sink);
        if let Some(message) = form.cep_error() {
            return Err(CliError::InvalidInput {
                message: format!("{message} ({new_cep})"),
                source: None,
            });
        }
        if autofill.has_applied_result() {
            if form.is_dirty(AddressField::Numero) && args.numero.is_none() {
                output.warning("CEP changed: house number cleared, pass --numero to set it")?;
            }
            autofilled = Some(form);
        }
    }

    let from_form = |form: &Option<AddressFormState>, field: AddressField| {
        form.as_ref()
            .filter(|f| f.is_dirty(field))
            .map(|f| f.value(field))
    };

    let payload = UpdateCompany {
        cnpj: args.cnpj,
        razao_social: args.razao_social,
        nome_fantasia: args.nome_fantasia,
        industria: args.industria,
        endereco: args
            .endereco
            .or_else(|| from_form(&autofilled, AddressField::Endereco)),
        complemento: args
            .complemento
            .or_else(|| from_form(&autofilled, AddressField::Complemento)),
        numero: args
            .numero
            .or_else(|| from_form(&autofilled, AddressField::Numero)),
        bairro: args
            .bairro
            .or_else(|| from_form(&autofilled, AddressField::Bairro)),
        cep: args.cep,
        cidade: args
            .cidade
            .or_else(|| from_form(&autofilled, AddressField::Cidade)),
        estado: args
            .estado
            .or_else(|| from_form(&autofilled, AddressField::Estado)),
        is_active: args.is_active,
    };

    let company = service.update(args.id, &payload).map_err(CliError::Core)?;
    output.success(&format!("Company {} updated", company.id))?;
    if output.format() == OutputFormat::Json {
        super::print_json(&company)?;
    }
    Ok(())
}

fn print_company(company: &Company, output: &OutputManager) -> CliResult<()> {
    output.header(&format!(
        "{} ({})",
        company.razao_social,
        format_cnpj(&company.cnpj)
    ))?;
    output.print(&format!("  Nome fantasia: {}", company.nome_fantasia))?;
    output.print(&format!("  Indústria:     {}", company.industria))?;
    output.print(&format!("  Endereço:      {}", address_line(company)))?;
    if let Some(complemento) = company.complemento.as_deref() {
        output.print(&format!("  Complemento:   {complemento}"))?;
    }
    output.print(&format!(
        "  Ativo:         {}",
        if company.is_active { "sim" } else { "não" }
    ))?;
    for contact in &company.contacts {
        output.print(&format!("  Contato:       {} <{}>", contact.name, contact.email))?;
    }
    Ok(())
}

/// `Rua X, 10 - Bairro - Cidade/UF - 01310-100` on one line.
fn address_line(company: &Company) -> String {
    format!(
        "{}, {} - {} - {}/{} - {}",
        company.endereco,
        company.numero,
        company.bairro,
        company.cidade,
        company.estado,
        company.cep
    )
}
