//! Implementation of the `funil cep` command: standalone address lookup.

use funil_adapters::HttpPostalCodeLookup;
use funil_core::application::ports::PostalCodeLookup;
use funil_core::domain::postal::{CEP_LEN, format_cep, sanitize_digits};

use crate::{
    cli::{CepArgs, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: CepArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let digits = sanitize_digits(&args.code);
    if digits.len() != CEP_LEN {
        return Err(CliError::InvalidInput {
            message: format!(
                "a CEP has {} digits, '{}' has {}",
                CEP_LEN,
                args.code,
                digits.len()
            ),
            source: None,
        });
    }

    let lookup = HttpPostalCodeLookup::new(super::http_client(&config)?);
    let result = lookup.lookup(&digits).map_err(CliError::Core)?;

    match result {
        Some(address) => {
            if output.format() == OutputFormat::Json {
                return super::print_json(&address);
            }
            output.header(&format_cep(&digits))?;
            if let Some(street) = address.street.as_deref() {
                output.print(&format!("  {street}"))?;
            }
            if let Some(neighborhood) = address.neighborhood.as_deref() {
                output.print(&format!("  {neighborhood}"))?;
            }
            output.print(&format!(
                "  {} / {}",
                address.city_name(),
                address.state_acronym()
            ))?;
            if let Some(complement) = address.complement.as_deref() {
                output.print(&format!("  {complement}"))?;
            }
        }
        None => {
            output.warning(&format!("CEP não encontrado: {}", format_cep(&digits)))?;
        }
    }

    Ok(())
}
