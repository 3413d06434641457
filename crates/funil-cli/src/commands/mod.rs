//! Command handlers: one module per subcommand.
//!
//! Handlers wire adapters into core services, run the use case, and render
//! the result through the [`OutputManager`](crate::output::OutputManager).

pub mod appointment;
pub mod cep;
pub mod company;
pub mod completions;
pub mod contact;
pub mod lead;

use chrono::{DateTime, Utc};
use serde::Serialize;

use funil_adapters::HttpClient;
use funil_core::error::FunilError;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Build the shared REST client, failing fast when no URL is configured.
pub(crate) fn http_client(config: &AppConfig) -> CliResult<HttpClient> {
    let url = config.api.url.as_deref().ok_or(CliError::ApiNotConfigured)?;
    HttpClient::new(url, config.api.token.clone()).map_err(CliError::Core)
}

/// Serialize to pretty JSON on stdout.
///
/// Bypasses the `OutputManager` because JSON output must stay parseable even
/// in non-TTY pipes and in quiet mode.
pub(crate) fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        CliError::Core(FunilError::Internal {
            message: format!("serializing output: {e}"),
        })
    })?;
    println!("{json}");
    Ok(())
}

/// Parse an RFC 3339 date-time argument.
pub(crate) fn parse_datetime(value: &str) -> CliResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CliError::InvalidDate {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_datetime_accepts_rfc3339() {
        let dt = parse_datetime("2026-09-01T14:00:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-09-01T14:00:00+00:00");
    }

    #[test]
    fn parse_datetime_rejects_garbage() {
        assert!(matches!(
            parse_datetime("tomorrow"),
            Err(CliError::InvalidDate { .. })
        ));
    }

    #[test]
    fn http_client_requires_url() {
        let config = AppConfig::default();
        assert!(matches!(
            http_client(&config),
            Err(CliError::ApiNotConfigured)
        ));
    }
}
