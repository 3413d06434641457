//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use funil_core::domain::{AppointmentStatus, LeadOrigin, LeadStage};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "funil",
    bin_name = "funil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4c7} Funil CRM from the terminal",
    long_about = "Funil is a terminal client for the Funil CRM backend: \
                  companies, contacts, sales leads and appointments, with \
                  postal-code (CEP) address autofill.",
    after_help = "EXAMPLES:\n\
        \x20 funil company list --search acme\n\
        \x20 funil cep 01310-100\n\
        \x20 funil lead move 42 proposal\n\
        \x20 funil completions bash > /usr/share/bash-completion/completions/funil",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage companies.
    #[command(
        visible_alias = "co",
        about = "Manage companies",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 funil company list --search acme\n\
            \x20 funil company create --cnpj 12345678000190 --razao-social 'ACME Ltda' \\\n\
            \x20\x20   --nome-fantasia ACME --industria Tecnologia --cep 01310-100 \\\n\
            \x20\x20   --numero 1000 --contact-name Ana --contact-email ana@acme.com"
    )]
    Company(CompanyCommands),

    /// Manage contacts.
    #[command(
        visible_alias = "ct",
        about = "Manage contacts",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 funil contact list --company 7\n\
            \x20 funil contact create --name Ana --email ana@acme.com --company 7"
    )]
    Contact(ContactCommands),

    /// Manage sales leads.
    #[command(
        visible_alias = "ld",
        about = "Manage the lead pipeline",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 funil lead list --stage proposal\n\
            \x20 funil lead move 42 won\n\
            \x20 funil lead metrics"
    )]
    Lead(LeadCommands),

    /// Manage appointments.
    #[command(
        visible_alias = "ap",
        about = "Manage appointments",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 funil appointment list --status scheduled\n\
            \x20 funil appointment create --title Kickoff --date 2026-09-01T14:00:00Z --company 7"
    )]
    Appointment(AppointmentCommands),

    /// Resolve a postal code (CEP) to an address.
    #[command(
        about = "Look up an address by CEP",
        after_help = "EXAMPLES:\n\
            \x20 funil cep 01310-100\n\
            \x20 funil cep 01310100 --output-format json"
    )]
    Cep(CepArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 funil completions bash > ~/.local/share/bash-completion/completions/funil\n\
            \x20 funil completions zsh  > ~/.zfunc/_funil\n\
            \x20 funil completions fish > ~/.config/fish/completions/funil.fish"
    )]
    Completions(CompletionsArgs),
}

// ── shared listing flags ──────────────────────────────────────────────────────

/// Pagination and search flags shared by every `list` subcommand.
#[derive(Debug, Args)]
pub struct ListingArgs {
    /// Page number (1-based).
    #[arg(long = "page", value_name = "N", help = "Page number")]
    pub page: Option<u32>,

    /// Records per page.
    #[arg(long = "page-size", value_name = "N", help = "Records per page")]
    pub page_size: Option<u32>,

    /// Free-text search.
    #[arg(short = 's', long = "search", value_name = "TEXT", help = "Free-text search")]
    pub search: Option<String>,
}

// ── company ───────────────────────────────────────────────────────────────────

/// Subcommands for `funil company`.
#[derive(Debug, Subcommand)]
pub enum CompanyCommands {
    /// List companies.
    #[command(visible_alias = "ls")]
    List(CompanyListArgs),
    /// Show one company.
    Get { id: i64 },
    /// Create a company (CEP autofills the address).
    Create(CompanyCreateArgs),
    /// Update a company.
    Update(CompanyUpdateArgs),
    /// Delete a company.
    #[command(visible_alias = "rm")]
    Delete { id: i64 },
}

/// Arguments for `funil company list`.
#[derive(Debug, Args)]
pub struct CompanyListArgs {
    #[command(flatten)]
    pub listing: ListingArgs,
}

/// Arguments for `funil company create`.
///
/// The address fields (`--endereco`, `--bairro`, `--cidade`, `--estado`,
/// `--complemento`) may be omitted: they are autofilled from `--cep` when
/// the backend knows the code. Explicit flags always win over autofill.
#[derive(Debug, Args)]
pub struct CompanyCreateArgs {
    #[arg(long, value_name = "CNPJ", help = "Company CNPJ (masked or bare digits)")]
    pub cnpj: String,

    #[arg(long = "razao-social", value_name = "NAME", help = "Legal name")]
    pub razao_social: String,

    #[arg(long = "nome-fantasia", value_name = "NAME", help = "Trade name")]
    pub nome_fantasia: String,

    #[arg(long, value_name = "SECTOR", help = "Industry sector")]
    pub industria: String,

    #[arg(long, value_name = "CEP", help = "Postal code (drives address autofill)")]
    pub cep: String,

    #[arg(long, value_name = "N", help = "House number")]
    pub numero: String,

    #[arg(long, value_name = "STREET", help = "Street (autofilled from CEP if omitted)")]
    pub endereco: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Address complement")]
    pub complemento: Option<String>,

    #[arg(long, value_name = "AREA", help = "Neighborhood (autofilled from CEP if omitted)")]
    pub bairro: Option<String>,

    #[arg(long, value_name = "CITY", help = "City (autofilled from CEP if omitted)")]
    pub cidade: Option<String>,

    #[arg(long, value_name = "UF", help = "State acronym (autofilled from CEP if omitted)")]
    pub estado: Option<String>,

    #[arg(long = "contact-name", value_name = "NAME", help = "First contact's name")]
    pub contact_name: String,

    #[arg(long = "contact-email", value_name = "EMAIL", help = "First contact's email")]
    pub contact_email: String,

    #[arg(long = "contact-phone", value_name = "PHONE", help = "First contact's phone")]
    pub contact_phone: Option<String>,
}

/// Arguments for `funil company update`. Only the given fields change.
#[derive(Debug, Args)]
pub struct CompanyUpdateArgs {
    pub id: i64,

    #[arg(long, value_name = "CNPJ")]
    pub cnpj: Option<String>,

    #[arg(long = "razao-social", value_name = "NAME")]
    pub razao_social: Option<String>,

    #[arg(long = "nome-fantasia", value_name = "NAME")]
    pub nome_fantasia: Option<String>,

    #[arg(long, value_name = "SECTOR")]
    pub industria: Option<String>,

    #[arg(long, value_name = "CEP", help = "New postal code (re-runs address autofill)")]
    pub cep: Option<String>,

    #[arg(long, value_name = "N")]
    pub numero: Option<String>,

    #[arg(long, value_name = "STREET")]
    pub endereco: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub complemento: Option<String>,

    #[arg(long, value_name = "AREA")]
    pub bairro: Option<String>,

    #[arg(long, value_name = "CITY")]
    pub cidade: Option<String>,

    #[arg(long, value_name = "UF")]
    pub estado: Option<String>,

    #[arg(long = "active", value_name = "BOOL", help = "Activate or deactivate")]
    pub is_active: Option<bool>,
}

// ── contact ───────────────────────────────────────────────────────────────────

/// Subcommands for `funil contact`.
#[derive(Debug, Subcommand)]
pub enum ContactCommands {
    /// List contacts.
    #[command(visible_alias = "ls")]
    List(ContactListArgs),
    /// Show one contact.
    Get { id: i64 },
    /// Create a contact.
    Create(ContactCreateArgs),
    /// Update a contact.
    Update(ContactUpdateArgs),
    /// Delete a contact.
    #[command(visible_alias = "rm")]
    Delete { id: i64 },
}

/// Arguments for `funil contact list`.
#[derive(Debug, Args)]
pub struct ContactListArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    /// Only contacts of this company.
    #[arg(long = "company", value_name = "ID", help = "Scope to one company")]
    pub company_id: Option<i64>,
}

/// Arguments for `funil contact create`.
#[derive(Debug, Args)]
pub struct ContactCreateArgs {
    #[arg(long, value_name = "NAME")]
    pub name: String,

    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,

    #[arg(long = "company", value_name = "ID")]
    pub company_id: Option<i64>,
}

/// Arguments for `funil contact update`.
#[derive(Debug, Args)]
pub struct ContactUpdateArgs {
    pub id: i64,

    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,

    #[arg(long = "company", value_name = "ID")]
    pub company_id: Option<i64>,

    #[arg(long = "active", value_name = "BOOL")]
    pub is_active: Option<bool>,
}

// ── lead ──────────────────────────────────────────────────────────────────────

/// Subcommands for `funil lead`.
#[derive(Debug, Subcommand)]
pub enum LeadCommands {
    /// List leads.
    #[command(visible_alias = "ls")]
    List(LeadListArgs),
    /// Show one lead.
    Get { id: i64 },
    /// Pipeline counters per stage and origin.
    Metrics,
    /// Create a lead.
    Create(LeadCreateArgs),
    /// Update a lead.
    Update(LeadUpdateArgs),
    /// Move a lead to another stage.
    #[command(visible_alias = "mv")]
    Move { id: i64, stage: StageArg },
    /// Delete a lead.
    #[command(visible_alias = "rm")]
    Delete { id: i64 },
}

/// Arguments for `funil lead list`.
#[derive(Debug, Args)]
pub struct LeadListArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    #[arg(long, value_enum, help = "Filter by pipeline stage")]
    pub stage: Option<StageArg>,

    #[arg(long, value_enum, help = "Filter by origin")]
    pub origin: Option<OriginArg>,

    #[arg(long = "company", value_name = "ID", help = "Scope to one company")]
    pub company_id: Option<i64>,

    #[arg(long = "start-date", value_name = "DATE", help = "Created on or after (ISO date)")]
    pub start_date: Option<String>,

    #[arg(long = "end-date", value_name = "DATE", help = "Created on or before (ISO date)")]
    pub end_date: Option<String>,

    #[arg(long, help = "Newest first")]
    pub newest: bool,
}

/// Arguments for `funil lead create`.
#[derive(Debug, Args)]
pub struct LeadCreateArgs {
    #[arg(long, value_name = "NAME")]
    pub name: String,

    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,

    #[arg(long = "company", value_name = "ID")]
    pub company_id: Option<i64>,

    #[arg(long = "contact", value_name = "ID")]
    pub contact_id: Option<i64>,

    #[arg(long, value_enum)]
    pub origin: Option<OriginArg>,

    #[arg(long, value_enum)]
    pub stage: Option<StageArg>,

    #[arg(long = "value", value_name = "BRL", help = "Estimated deal value")]
    pub estimated_value: Option<f64>,

    #[arg(long, value_name = "TEXT")]
    pub notes: Option<String>,
}

/// Arguments for `funil lead update`.
#[derive(Debug, Args)]
pub struct LeadUpdateArgs {
    pub id: i64,

    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,

    #[arg(long, value_enum)]
    pub origin: Option<OriginArg>,

    #[arg(long, value_enum)]
    pub stage: Option<StageArg>,

    #[arg(long = "value", value_name = "BRL")]
    pub estimated_value: Option<f64>,

    #[arg(long, value_name = "TEXT")]
    pub notes: Option<String>,
}

// ── appointment ───────────────────────────────────────────────────────────────

/// Subcommands for `funil appointment`.
#[derive(Debug, Subcommand)]
pub enum AppointmentCommands {
    /// List appointments.
    #[command(visible_alias = "ls")]
    List(AppointmentListArgs),
    /// Show one appointment.
    Get { id: i64 },
    /// Create an appointment.
    Create(AppointmentCreateArgs),
    /// Update an appointment.
    Update(AppointmentUpdateArgs),
    /// Delete an appointment.
    #[command(visible_alias = "rm")]
    Delete { id: i64 },
}

/// Arguments for `funil appointment list`.
#[derive(Debug, Args)]
pub struct AppointmentListArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    #[arg(long, value_enum, help = "Filter by status")]
    pub status: Option<StatusArg>,

    #[arg(long = "company", value_name = "ID", help = "Scope to one company")]
    pub company_id: Option<i64>,

    #[arg(long = "start-date", value_name = "DATE")]
    pub start_date: Option<String>,

    #[arg(long = "end-date", value_name = "DATE")]
    pub end_date: Option<String>,
}

/// Arguments for `funil appointment create`.
#[derive(Debug, Args)]
pub struct AppointmentCreateArgs {
    #[arg(long, value_name = "TITLE")]
    pub title: String,

    /// RFC 3339 date-time, e.g. `2026-09-01T14:00:00Z`.
    #[arg(long, value_name = "DATETIME")]
    pub date: String,

    #[arg(long = "company", value_name = "ID")]
    pub company_id: i64,

    #[arg(long = "contact", value_name = "ID")]
    pub contact_id: Option<i64>,

    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    #[arg(long = "duration", value_name = "MINUTES")]
    pub duration_minutes: Option<u32>,

    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
}

/// Arguments for `funil appointment update`.
#[derive(Debug, Args)]
pub struct AppointmentUpdateArgs {
    pub id: i64,

    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    #[arg(long, value_name = "DATETIME")]
    pub date: Option<String>,

    #[arg(long = "company", value_name = "ID")]
    pub company_id: Option<i64>,

    #[arg(long = "contact", value_name = "ID")]
    pub contact_id: Option<i64>,

    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    #[arg(long = "duration", value_name = "MINUTES")]
    pub duration_minutes: Option<u32>,

    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
}

// ── cep ───────────────────────────────────────────────────────────────────────

/// Arguments for `funil cep`.
#[derive(Debug, Args)]
pub struct CepArgs {
    /// Postal code, masked (`01310-100`) or bare digits.
    #[arg(value_name = "CEP", help = "Postal code to resolve")]
    pub code: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `funil completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// CLI spelling of [`LeadStage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum StageArg {
    New,
    Qualification,
    Proposal,
    #[value(alias = "followup")]
    FollowUp,
    Won,
    Lost,
}

impl From<StageArg> for LeadStage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::New => Self::New,
            StageArg::Qualification => Self::Qualification,
            StageArg::Proposal => Self::Proposal,
            StageArg::FollowUp => Self::FollowUp,
            StageArg::Won => Self::Won,
            StageArg::Lost => Self::Lost,
        }
    }
}

/// CLI spelling of [`LeadOrigin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OriginArg {
    Website,
    Campaign,
    Referral,
    Outbound,
    Other,
}

impl From<OriginArg> for LeadOrigin {
    fn from(arg: OriginArg) -> Self {
        match arg {
            OriginArg::Website => Self::Website,
            OriginArg::Campaign => Self::Campaign,
            OriginArg::Referral => Self::Referral,
            OriginArg::Outbound => Self::Outbound,
            OriginArg::Other => Self::Other,
        }
    }
}

/// CLI spelling of [`AppointmentStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StatusArg {
    Scheduled,
    Done,
    #[value(alias = "canceled")]
    Cancelled,
}

impl From<StatusArg> for AppointmentStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Scheduled => Self::Scheduled,
            StatusArg::Done => Self::Done,
            StatusArg::Cancelled => Self::Cancelled,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn stage_arg_maps_to_domain() {
        assert_eq!(LeadStage::from(StageArg::FollowUp), LeadStage::FollowUp);
        assert_eq!(LeadStage::from(StageArg::Won), LeadStage::Won);
    }

    #[test]
    fn parse_cep_command() {
        let cli = Cli::parse_from(["funil", "cep", "01310-100"]);
        if let Commands::Cep(args) = cli.command {
            assert_eq!(args.code, "01310-100");
        } else {
            panic!("expected cep command");
        }
    }

    #[test]
    fn parse_lead_move() {
        let cli = Cli::parse_from(["funil", "lead", "move", "42", "follow-up"]);
        if let Commands::Lead(LeadCommands::Move { id, stage }) = cli.command {
            assert_eq!(id, 42);
            assert_eq!(stage, StageArg::FollowUp);
        } else {
            panic!("expected lead move");
        }
    }

    #[test]
    fn parse_company_create_with_autofill_fields_omitted() {
        let cli = Cli::parse_from([
            "funil",
            "company",
            "create",
            "--cnpj",
            "12345678000190",
            "--razao-social",
            "ACME Ltda",
            "--nome-fantasia",
            "ACME",
            "--industria",
            "Tecnologia",
            "--cep",
            "01310-100",
            "--numero",
            "1000",
            "--contact-name",
            "Ana",
            "--contact-email",
            "ana@acme.com",
        ]);
        if let Commands::Company(CompanyCommands::Create(args)) = cli.command {
            assert!(args.endereco.is_none());
            assert_eq!(args.cep, "01310-100");
        } else {
            panic!("expected company create");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["funil", "--quiet", "--verbose", "cep", "01310100"]);
        assert!(result.is_err());
    }

    #[test]
    fn cancelled_status_accepts_both_spellings() {
        let cli = Cli::parse_from(["funil", "appointment", "list", "--status", "canceled"]);
        if let Commands::Appointment(AppointmentCommands::List(args)) = cli.command {
            assert_eq!(args.status, Some(StatusArg::Cancelled));
        } else {
            panic!("expected appointment list");
        }
    }
}
