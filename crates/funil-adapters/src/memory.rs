//! In-memory adapters for testing and offline demos.
//!
//! [`InMemoryCrm`] implements the four CRUD ports over plain maps so services
//! and commands can be exercised without a backend. [`StaticPostalCodeLookup`]
//! serves canned postal-code results and records how often it was asked, which
//! is how the dispatch-gating behavior of the autofill is asserted.

use std::{
    collections::HashMap,
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use chrono::{DateTime, Utc};

use funil_core::application::ApplicationError;
use funil_core::application::ports::{
    AppointmentBook, CompanyDirectory, ContactDirectory, LeadPipeline, NotificationSink,
    PostalCodeLookup,
};
use funil_core::domain::{
    Appointment, AppointmentFilters, Company, Contact, CreateAppointment, CreateCompany,
    CreateContact, CreateLead, Lead, LeadFilters, LeadMetrics, LeadSortBy, LeadStage, PageRequest,
    Paginated, PaginatedLeads, PaginationMeta, PostalCodeResult, UpdateAppointment, UpdateCompany,
    UpdateContact, UpdateLead,
};
use funil_core::error::{FunilError, FunilResult};

const DEFAULT_PAGE_SIZE: u32 = 10;

// ── InMemoryCrm ───────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct CrmInner {
    companies: HashMap<i64, Company>,
    contacts: HashMap<i64, Contact>,
    leads: HashMap<i64, Lead>,
    appointments: HashMap<i64, Appointment>,
    next_id: i64,
}

/// In-memory CRM store implementing all four resource ports.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCrm {
    inner: Arc<RwLock<CrmInner>>,
}

impl InMemoryCrm {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> FunilResult<std::sync::RwLockReadGuard<'_, CrmInner>> {
        self.inner.read().map_err(|_| FunilError::Internal {
            message: "in-memory store lock poisoned".into(),
        })
    }

    fn write(&self) -> FunilResult<std::sync::RwLockWriteGuard<'_, CrmInner>> {
        self.inner.write().map_err(|_| FunilError::Internal {
            message: "in-memory store lock poisoned".into(),
        })
    }
}

impl CrmInner {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Slice `items` into the requested page, mirroring the backend's meta shape.
fn paginate<T: Clone>(mut items: Vec<T>, page: Option<u32>, page_size: Option<u32>) -> Paginated<T> {
    let page = page.unwrap_or(1).max(1);
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let total_items = items.len() as u64;
    let total_pages = total_items.div_ceil(page_size as u64) as u32;

    let start = ((page - 1) * page_size) as usize;
    let data: Vec<T> = if start >= items.len() {
        Vec::new()
    } else {
        items.drain(start..).take(page_size as usize).collect()
    };

    Paginated {
        data,
        meta: PaginationMeta {
            page,
            page_size,
            total_items,
            total_pages,
        },
    }
}

/// RFC 3339 date bound; values that fail to parse place no bound.
fn parse_date_bound(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .ok()
}

/// Pipeline position, used to order listings sorted by stage.
fn stage_rank(stage: LeadStage) -> usize {
    LeadStage::ALL
        .iter()
        .position(|s| *s == stage)
        .unwrap_or(LeadStage::ALL.len())
}

fn matches_search(haystacks: &[&str], search: Option<&str>) -> bool {
    match search {
        None => true,
        Some(needle) => {
            let needle = needle.to_lowercase();
            haystacks
                .iter()
                .any(|h| h.to_lowercase().contains(&needle))
        }
    }
}

impl CompanyDirectory for InMemoryCrm {
    fn list(&self, request: &PageRequest) -> FunilResult<Paginated<Company>> {
        let inner = self.read()?;
        let mut companies: Vec<Company> = inner
            .companies
            .values()
            .filter(|c| {
                matches_search(
                    &[&c.razao_social, &c.nome_fantasia, &c.cnpj],
                    request.search.as_deref(),
                )
            })
            .cloned()
            .collect();
        companies.sort_by_key(|c| c.id);
        Ok(paginate(companies, request.page, request.page_size))
    }

    fn get(&self, id: i64) -> FunilResult<Company> {
        let inner = self.read()?;
        inner.companies.get(&id).cloned().ok_or_else(|| {
            ApplicationError::NotFound {
                resource: "company",
                id,
            }
            .into()
        })
    }

    fn create(&self, payload: &CreateCompany) -> FunilResult<Company> {
        let mut inner = self.write()?;
        let id = inner.allocate_id();
        let contact_id = inner.allocate_id();
        let now = Utc::now().to_rfc3339();

        let contact = Contact {
            id: Some(contact_id),
            name: payload.contact.name.clone(),
            email: payload.contact.email.clone(),
            phone: payload.contact.phone.clone(),
            company_id: Some(id),
            is_active: Some(true),
            company: None,
        };
        inner.contacts.insert(contact_id, contact.clone());

        let company = Company {
            id,
            cnpj: payload.cnpj.clone(),
            razao_social: payload.razao_social.clone(),
            nome_fantasia: payload.nome_fantasia.clone(),
            industria: payload.industria.clone(),
            endereco: payload.endereco.clone(),
            complemento: payload.complemento.clone(),
            numero: payload.numero.clone(),
            bairro: payload.bairro.clone(),
            cep: payload.cep.clone(),
            cidade: payload.cidade.clone(),
            estado: payload.estado.clone(),
            is_active: true,
            contacts: vec![contact],
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };
        inner.companies.insert(id, company.clone());
        Ok(company)
    }

    fn update(&self, id: i64, payload: &UpdateCompany) -> FunilResult<Company> {
        let mut inner = self.write()?;
        let company = inner.companies.get_mut(&id).ok_or(ApplicationError::NotFound {
            resource: "company",
            id,
        })?;

        if let Some(v) = &payload.cnpj {
            company.cnpj = v.clone();
        }
        if let Some(v) = &payload.razao_social {
            company.razao_social = v.clone();
        }
        if let Some(v) = &payload.nome_fantasia {
            company.nome_fantasia = v.clone();
        }
        if let Some(v) = &payload.industria {
            company.industria = v.clone();
        }
        if let Some(v) = &payload.endereco {
            company.endereco = v.clone();
        }
        if let Some(v) = &payload.complemento {
            company.complemento = Some(v.clone());
        }
        if let Some(v) = &payload.numero {
            company.numero = v.clone();
        }
        if let Some(v) = &payload.bairro {
            company.bairro = v.clone();
        }
        if let Some(v) = &payload.cep {
            company.cep = v.clone();
        }
        if let Some(v) = &payload.cidade {
            company.cidade = v.clone();
        }
        if let Some(v) = &payload.estado {
            company.estado = v.clone();
        }
        if let Some(v) = payload.is_active {
            company.is_active = v;
        }
        company.updated_at = Some(Utc::now().to_rfc3339());
        Ok(company.clone())
    }

    fn remove(&self, id: i64) -> FunilResult<()> {
        let mut inner = self.write()?;
        inner
            .companies
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| {
                ApplicationError::NotFound {
                    resource: "company",
                    id,
                }
                .into()
            })
    }
}

impl ContactDirectory for InMemoryCrm {
    fn list(
        &self,
        request: &PageRequest,
        company_id: Option<i64>,
    ) -> FunilResult<Paginated<Contact>> {
        let inner = self.read()?;
        let mut contacts: Vec<Contact> = inner
            .contacts
            .values()
            .filter(|c| company_id.is_none() || c.company_id == company_id)
            .filter(|c| matches_search(&[&c.name, &c.email], request.search.as_deref()))
            .cloned()
            .collect();
        contacts.sort_by_key(|c| c.id);
        Ok(paginate(contacts, request.page, request.page_size))
    }

    fn get(&self, id: i64) -> FunilResult<Contact> {
        let inner = self.read()?;
        inner.contacts.get(&id).cloned().ok_or_else(|| {
            ApplicationError::NotFound {
                resource: "contact",
                id,
            }
            .into()
        })
    }

    fn create(&self, payload: &CreateContact) -> FunilResult<Contact> {
        let mut inner = self.write()?;
        let id = inner.allocate_id();
        let contact = Contact {
            id: Some(id),
            name: payload.name.clone(),
            email: payload.email.clone(),
            phone: payload.phone.clone(),
            company_id: payload.company_id,
            is_active: Some(payload.is_active.unwrap_or(true)),
            company: None,
        };
        inner.contacts.insert(id, contact.clone());
        Ok(contact)
    }

    fn update(&self, id: i64, payload: &UpdateContact) -> FunilResult<Contact> {
        let mut inner = self.write()?;
        let contact = inner.contacts.get_mut(&id).ok_or(ApplicationError::NotFound {
            resource: "contact",
            id,
        })?;

        if let Some(v) = &payload.name {
            contact.name = v.clone();
        }
        if let Some(v) = &payload.email {
            contact.email = v.clone();
        }
        if let Some(v) = &payload.phone {
            contact.phone = Some(v.clone());
        }
        if let Some(v) = payload.company_id {
            contact.company_id = Some(v);
        }
        if let Some(v) = payload.is_active {
            contact.is_active = Some(v);
        }
        Ok(contact.clone())
    }

    fn remove(&self, id: i64) -> FunilResult<()> {
        let mut inner = self.write()?;
        inner
            .contacts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| {
                ApplicationError::NotFound {
                    resource: "contact",
                    id,
                }
                .into()
            })
    }
}

impl LeadPipeline for InMemoryCrm {
    fn list(&self, filters: &LeadFilters) -> FunilResult<PaginatedLeads> {
        let inner = self.read()?;
        // Timestamps are RFC 3339 strings in a single timezone, so the date
        // window is a plain lexicographic comparison on createdAt.
        let mut leads: Vec<Lead> = inner
            .leads
            .values()
            .filter(|l| filters.stage.is_none_or(|s| l.stage == s))
            .filter(|l| filters.origin.is_none_or(|o| l.origin == Some(o)))
            .filter(|l| {
                filters.company_id.is_none() || l.company_id == filters.company_id
            })
            .filter(|l| {
                filters
                    .start_date
                    .as_deref()
                    .is_none_or(|start| l.created_at.as_str() >= start)
            })
            .filter(|l| {
                filters
                    .end_date
                    .as_deref()
                    .is_none_or(|end| l.created_at.as_str() <= end)
            })
            .filter(|l| matches_search(&[&l.name], filters.search.as_deref()))
            .cloned()
            .collect();
        match filters.sort_by.unwrap_or_default() {
            LeadSortBy::CreatedAt => {
                leads.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            }
            LeadSortBy::UpdatedAt => {
                leads.sort_by(|a, b| a.updated_at.cmp(&b.updated_at).then(a.id.cmp(&b.id)));
            }
            LeadSortBy::Name => {
                leads.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
            }
            LeadSortBy::Stage => {
                leads.sort_by(|a, b| {
                    stage_rank(a.stage)
                        .cmp(&stage_rank(b.stage))
                        .then(a.id.cmp(&b.id))
                });
            }
        }
        if filters.descending {
            leads.reverse();
        }

        let paged = paginate(leads, filters.page, filters.page_size);
        Ok(PaginatedLeads {
            data: paged.data,
            pagination: paged.meta,
        })
    }

    fn get(&self, id: i64) -> FunilResult<Lead> {
        let inner = self.read()?;
        inner.leads.get(&id).cloned().ok_or_else(|| {
            ApplicationError::NotFound {
                resource: "lead",
                id,
            }
            .into()
        })
    }

    fn metrics(&self) -> FunilResult<LeadMetrics> {
        let inner = self.read()?;
        let mut per_stage: HashMap<String, u64> = HashMap::new();
        let mut per_origin: HashMap<String, u64> = HashMap::new();
        for lead in inner.leads.values() {
            *per_stage.entry(lead.stage.as_str().to_string()).or_default() += 1;
            if let Some(origin) = lead.origin {
                *per_origin.entry(origin.as_str().to_string()).or_default() += 1;
            }
        }
        Ok(LeadMetrics {
            total: inner.leads.len() as u64,
            per_stage,
            per_origin,
        })
    }

    fn create(&self, payload: &CreateLead) -> FunilResult<Lead> {
        let mut inner = self.write()?;
        let id = inner.allocate_id();
        let now = Utc::now().to_rfc3339();
        let lead = Lead {
            id,
            name: payload.name.clone(),
            company_id: payload.company_id,
            contact_id: payload.contact_id,
            email: payload.email.clone(),
            phone: payload.phone.clone(),
            origin: payload.origin,
            stage: payload.stage.unwrap_or(LeadStage::New),
            estimated_value: payload.estimated_value,
            last_interaction_at: None,
            next_step: payload.next_step.clone(),
            next_step_at: payload.next_step_at.clone(),
            notes: payload.notes.clone(),
            is_active: true,
            created_at: now.clone(),
            updated_at: now,
            company: None,
            contact: None,
        };
        inner.leads.insert(id, lead.clone());
        Ok(lead)
    }

    fn update(&self, id: i64, payload: &UpdateLead) -> FunilResult<Lead> {
        let mut inner = self.write()?;
        let lead = inner.leads.get_mut(&id).ok_or(ApplicationError::NotFound {
            resource: "lead",
            id,
        })?;

        if let Some(v) = &payload.name {
            lead.name = v.clone();
        }
        if let Some(v) = &payload.email {
            lead.email = Some(v.clone());
        }
        if let Some(v) = &payload.phone {
            lead.phone = Some(v.clone());
        }
        if let Some(v) = payload.company_id {
            lead.company_id = Some(v);
        }
        if let Some(v) = payload.contact_id {
            lead.contact_id = Some(v);
        }
        if let Some(v) = payload.origin {
            lead.origin = Some(v);
        }
        if let Some(v) = payload.stage {
            lead.stage = v;
        }
        if let Some(v) = payload.estimated_value {
            lead.estimated_value = Some(v);
        }
        if let Some(v) = &payload.next_step {
            lead.next_step = Some(v.clone());
        }
        if let Some(v) = &payload.next_step_at {
            lead.next_step_at = Some(v.clone());
        }
        if let Some(v) = &payload.notes {
            lead.notes = Some(v.clone());
        }
        lead.updated_at = Utc::now().to_rfc3339();
        Ok(lead.clone())
    }

    fn move_stage(&self, id: i64, stage: LeadStage) -> FunilResult<Lead> {
        let mut inner = self.write()?;
        let lead = inner.leads.get_mut(&id).ok_or(ApplicationError::NotFound {
            resource: "lead",
            id,
        })?;
        lead.stage = stage;
        lead.updated_at = Utc::now().to_rfc3339();
        Ok(lead.clone())
    }

    fn remove(&self, id: i64) -> FunilResult<()> {
        let mut inner = self.write()?;
        inner
            .leads
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| {
                ApplicationError::NotFound {
                    resource: "lead",
                    id,
                }
                .into()
            })
    }
}

impl AppointmentBook for InMemoryCrm {
    fn list(&self, filters: &AppointmentFilters) -> FunilResult<Paginated<Appointment>> {
        let inner = self.read()?;
        let start = filters.start_date.as_deref().and_then(parse_date_bound);
        let end = filters.end_date.as_deref().and_then(parse_date_bound);
        let mut appointments: Vec<Appointment> = inner
            .appointments
            .values()
            .filter(|a| filters.status.is_none_or(|s| a.status == s))
            .filter(|a| {
                filters.company_id.is_none() || Some(a.company_id) == filters.company_id
            })
            .filter(|a| start.is_none_or(|s| a.date >= s))
            .filter(|a| end.is_none_or(|e| a.date <= e))
            .filter(|a| matches_search(&[&a.title], filters.search.as_deref()))
            .cloned()
            .collect();
        appointments.sort_by_key(|a| (a.date, a.id));
        Ok(paginate(appointments, filters.page, filters.page_size))
    }

    fn get(&self, id: i64) -> FunilResult<Appointment> {
        let inner = self.read()?;
        inner.appointments.get(&id).cloned().ok_or_else(|| {
            ApplicationError::NotFound {
                resource: "appointment",
                id,
            }
            .into()
        })
    }

    fn create(&self, payload: &CreateAppointment) -> FunilResult<Appointment> {
        let mut inner = self.write()?;
        let id = inner.allocate_id();
        let appointment = Appointment {
            id,
            title: payload.title.clone(),
            date: payload.date,
            company_id: payload.company_id,
            contact_id: payload.contact_id,
            description: payload.description.clone(),
            duration_minutes: payload.duration_minutes,
            status: payload
                .status
                .unwrap_or(funil_core::domain::AppointmentStatus::Scheduled),
            is_active: true,
            company: None,
            contact: None,
        };
        inner.appointments.insert(id, appointment.clone());
        Ok(appointment)
    }

    fn update(&self, id: i64, payload: &UpdateAppointment) -> FunilResult<Appointment> {
        let mut inner = self.write()?;
        let appointment = inner
            .appointments
            .get_mut(&id)
            .ok_or(ApplicationError::NotFound {
                resource: "appointment",
                id,
            })?;

        if let Some(v) = &payload.title {
            appointment.title = v.clone();
        }
        if let Some(v) = payload.date {
            appointment.date = v;
        }
        if let Some(v) = payload.company_id {
            appointment.company_id = v;
        }
        if let Some(v) = payload.contact_id {
            appointment.contact_id = Some(v);
        }
        if let Some(v) = &payload.description {
            appointment.description = Some(v.clone());
        }
        if let Some(v) = payload.duration_minutes {
            appointment.duration_minutes = Some(v);
        }
        if let Some(v) = payload.status {
            appointment.status = v;
        }
        Ok(appointment.clone())
    }

    fn remove(&self, id: i64) -> FunilResult<()> {
        let mut inner = self.write()?;
        inner
            .appointments
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| {
                ApplicationError::NotFound {
                    resource: "appointment",
                    id,
                }
                .into()
            })
    }
}

// ── StaticPostalCodeLookup ────────────────────────────────────────────────────

/// Canned postal-code lookup with a dispatch counter.
///
/// `calls()` exposes how many lookups were actually performed, which lets
/// tests assert the gating behavior (one dispatch per stable value).
#[derive(Debug, Default)]
pub struct StaticPostalCodeLookup {
    results: HashMap<String, PostalCodeResult>,
    calls: AtomicUsize,
    failing: RwLock<bool>,
}

impl StaticPostalCodeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a result for its own `cep` digits.
    pub fn with(mut self, result: PostalCodeResult) -> Self {
        self.results.insert(result.cep.clone(), result);
        self
    }

    /// Make every subsequent lookup fail with a transport error.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.write().unwrap_or_else(PoisonError::into_inner) = failing;
    }

    /// Number of lookups dispatched so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PostalCodeLookup for StaticPostalCodeLookup {
    fn lookup(&self, digits: &str) -> FunilResult<Option<PostalCodeResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let failing = *self.failing.read().map_err(|_| FunilError::Internal {
            message: "postal lookup flag lock poisoned".into(),
        })?;
        if failing {
            return Err(ApplicationError::Transport {
                reason: "simulated network failure".into(),
            }
            .into());
        }
        Ok(self.results.get(digits).cloned())
    }
}

// ── RecordingNotifications ────────────────────────────────────────────────────

/// What a [`RecordingNotifications`] sink has captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNotification {
    pub is_error: bool,
    pub title: String,
    pub detail: String,
}

/// Notification sink that records everything for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifications {
    recorded: RwLock<Vec<RecordedNotification>>,
}

impl RecordingNotifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<RecordedNotification> {
        self.recorded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn errors(&self) -> Vec<RecordedNotification> {
        self.all().into_iter().filter(|n| n.is_error).collect()
    }
}

impl NotificationSink for RecordingNotifications {
    fn notify_success(&self, title: &str, detail: &str) {
        self.recorded
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedNotification {
                is_error: false,
                title: title.to_string(),
                detail: detail.to_string(),
            });
    }

    fn notify_error(&self, title: &str, detail: &str) {
        self.recorded
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedNotification {
                is_error: true,
                title: title.to_string(),
                detail: detail.to_string(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_company() -> CreateCompany {
        CreateCompany {
            cnpj: "12345678000190".into(),
            razao_social: "ACME Ltda".into(),
            nome_fantasia: "ACME".into(),
            industria: "Tecnologia".into(),
            endereco: "Av. Paulista".into(),
            complemento: None,
            numero: "1000".into(),
            bairro: "Bela Vista".into(),
            cep: "01310-100".into(),
            cidade: "São Paulo".into(),
            estado: "SP".into(),
            contact: CreateContact {
                name: "Ana".into(),
                email: "ana@acme.com".into(),
                phone: None,
                company_id: None,
                is_active: None,
            },
        }
    }

    #[test]
    fn company_crud_round_trip() {
        let crm = InMemoryCrm::new();
        let created = CompanyDirectory::create(&crm, &sample_company()).unwrap();
        assert_eq!(created.contacts.len(), 1);

        let fetched = CompanyDirectory::get(&crm, created.id).unwrap();
        assert_eq!(fetched.razao_social, "ACME Ltda");

        let patched = CompanyDirectory::update(
            &crm,
            created.id,
            &UpdateCompany {
                nome_fantasia: Some("ACME Corp".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(patched.nome_fantasia, "ACME Corp");
        assert_eq!(patched.cnpj, created.cnpj);

        CompanyDirectory::remove(&crm, created.id).unwrap();
        assert!(CompanyDirectory::get(&crm, created.id).is_err());
    }

    #[test]
    fn company_listing_searches_and_paginates() {
        let crm = InMemoryCrm::new();
        for i in 0..15 {
            let mut payload = sample_company();
            payload.razao_social = format!("Empresa {i}");
            CompanyDirectory::create(&crm, &payload).unwrap();
        }

        let page = CompanyDirectory::list(
            &crm,
            &PageRequest {
                page: Some(2),
                page_size: Some(10),
                search: None,
            },
        )
        .unwrap();
        assert_eq!(page.data.len(), 5);
        assert_eq!(page.meta.total_items, 15);
        assert_eq!(page.meta.total_pages, 2);

        let found = CompanyDirectory::list(
            &crm,
            &PageRequest {
                search: Some("empresa 3".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(found.data.len(), 1);
    }

    #[test]
    fn lead_metrics_count_per_stage_and_origin() {
        let crm = InMemoryCrm::new();
        for stage in [LeadStage::New, LeadStage::New, LeadStage::Won] {
            LeadPipeline::create(
                &crm,
                &CreateLead {
                    name: "d".into(),
                    stage: Some(stage),
                    origin: Some(funil_core::domain::LeadOrigin::Website),
                    ..Default::default()
                },
            )
            .unwrap();
        }

        let metrics = LeadPipeline::metrics(&crm).unwrap();
        assert_eq!(metrics.total, 3);
        assert_eq!(metrics.per_stage.get("NEW"), Some(&2));
        assert_eq!(metrics.per_stage.get("WON"), Some(&1));
        assert_eq!(metrics.per_origin.get("WEBSITE"), Some(&3));
    }

    #[test]
    fn move_stage_updates_lead() {
        let crm = InMemoryCrm::new();
        let lead = LeadPipeline::create(
            &crm,
            &CreateLead {
                name: "Big deal".into(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(lead.stage, LeadStage::New);

        let moved = LeadPipeline::move_stage(&crm, lead.id, LeadStage::Proposal).unwrap();
        assert_eq!(moved.stage, LeadStage::Proposal);
    }

    fn sample_appointment(title: &str, date: &str) -> CreateAppointment {
        CreateAppointment {
            title: title.into(),
            date: date.parse().unwrap(),
            company_id: 1,
            contact_id: None,
            description: None,
            duration_minutes: None,
            status: None,
        }
    }

    #[test]
    fn lead_listing_honours_the_date_window() {
        let crm = InMemoryCrm::new();
        for name in ["Alfa", "Beta"] {
            LeadPipeline::create(
                &crm,
                &CreateLead {
                    name: name.into(),
                    ..Default::default()
                },
            )
            .unwrap();
        }

        let all = LeadPipeline::list(
            &crm,
            &LeadFilters {
                start_date: Some("2000-01-01T00:00:00+00:00".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(all.data.len(), 2);

        let future_only = LeadPipeline::list(
            &crm,
            &LeadFilters {
                start_date: Some("2999-01-01T00:00:00+00:00".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(future_only.data.is_empty());

        let past_only = LeadPipeline::list(
            &crm,
            &LeadFilters {
                end_date: Some("2000-01-01T00:00:00+00:00".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(past_only.data.is_empty());
    }

    #[test]
    fn lead_listing_sorts_by_name_and_stage() {
        let crm = InMemoryCrm::new();
        for (name, stage) in [
            ("Zeta", LeadStage::Won),
            ("Alfa", LeadStage::New),
            ("Meio", LeadStage::Proposal),
        ] {
            LeadPipeline::create(
                &crm,
                &CreateLead {
                    name: name.into(),
                    stage: Some(stage),
                    ..Default::default()
                },
            )
            .unwrap();
        }

        let by_name = LeadPipeline::list(
            &crm,
            &LeadFilters {
                sort_by: Some(funil_core::domain::LeadSortBy::Name),
                ..Default::default()
            },
        )
        .unwrap();
        let names: Vec<&str> = by_name.data.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Alfa", "Meio", "Zeta"]);

        let by_stage_desc = LeadPipeline::list(
            &crm,
            &LeadFilters {
                sort_by: Some(funil_core::domain::LeadSortBy::Stage),
                descending: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(by_stage_desc.data[0].stage, LeadStage::Won);
    }

    #[test]
    fn appointment_listing_honours_the_date_window() {
        let crm = InMemoryCrm::new();
        AppointmentBook::create(&crm, &sample_appointment("Kickoff", "2026-09-01T14:00:00Z"))
            .unwrap();
        AppointmentBook::create(&crm, &sample_appointment("Review", "2026-10-01T14:00:00Z"))
            .unwrap();

        let october = AppointmentBook::list(
            &crm,
            &AppointmentFilters {
                start_date: Some("2026-09-15T00:00:00Z".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(october.data.len(), 1);
        assert_eq!(october.data[0].title, "Review");

        let september = AppointmentBook::list(
            &crm,
            &AppointmentFilters {
                end_date: Some("2026-09-15T00:00:00Z".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(september.data.len(), 1);
        assert_eq!(september.data[0].title, "Kickoff");
    }

    #[test]
    fn static_lookup_counts_calls_and_fails_on_demand() {
        let lookup = StaticPostalCodeLookup::new();
        assert_eq!(lookup.lookup("01310100").unwrap(), None);
        assert_eq!(lookup.calls(), 1);

        lookup.set_failing(true);
        assert!(lookup.lookup("01310100").is_err());
        assert_eq!(lookup.calls(), 2);
    }

    #[test]
    fn poisoned_failure_flag_is_an_internal_error() {
        let lookup = Arc::new(StaticPostalCodeLookup::new());
        let poisoner = Arc::clone(&lookup);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.failing.write().unwrap();
            panic!("poison the flag lock");
        })
        .join();

        assert!(matches!(
            lookup.lookup("01310100"),
            Err(FunilError::Internal { .. })
        ));
    }

    #[test]
    fn recording_sink_survives_a_poisoned_lock() {
        let sink = Arc::new(RecordingNotifications::new());
        let poisoner = Arc::clone(&sink);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.recorded.write().unwrap();
            panic!("poison the record lock");
        })
        .join();

        sink.notify_error("CEP não encontrado", "detalhe");
        assert_eq!(sink.errors().len(), 1);
    }
}
