//! Address Autofill - the postal-code-driven form controller.
//!
//! Coordinates the CEP field of the company form with an asynchronous
//! postal-code lookup and the dependent address fields (endereço, bairro,
//! cidade, estado, complemento) plus the editability of the house number.
//!
//! ## State machine
//!
//! The controller is an explicit state machine driven by two entry points:
//!
//! - [`AddressAutofill::on_query_changed`] — the *lookup gate*. Must be
//!   called every time the CEP value changes, for any reason (keystrokes and
//!   programmatic writes alike). Decides whether a lookup should fire,
//!   be skipped, or be ignored, and returns the [`LookupTag`] to dispatch.
//! - [`AddressAutofill::apply_outcome`] — the *race guard* plus *field
//!   populator*. Called when a dispatched lookup resolves. Only the outcome
//!   whose tag still matches the live query may touch the form; stale
//!   responses are dropped silently.
//!
//! In-flight requests are never cancelled: a superseded lookup is allowed
//! to complete and is then discarded by the race guard (fire-and-ignore).
//! [`AddressAutofill::dispose`] ends the form session, after which every
//! outstanding tag is permanently stale.
//!
//! No outcome ever leaves the form partially populated: the five dependent
//! fields are always written together (success) or cleared together
//! (failure/reset).

use tracing::{debug, error, trace};

use crate::application::ports::{AddressField, AddressForm, NotificationSink, PostalCodeLookup};
use crate::domain::postal::{CEP_LEN, format_cep, sanitize_digits};
use crate::domain::PostalCodeResult;
use crate::error::FunilResult;

/// Correlates a dispatched lookup with the query value that triggered it.
///
/// Ephemeral: exists only for the duration of one in-flight request and is
/// compared against the live query at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTag(String);

impl LookupTag {
    /// The 8-digit query this lookup was dispatched for.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

/// The autofill controller for one form session.
pub struct AddressAutofill {
    /// Sanitized digits of the CEP field as of the last change event.
    current_query: String,
    /// The most recent 8-digit value a lookup was dispatched for.
    last_dispatched: Option<String>,
    /// Whether the dependent fields currently hold a lookup result.
    has_applied_result: bool,
    /// Sanitized CEP of the record being edited, when in edit mode.
    original_cep: Option<String>,
    /// Set by `dispose`; makes every outstanding tag permanently stale.
    disposed: bool,
}

impl AddressAutofill {
    /// Controller for a blank form (create mode).
    pub fn new() -> Self {
        Self {
            current_query: String::new(),
            last_dispatched: None,
            has_applied_result: false,
            original_cep: None,
            disposed: false,
        }
    }

    /// Controller for a form pre-filled from a stored record (edit mode).
    ///
    /// When the stored CEP already has 8 digits the record's address fields
    /// are presumed correct: the controller marks the value as resolved and
    /// enables house-number editing **without** dispatching a lookup.
    pub fn for_existing_record(existing_cep: &str, form: &mut dyn AddressForm) -> Self {
        let digits = sanitize_digits(existing_cep);
        let mut controller = Self::new();

        if digits.len() == CEP_LEN {
            controller.current_query = digits.clone();
            controller.last_dispatched = Some(digits.clone());
            controller.has_applied_result = true;
            controller.original_cep = Some(digits);
            form.set_numero_editable(true);
        } else {
            controller.original_cep = Some(digits);
        }

        controller
    }

    /// Whether the dependent fields currently hold an applied lookup result.
    pub fn has_applied_result(&self) -> bool {
        self.has_applied_result
    }

    /// End the form session. Any lookup still in flight will be ignored
    /// when it resolves.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    /// The lookup gate: evaluate a change of the CEP value.
    ///
    /// Returns `Some(tag)` when a lookup must be dispatched for the
    /// normalized value, `None` otherwise. The caller is responsible for
    /// performing the lookup and feeding the result to [`Self::apply_outcome`]
    /// with the returned tag.
    pub fn on_query_changed(
        &mut self,
        raw: &str,
        form: &mut dyn AddressForm,
    ) -> Option<LookupTag> {
        let digits = sanitize_digits(raw);
        self.current_query = digits.clone();

        if digits.len() != CEP_LEN {
            // Incomplete value: normal, silent condition. Tear down any
            // previously applied result so the form never shows an address
            // for a code the user has deleted.
            if self.has_applied_result {
                self.reset_dependent_fields(form);
            }
            self.last_dispatched = None;
            form.clear_cep_error();
            return None;
        }

        if self.last_dispatched.as_deref() == Some(digits.as_str()) && self.has_applied_result {
            // Already resolved for this exact value; avoid a duplicate lookup.
            trace!(cep = %digits, "query unchanged, skipping lookup");
            return None;
        }

        debug!(cep = %digits, "dispatching postal-code lookup");
        self.last_dispatched = Some(digits.clone());
        Some(LookupTag(digits))
    }

    /// The race guard and field populator: apply a resolved lookup.
    ///
    /// The outcome is only allowed to mutate the form when `tag` still
    /// matches the live query and the session has not been disposed;
    /// otherwise it is discarded without any side effect.
    pub fn apply_outcome(
        &mut self,
        tag: &LookupTag,
        outcome: FunilResult<Option<PostalCodeResult>>,
        form: &mut dyn AddressForm,
        notifications: &dyn NotificationSink,
    ) {
        if self.disposed {
            trace!(cep = %tag.0, "session disposed, dropping lookup outcome");
            return;
        }
        if tag.0 != self.current_query {
            trace!(
                tag = %tag.0,
                current = %self.current_query,
                "stale lookup outcome dropped"
            );
            return;
        }

        match outcome {
            Ok(Some(result)) => self.populate(tag, &result, form),
            Ok(None) => {
                debug!(cep = %tag.0, "postal code not found");
                self.reset_dependent_fields(form);
                self.last_dispatched = None;
                form.set_cep_error("CEP não encontrado");
                notifications.notify_error(
                    "CEP não encontrado",
                    "Não localizamos o endereço para este CEP.",
                );
            }
            Err(e) => {
                // Logged for diagnostics, never propagated: the form must
                // stay interactive whatever the lookup does.
                error!(cep = %tag.0, error = %e, "postal-code lookup failed");
                self.reset_dependent_fields(form);
                self.last_dispatched = None;
                form.set_cep_error("Não foi possível buscar o CEP");
                notifications.notify_error(
                    "Erro ao consultar CEP",
                    "Verifique a conexão e tente novamente.",
                );
            }
        }
    }

    /// Convenience for synchronous hosts: gate, dispatch and resolve in one
    /// call through a [`PostalCodeLookup`] port. Lookup failures are fully
    /// absorbed into form state.
    pub fn run_lookup(
        &mut self,
        raw: &str,
        form: &mut dyn AddressForm,
        lookup: &dyn PostalCodeLookup,
        notifications: &dyn NotificationSink,
    ) {
        if let Some(tag) = self.on_query_changed(raw, form) {
            let outcome = lookup.lookup(tag.digits());
            self.apply_outcome(&tag, outcome, form, notifications);
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write a successful result into the form, atomically.
    fn populate(&mut self, tag: &LookupTag, result: &PostalCodeResult, form: &mut dyn AddressForm) {
        form.clear_cep_error();
        form.set_value(AddressField::Cep, &format_cep(&tag.0), true);
        form.set_value(
            AddressField::Endereco,
            result.street.as_deref().unwrap_or(""),
            true,
        );
        form.set_value(
            AddressField::Bairro,
            result.neighborhood.as_deref().unwrap_or(""),
            true,
        );
        form.set_value(AddressField::Cidade, result.city_name(), true);
        form.set_value(AddressField::Estado, result.state_acronym(), true);
        form.set_value(
            AddressField::Complemento,
            result.complement.as_deref().unwrap_or(""),
            true,
        );

        // House-number policy: re-confirming the record's own CEP keeps the
        // stored number; a different CEP means a different building, so the
        // number is cleared and the user must re-enter it.
        let same_as_original = self.original_cep.as_deref() == Some(tag.0.as_str());
        if !same_as_original {
            form.set_value(AddressField::Numero, "", true);
        }

        self.has_applied_result = true;
        form.set_numero_editable(true);
        debug!(cep = %tag.0, "address fields populated");
    }

    /// Clear the dependent fields together and lock the house number.
    fn reset_dependent_fields(&mut self, form: &mut dyn AddressForm) {
        for field in AddressField::DEPENDENT {
            form.set_value(field, "", false);
        }
        form.set_value(AddressField::Numero, "", false);
        form.set_numero_editable(false);
        self.has_applied_result = false;
    }
}

impl Default for AddressAutofill {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockNotificationSink, MockPostalCodeLookup};
    use crate::application::ApplicationError;
    use crate::domain::{PostalCodeCity, PostalCodeState};
    use std::collections::HashMap;

    // ── test form double ──────────────────────────────────────────────────

    #[derive(Default)]
    struct TestForm {
        values: HashMap<AddressField, String>,
        dirty: HashMap<AddressField, bool>,
        cep_error: Option<String>,
        numero_editable: bool,
    }

    impl AddressForm for TestForm {
        fn value(&self, field: AddressField) -> String {
            self.values.get(&field).cloned().unwrap_or_default()
        }

        fn set_value(&mut self, field: AddressField, value: &str, dirty: bool) {
            self.values.insert(field, value.to_string());
            self.dirty.insert(field, dirty);
        }

        fn set_cep_error(&mut self, message: &str) {
            self.cep_error = Some(message.to_string());
        }

        fn clear_cep_error(&mut self) {
            self.cep_error = None;
        }

        fn set_numero_editable(&mut self, editable: bool) {
            self.numero_editable = editable;
        }
    }

    impl TestForm {
        fn dependent_fields_empty(&self) -> bool {
            AddressField::DEPENDENT
                .iter()
                .all(|f| self.value(*f).is_empty())
        }
    }

    // ── fixtures ──────────────────────────────────────────────────────────

    fn sp_state() -> PostalCodeState {
        PostalCodeState {
            id: 26,
            acronym: "SP".into(),
            name: "São Paulo".into(),
        }
    }

    fn paulista() -> PostalCodeResult {
        PostalCodeResult {
            cep: "01310100".into(),
            street: Some("Av. Paulista".into()),
            complement: None,
            neighborhood: Some("Bela Vista".into()),
            city: Some(PostalCodeCity {
                id: 1,
                name: "São Paulo".into(),
                state: sp_state(),
            }),
            state: sp_state(),
        }
    }

    fn quiet_sink() -> MockNotificationSink {
        let mut sink = MockNotificationSink::new();
        sink.expect_notify_error().times(0).return_const(());
        sink.expect_notify_success().times(0).return_const(());
        sink
    }

    // ── lookup gate ───────────────────────────────────────────────────────

    #[test]
    fn no_dispatch_below_eight_digits() {
        let mut form = TestForm::default();
        let mut autofill = AddressAutofill::new();

        for raw in ["0", "01", "013", "0131", "01310", "01310-1", "01310-10"] {
            assert!(autofill.on_query_changed(raw, &mut form).is_none());
        }
    }

    #[test]
    fn eighth_digit_dispatches_with_matching_tag() {
        let mut form = TestForm::default();
        let mut autofill = AddressAutofill::new();

        let tag = autofill.on_query_changed("01310-100", &mut form).unwrap();
        assert_eq!(tag.digits(), "01310100");
    }

    #[test]
    fn resolved_value_is_not_redispatched() {
        let mut form = TestForm::default();
        let mut autofill = AddressAutofill::new();
        let sink = quiet_sink();

        let tag = autofill.on_query_changed("01310100", &mut form).unwrap();
        autofill.apply_outcome(&tag, Ok(Some(paulista())), &mut form, &sink);

        // Same normalized value again (refocus / remask): no second dispatch.
        assert!(autofill.on_query_changed("01310-100", &mut form).is_none());
        assert!(autofill.on_query_changed("01310100", &mut form).is_none());
    }

    #[test]
    fn unresolved_value_is_redispatched() {
        let mut form = TestForm::default();
        let mut autofill = AddressAutofill::new();

        // First dispatch never resolved (no result applied yet): a repeat
        // change of the same complete value fires again.
        let first = autofill.on_query_changed("01310100", &mut form).unwrap();
        let second = autofill.on_query_changed("01310100", &mut form).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn shrinking_below_threshold_resets_applied_fields() {
        let mut form = TestForm::default();
        let mut autofill = AddressAutofill::new();
        let sink = quiet_sink();

        let tag = autofill.on_query_changed("01310100", &mut form).unwrap();
        autofill.apply_outcome(&tag, Ok(Some(paulista())), &mut form, &sink);
        assert!(!form.dependent_fields_empty());
        assert!(form.numero_editable);

        // User deletes a digit.
        assert!(autofill.on_query_changed("0131010", &mut form).is_none());
        assert!(form.dependent_fields_empty());
        assert!(!form.numero_editable);
        assert!(form.cep_error.is_none());
        assert!(!autofill.has_applied_result());
    }

    // ── race guard ────────────────────────────────────────────────────────

    #[test]
    fn stale_outcome_is_dropped_silently() {
        let mut form = TestForm::default();
        let mut autofill = AddressAutofill::new();
        let sink = quiet_sink();

        let tag_a = autofill.on_query_changed("01310100", &mut form).unwrap();
        let tag_b = autofill.on_query_changed("04538132", &mut form).unwrap();

        // B resolves first and wins.
        let mut result_b = paulista();
        result_b.street = Some("Av. Faria Lima".into());
        autofill.apply_outcome(&tag_b, Ok(Some(result_b)), &mut form, &sink);

        // A resolves late: must not touch anything, not even on failure.
        autofill.apply_outcome(&tag_a, Ok(Some(paulista())), &mut form, &sink);
        assert_eq!(form.value(AddressField::Endereco), "Av. Faria Lima");

        let tag_c = autofill.on_query_changed("99999999", &mut form).unwrap();
        autofill.apply_outcome(
            &tag_a,
            Err(ApplicationError::Transport {
                reason: "timeout".into(),
            }
            .into()),
            &mut form,
            &sink,
        );
        // The stale failure neither reset fields nor raised an error.
        assert_eq!(form.value(AddressField::Endereco), "Av. Faria Lima");
        assert!(form.cep_error.is_none());
        drop(tag_c);
    }

    #[test]
    fn disposed_session_ignores_all_outcomes() {
        let mut form = TestForm::default();
        let mut autofill = AddressAutofill::new();
        let sink = quiet_sink();

        let tag = autofill.on_query_changed("01310100", &mut form).unwrap();
        autofill.dispose();
        autofill.apply_outcome(&tag, Ok(Some(paulista())), &mut form, &sink);

        assert!(form.dependent_fields_empty());
        assert!(!autofill.has_applied_result());
    }

    // ── field populator ───────────────────────────────────────────────────

    #[test]
    fn success_populates_all_fields_and_enables_numero() {
        let mut form = TestForm::default();
        let mut autofill = AddressAutofill::new();
        let sink = quiet_sink();

        let tag = autofill.on_query_changed("01310100", &mut form).unwrap();
        autofill.apply_outcome(&tag, Ok(Some(paulista())), &mut form, &sink);

        assert_eq!(form.value(AddressField::Cep), "01310-100");
        assert_eq!(form.value(AddressField::Endereco), "Av. Paulista");
        assert_eq!(form.value(AddressField::Bairro), "Bela Vista");
        assert_eq!(form.value(AddressField::Cidade), "São Paulo");
        assert_eq!(form.value(AddressField::Estado), "SP");
        assert_eq!(form.value(AddressField::Complemento), "");
        assert!(form.numero_editable);
        assert!(form.cep_error.is_none());
        assert!(autofill.has_applied_result());
    }

    #[test]
    fn not_found_resets_atomically_and_notifies_once() {
        let mut form = TestForm::default();
        form.set_value(AddressField::Endereco, "stale street", false);
        let mut autofill = AddressAutofill::new();

        let mut sink = MockNotificationSink::new();
        sink.expect_notify_error()
            .withf(|title, _| title == "CEP não encontrado")
            .times(1)
            .return_const(());

        let tag = autofill.on_query_changed("00000000", &mut form).unwrap();
        autofill.apply_outcome(&tag, Ok(None), &mut form, &sink);

        assert!(form.dependent_fields_empty());
        assert_eq!(form.value(AddressField::Numero), "");
        assert!(!form.numero_editable);
        assert_eq!(form.cep_error.as_deref(), Some("CEP não encontrado"));
        assert!(!autofill.has_applied_result());
    }

    #[test]
    fn transport_failure_uses_distinct_message() {
        let mut form = TestForm::default();
        let mut autofill = AddressAutofill::new();

        let mut sink = MockNotificationSink::new();
        sink.expect_notify_error()
            .withf(|title, _| title == "Erro ao consultar CEP")
            .times(1)
            .return_const(());

        let tag = autofill.on_query_changed("01310100", &mut form).unwrap();
        autofill.apply_outcome(
            &tag,
            Err(ApplicationError::Transport {
                reason: "connection refused".into(),
            }
            .into()),
            &mut form,
            &sink,
        );

        assert!(form.dependent_fields_empty());
        assert!(!form.numero_editable);
        assert_eq!(
            form.cep_error.as_deref(),
            Some("Não foi possível buscar o CEP")
        );
    }

    #[test]
    fn failure_then_retype_allows_redispatch() {
        let mut form = TestForm::default();
        let mut autofill = AddressAutofill::new();

        let mut sink = MockNotificationSink::new();
        sink.expect_notify_error().times(1).return_const(());

        let tag = autofill.on_query_changed("00000000", &mut form).unwrap();
        autofill.apply_outcome(&tag, Ok(None), &mut form, &sink);

        // Re-entering the same code after a failure must fire again.
        assert!(autofill.on_query_changed("00000000", &mut form).is_some());
    }

    // ── edit mode ─────────────────────────────────────────────────────────

    #[test]
    fn edit_mode_short_circuits_stored_cep() {
        let mut form = TestForm::default();
        let autofill = AddressAutofill::for_existing_record("01310-100", &mut form);

        assert!(autofill.has_applied_result());
        assert!(form.numero_editable);
    }

    #[test]
    fn edit_mode_does_not_redispatch_stored_cep() {
        let mut form = TestForm::default();
        let mut autofill = AddressAutofill::for_existing_record("01310-100", &mut form);

        // The form loads the stored value programmatically; the gate sees it
        // as already resolved.
        assert!(autofill.on_query_changed("01310-100", &mut form).is_none());
    }

    #[test]
    fn edit_mode_incomplete_stored_cep_starts_cold() {
        let mut form = TestForm::default();
        let autofill = AddressAutofill::for_existing_record("01310", &mut form);

        assert!(!autofill.has_applied_result());
        assert!(!form.numero_editable);
    }

    #[test]
    fn reconfirming_original_cep_preserves_numero() {
        let mut form = TestForm::default();
        form.set_value(AddressField::Numero, "1000", false);
        let mut autofill = AddressAutofill::for_existing_record("01310-100", &mut form);
        let sink = quiet_sink();

        // The form remasks the stored value on load: a no-op for the gate.
        assert!(autofill.on_query_changed("01310-100", &mut form).is_none());
        assert_eq!(form.value(AddressField::Numero), "1000");

        // An explicit re-lookup of the record's own CEP (forced through the
        // gate by clearing resolution state) must not rewrite the number.
        autofill.has_applied_result = false;
        let tag = autofill.on_query_changed("01310100", &mut form).unwrap();
        autofill.apply_outcome(&tag, Ok(Some(paulista())), &mut form, &sink);

        assert_eq!(form.value(AddressField::Numero), "1000");
        assert_eq!(form.dirty.get(&AddressField::Numero), Some(&false));
    }

    #[test]
    fn different_cep_in_edit_mode_clears_numero_dirty() {
        let mut form = TestForm::default();
        form.set_value(AddressField::Numero, "1000", false);
        let mut autofill = AddressAutofill::for_existing_record("01310-100", &mut form);
        let sink = quiet_sink();

        let tag = autofill.on_query_changed("04538132", &mut form).unwrap();
        autofill.apply_outcome(&tag, Ok(Some(paulista())), &mut form, &sink);

        assert_eq!(form.value(AddressField::Numero), "");
        assert_eq!(form.dirty.get(&AddressField::Numero), Some(&true));
    }

    // ── run_lookup convenience ────────────────────────────────────────────

    #[test]
    fn run_lookup_dispatches_exactly_once_per_stable_value() {
        let mut form = TestForm::default();
        let mut autofill = AddressAutofill::new();
        let sink = quiet_sink();

        let mut lookup = MockPostalCodeLookup::new();
        lookup
            .expect_lookup()
            .withf(|digits| digits == "01310100")
            .times(1)
            .returning(|_| Ok(Some(paulista())));

        // Incremental typing up to the full code, then a refocus remask.
        for raw in ["0", "01", "013", "0131", "01310", "013101", "0131010"] {
            autofill.run_lookup(raw, &mut form, &lookup, &sink);
        }
        autofill.run_lookup("01310100", &mut form, &lookup, &sink);
        autofill.run_lookup("01310-100", &mut form, &lookup, &sink);

        assert_eq!(form.value(AddressField::Endereco), "Av. Paulista");
        assert!(form.numero_editable);
    }
}
