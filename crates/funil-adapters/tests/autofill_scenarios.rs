//! End-to-end autofill scenarios over the in-memory adapters.
//!
//! Drives the real controller against `AddressFormState`,
//! `StaticPostalCodeLookup` and `RecordingNotifications`, typing the way a
//! user would.

use funil_adapters::{AddressFormState, RecordingNotifications, StaticPostalCodeLookup};
use funil_core::application::ports::{AddressField, AddressForm, PostalCodeLookup};
use funil_core::application::services::AddressAutofill;
use funil_core::domain::{PostalCodeCity, PostalCodeResult, PostalCodeState};

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

/// Feed a value character by character, as a user typing would.
fn type_value(
    autofill: &mut AddressAutofill,
    form: &mut AddressFormState,
    lookup: &StaticPostalCodeLookup,
    sink: &RecordingNotifications,
    value: &str,
) {
    for end in 1..=value.len() {
        autofill.run_lookup(&value[..end], form, lookup, sink);
    }
}

#[test]
fn typing_a_known_cep_fills_the_address() {
    let lookup = StaticPostalCodeLookup::new().with(paulista());
    let sink = RecordingNotifications::new();
    let mut form = AddressFormState::new();
    let mut autofill = AddressAutofill::new();

    type_value(&mut autofill, &mut form, &lookup, &sink, "01310-100");

    assert_eq!(lookup.calls(), 1);
    assert_eq!(form.value(AddressField::Cep), "01310-100");
    assert_eq!(form.value(AddressField::Endereco), "Av. Paulista");
    assert_eq!(form.value(AddressField::Bairro), "Bela Vista");
    assert_eq!(form.value(AddressField::Cidade), "São Paulo");
    assert_eq!(form.value(AddressField::Estado), "SP");
    assert!(form.numero_editable());
    assert!(form.is_dirty(AddressField::Endereco));
    assert!(sink.all().is_empty());
}

#[test]
fn unknown_cep_reports_not_found_once() {
    let lookup = StaticPostalCodeLookup::new();
    let sink = RecordingNotifications::new();
    let mut form = AddressFormState::new();
    let mut autofill = AddressAutofill::new();

    type_value(&mut autofill, &mut form, &lookup, &sink, "99999-999");

    assert_eq!(lookup.calls(), 1);
    assert_eq!(form.cep_error(), Some("CEP não encontrado"));
    assert!(!form.numero_editable());
    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].title, "CEP não encontrado");
}

#[test]
fn transport_failure_then_retype_recovers() {
    let lookup = StaticPostalCodeLookup::new().with(paulista());
    let sink = RecordingNotifications::new();
    let mut form = AddressFormState::new();
    let mut autofill = AddressAutofill::new();

    lookup.set_failing(true);
    type_value(&mut autofill, &mut form, &lookup, &sink, "01310-100");

    assert_eq!(form.cep_error(), Some("Não foi possível buscar o CEP"));
    assert_eq!(sink.errors().len(), 1);
    assert_eq!(sink.errors()[0].title, "Erro ao consultar CEP");

    // Connectivity returns; the user clears and retypes the code.
    lookup.set_failing(false);
    autofill.run_lookup("", &mut form, &lookup, &sink);
    type_value(&mut autofill, &mut form, &lookup, &sink, "01310-100");

    assert!(form.cep_error().is_none());
    assert_eq!(form.value(AddressField::Endereco), "Av. Paulista");
    assert!(form.numero_editable());
}

#[test]
fn deleting_a_digit_clears_the_applied_address() {
    let lookup = StaticPostalCodeLookup::new().with(paulista());
    let sink = RecordingNotifications::new();
    let mut form = AddressFormState::new();
    let mut autofill = AddressAutofill::new();

    type_value(&mut autofill, &mut form, &lookup, &sink, "01310-100");
    assert_eq!(form.value(AddressField::Cidade), "São Paulo");

    autofill.run_lookup("01310-10", &mut form, &lookup, &sink);

    assert_eq!(form.value(AddressField::Endereco), "");
    assert_eq!(form.value(AddressField::Cidade), "");
    assert!(!form.numero_editable());
    assert_eq!(lookup.calls(), 1);
}

#[test]
fn edit_mode_never_dispatches_for_the_stored_cep() {
    let lookup = StaticPostalCodeLookup::new().with(paulista());
    let sink = RecordingNotifications::new();
    let mut form = AddressFormState::from_record(&[
        (AddressField::Cep, "01310-100"),
        (AddressField::Endereco, "Av. Paulista"),
        (AddressField::Numero, "1000"),
    ]);

    let mut autofill = AddressAutofill::for_existing_record("01310-100", &mut form);
    // The host re-emits the stored value when the form mounts.
    autofill.run_lookup("01310-100", &mut form, &lookup, &sink);

    assert_eq!(lookup.calls(), 0);
    assert!(form.numero_editable());
    assert_eq!(form.value(AddressField::Numero), "1000");
}

#[test]
fn changing_the_cep_in_edit_mode_clears_the_number() {
    let faria_lima = PostalCodeResult {
        cep: "04538132".into(),
        street: Some("Av. Brigadeiro Faria Lima".into()),
        complement: None,
        neighborhood: Some("Itaim Bibi".into()),
        city: Some(PostalCodeCity {
            id: 1,
            name: "São Paulo".into(),
            state: sp_state(),
        }),
        state: sp_state(),
    };
    let lookup = StaticPostalCodeLookup::new().with(paulista()).with(faria_lima);
    let sink = RecordingNotifications::new();
    let mut form = AddressFormState::from_record(&[
        (AddressField::Cep, "01310-100"),
        (AddressField::Numero, "1000"),
    ]);

    let mut autofill = AddressAutofill::for_existing_record("01310-100", &mut form);
    autofill.run_lookup("04538-132", &mut form, &lookup, &sink);

    assert_eq!(lookup.calls(), 1);
    assert_eq!(
        form.value(AddressField::Endereco),
        "Av. Brigadeiro Faria Lima"
    );
    assert_eq!(form.value(AddressField::Numero), "");
    assert!(form.is_dirty(AddressField::Numero));
}

#[test]
fn disposed_controller_leaves_the_form_alone() {
    let lookup = StaticPostalCodeLookup::new().with(paulista());
    let sink = RecordingNotifications::new();
    let mut form = AddressFormState::new();
    let mut autofill = AddressAutofill::new();

    let tag = autofill.on_query_changed("01310-100", &mut form).unwrap();
    let outcome = lookup.lookup(tag.digits());
    autofill.dispose();
    autofill.apply_outcome(&tag, outcome, &mut form, &sink);

    assert_eq!(form.value(AddressField::Endereco), "");
    assert!(!form.numero_editable());
}
