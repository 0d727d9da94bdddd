use event_tax_override::{
    Event, EventMetadataStore, GlobalTaxSettings, InMemoryMetadataStore, RequestAuth, SaveOutcome,
    SkipReason, StaticSettings, TaxRate, TaxSettingsForm, EDIT_EVENT_ACTION, EVENT_TAX_META_KEY,
};
use rust_decimal_macros::dec;

fn settings(multiple_bookings: bool) -> StaticSettings {
    StaticSettings::new(GlobalTaxSettings {
        tax_rate: TaxRate::new(dec!(20)).unwrap(),
        tax_inclusive: false,
        multiple_bookings,
    })
}

fn stored_override(store: &InMemoryMetadataStore, event: &Event) -> Option<String> {
    store.get_meta(event.id, EVENT_TAX_META_KEY).unwrap()
}

#[test]
fn save_and_read_back_round_trip() {
    let event = Event::new(1);
    let auth = RequestAuth::editor_of(event.id, EDIT_EVENT_ACTION);
    let mut store = InMemoryMetadataStore::new();

    let outcome =
        TaxSettingsForm::save(&event, Some("12.5"), &auth, &settings(false), &mut store).unwrap();
    assert_eq!(outcome, SaveOutcome::Saved(TaxRate::new(dec!(12.5)).unwrap()));
    assert_eq!(stored_override(&store, &event).as_deref(), Some("12.5"));

    let outcome =
        TaxSettingsForm::save(&event, None, &auth, &settings(false), &mut store).unwrap();
    assert_eq!(outcome, SaveOutcome::Cleared);
    assert_eq!(stored_override(&store, &event), None);
}

#[test]
fn zero_is_a_real_override() {
    let event = Event::new(1);
    let auth = RequestAuth::editor_of(event.id, EDIT_EVENT_ACTION);
    let mut store = InMemoryMetadataStore::new();

    let outcome =
        TaxSettingsForm::save(&event, Some("0"), &auth, &settings(false), &mut store).unwrap();
    assert_eq!(outcome, SaveOutcome::Saved(TaxRate::ZERO));
    assert_eq!(stored_override(&store, &event).as_deref(), Some("0"));
}

#[test]
fn saving_twice_is_idempotent() {
    let event = Event::new(1);
    let auth = RequestAuth::editor_of(event.id, EDIT_EVENT_ACTION);
    let mut store = InMemoryMetadataStore::new();

    TaxSettingsForm::save(&event, Some("7"), &auth, &settings(false), &mut store).unwrap();
    let first = store.export();
    TaxSettingsForm::save(&event, Some("7"), &auth, &settings(false), &mut store).unwrap();
    assert_eq!(store.export(), first);
}

#[test]
fn blank_submission_clears_an_existing_override() {
    let event = Event::new(1);
    let auth = RequestAuth::editor_of(event.id, EDIT_EVENT_ACTION);
    let mut store = InMemoryMetadataStore::new();
    store.set_meta(event.id, EVENT_TAX_META_KEY, "15").unwrap();

    let outcome =
        TaxSettingsForm::save(&event, Some("   "), &auth, &settings(false), &mut store).unwrap();
    assert_eq!(outcome, SaveOutcome::Cleared);
    assert_eq!(stored_override(&store, &event), None);
}

#[test]
fn invalid_nonce_never_mutates_the_store() {
    let event = Event::new(1);
    let auth = RequestAuth::without_nonce(event.id);
    let mut store = InMemoryMetadataStore::new();
    store.set_meta(event.id, EVENT_TAX_META_KEY, "15").unwrap();

    let outcome =
        TaxSettingsForm::save(&event, Some("99"), &auth, &settings(false), &mut store).unwrap();
    assert_eq!(outcome, SaveOutcome::Skipped(SkipReason::NonceInvalid));
    assert_eq!(stored_override(&store, &event).as_deref(), Some("15"));

    // A clearing submission is blocked the same way.
    let outcome =
        TaxSettingsForm::save(&event, None, &auth, &settings(false), &mut store).unwrap();
    assert_eq!(outcome, SaveOutcome::Skipped(SkipReason::NonceInvalid));
    assert_eq!(stored_override(&store, &event).as_deref(), Some("15"));
}

#[test]
fn missing_edit_permission_skips_the_write() {
    let event = Event::new(1);
    let auth = RequestAuth::read_only(EDIT_EVENT_ACTION);
    let mut store = InMemoryMetadataStore::new();

    let outcome =
        TaxSettingsForm::save(&event, Some("5"), &auth, &settings(false), &mut store).unwrap();
    assert_eq!(outcome, SaveOutcome::Skipped(SkipReason::NotPermitted));
    assert!(store.is_empty());
}

#[test]
fn revision_snapshots_are_never_written() {
    let revision = Event::revision_of(1);
    let auth = RequestAuth::editor_of(revision.id, EDIT_EVENT_ACTION);
    let mut store = InMemoryMetadataStore::new();

    let outcome =
        TaxSettingsForm::save(&revision, Some("5"), &auth, &settings(false), &mut store).unwrap();
    assert_eq!(outcome, SaveOutcome::Skipped(SkipReason::Revision));
    assert!(store.is_empty());
}

#[test]
fn multiple_bookings_mode_disables_saving() {
    let event = Event::new(1);
    let auth = RequestAuth::editor_of(event.id, EDIT_EVENT_ACTION);
    let mut store = InMemoryMetadataStore::new();

    let outcome =
        TaxSettingsForm::save(&event, Some("5"), &auth, &settings(true), &mut store).unwrap();
    assert_eq!(outcome, SaveOutcome::Skipped(SkipReason::MultipleBookings));
    assert!(store.is_empty());
}

#[test]
fn out_of_range_and_non_numeric_input_is_rejected() {
    let event = Event::new(1);
    let auth = RequestAuth::editor_of(event.id, EDIT_EVENT_ACTION);
    let mut store = InMemoryMetadataStore::new();

    for bad in ["150", "-1", "abc", "1e", "10%"] {
        let result =
            TaxSettingsForm::save(&event, Some(bad), &auth, &settings(false), &mut store);
        assert!(result.is_err(), "expected '{}' to be rejected", bad);
        assert!(store.is_empty(), "'{}' must not be persisted", bad);
    }
}
