use event_tax_override::{
    Event, EventMetadataStore, GlobalTaxSettings, InMemoryMetadataStore, StaticSettings, TaxRate,
    TaxSettingsForm, EVENT_TAX_META_KEY,
};
use rust_decimal_macros::dec;

fn settings(tax_inclusive: bool, multiple_bookings: bool) -> StaticSettings {
    StaticSettings::new(GlobalTaxSettings {
        tax_rate: TaxRate::new(dec!(20)).unwrap(),
        tax_inclusive,
        multiple_bookings,
    })
}

#[test]
fn renders_global_settings_and_an_empty_input() {
    let event = Event::new(1);
    let store = InMemoryMetadataStore::new();

    let markup = TaxSettingsForm::render(&event, &settings(false, false), &store).unwrap();

    assert!(markup.contains("Tax is added to the ticket price."));
    assert!(markup.contains("Tax rate: 20%"));
    assert!(markup.contains("name=\"event_tax_rate\""));
    assert!(markup.contains("min=\"0\" max=\"100\""));
    assert!(markup.contains("value=\"\""));
    assert!(markup.contains("Enter 0 for no tax."));
    assert!(!markup.contains("Leave blank to revert"));
}

#[test]
fn renders_inclusive_mode_wording() {
    let event = Event::new(1);
    let store = InMemoryMetadataStore::new();

    let markup = TaxSettingsForm::render(&event, &settings(true, false), &store).unwrap();
    assert!(markup.contains("Ticket price is inclusive of tax."));
}

#[test]
fn prefills_the_stored_override_and_switches_the_hint() {
    let event = Event::new(1);
    let mut store = InMemoryMetadataStore::new();
    store.set_meta(event.id, EVENT_TAX_META_KEY, "12.5").unwrap();

    let markup = TaxSettingsForm::render(&event, &settings(false, false), &store).unwrap();

    assert!(markup.contains("value=\"12.5\""));
    assert!(markup.contains("Leave blank to revert to the global tax setting."));
    assert!(!markup.contains("Enter 0 for no tax."));
}

#[test]
fn zero_override_counts_as_set_for_the_hint() {
    let event = Event::new(1);
    let mut store = InMemoryMetadataStore::new();
    store.set_meta(event.id, EVENT_TAX_META_KEY, "0").unwrap();

    let markup = TaxSettingsForm::render(&event, &settings(false, false), &store).unwrap();
    assert!(markup.contains("Leave blank to revert to the global tax setting."));
}

#[test]
fn multiple_bookings_mode_renders_only_the_notice() {
    let event = Event::new(1);
    let store = InMemoryMetadataStore::new();

    let markup = TaxSettingsForm::render(&event, &settings(false, true), &store).unwrap();

    assert!(markup.contains("Tax cannot be set per event when multiple bookings mode is enabled."));
    assert!(!markup.contains("event_tax_rate"));
}
