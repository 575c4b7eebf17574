mod common;

use chrono::NaiveDate;
use nestora::core::{CoreError, PropertyStore};
use nestora::domain::{LeaseStatus, PaymentStatus, Tenant};
use nestora_storage_json::JsonPropertyStorage;
use std::fs;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seed(store: &mut PropertyStore) {
    store.add_property("Maple Court", "12 Maple Ave");
    store.add_unit(0, "1A", 2, 1.5, 850).expect("add unit");
    store.add_unit(0, "1B", 1, 1.0, 600).expect("add unit");
    store
        .create_lease(
            0,
            0,
            Tenant::new("Alice Smith", "alice@example.com", "555-0100"),
            date(2024, 1, 1),
            date(2024, 12, 31),
            1000.0,
            1000.0,
        )
        .expect("create lease");
    store
        .create_lease(
            0,
            1,
            Tenant::new("Bo Chen", "bo@example.com", "555-0101"),
            date(2024, 3, 1),
            date(2025, 2, 28),
            800.0,
            400.0,
        )
        .expect("create lease");
    store
        .record_payment(0, 0, 0, 2024, 1, 1000.0, None)
        .expect("record payment");
    store
        .record_payment(0, 0, 0, 2024, 2, 400.0, Some("partial".into()))
        .expect("record payment");
}

#[test]
fn saved_portfolio_reloads_with_identical_rent_roll() {
    let (mut store, _config, data_file) = common::setup_test_env();
    seed(&mut store);
    store.save().expect("save");
    let before = store.rent_roll();

    let mut reopened = PropertyStore::new(
        Box::new(JsonPropertyStorage::new(data_file)),
        common::fixed_clock(),
    );
    assert_eq!(reopened.load().expect("load"), 1);
    assert_eq!(reopened.properties(), store.properties());
    assert_eq!(reopened.rent_roll(), before);
    assert_eq!(before.total_expected(), 2800.0);
    assert_eq!(before.total_collected(), 1400.0);
    assert_eq!(before.total_outstanding(), 1400.0);
}

#[test]
fn stored_lease_status_is_preserved_literally() {
    let (mut store, _config, data_file) = common::setup_test_env();
    seed(&mut store);
    store.save().expect("save");

    let raw = fs::read_to_string(&data_file).expect("read data file");
    let edited = raw.replacen("\"status\": \"active\"", "\"status\": \"ended\"", 1);
    fs::write(&data_file, edited).expect("write edited file");

    store.load().expect("reload");
    assert_eq!(store.lease(0, 0, 0).unwrap().status, LeaseStatus::Ended);
    assert_eq!(store.lease(0, 1, 0).unwrap().status, LeaseStatus::Active);

    let report = store.rent_roll();
    assert_eq!(report.leases.len(), 1);
    assert_eq!(report.total_expected(), 800.0);
}

#[test]
fn payment_rows_keep_clock_time_and_status() {
    let (mut store, _config, data_file) = common::setup_test_env();
    seed(&mut store);
    store.save().expect("save");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(data_file).expect("read")).expect("parse");
    let rows = &value[0]["units"][0]["leases"][0]["rent_history"];
    assert_eq!(rows[0]["status"], "paid");
    assert_eq!(rows[1]["status"], "partial");
    assert_eq!(rows[1]["notes"], "partial");
    assert_eq!(rows[0]["paid_date"], "2024-06-01T12:00:00Z");

    let lease = store.lease(0, 0, 0).unwrap();
    assert_eq!(lease.rent_history[1].status, PaymentStatus::Partial);
}

#[test]
fn failed_save_preserves_file_and_memory() {
    let (mut store, _config, data_file) = common::setup_test_env();
    seed(&mut store);
    store.save().expect("initial save");
    let original = fs::read_to_string(&data_file).expect("read original file");

    fs::create_dir_all(data_file.with_extension("json.tmp")).expect("block tmp path");
    store.add_property("Birch House", "7 Birch Rd");
    let result = store.save();

    assert!(matches!(result, Err(CoreError::Io(_))), "{result:?}");
    assert_eq!(fs::read_to_string(&data_file).unwrap(), original);
    assert_eq!(store.properties().len(), 2);
}

#[test]
fn missing_optional_fields_default_on_load() {
    let (mut store, _config, data_file) = common::setup_test_env();
    let legacy = r#"[
      {
        "id": "6f1c1a56-8a55-4d8e-9d4f-2f6a7f1f2a11",
        "name": "Old Mill",
        "address": "1 River Rd",
        "units": [
          {
            "id": "0b8f6a3e-36a4-4e6b-9a65-3d1c6b9b7e22",
            "unit_number": "A",
            "bedrooms": 1,
            "bathrooms": 1.0,
            "square_feet": 500,
            "leases": [
              {
                "id": "9a7c2f1e-5b3d-4c8a-8e6f-1d2c3b4a5e33",
                "tenant": {
                  "id": "1e2d3c4b-5a69-4788-9a0b-c1d2e3f4a544",
                  "full_name": "Dana Reyes",
                  "email": "dana@example.com",
                  "phone": "555-0102"
                },
                "start_date": "2023-01-01",
                "end_date": "2023-12-31",
                "monthly_rent": 700.0,
                "security_deposit": 700.0
              }
            ]
          }
        ]
      }
    ]"#;
    fs::write(&data_file, legacy).expect("write legacy file");

    store.load().expect("load legacy file");
    let lease = store.lease(0, 0, 0).unwrap();
    assert!(lease.rent_history.is_empty());
    assert_eq!(lease.status, LeaseStatus::Active);
    assert_eq!(store.rent_roll().total_outstanding(), 700.0);
}
