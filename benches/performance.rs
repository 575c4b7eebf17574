use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use nestora::core::{generate_rent_roll, Clock, CoreError, PropertyStorage, PropertyStore};
use nestora::domain::{Property, Tenant};
use nestora_storage_json::{load_properties_from_path, save_properties_to_path};
use tempfile::tempdir;

struct BenchClock(DateTime<Utc>);

impl Clock for BenchClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

struct NullStorage;

impl PropertyStorage for NullStorage {
    fn load(&self) -> Result<Vec<Property>, CoreError> {
        Ok(Vec::new())
    }

    fn save(&self, _properties: &[Property]) -> Result<(), CoreError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}

fn build_portfolio(property_count: usize, units_per_property: usize) -> Vec<Property> {
    let clock = Arc::new(BenchClock(
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap(),
    ));
    let mut store = PropertyStore::new(Box::new(NullStorage), clock);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for p in 0..property_count {
        store.add_property(format!("Building {p}"), format!("{p} Main St"));
        for u in 0..units_per_property {
            store
                .add_unit(p, format!("{}{:02}", p, u), 2, 1.0, 800)
                .expect("add unit");
            let rent = 900.0 + (u % 10) as f64 * 25.0;
            store
                .create_lease(
                    p,
                    u,
                    Tenant::new(format!("Tenant {p}-{u}"), "tenant@example.com", "555-0000"),
                    start,
                    start + Duration::days(364),
                    rent,
                    rent,
                )
                .expect("create lease");
            for month in 1..=12 {
                let paid = if (p + u + month as usize) % 4 == 0 {
                    rent / 2.0
                } else {
                    rent
                };
                store
                    .record_payment(p, u, 0, 2024, month, paid, None)
                    .expect("record payment");
            }
        }
    }

    store.properties().to_vec()
}

fn bench_storage_io(c: &mut Criterion) {
    let properties = build_portfolio(black_box(50), 20);
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("data.json");

    c.bench_function("properties_save_1k_leases", |b| {
        b.iter(|| {
            save_properties_to_path(&properties, &file_path).expect("save properties");
        })
    });

    save_properties_to_path(&properties, &file_path).expect("seed");

    c.bench_function("properties_load_1k_leases", |b| {
        b.iter(|| {
            let loaded = load_properties_from_path(&file_path).expect("load properties");
            black_box(loaded);
        })
    });
}

fn bench_rent_roll(c: &mut Criterion) {
    let properties = build_portfolio(black_box(50), 20);

    c.bench_function("rent_roll_1k_leases", |b| {
        b.iter(|| {
            let report = generate_rent_roll(&properties);
            black_box(report.total_outstanding());
        })
    });

    c.bench_function("rent_roll_after_clone", |b| {
        b.iter_batched(
            || properties.clone(),
            |snapshot| black_box(generate_rent_roll(&snapshot)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_storage_io, bench_rent_roll);
criterion_main!(benches);
