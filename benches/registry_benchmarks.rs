//! Performance benchmarks for the Workforce Registry.
//!
//! This benchmark suite tracks the hot paths of record keeping:
//! - Identifier minting throughput
//! - Enrollment into a growing registry
//! - Attendance recording against the shift catalog
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use workforce_registry::config::PolicyLoader;
use workforce_registry::ident::EmployeeId;
use workforce_registry::models::Profile;
use workforce_registry::registry::Registry;

fn create_test_registry() -> Registry {
    let policy = PolicyLoader::load("./config/hr").expect("Failed to load policy");
    Registry::new(policy)
}

fn bench_profile(n: usize) -> Profile {
    Profile {
        name: format!("Employee {:04}", n),
        email: format!("employee.{:04}@example.com", n),
        department: "Engineering".to_string(),
        ..Profile::default()
    }
}

fn bench_id_minting(c: &mut Criterion) {
    c.bench_function("mint_employee_id", |b| {
        b.iter(|| black_box(EmployeeId::mint()))
    });
}

fn bench_enrollment(c: &mut Criterion) {
    let mut group = c.benchmark_group("enrollment");

    for count in [100usize, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("enroll", count), &count, |b, &count| {
            b.iter(|| {
                let mut registry = create_test_registry();
                for n in 0..count {
                    registry
                        .enroll(bench_profile(n), None)
                        .expect("enrollment failed");
                }
                black_box(registry.len())
            })
        });
    }

    group.finish();
}

fn bench_attendance(c: &mut Criterion) {
    let mut registry = create_test_registry();
    let id = registry
        .enroll(bench_profile(0), None)
        .expect("enrollment failed");

    c.bench_function("record_attendance", |b| {
        b.iter(|| {
            registry
                .record_attendance(black_box(&id), "day")
                .expect("attendance failed")
        })
    });
}

criterion_group!(
    benches,
    bench_id_minting,
    bench_enrollment,
    bench_attendance
);
criterion_main!(benches);
