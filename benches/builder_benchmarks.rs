//! Performance benchmarks for the collection builders.
//!
//! These benchmarks measure insertion cost as the staged collections grow:
//! - Address insertion, where every add is checked for duplicates
//! - Phone insertion, which only validates the token
//! - Building a user from populated nested builders

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use user_builder::{AddressCollectionBuilder, FixedClock, PhoneCollectionBuilder, UserBuilder};

/// Benchmark address insertion with duplicate detection at several sizes.
fn bench_address_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("address_insertion");

    for size in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut builder = AddressCollectionBuilder::new();
                for i in 0..size {
                    let _ = builder.add("rua das flores", i as u32);
                }
                // Rejected at the end of a full buffer
                let _ = builder.add("rua das flores", 0);
                black_box(builder.len())
            });
        });
    }

    group.finish();
}

/// Benchmark phone insertion at several sizes.
fn bench_phone_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("phone_insertion");

    for size in [10usize, 100, 1000] {
        let tokens: Vec<String> = (0..size).map(|i| format!("5511{:08}", i)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &tokens, |b, tokens| {
            b.iter(|| {
                let mut builder = PhoneCollectionBuilder::new();
                for token in tokens {
                    let _ = builder.add(token.as_str());
                }
                black_box(builder.len())
            });
        });
    }

    group.finish();
}

/// Benchmark `build` on a populated builder.
fn bench_user_build(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let mut builder = UserBuilder::with_clock(Arc::new(FixedClock(today)));
    let _ = builder
        .first_name("Saruman")
        .and_then(|b| b.last_name("The White"))
        .and_then(|b| b.birth_date(today));
    for i in 0..50u32 {
        let _ = builder.phones().add(format!("{:08}", i));
        let _ = builder.addresses().add("nowhere", i);
    }

    c.bench_function("user_build", |b| b.iter(|| black_box(builder.build())));
}

criterion_group!(
    benches,
    bench_address_insertion,
    bench_phone_insertion,
    bench_user_build
);
criterion_main!(benches);
