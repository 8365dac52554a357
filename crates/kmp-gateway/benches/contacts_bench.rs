// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the contact normalization pipeline — the only
// part of the gateway that runs over unbounded user data.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use kmp_core::types::{RawContact, RawPhoneNumber};
use kmp_gateway::contacts::{flatten_contacts, search_key};

/// Build a synthetic address book with the shapes seen in the wild: mixed
/// diacritics, multiple emails, formatted phone numbers, and a share of
/// entries that fail validation.
fn synthetic_contacts(count: usize) -> Vec<RawContact> {
    (0..count)
        .map(|i| RawContact {
            name: Some(format!("Çontact Nümber-{i} O'Example")),
            emails: vec![
                format!("contact{i}@example.com"),
                "not-an-email".to_string(),
                format!("alt{i}@example.org"),
            ],
            phone_numbers: vec![
                RawPhoneNumber::new(format!("+45 ({i}) 123-456")),
                RawPhoneNumber::with_digits("bad", "12ab34"),
            ],
        })
        .collect()
}

fn bench_search_key(c: &mut Criterion) {
    c.bench_function("search_key (accented name)", |b| {
        b.iter(|| search_key(black_box("Ångström-Véronique van der Meer (work)")));
    });
}

fn bench_flatten_contacts(c: &mut Criterion) {
    let book = synthetic_contacts(500);

    c.bench_function("flatten_contacts (500 contacts)", |b| {
        b.iter(|| {
            let records = flatten_contacts(black_box(&book));
            black_box(records);
        });
    });
}

criterion_group!(benches, bench_search_key, bench_flatten_contacts);
criterion_main!(benches);
