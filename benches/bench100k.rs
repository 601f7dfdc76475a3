use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rusty_phonebook::prelude::{Contact, ContactFilter, PhoneBook};

fn make_phonebook_with_n(n: usize) -> PhoneBook {
    let phonebook = PhoneBook::new();
    for i in 0..n {
        let surname = if i % 10 == 0 { "Simpson" } else { "Flanders" };
        phonebook
            .insert(Contact::new(&format!("User{i}"), surname, "+1-877-555-0000"))
            .expect("ids available");
    }
    phonebook
}

fn bench_filter(c: &mut Criterion) {
    c.bench_function("Filtering 100k contacts by name and surname", |b| {
        let phonebook = make_phonebook_with_n(100_000);
        let filter = ContactFilter::new(Some("User500".to_string()), Some("Simpson".to_string()), None);
        b.iter(|| black_box(phonebook.find_all(&filter)));
    });
}

fn bench_find_by_id(c: &mut Criterion) {
    c.bench_function("Looking up one of 100k contacts by id", |b| {
        let phonebook = make_phonebook_with_n(100_000);
        b.iter(|| black_box(phonebook.find_by_id(black_box(73_421))));
    });
}

fn bench_delete(c: &mut Criterion) {
    c.bench_function("Deleting from 100k contacts", |b| {
        b.iter_batched(
            || make_phonebook_with_n(100_000),
            |phonebook| {
                phonebook.delete(200);
                black_box(phonebook.len());
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_filter, bench_find_by_id, bench_delete
}
criterion_main!(benches);
