use criterion::{criterion_group, criterion_main};

mod validate_benchmark {
    use criterion::{black_box, Criterion};
    use pl_ids::{validate, IdentifierKind};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let identifiers = vec![
            (IdentifierKind::IdNumber, "ABA 300000"),
            (IdentifierKind::Pesel, "44051401458"),
            (IdentifierKind::Nip, "PL 123-456-32-18"),
            (IdentifierKind::Nrb, "PL61 1090 1014 0000 0712 1981 2874"),
            (IdentifierKind::Regon, "12345678512347"),
            (IdentifierKind::Passport, "AB1234562"),
        ];
        c.bench_function("validate-all-kinds", |b| {
            b.iter(|| {
                for (kind, raw) in identifiers.iter() {
                    black_box(validate(*kind, raw));
                }
            })
        });
    }
}

mod checksum_benchmark {
    use criterion::{black_box, Criterion};
    use pl_ids::{Checksum, NrbChecksum, PeselChecksum};

    pub fn criterion_benchmark(c: &mut Criterion) {
        c.bench_function("pesel-checksum", |b| {
            b.iter(|| PeselChecksum.is_valid_checksum(black_box("44051401458")))
        });
        c.bench_function("nrb-checksum", |b| {
            b.iter(|| NrbChecksum.is_valid_checksum(black_box("PL61109010140000071219812874")))
        });
    }
}

criterion_group!(
    benches,
    validate_benchmark::criterion_benchmark,
    checksum_benchmark::criterion_benchmark
);
criterion_main!(benches);
