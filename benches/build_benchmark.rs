use criterion::{criterion_group, criterion_main, Criterion};
use manualgen::manuals::{dev, user};
use manualgen::to_docx_bytes;
use std::path::Path;

fn bench_dev_manual(c: &mut Criterion) {
    c.bench_function("build_dev_manual", |b| b.iter(dev::build));

    let doc = dev::build();
    c.bench_function("serialize_dev_manual", |b| {
        b.iter(|| to_docx_bytes(&doc).unwrap())
    });
}

fn bench_user_manual(c: &mut Criterion) {
    let dir = Path::new("no-such-directory");
    c.bench_function("build_user_manual", |b| b.iter(|| user::build(dir)));
}

criterion_group!(benches, bench_dev_manual, bench_user_manual);
criterion_main!(benches);
