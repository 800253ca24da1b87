use criterion::{black_box, Criterion};
use ketama::Ketama;

fn ten_servers() -> Ketama {
    let mut ring = Ketama::new();
    for i in 0..10 {
        ring.add_server(&format!("10.0.0.{}", i), 11211, 1 + i as u64 % 3)
            .expect("add server");
    }
    ring
}

pub(super) fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("ketama");
    group.bench_function("build_10", |b| {
        b.iter(|| {
            let mut ring = ten_servers();
            ring.build().expect("build");
            black_box(ring.continuum().expect("built").len())
        });
    });
    group.finish();
}

pub(super) fn bench_lookup(c: &mut Criterion) {
    let mut ring = ten_servers();
    ring.build().expect("build");
    let mut group = c.benchmark_group("ketama");
    group.bench_function("lookup", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i = i.wrapping_add(0x9e37_79b9_7f4a_7c15);
            black_box(ring.lookup(&i.to_le_bytes()).expect("built").len())
        });
    });
    group.bench_function("lookup_hash", |b| {
        let mut h = 0u32;
        b.iter(|| {
            h = h.wrapping_add(0x9e37_79b9);
            black_box(ring.lookup_hash(h).expect("built").len())
        });
    });
    group.finish();
}
