//! Benchmarks for the uncontended lock paths.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use keyed_mutex::{Mutex, MutexRegistry};

fn bench_acquire_release(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("build current-thread runtime");
    let mutex = Arc::new(Mutex::new());

    c.bench_function("acquire_release_uncontended", |b| {
        b.iter(|| {
            runtime.block_on(async {
                let releaser = mutex.clone().acquire().await;
                releaser.release();
            })
        })
    });
}

fn bench_registry_lookup(c: &mut Criterion) {
    let registry = MutexRegistry::new();
    for row in 0..1024u64 {
        registry.mutex_for(row);
    }

    c.bench_function("registry_mutex_for_existing", |b| {
        let mut row = 0u64;
        b.iter(|| {
            row = (row + 1) % 1024;
            registry.mutex_for(row)
        })
    });
}

criterion_group!(benches, bench_acquire_release, bench_registry_lookup);
criterion_main!(benches);
