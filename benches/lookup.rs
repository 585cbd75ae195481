//! Registry benchmarks
//!
//! Measures registry construction (one-time startup cost) and name lookup.
//! Lookups log at info level; no subscriber is installed here, so the macros
//! reduce to a disabled-callsite check.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use model_registry::config::{DEFAULT_BASE_URL, ProviderConfig};
use model_registry::models::ModelRegistry;
use std::hint::black_box;

fn bench_registry_construction(c: &mut Criterion) {
    let provider = ProviderConfig::new(Some("sk-bench".to_string()), DEFAULT_BASE_URL);
    c.bench_function("registry_new", |b| {
        b.iter(|| ModelRegistry::new(black_box(&provider)))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let provider = ProviderConfig::new(None, DEFAULT_BASE_URL);
    let Ok(registry) = ModelRegistry::new(&provider) else {
        panic!("registry should build with the default URL");
    };

    let mut group = c.benchmark_group("registry_get");
    for name in ["models/gemini-2.5-flash", "unknown-model", ""] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:?}", name)), name, |b, name| {
            b.iter(|| registry.get(black_box(name)).model())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_registry_construction, bench_lookup);
criterion_main!(benches);
