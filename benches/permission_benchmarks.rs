//! Performance benchmarks for access-gate
//!
//! Resolution runs on every role change and queries run on every render, so
//! both should stay far below a frame budget.

use access_gate::{
    CapabilityProjector, Config, ModuleRegistry, PermissionGate, PermissionQuery,
    PermissionResolver, PermissionStore, RolePermissionTable,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;

/// Benchmark role resolution
fn bench_resolve(c: &mut Criterion) {
    let registry = ModuleRegistry::with_defaults().unwrap();
    let table = RolePermissionTable::with_defaults(&registry).unwrap();
    let resolver = PermissionResolver::new(Arc::new(table));

    let mut group = c.benchmark_group("resolve");
    for role in ["Administrador", "Operador", "Invitado"] {
        group.bench_with_input(BenchmarkId::new("role", role), role, |b, role| {
            b.iter(|| resolver.resolve(black_box(role)))
        });
    }
    group.finish();
}

/// Benchmark permission queries and gate evaluation
fn bench_queries(c: &mut Criterion) {
    let store = PermissionStore::from_config(&Config::default()).unwrap();
    store.set_active_role("Operador");
    let snapshot = store.snapshot();
    let gate = PermissionGate::new("DELETE")
        .module("payments")
        .any_of(["DELETE", "VOID_PAYMENT"]);

    c.bench_function("has_permission_scoped", |b| {
        b.iter(|| snapshot.has_permission(black_box("READ"), Some(black_box("payments"))))
    });
    c.bench_function("has_permission_cross_module", |b| {
        b.iter(|| snapshot.has_permission(black_box("REBOOT_DEVICE"), None))
    });
    c.bench_function("gate_evaluate", |b| b.iter(|| gate.evaluate(black_box(&snapshot))));
    c.bench_function("project_all", |b| {
        b.iter(|| CapabilityProjector::project_all(snapshot.as_ref(), store.registry()))
    });
}

criterion_group!(benches, bench_resolve, bench_queries);
criterion_main!(benches);
