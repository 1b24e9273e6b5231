//! # Guarantee Ledger Benchmarks
//!
//! | Operation | Store access | Expectation |
//! |-----------|--------------|-------------|
//! | `submit_new_request` | one insert | flat in table size |
//! | `approve_new_request` | get + replace | flat in table size |
//! | `get_new_requests` | prefix scan | linear in matching rows only |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gl_chaincode::{Chaincode, ChaincodeConfig, FixedTimeSource};
use gl_table_store::InMemoryTableStore;

fn seeded(
    requesters: usize,
    per_requester: usize,
) -> (InMemoryTableStore, Chaincode<FixedTimeSource>) {
    let chaincode =
        Chaincode::with_time_source(ChaincodeConfig::default(), FixedTimeSource::at_unix(0));
    let mut store = InMemoryTableStore::new();
    chaincode.init(&mut store).expect("init");
    for r in 0..requesters {
        let requester = format!("requester-{r}");
        for i in 0..per_requester {
            let uid = format!("req-{i}");
            let args = [
                "new",
                requester.as_str(),
                "bank",
                uid.as_str(),
                r#"{"amount":100}"#,
                "new",
                "{}",
            ];
            chaincode
                .invoke(&mut store, "submit_new_request", &args)
                .expect("submit");
        }
    }
    (store, chaincode)
}

fn bench_submit(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_new_request");
    for existing in [0usize, 1_000, 10_000] {
        let (store, chaincode) = seeded(existing / 10, 10);
        group.bench_with_input(BenchmarkId::from_parameter(existing), &existing, |b, _| {
            b.iter_batched(
                || store.clone(),
                |mut store| {
                    black_box(chaincode.invoke(
                        &mut store,
                        "submit_new_request",
                        &["new", "newcomer", "bank", "req-x", r#"{"amount":1}"#, "new", "{}"],
                    ))
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_approve(c: &mut Criterion) {
    let (mut store, chaincode) = seeded(100, 100);
    c.bench_function("approve_new_request", |b| {
        b.iter(|| {
            black_box(chaincode.invoke(
                &mut store,
                "approve_new_request",
                &["requester-50", "bank", "req-50"],
            ))
        })
    });
}

fn list(store: &InMemoryTableStore, chaincode: &Chaincode<FixedTimeSource>, requester: &str) {
    black_box(chaincode.query(store, "get_new_requests", &[requester]).ok());
}

fn bench_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_new_requests");
    for per_requester in [10usize, 100, 1_000] {
        let (store, chaincode) = seeded(50, per_requester);
        group.throughput(Throughput::Elements(per_requester as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(per_requester),
            &per_requester,
            |b, _| b.iter(|| list(&store, &chaincode, "requester-25")),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_submit, bench_approve, bench_listing);
criterion_main!(benches);
