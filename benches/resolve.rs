use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use panchayat::{AgentResponse, ConsensusResolver, ResolutionLog};

fn make_batch(size: usize, domain: &str) -> Vec<AgentResponse> {
    let agents = [
        "integration_specialist",
        "mathematics_validator",
        "risk_assessor",
        "nuance_specialist",
    ];
    (0..size)
        .map(|i| {
            AgentResponse::builder(agents[i % agents.len()], domain)
                .score(60.0 + (i % 30) as f32)
                .confidence(0.5 + 0.4 * ((i % 10) as f32 / 10.0))
                .dasha_weight(0.7)
                .sav_score("32/48")
                .build()
                .unwrap()
        })
        .collect()
}

fn bench_resolve_unanimous(c: &mut Criterion) {
    let resolver = ConsensusResolver::new();
    let batch = make_batch(4, "career");

    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(1));
    group.bench_function("unanimous_4_agents", |b| {
        let mut log = ResolutionLog::new();
        b.iter(|| {
            let result = resolver
                .resolve(black_box(&batch), "career", &mut log)
                .unwrap();
            black_box(result)
        });
    });
    group.finish();
}

fn bench_resolve_arbitration(c: &mut Criterion) {
    let resolver = ConsensusResolver::new();
    let mut batch = make_batch(4, "marriage");
    // Force the specialist into conflict so the arbitration path runs.
    batch[3].score = 95.0;
    for r in &mut batch[..3] {
        r.score = 60.0;
    }

    c.bench_function("resolve/nuance_arbitration", |b| {
        b.iter(|| {
            let mut log = ResolutionLog::new();
            let result = resolver
                .resolve(black_box(&batch), "marriage", &mut log)
                .unwrap();
            black_box(result)
        });
    });
}

fn bench_resolve_wide_batch(c: &mut Criterion) {
    let resolver = ConsensusResolver::new();
    let batch = make_batch(64, "career");

    c.bench_function("resolve/wide_batch_64", |b| {
        let mut log = ResolutionLog::new();
        b.iter(|| {
            let result = resolver
                .resolve(black_box(&batch), "career", &mut log)
                .unwrap();
            black_box(result)
        });
    });
}

criterion_group!(
    benches,
    bench_resolve_unanimous,
    bench_resolve_arbitration,
    bench_resolve_wide_batch
);
criterion_main!(benches);
