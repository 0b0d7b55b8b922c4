use chrono::{TimeZone, Utc};
use compass_astro::{
    GeoLocation, HouseFrame, HouseSystem, NodeMode, compute_houses, compute_nodes,
    mean_north_node_deg,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_nodes(c: &mut Criterion) {
    let utc = Utc.with_ymd_and_hms(2000, 6, 15, 12, 30, 0).unwrap();
    let paris = GeoLocation::new(48.8566, 2.3522);

    c.bench_function("mean_north_node", |b| {
        b.iter(|| mean_north_node_deg(black_box(0.0045)))
    });

    let frame = HouseFrame::new(2_451_711.02, 0.0045, &paris);
    c.bench_function("placidus_houses", |b| {
        b.iter(|| compute_houses(black_box(&frame), HouseSystem::Placidus))
    });

    c.bench_function("compute_nodes", |b| {
        b.iter(|| {
            compute_nodes(
                black_box(&utc),
                black_box(&paris),
                HouseSystem::Placidus,
                NodeMode::Mean,
            )
        })
    });
}

criterion_group!(benches, bench_nodes);
criterion_main!(benches);
