use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::BTreeMap;
use urania::ephemeris::{Body, BodyPosition, ChartInput, HouseData, HousePositions};
use urania::InterpretationAssembler;

fn sample_chart(houses: HouseData) -> ChartInput {
    let positions: BTreeMap<_, _> = Body::all()
        .enumerate()
        .map(|(i, body)| (body, BodyPosition::at(13.0 + (i as f64) * 41.0)))
        .collect();
    ChartInput::new(positions, houses)
}

fn placidus_like() -> HouseData {
    let cusps = [
        344.2, 18.9, 47.1, 71.5, 96.3, 125.8, 164.2, 198.9, 227.1, 251.5, 276.3, 305.8,
    ];
    HouseData::Computed(HousePositions::from_cusp_array(344.2, 251.5, &cusps))
}

fn bench_assemble(c: &mut Criterion) {
    let assembler = InterpretationAssembler::default();
    let full = sample_chart(placidus_like());
    let degraded = sample_chart(HouseData::failed("polar latitude"));

    c.bench_function("assemble_full_chart", |b| {
        b.iter(|| assembler.assemble(black_box(&full)))
    });
    c.bench_function("assemble_without_houses", |b| {
        b.iter(|| assembler.assemble(black_box(&degraded)))
    });
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
