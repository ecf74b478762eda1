use criterion::{criterion_group, criterion_main, Criterion};
use heatmap_rs::core::{
    BandScale, Dataset, TemperatureRecord, ThresholdClassifier, RD_YL_BU_11,
};
use heatmap_rs::render::{build_legend, project_cells};
use std::hint::black_box;

fn synthetic_dataset(years: i32) -> Dataset {
    let records: Vec<TemperatureRecord> = (0..years)
        .flat_map(|offset| {
            (0..12).map(move |month| {
                let variance = ((offset * 12 + month as i32) % 17) as f64 * 0.1 - 0.8;
                TemperatureRecord::new(1753 + offset, month, variance)
            })
        })
        .collect();
    Dataset::new(8.66, records).expect("valid generated dataset")
}

fn bench_classify(c: &mut Criterion) {
    let classifier = ThresholdClassifier::build(2.56, 10.46, &RD_YL_BU_11).expect("classifier");

    c.bench_function("threshold_classify", |b| {
        b.iter(|| {
            let _ = classifier.classify(black_box(7.31));
        })
    });
}

fn bench_cell_projection_260_years(c: &mut Criterion) {
    let dataset = synthetic_dataset(260);
    let x_scale = BandScale::build(dataset.year_domain(), 1070.0, 0.05).expect("x scale");
    let y_scale = BandScale::months(370.0).expect("y scale");
    let (min, max) = dataset.temperature_range();
    let classifier = ThresholdClassifier::build(min, max, &RD_YL_BU_11).expect("classifier");

    c.bench_function("cell_projection_260_years", |b| {
        b.iter(|| {
            let _ = project_cells(
                black_box(&dataset),
                black_box(&x_scale),
                black_box(&y_scale),
                black_box(&classifier),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_legend_layout(c: &mut Criterion) {
    let classifier = ThresholdClassifier::build(2.56, 10.46, &RD_YL_BU_11).expect("classifier");

    c.bench_function("legend_layout", |b| {
        b.iter(|| {
            let _ = build_legend(black_box(&classifier), black_box(400.0), black_box(27.0))
                .expect("legend should build");
        })
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_cell_projection_260_years,
    bench_legend_layout
);
criterion_main!(benches);
