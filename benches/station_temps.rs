use chrono::{Datelike, Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};
use station_temps::{
    render_chart, validate_dataset, CalendarRange, ChartConfig, ChartLayout, Dataset, Metric,
    Selection,
};

/// Fifty years of daily records for one station.
fn synthetic_document() -> Value {
    let first = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    let temps: Vec<Value> = (0..50 * 365)
        .map(|i| {
            let date = first + Duration::days(i);
            let seasonal = ((i % 365) as f64 / 365.0 * std::f64::consts::TAU).sin() * 10.0;
            json!({
                "date": date.format("%Y-%m-%d").to_string(),
                "day": date.day(),
                "month": date.month(),
                "year": date.year(),
                "avg": 12.0 + seasonal,
                "high": 17.0 + seasonal,
                "low": 7.0 + seasonal,
            })
        })
        .collect();
    json!({ "bench": { "name": "Bench Station", "temps": temps } })
}

fn bench_pipeline(c: &mut Criterion) {
    let document = synthetic_document();
    c.bench_function("validate_dataset", |b| {
        b.iter(|| validate_dataset(black_box(&document)).unwrap())
    });

    let dataset: Dataset = validate_dataset(&document).unwrap();
    let config = ChartConfig::default();
    let summer = CalendarRange::parse("2000-06-01", "2000-07-31").unwrap();
    for layout in ChartLayout::ALL {
        let selection = Selection::builder()
            .station_id("bench")
            .metric(Metric::Maximum)
            .layout(layout)
            .range(summer)
            .build();
        c.bench_function(&format!("render_chart_{}", layout.id()), |b| {
            b.iter(|| render_chart(black_box(&dataset), black_box(&selection), &config).unwrap())
        });
    }
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
