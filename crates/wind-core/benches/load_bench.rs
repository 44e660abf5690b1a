use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wind_core::{load_from_reader, map_series, ParsePolicy};

fn gen_csv(rows: usize) -> String {
    let mut s = String::from("timestamp,direction,velocity\n");
    for i in 0..rows {
        let (h, m) = ((i / 60) % 24, i % 60);
        let dir = (i as f64 * 0.37).sin() * 180.0 + 180.0;
        let vel = (i as f64 * 0.05).cos() * 3.0 + 6.0;
        s.push_str(&format!("2024-01-01 {h:02}:{m:02}:00,{dir:.2},{vel:.2}\n"));
    }
    s
}

fn bench_load_and_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_and_map");
    for &rows in &[1_440usize, 10_080usize] {
        let csv = gen_csv(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &csv, |b, csv| {
            b.iter(|| {
                let report = load_from_reader(csv.as_bytes(), ParsePolicy::Impute).expect("load");
                black_box(map_series(&report.samples))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load_and_map);
criterion_main!(benches);
