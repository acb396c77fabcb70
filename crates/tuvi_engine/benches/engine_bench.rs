use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tuvi_canchi::Chi;
use tuvi_engine::{BirthInput, Gender, Layout, compute_chart};

fn sample_input() -> BirthInput {
    BirthInput {
        year: 1984,
        month: 5,
        day: 10,
        leap_month: false,
        hour: Chi::Ngo,
        gender: Gender::Male,
    }
}

fn bench_layout(c: &mut Criterion) {
    let input = sample_input();
    c.bench_function("layout_prepare", |b| {
        b.iter(|| Layout::prepare(black_box(&input)))
    });
}

fn bench_full_chart(c: &mut Criterion) {
    let input = sample_input();
    c.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(&input)))
    });
}

fn bench_month_sweep(c: &mut Criterion) {
    c.bench_function("compute_chart_year_sweep", |b| {
        b.iter(|| {
            for month in 1..=12u8 {
                let input = BirthInput {
                    month,
                    ..sample_input()
                };
                black_box(compute_chart(black_box(&input))).ok();
            }
        })
    });
}

criterion_group!(benches, bench_layout, bench_full_chart, bench_month_sweep);
criterion_main!(benches);
