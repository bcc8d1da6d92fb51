use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rusty_calculator::api::BasicOpRequest;
use rusty_calculator::arithmetic::{average, round_number};
use rusty_calculator::currency::{convert_currency, RateTable};
use rusty_calculator::finance::calculate_loan_payment;
use rusty_calculator::number_theory::{binomial_coefficient, fibonacci, is_prime};

fn benchmark_currency(c: &mut Criterion) {
    c.bench_function("convert_currency_default_table", |b| {
        b.iter(|| convert_currency(black_box(100.0), black_box("eur"), black_box("JPY")))
    });

    let table = RateTable::builtin();
    c.bench_function("rate_table_convert_1000", |b| {
        b.iter(|| {
            let codes = table.codes();
            for i in 0..1000 {
                let from = &codes[i % codes.len()];
                let to = &codes[(i * 7) % codes.len()];
                let _ = table.convert(black_box(i as f64), from, to);
            }
        })
    });
}

fn benchmark_number_theory(c: &mut Criterion) {
    c.bench_function("is_prime_large", |b| {
        b.iter(|| is_prime(black_box(2_147_483_647)))
    });

    c.bench_function("fibonacci_186", |b| b.iter(|| fibonacci(black_box(186))));

    c.bench_function("binomial_100_50", |b| {
        b.iter(|| binomial_coefficient(black_box(100), black_box(50)))
    });
}

fn benchmark_arithmetic(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| i as f64 * 0.5).collect();
    c.bench_function("average_10k", |b| b.iter(|| average(black_box(&values))));

    c.bench_function("round_number", |b| {
        b.iter(|| round_number(black_box(2.675), black_box(2)))
    });

    c.bench_function("loan_payment", |b| {
        b.iter(|| calculate_loan_payment(black_box(200_000.0), 0.04, 30.0, 12))
    });

    let request = BasicOpRequest {
        a: 15.0,
        b: 3.0,
        op: "divide".to_string(),
    };
    c.bench_function("basic_request_dispatch", |b| {
        b.iter(|| black_box(&request).evaluate())
    });
}

criterion_group!(
    benches,
    benchmark_currency,
    benchmark_number_theory,
    benchmark_arithmetic
);
criterion_main!(benches);
