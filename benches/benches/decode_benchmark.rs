//! Decoding, pagination and order book benchmarks.
//!
//! Run with: `cargo bench --package moexiss-bench`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use moexiss_bench::{PagedTransport, book_rows, candle_table};
use moexiss_lib::{
    Candle, CsvFormatter, DateRange, Formatter, Interval, IssClient, Market, build_book, decode,
};
use reqwest::Url;
use std::hint::black_box;

fn decode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for rows in [100, 1_000, 10_000] {
        let table = candle_table(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("candles", rows), &table, |b, table| {
            b.iter(|| decode::<Candle>(black_box(table)).unwrap());
        });
    }

    group.finish();
}

fn book_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("book");

    for levels in [10, 20, 50] {
        let rows = book_rows(levels);
        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_with_input(BenchmarkId::new("build", levels), &rows, |b, rows| {
            b.iter(|| build_book(black_box(rows)));
        });
    }

    group.finish();
}

fn paginate_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let base = Url::parse("https://iss.moex.com/iss/").unwrap();
    let range = DateRange::single_day(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());

    let mut group = c.benchmark_group("paginate");
    group.sample_size(20);

    for total in [500, 5_000] {
        let client = IssClient::with_transport(PagedTransport::new(total, 500), base.clone());
        group.throughput(Throughput::Elements(total as u64));
        group.bench_with_input(BenchmarkId::new("candles", total), &client, |b, client| {
            b.to_async(&runtime).iter(|| async {
                client
                    .candles(Market::STOCK_SHARES, "SBER", Interval::Minute1, range)
                    .fetch_all()
                    .await
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn csv_benchmark(c: &mut Criterion) {
    let candles = decode::<Candle>(&candle_table(10_000)).unwrap();
    let formatter = CsvFormatter::new();

    c.bench_function("csv/candles/10000", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1 << 20);
            formatter.write_records(black_box(&candles), &mut out).unwrap();
            out
        });
    });
}

criterion_group!(
    benches,
    decode_benchmark,
    book_benchmark,
    paginate_benchmark,
    csv_benchmark
);
criterion_main!(benches);
