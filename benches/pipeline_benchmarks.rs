//! Performance benchmarks for the payroll report calculations.
//!
//! Covers pricing, both aggregations and the left join over synthetic
//! records, plus how the whole calculation scales with input size.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_report::calculation::{
    left_join, price_records, summarize_billing, summarize_payroll,
};
use payroll_report::config::PayRules;
use payroll_report::models::{EmployeeRecord, OrderRecord};

const EMPLOYEES: usize = 50;
const CUSTOMERS: usize = 10;

/// Creates `count` work-day records spread over `EMPLOYEES` employees.
fn create_employee_records(count: usize) -> Vec<EmployeeRecord> {
    let date = NaiveDate::from_ymd_opt(2024, 3, 4);
    (0..count)
        .map(|i| EmployeeRecord {
            employee_id: Some(format!("E{}", i % EMPLOYEES)),
            name: Some(format!("Employee {}", i % EMPLOYEES)),
            date,
            // 4.00 to 13.75 hours, so roughly half the days include overtime
            hours_worked: Some(Decimal::new(400 + (i as i64 % 40) * 25, 2)),
            job: Some("Install".to_string()),
        })
        .collect()
}

/// Creates `count` orders spread over employees and customers.
fn create_order_records(count: usize) -> Vec<OrderRecord> {
    let date = NaiveDate::from_ymd_opt(2024, 3, 4);
    (0..count)
        .map(|i| OrderRecord {
            order_id: Some(format!("O{}", i)),
            date,
            customer: Some(format!("Customer {}", i % CUSTOMERS)),
            employee_id: Some(format!("E{}", (i * 7) % EMPLOYEES)),
            job: Some("Install".to_string()),
            amount_billed: Some(Decimal::new(5_000 + (i as i64 % 100) * 125, 2)),
        })
        .collect()
}

fn bench_price_records(c: &mut Criterion) {
    let records = create_employee_records(1_000);
    let rules = PayRules::default();

    let mut group = c.benchmark_group("pricing");
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("price_1000_records", |b| {
        b.iter(|| price_records(black_box(&records), black_box(&rules)).unwrap())
    });
    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let priced = price_records(&create_employee_records(1_000), &PayRules::default())
        .expect("Synthetic records should price");
    let orders = create_order_records(1_000);

    let mut group = c.benchmark_group("aggregation");
    group.throughput(Throughput::Elements(1_000));
    group.bench_function("summarize_payroll_1000", |b| {
        b.iter(|| summarize_payroll(black_box(&priced)).unwrap())
    });
    group.bench_function("summarize_billing_1000", |b| {
        b.iter(|| summarize_billing(black_box(&orders)).unwrap())
    });
    group.finish();
}

fn bench_left_join(c: &mut Criterion) {
    let priced = price_records(&create_employee_records(1_000), &PayRules::default())
        .expect("Synthetic records should price");
    let payroll = summarize_payroll(&priced).expect("Synthetic payroll should sum");
    let billing =
        summarize_billing(&create_order_records(1_000)).expect("Synthetic orders should sum");

    c.bench_function("left_join", |b| {
        b.iter(|| left_join(black_box(&payroll.rows), black_box(&billing.rows)))
    });
}

/// Benchmarks the full calculation at increasing input sizes.
fn bench_scaling(c: &mut Criterion) {
    let rules = PayRules::default();

    let mut group = c.benchmark_group("scaling");
    for size in [100usize, 1_000, 10_000].iter() {
        let records = create_employee_records(*size);
        let orders = create_order_records(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("records", size), size, |b, _| {
            b.iter(|| {
                let priced = price_records(black_box(&records), &rules).unwrap();
                let payroll = summarize_payroll(&priced).unwrap();
                let billing = summarize_billing(black_box(&orders)).unwrap();
                left_join(&payroll.rows, &billing.rows)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_price_records,
    bench_aggregation,
    bench_left_join,
    bench_scaling
);

criterion_main!(benches);
