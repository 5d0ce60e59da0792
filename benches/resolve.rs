use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crudgen::config::{ColumnConfig, StrategyConfig};

/// Strategy with populated allow/deny lists and override registries.
fn populated_strategy(tables: usize) -> StrategyConfig {
    let mut strategy = StrategyConfig::new()
        .with_table_prefix("t_")
        .with_logic_delete_column("deleted")
        .with_version_column("version");
    strategy.add_generate_tables((0..tables).map(|i| format!("t_table_{i}")));
    strategy.add_un_generate_tables((0..tables / 4).map(|i| format!("t_denied_{i}")));
    for i in 0..tables {
        strategy.add_table_column_config(
            format!("t_table_{i}"),
            ColumnConfig::new("deleted").logic_delete(i % 2 == 0),
        );
    }
    strategy
}

fn bench_table_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_filter");
    for size in [10usize, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("is_support_generate", size), size, |b, &size| {
            let strategy = populated_strategy(size);
            b.iter(|| {
                let mut admitted = 0usize;
                for i in 0..size {
                    if strategy.is_support_generate(black_box(&format!("t_table_{i}"))) {
                        admitted += 1;
                    }
                }
                admitted
            });
        });
    }
    group.finish();
}

fn bench_column_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_resolution");
    for size in [10usize, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("resolve_column_config", size), size, |b, &size| {
            let strategy = populated_strategy(size);
            b.iter(|| {
                let mut hits = 0usize;
                for i in 0..size {
                    let table = format!("t_table_{i}");
                    // One overridden column, one name-convention column, one plain.
                    for column in ["deleted", "version", "name"] {
                        let resolved =
                            strategy.resolve_column_config(black_box(&table), black_box(column));
                        if resolved.is_logic_delete() || resolved.is_version() {
                            hits += 1;
                        }
                    }
                }
                hits
            });
        });
    }
    group.finish();
}

fn bench_base_name(c: &mut Criterion) {
    let strategy = StrategyConfig::new()
        .with_table_prefix("sys_")
        .with_table_prefix("t_");
    c.bench_function("base_name", |b| {
        b.iter(|| {
            (
                strategy.base_name(black_box("t_sys_user_account")),
                strategy.base_name(black_box("unprefixed_table")),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_table_filter,
    bench_column_resolution,
    bench_base_name
);
criterion_main!(benches);
