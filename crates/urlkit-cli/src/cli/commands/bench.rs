//! `urlkit bench` – time the core operations.

use anyhow::Result;
use urlkit_core::bench::{self, BenchResult};
use urlkit_core::config::{BenchConfig, UrlKitConfig};

fn print_bench_results(results: &[BenchResult]) {
    println!(
        "  {:<32}  {:>10}  {:>12}  {:>10}  {:>10}",
        "Case", "Iters", "Ops/s", "us/op", "Total(ms)"
    );
    println!(
        "  {}  {}  {}  {}  {}",
        "--------------------------------", "----------", "------------", "----------", "----------"
    );
    for r in results {
        println!(
            "  {:<32}  {:>10}  {:>12.0}  {:>10.4}  {:>10.2}",
            r.name,
            r.iterations,
            r.ops_per_sec,
            r.secs_per_op * 1e6,
            r.total_secs * 1e3
        );
    }
}

pub fn run_bench(cfg: &UrlKitConfig, iterations: Option<u32>) -> Result<()> {
    let bench_cfg = BenchConfig {
        iterations: iterations.unwrap_or(cfg.bench.iterations),
        warmup: cfg.bench.warmup,
    };
    tracing::info!(
        iterations = bench_cfg.iterations,
        warmup = bench_cfg.warmup,
        "running benchmark"
    );
    let results = bench::run_bench(&bench_cfg);
    print_bench_results(&results);
    if let Some(best) = bench::fastest(&results) {
        println!("Fastest: {} ({:.0} ops/s)", best.name, best.ops_per_sec);
    }
    Ok(())
}
