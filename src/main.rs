// src/main.rs

use bigbench::benchmark::BenchmarkRunner;
use bigbench::config::BenchConfig;
use env_logger::Env;
use log::info;

fn main() {
    let config = BenchConfig::load().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}; falling back to defaults", e);
        BenchConfig::default()
    });

    // Initialize the logger
    let env = Env::default().default_filter_or(config.log_level.clone());
    env_logger::Builder::from_env(env).init();

    info!("starting arbitrary-precision arithmetic benchmarks");

    let mut runner = BenchmarkRunner::new(config.clone());
    runner.run_all();
    runner.print_summary();

    if let Some(path) = &config.results_path {
        match runner.save_results(path) {
            Ok(_) => println!("\nResults saved to: {}", path),
            Err(e) => eprintln!("Error saving results: {}", e),
        }
    }
}
