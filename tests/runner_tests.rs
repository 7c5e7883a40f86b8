// End-to-end runner tests with scaled-down problem sizes
use bigbench::benchmark::BenchmarkRunner;
use bigbench::benchmark::BenchmarkSuite;
use bigbench::config::BenchConfig;

fn tiny_config() -> BenchConfig {
    let mut config = BenchConfig::default();
    config.addition.iterations = 1000;
    config.multiplication.iterations = 1000;
    config.exponentiation.start_exponent = 10;
    config.exponentiation.runs = 3;
    config.factorial.start = 10;
    config.factorial.naive_runs = 2;
    config.factorial.binary_split_runs = 2;
    config.sqrt.start_digits = 100;
    config.sqrt.runs = 2;
    config
}

#[test]
fn run_all_records_every_experiment() {
    let mut runner = BenchmarkRunner::new(tiny_config());
    runner.run_all();

    let suite = runner.suite();
    // 1 addition + 1 multiplication + 3 exponentiation + 2 + 2 factorial + 2 sqrt
    assert_eq!(suite.runs.len(), 11);

    for run in &suite.runs {
        assert!(run.elapsed_secs >= 0.0, "{} went backwards", run.label);
        assert!(run.problem_size > 0);
    }
}

#[test]
fn problem_sizes_follow_growth_schedules() {
    let mut runner = BenchmarkRunner::new(tiny_config());
    runner.run_all();

    let sizes = |family: &str| -> Vec<u64> {
        runner
            .suite()
            .runs
            .iter()
            .filter(|r| r.family == family)
            .map(|r| r.problem_size)
            .collect()
    };

    // Exponent alternates x2 / x5 starting from 10
    assert_eq!(sizes("exponentiation"), vec![10, 20, 100]);
    // Factorial alternates x5 / x2 starting from 10
    assert_eq!(sizes("factorial_naive"), vec![10, 50]);
    assert_eq!(sizes("factorial_binary_split"), vec![10, 50]);
    // Digits grow x10
    assert_eq!(sizes("sqrt2"), vec![100, 1000]);
}

#[test]
fn suite_round_trips_through_json() {
    let mut runner = BenchmarkRunner::new(tiny_config());
    runner.run_addition();

    let path = std::env::temp_dir().join("bigbench_suite_test.json");
    let path = path.to_str().unwrap().to_string();

    runner.save_results(&path).unwrap();
    let loaded = BenchmarkSuite::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.runs.len(), 1);
    assert_eq!(loaded.runs[0].family, "addition");
    assert_eq!(loaded.runs[0].problem_size, 1000);
}
