// src/benchmark/runner.rs

use log::{debug, info};
use num::BigInt;
use std::time::Instant;

use crate::benchmark::experiments;
use crate::benchmark::results::{BenchmarkSuite, RunRecord};
use crate::config::BenchConfig;
use crate::integer_math::Factorial;
use crate::square_root::{digits_to_bits, sqrt2_fixed};

/// Executes every experiment family strictly sequentially, printing one
/// `"<label>: <elapsed> seconds."` line per run and collecting the runs
/// into a `BenchmarkSuite`.
pub struct BenchmarkRunner {
    config: BenchConfig,
    suite: BenchmarkSuite,
}

impl BenchmarkRunner {
    pub fn new(config: BenchConfig) -> Self {
        BenchmarkRunner {
            config,
            suite: BenchmarkSuite::new(),
        }
    }

    /// Run all six experiment families in order, with a blank line between
    /// groups.
    pub fn run_all(&mut self) {
        info!("running all experiment families");
        self.run_addition();
        println!();
        self.run_multiplication();
        println!();
        self.run_exponentiation();
        println!();
        self.run_naive_factorial();
        println!();
        self.run_binary_split_factorial();
        println!();
        self.run_square_root();
    }

    pub fn run_addition(&mut self) {
        let iterations = self.config.addition.iterations;
        let label = format!("Sum of 1 to {}", iterations);
        self.timed("addition", label, iterations, || {
            experiments::repeated_addition(iterations);
        });
    }

    pub fn run_multiplication(&mut self) {
        let iterations = self.config.multiplication.iterations;
        let multiplicand = BigInt::from(self.config.multiplication.multiplicand);
        let label = format!("{} replicates of small digits multiplication", iterations);
        self.timed("multiplication", label, iterations, || {
            experiments::repeated_multiplication(&multiplicand, iterations);
        });
    }

    pub fn run_exponentiation(&mut self) {
        let base = self.config.exponentiation.base;
        let runs = self.config.exponentiation.runs;
        let mut m = self.config.exponentiation.start_exponent;
        for i in 0..runs {
            let label = format!("{} to the {}th power", base, m);
            self.timed("exponentiation", label, m as u64, || {
                experiments::power(base, m);
            });
            if i % 2 == 0 {
                m *= 2;
            } else {
                m *= 5;
            }
        }
    }

    pub fn run_naive_factorial(&mut self) {
        let runs = self.config.factorial.naive_runs;
        let mut m = self.config.factorial.start;
        for i in 0..runs {
            let label = format!("Factorial of {} by loop", m);
            self.timed("factorial_naive", label, m, || {
                Factorial::naive(m);
            });
            if i % 2 == 1 {
                m *= 2;
            } else {
                m *= 5;
            }
        }
    }

    pub fn run_binary_split_factorial(&mut self) {
        let runs = self.config.factorial.binary_split_runs;
        let mut m = self.config.factorial.start;
        for i in 0..runs {
            let label = format!("Factorial of {} by binary splitting", m);
            self.timed("factorial_binary_split", label, m, || {
                Factorial::binary_split(m);
            });
            if i % 2 == 1 {
                m *= 2;
            } else {
                m *= 5;
            }
        }
    }

    pub fn run_square_root(&mut self) {
        let runs = self.config.sqrt.runs;
        let growth = self.config.sqrt.growth_factor;
        let mut digits = self.config.sqrt.start_digits;
        for _ in 0..runs {
            let bits = digits_to_bits(digits);
            debug!("sqrt(2) at {} digits = {} bits", digits, bits);
            let label = format!("sqrt(2) {} digits", digits);
            self.timed("sqrt2", label, digits, || {
                sqrt2_fixed(bits);
            });
            digits *= growth;
        }
    }

    // Wall-clock timing at microsecond resolution, reported in seconds.
    fn timed<F: FnOnce()>(&mut self, family: &str, label: String, problem_size: u64, op: F) -> f64 {
        let t1 = Instant::now();
        op();
        let elapsed_secs = t1.elapsed().as_micros() as f64 / 1_000_000.0;
        println!("{}: {} seconds.", label, elapsed_secs);
        self.suite.add_run(RunRecord {
            family: family.to_string(),
            label,
            problem_size,
            elapsed_secs,
        });
        elapsed_secs
    }

    pub fn save_results(&self, path: &str) -> std::io::Result<()> {
        self.suite.save_to_file(path)
    }

    pub fn print_summary(&self) {
        self.suite.print_summary();
    }

    pub fn suite(&self) -> &BenchmarkSuite {
        &self.suite
    }
}
