// src/benchmark/results.rs

use crate::benchmark::system_info::SystemInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timed run of one experiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Experiment family, e.g. "factorial_binary_split".
    pub family: String,
    /// The console label printed for this run.
    pub label: String,
    /// Problem size (iteration count, exponent, n, or digit count).
    pub problem_size: u64,
    pub elapsed_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    pub timestamp: DateTime<Utc>,
    pub system_info: SystemInfo,
    pub runs: Vec<RunRecord>,
}

impl BenchmarkSuite {
    pub fn new() -> Self {
        BenchmarkSuite {
            timestamp: Utc::now(),
            system_info: SystemInfo::collect(),
            runs: Vec::new(),
        }
    }

    pub fn add_run(&mut self, record: RunRecord) {
        self.runs.push(record);
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let suite = serde_json::from_str(&json)?;
        Ok(suite)
    }

    /// Formatted table of every run, in execution order.
    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(80));
        println!("BENCHMARK SUITE RESULTS");
        println!("{}", "=".repeat(80));
        println!("\nTimestamp: {}", self.timestamp);
        println!("{}", self.system_info.to_string_pretty());

        println!("\n{}", "-".repeat(80));
        println!("{:<32} {:>16} {:>16}", "Experiment", "Size", "Elapsed");
        println!("{}", "-".repeat(80));
        for run in &self.runs {
            println!(
                "{:<32} {:>16} {:>16}",
                run.family,
                run.problem_size,
                Self::format_elapsed(run.elapsed_secs)
            );
        }
        println!("{}", "=".repeat(80));
    }

    fn format_elapsed(secs: f64) -> String {
        if secs < 0.001 {
            format!("{:.2} µs", secs * 1_000_000.0)
        } else if secs < 1.0 {
            format!("{:.2} ms", secs * 1_000.0)
        } else {
            format!("{:.2} s", secs)
        }
    }
}

impl Default for BenchmarkSuite {
    fn default() -> Self {
        Self::new()
    }
}
