// src/config/bench_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Benchmark configuration. Defaults reproduce the canonical problem-size
/// schedules; a TOML file or environment variables can override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Optional path for the JSON results file; no file is written when unset
    #[serde(default)]
    pub results_path: Option<String>,

    pub addition: AdditionConfig,
    pub multiplication: MultiplicationConfig,
    pub exponentiation: ExponentiationConfig,
    pub factorial: FactorialConfig,
    pub sqrt: SqrtConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionConfig {
    pub iterations: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiplicationConfig {
    pub iterations: u64,
    pub multiplicand: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExponentiationConfig {
    pub base: u32,
    /// Starting exponent; grows by alternating x2 / x5 across runs
    pub start_exponent: u32,
    pub runs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorialConfig {
    /// Starting n; grows by alternating x5 / x2 across runs
    pub start: u64,
    pub naive_runs: u32,
    pub binary_split_runs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqrtConfig {
    pub start_digits: u64,
    pub runs: u32,
    pub growth_factor: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            log_level: "info".to_string(),
            results_path: None,
            addition: AdditionConfig {
                iterations: 10_000_000,
            },
            multiplication: MultiplicationConfig {
                iterations: 10_000_000,
                multiplicand: 123_456_789,
            },
            exponentiation: ExponentiationConfig {
                base: 5,
                start_exponent: 5000,
                runs: 6,
            },
            factorial: FactorialConfig {
                start: 1000,
                naive_runs: 4,
                binary_split_runs: 6,
            },
            sqrt: SqrtConfig {
                start_digits: 100_000,
                runs: 3,
                growth_factor: 10,
            },
        }
    }
}

impl BenchConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("addition.iterations", 10_000_000i64)?
            .set_default("multiplication.iterations", 10_000_000i64)?
            .set_default("multiplication.multiplicand", 123_456_789i64)?
            .set_default("exponentiation.base", 5)?
            .set_default("exponentiation.start_exponent", 5000)?
            .set_default("exponentiation.runs", 6)?
            .set_default("factorial.start", 1000)?
            .set_default("factorial.naive_runs", 4)?
            .set_default("factorial.binary_split_runs", 6)?
            .set_default("sqrt.start_digits", 100_000i64)?
            .set_default("sqrt.runs", 3)?
            .set_default("sqrt.growth_factor", 10)?;

        if Path::new("bigbench.toml").exists() {
            builder = builder.add_source(File::with_name("bigbench.toml"));
        }

        // Override with environment variables (prefix: BIGBENCH_)
        builder = builder.add_source(
            Environment::with_prefix("BIGBENCH")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canonical_schedules() {
        let config = BenchConfig::default();
        assert_eq!(config.addition.iterations, 10_000_000);
        assert_eq!(config.multiplication.multiplicand, 123_456_789);
        assert_eq!(config.exponentiation.start_exponent, 5000);
        assert_eq!(config.factorial.start, 1000);
        assert_eq!(config.sqrt.start_digits, 100_000);
        assert!(config.results_path.is_none());
    }
}
