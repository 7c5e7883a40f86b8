// src/benchmark/mod.rs

pub mod experiments;
pub mod results;
pub mod runner;
pub mod system_info;

pub use results::{BenchmarkSuite, RunRecord};
pub use runner::BenchmarkRunner;
pub use system_info::SystemInfo;
