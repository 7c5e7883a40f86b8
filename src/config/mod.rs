// src/config/mod.rs

pub mod bench_config;

pub use bench_config::{
    AdditionConfig, BenchConfig, ExponentiationConfig, FactorialConfig, MultiplicationConfig,
    SqrtConfig,
};
