// src/integer_math/mod.rs

pub mod factorial;

pub use factorial::Factorial;
