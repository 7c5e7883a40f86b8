// src/lib.rs

pub mod benchmark;
pub mod config;
pub mod integer_math;
pub mod square_root;
