// src/square_root/mod.rs

pub mod fixed_point;

pub use fixed_point::{digits_to_bits, sqrt_fixed, sqrt2_fixed};
