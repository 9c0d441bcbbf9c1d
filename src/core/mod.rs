//! Core types and constants for great-circle calculations

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
