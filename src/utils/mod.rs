//! Conversion helpers shared across the session core

pub mod amount;

pub use amount::{fiat_value, format_major_units, parse_base_units};
