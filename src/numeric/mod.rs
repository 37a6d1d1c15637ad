// ============================================================================
// Numeric Module
// Exact minor-unit amounts and the single float rounding policy
// ============================================================================
//
// This module provides:
// - Amount: signed i64 count of minor units with checked arithmetic
// - round_half_away / to_minor_units: the only place floats become integers
//
// Every float-to-integer step in the crate goes through `round_half_away`,
// so cent-level results are reproducible across operations.

mod amount;
mod rounding;

pub use amount::Amount;
pub use rounding::{pow10, round_half_away, to_minor_units};
