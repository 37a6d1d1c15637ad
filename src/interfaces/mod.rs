// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod decimal_formatter;

pub use decimal_formatter::{DecimalFormatter, PlainFormatter};
