// ============================================================================
// Convert Module
// Exchange-rate application between currencies
// ============================================================================

mod converter;

pub use converter::{convert_to, Direction};
