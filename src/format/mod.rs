// ============================================================================
// Format Module
// Canonical text parsing and locale-aware display
// ============================================================================

mod display;
mod locale;
mod parse;

pub use display::{display, display_amount, display_amount_with, display_iso, must_display};
pub use locale::{LocaleFormatter, Separators};
