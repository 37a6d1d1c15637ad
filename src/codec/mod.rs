// ============================================================================
// Codec Module
// Structured, textual and storage representations of money
// ============================================================================

mod driver;
mod dto;
#[cfg(feature = "serde")]
mod json;

pub use driver::DriverValue;
pub use dto::{MoneyDto, ShortDto};
