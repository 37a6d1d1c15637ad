// ============================================================================
// Exact Money Library
// Minor-unit money values with ISO 4217 currencies and exchange rates
// ============================================================================

//! # Exact Money
//!
//! Monetary amounts stored as an exact `i64` count of minor units, tied to a
//! registered ISO 4217 currency.
//!
//! ## Features
//!
//! - **Exact arithmetic** with checked overflow and currency-mismatch errors
//! - **Currency conversion** through directional exchange rates, applied
//!   forward or in reverse
//! - **Canonical text** (`"EUR 123"`) parsing and formatting
//! - **Structured codec** (JSON via serde) and **storage scan/value**
//! - **Locale-aware display** through a pluggable decimal formatter
//!
//! ## Example
//!
//! ```rust
//! use exact_money::prelude::*;
//!
//! let price = Money::forge(10000, "EUR")?;
//! let rate = Rate::from_codes("EUR", "USD", 1.1)?;
//!
//! let in_dollars = price.convert_to(&rate)?;
//! assert_eq!(in_dollars.to_string(), "USD 11000");
//!
//! let parsed: Money = "USD 11000".parse()?;
//! assert_eq!(parsed, in_dollars);
//!
//! assert_eq!(display(&price, "it")?, "\u{20ac} 100");
//! # Ok::<(), MoneyError>(())
//! ```

pub mod codec;
pub mod convert;
pub mod domain;
pub mod error;
pub mod format;
pub mod interfaces;
pub mod numeric;
pub mod shortcuts;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{DriverValue, MoneyDto, ShortDto};
    pub use crate::convert::{convert_to, Direction};
    pub use crate::domain::{Currency, Money, MoneyConfig, Rate};
    pub use crate::error::{MoneyError, MoneyResult};
    pub use crate::format::{display, display_amount, display_iso, must_display, LocaleFormatter};
    pub use crate::interfaces::{DecimalFormatter, PlainFormatter};
    pub use crate::numeric::Amount;
}
