// ============================================================================
// Domain Models Module
// Currencies, money values, exchange rates and their configuration
// ============================================================================

pub mod config;
pub mod currency;
pub mod money;
pub mod rate;
pub mod registry;

pub use config::MoneyConfig;
pub use currency::Currency;
pub use money::Money;
pub use rate::Rate;
