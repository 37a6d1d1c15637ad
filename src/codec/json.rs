// ============================================================================
// JSON Codec
// ============================================================================

use crate::domain::Money;
use crate::error::MoneyResult;

impl Money {
    /// `{"amount":123,"currency":"EUR","symbol":"€","unit":100}`
    pub fn to_json(&self) -> MoneyResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode the structured form. Unknown fields are ignored; `cents` is
    /// accepted in place of `unit`.
    ///
    /// # Errors
    /// - `Json` for malformed input
    /// - `InvalidMoney` for an empty currency
    /// - `UnknownCurrency` for an unregistered currency
    pub fn from_json(json: &str) -> MoneyResult<Money> {
        let dto: super::MoneyDto = serde_json::from_str(json)?;
        dto.extract_money()
    }
}
