use crate::utils::currency;
use rust_decimal::Decimal;

/// Shared contract of every vehicle held by the dealership.
///
/// Implementors supply the tax rule, the type label and the summary line;
/// prices derived from them are always recomputed, never cached.
pub trait Vehicle {
    /// Label shown in the report's "Tipo" column.
    fn kind(&self) -> &'static str;

    fn brand(&self) -> &str;

    fn model(&self) -> &str;

    /// Base price, never below 1.
    fn base_price(&self) -> Decimal;

    fn tax(&self) -> Decimal;

    fn final_price(&self) -> Decimal {
        self.base_price() + self.tax()
    }

    /// One-line description with brand, model and base price plus the
    /// variant's own details.
    fn summary_line(&self) -> String;

    fn describe(&self) -> String {
        format!(
            "{} | Final: {}",
            self.summary_line(),
            currency::format_plain(self.final_price())
        )
    }
}
