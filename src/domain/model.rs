use crate::domain::ports::Vehicle;
use crate::utils::currency;
use rust_decimal::Decimal;
use std::fmt;

/// Displacement up to which a motorcycle pays the low rate, inclusive.
pub const MOTORCYCLE_LOW_RATE_MAX_CC: u32 = 250;
/// 0.05
pub const MOTORCYCLE_LOW_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
/// 0.09
pub const MOTORCYCLE_HIGH_RATE: Decimal = Decimal::from_parts(9, 0, 0, false, 2);

/// 0.08
pub const CAR_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);
/// 0.01, subtracted from [`CAR_RATE`] for five-door cars.
pub const CAR_DISCOUNT_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
/// Only cars with exactly this many doors get the discount.
pub const CAR_DISCOUNT_DOORS: u32 = 5;

/// Fields every vehicle shares.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleInfo {
    brand: String,
    model: String,
    base_price: Decimal,
}

impl VehicleInfo {
    /// Prices below 1 are raised to 1.
    pub fn new(brand: impl Into<String>, model: impl Into<String>, base_price: Decimal) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            base_price: base_price.max(Decimal::ONE),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    pub fn summary(&self) -> String {
        format!(
            "{} {} ({})",
            self.brand,
            self.model,
            currency::format_plain(self.base_price)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Motorcycle {
    info: VehicleInfo,
    displacement_cc: u32,
}

impl Motorcycle {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        base_price: Decimal,
        displacement_cc: u32,
    ) -> Self {
        Self {
            info: VehicleInfo::new(brand, model, base_price),
            displacement_cc,
        }
    }

    pub fn displacement_cc(&self) -> u32 {
        self.displacement_cc
    }

    fn rate(&self) -> Decimal {
        if self.displacement_cc <= MOTORCYCLE_LOW_RATE_MAX_CC {
            MOTORCYCLE_LOW_RATE
        } else {
            MOTORCYCLE_HIGH_RATE
        }
    }
}

impl Vehicle for Motorcycle {
    fn kind(&self) -> &'static str {
        "Moto"
    }

    fn brand(&self) -> &str {
        self.info.brand()
    }

    fn model(&self) -> &str {
        self.info.model()
    }

    fn base_price(&self) -> Decimal {
        self.info.base_price()
    }

    fn tax(&self) -> Decimal {
        self.info.base_price() * self.rate()
    }

    fn summary_line(&self) -> String {
        format!(
            "{} | {} | {}cc",
            self.kind(),
            self.info.summary(),
            self.displacement_cc
        )
    }
}

impl fmt::Display for Motorcycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    info: VehicleInfo,
    door_count: u32,
}

impl Car {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        base_price: Decimal,
        door_count: u32,
    ) -> Self {
        Self {
            info: VehicleInfo::new(brand, model, base_price),
            door_count,
        }
    }

    pub fn door_count(&self) -> u32 {
        self.door_count
    }
}

impl Vehicle for Car {
    fn kind(&self) -> &'static str {
        "Automovil"
    }

    fn brand(&self) -> &str {
        self.info.brand()
    }

    fn model(&self) -> &str {
        self.info.model()
    }

    fn base_price(&self) -> Decimal {
        self.info.base_price()
    }

    fn tax(&self) -> Decimal {
        let base = self.info.base_price();
        let discount = if self.door_count == CAR_DISCOUNT_DOORS {
            base * CAR_DISCOUNT_RATE
        } else {
            Decimal::ZERO
        };
        base * CAR_RATE - discount
    }

    fn summary_line(&self) -> String {
        format!(
            "{} | {} | {} puertas",
            self.kind(),
            self.info.summary(),
            self.door_count
        )
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
