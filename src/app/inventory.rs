use crate::core::{Car, Motorcycle, Vehicle};
use rust_decimal::Decimal;

/// The dealership's stock, in display order.
pub fn dealership_inventory() -> Vec<Box<dyn Vehicle>> {
    vec![
        Box::new(Car::new("Toyota", "Yaris", Decimal::from(40000), 5)),
        Box::new(Motorcycle::new("Pulsar", "NS 200", Decimal::from(10000), 199)),
        Box::new(Car::new("Mazda", "CX30", Decimal::from(30000), 4)),
        Box::new(Motorcycle::new("Yamaha", "R3", Decimal::from(34000), 350)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_contents() {
        let inventory = dealership_inventory();
        let names: Vec<String> = inventory
            .iter()
            .map(|v| format!("{} {}", v.brand(), v.model()))
            .collect();
        assert_eq!(
            names,
            vec!["Toyota Yaris", "Pulsar NS 200", "Mazda CX30", "Yamaha R3"]
        );
    }
}
