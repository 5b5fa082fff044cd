use concesionario::{dealership_inventory, InventoryReport, Vehicle};
use rust_decimal::Decimal;

const EXPECTED_TABLE: &str = "\
╒═══════════╤═════════╤══════════╤═══════════════╤════════════════╕
│ Tipo      │ Marca   │ Modelo   │ Precio Base   │ Precio Final   │
╞═══════════╪═════════╪══════════╪═══════════════╪════════════════╡
│ Automovil │ Toyota  │ Yaris    │ $40,000.00    │ $42,800.00     │
├───────────┼─────────┼──────────┼───────────────┼────────────────┤
│ Moto      │ Pulsar  │ NS 200   │ $10,000.00    │ $10,500.00     │
├───────────┼─────────┼──────────┼───────────────┼────────────────┤
│ Automovil │ Mazda   │ CX30     │ $30,000.00    │ $32,400.00     │
├───────────┼─────────┼──────────┼───────────────┼────────────────┤
│ Moto      │ Yamaha  │ R3       │ $34,000.00    │ $37,060.00     │
╘═══════════╧═════════╧══════════╧═══════════════╧════════════════╛";

#[test]
fn test_dealership_prices() {
    let inventory = dealership_inventory();
    let taxes: Vec<Decimal> = inventory.iter().map(|v| v.tax()).collect();
    let finals: Vec<Decimal> = inventory.iter().map(|v| v.final_price()).collect();

    assert_eq!(
        taxes,
        vec![
            Decimal::from(2800),
            Decimal::from(500),
            Decimal::from(2400),
            Decimal::from(3060),
        ]
    );
    assert_eq!(
        finals,
        vec![
            Decimal::from(42800),
            Decimal::from(10500),
            Decimal::from(32400),
            Decimal::from(37060),
        ]
    );
}

#[test]
fn test_dealership_total() {
    let report = InventoryReport::build(&dealership_inventory());
    assert_eq!(report.total(), Decimal::from(122760));
    assert_eq!(
        report.total_line(),
        "💰 Valor total del inventario: $122,760.00"
    );
}

#[test]
fn test_rendered_table() {
    let report = InventoryReport::build(&dealership_inventory());
    assert_eq!(report.table().render(), EXPECTED_TABLE);
}

#[test]
fn test_full_console_output() {
    let report = InventoryReport::build(&dealership_inventory());
    let mut out = Vec::new();
    report.write_to(&mut out).unwrap();

    let expected = format!(
        "\n🚗 INVENTARIO DEL CONCESIONARIO 🚙\n\n{}\n\n💰 Valor total del inventario: $122,760.00\n\n",
        EXPECTED_TABLE
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_pricing_is_idempotent() {
    for vehicle in dealership_inventory() {
        assert_eq!(vehicle.tax(), vehicle.tax());
        assert_eq!(vehicle.final_price(), vehicle.final_price());
        assert_eq!(vehicle.final_price(), vehicle.base_price() + vehicle.tax());
    }
}
