use crate::core::table::GridTable;
use crate::domain::ports::Vehicle;
use crate::utils::currency;
use crate::utils::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

pub const REPORT_TITLE: &str = "🚗 INVENTARIO DEL CONCESIONARIO 🚙";
pub const TOTAL_LABEL: &str = "💰 Valor total del inventario:";
pub const COLUMNS: [&str; 5] = ["Tipo", "Marca", "Modelo", "Precio Base", "Precio Final"];

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    kind: String,
    brand: String,
    model: String,
    base_price: Decimal,
    final_price: Decimal,
}

impl ReportRow {
    pub fn kind(&self) -> &str {
        &self.kind
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

    pub fn final_price(&self) -> Decimal {
        self.final_price
    }

    fn from_vehicle(vehicle: &dyn Vehicle) -> Self {
        Self {
            kind: vehicle.kind().to_string(),
            brand: vehicle.brand().to_string(),
            model: vehicle.model().to_string(),
            base_price: vehicle.base_price(),
            final_price: vehicle.final_price(),
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.kind.clone(),
            self.brand.clone(),
            self.model.clone(),
            currency::format_grouped(self.base_price),
            currency::format_grouped(self.final_price),
        ]
    }
}

/// Priced rows for an inventory, in inventory order, plus their total.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryReport {
    rows: Vec<ReportRow>,
    total: Decimal,
}

impl InventoryReport {
    pub fn build(inventory: &[Box<dyn Vehicle>]) -> Self {
        tracing::debug!("Pricing {} vehicles", inventory.len());

        let mut rows = Vec::with_capacity(inventory.len());
        let mut total = Decimal::ZERO;

        for vehicle in inventory {
            let row = ReportRow::from_vehicle(vehicle.as_ref());
            tracing::debug!(
                "{} {} {}: base {}, final {}",
                row.kind,
                row.brand,
                row.model,
                row.base_price,
                row.final_price
            );
            total += row.final_price;
            rows.push(row);
        }

        tracing::info!("Inventory total: {}", total);
        Self { rows, total }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn table(&self) -> GridTable {
        let mut table = GridTable::new(COLUMNS);
        for row in &self.rows {
            table.push_row(row.cells());
        }
        table
    }

    pub fn total_line(&self) -> String {
        format!("{} {}", TOTAL_LABEL, currency::format_grouped(self.total))
    }

    /// Full console text: title, table and total, each block surrounded by
    /// blank lines.
    pub fn render(&self) -> String {
        format!(
            "\n{}\n\n{}\n\n{}\n\n",
            REPORT_TITLE,
            self.table().render(),
            self.total_line()
        )
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(self.render().as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
