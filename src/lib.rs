pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::inventory::dealership_inventory;
pub use crate::core::{report::InventoryReport, table::GridTable, Car, Motorcycle, Vehicle};
pub use utils::error::{ReportError, Result};
