pub mod report;
pub mod table;

pub use crate::domain::model::{Car, Motorcycle, VehicleInfo};
pub use crate::domain::ports::Vehicle;
pub use crate::utils::error::Result;
