// simulator/mod.rs
pub mod generator;
pub mod parking_lot;
pub mod position;
pub mod registry;
pub mod spot;

pub use parking_lot::ParkingLot;
pub use position::CellPosition;
pub use registry::LotRegistry;
pub use spot::{Spot, SpotType};
