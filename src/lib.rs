//! SmartPark core: an in-memory parking-lot grid simulator, a deterministic
//! spot-allocation and reroute engine with an optional external
//! recommendation oracle, and a composer for turn-by-turn navigation text.
//!
//! The web layer, login flow and reservation storage live outside this
//! crate; `communication::messages` pins down the wire shapes they exchange
//! with the [`assistant::ParkingAssistant`] facade.

pub mod assistant;
pub mod communication;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod oracle;
pub mod simulator;

pub use assistant::ParkingAssistant;
pub use error::ParkingError;
