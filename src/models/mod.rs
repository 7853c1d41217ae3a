// models/mod.rs
pub mod destination;
pub mod preferences;
pub mod vehicle;

pub use destination::{builtin_destinations, Destination, GeoPoint};
pub use preferences::UserPreferences;
pub use vehicle::{builtin_profiles, VehicleProfile};
