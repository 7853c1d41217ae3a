// src/main.rs
//
// Demo scenario: spin up a registry, park a few catalog vehicles in one
// lot, reroute one of them mid-drive, then reset the lot. Run with
// RUST_LOG=info to watch the allocation decisions.

use smartpark::assistant::ParkingAssistant;
use smartpark::communication::messages::{AllocateSpotRequest, ErrorResponse, RerouteRequest};
use smartpark::config::{AssistantConfig, GeneratorConfig};
use smartpark::models::destination::builtin_destinations;
use smartpark::models::preferences::UserPreferences;
use smartpark::models::vehicle::builtin_profiles;
use smartpark::oracle::NullOracle;
use smartpark::simulator::registry::LotRegistry;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let registry = Arc::new(LotRegistry::new(GeneratorConfig::default()));
    let assistant = ParkingAssistant::new(registry, NullOracle, AssistantConfig::default());

    let lot_view = assistant.lot_snapshot("parking_1");
    println!(
        "Lot {}: {} x {} grid, {} of {} spots available",
        lot_view.id, lot_view.rows, lot_view.cols, lot_view.available_spots, lot_view.total_spots
    );

    for vehicle in builtin_profiles() {
        let request = AllocateSpotRequest {
            parking_id: "parking_1".to_string(),
            vehicle_info: vehicle,
            user_preferences: UserPreferences::default(),
        };
        match assistant.allocate_spot(&request).await {
            Ok(response) => {
                println!("\n--- {} ---", request.vehicle_info.name);
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            Err(err) => {
                let (status, body) = ErrorResponse::from_error(&err);
                println!("\n--- {} (HTTP {}) ---", request.vehicle_info.name, status);
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
        }
    }

    // One of the drivers missed a turn; re-plan from where they actually are.
    let reroute = RerouteRequest {
        parking_id: "parking_1".to_string(),
        vehicle_info: builtin_profiles().into_iter().next().unwrap(),
        current_position: [6.0, 0.0, 9.0],
        destination: builtin_destinations().into_iter().next(),
    };
    let response = assistant.reroute_spot(&reroute).await?;
    println!("\n--- reroute ---");
    println!("{}", serde_json::to_string_pretty(&response)?);

    assistant.reset_lot("parking_1")?;
    let lot_view = assistant.lot_snapshot("parking_1");
    println!(
        "\nAfter reset: {} of {} spots available",
        lot_view.available_spots, lot_view.total_spots
    );

    Ok(())
}
