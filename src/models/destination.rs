use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A place a rider is ultimately heading to. Advisory only: the
/// deterministic engines never read it, but a live recommendation oracle
/// may weigh it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub category: String,
    pub address: String,
    pub location: GeoPoint,
}

/// The stock destination catalog.
pub fn builtin_destinations() -> Vec<Destination> {
    vec![
        Destination {
            id: "auckland_uni".to_string(),
            name: "University of Auckland".to_string(),
            category: "Education".to_string(),
            address: "22 Princes St, Auckland CBD".to_string(),
            location: GeoPoint { lat: -36.852, lng: 174.768 },
        },
        Destination {
            id: "auckland_hospital".to_string(),
            name: "Auckland City Hospital".to_string(),
            category: "Medical".to_string(),
            address: "2 Park Rd, Grafton".to_string(),
            location: GeoPoint { lat: -36.860, lng: 174.770 },
        },
        Destination {
            id: "britomart".to_string(),
            name: "Britomart Transport Centre".to_string(),
            category: "Transport".to_string(),
            address: "8-10 Queen St, Auckland CBD".to_string(),
            location: GeoPoint { lat: -36.844, lng: 174.768 },
        },
        Destination {
            id: "sky_tower".to_string(),
            name: "Sky Tower".to_string(),
            category: "Tourism/Entertainment".to_string(),
            address: "Victoria St W, Auckland CBD".to_string(),
            location: GeoPoint { lat: -36.848, lng: 174.762 },
        },
        Destination {
            id: "sylvia_park".to_string(),
            name: "Sylvia Park Shopping Centre".to_string(),
            category: "Shopping".to_string(),
            address: "286 Mt Wellington Hwy".to_string(),
            location: GeoPoint { lat: -36.917, lng: 174.842 },
        },
    ]
}
