//! Shelter catalogue for the safe-zones page.

#[cfg(feature = "desktop")]
pub mod commands;

use serde::{Deserialize, Serialize};

use crate::models::{Badge, StatusTag};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Where the map opens when no user position is known.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 23.2599,
    lon: 77.4126,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ZoneStatus {
    Available,
    AlmostFull,
    Full,
}

impl From<ZoneStatus> for StatusTag {
    fn from(status: ZoneStatus) -> Self {
        match status {
            ZoneStatus::Available => StatusTag::Available,
            ZoneStatus::AlmostFull => StatusTag::AlmostFull,
            ZoneStatus::Full => StatusTag::Full,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SafeZone {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub coords: GeoPoint,
    pub capacity: u32,
    pub status: ZoneStatus,
}

impl SafeZone {
    fn new(id: u32, name: &str, lat: f64, lon: f64, capacity: u32, status: ZoneStatus) -> Self {
        Self {
            id,
            name: name.to_string(),
            location: "Bhopal".to_string(),
            coords: GeoPoint { lat, lon },
            capacity,
            status,
        }
    }

    pub fn badge(&self) -> Badge {
        Badge::from(StatusTag::from(self.status))
    }
}

pub fn catalogue() -> Vec<SafeZone> {
    vec![
        SafeZone::new(1, "Lal Parade Ground Shelter", 23.2599, 77.4126, 800, ZoneStatus::Available),
        SafeZone::new(2, "AIIMS Bhopal Relief Center", 23.2146, 77.431, 600, ZoneStatus::AlmostFull),
        SafeZone::new(3, "BHEL Township Community Hall", 23.2733, 77.4344, 400, ZoneStatus::Available),
        SafeZone::new(4, "Govt. Polytechnic College Ground", 23.247, 77.5012, 500, ZoneStatus::Full),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneFilter {
    #[default]
    All,
    Only(ZoneStatus),
}

impl From<Option<ZoneStatus>> for ZoneFilter {
    fn from(status: Option<ZoneStatus>) -> Self {
        status.map_or(ZoneFilter::All, ZoneFilter::Only)
    }
}

impl ZoneFilter {
    pub fn admits(self, zone: &SafeZone) -> bool {
        match self {
            ZoneFilter::All => true,
            ZoneFilter::Only(status) => zone.status == status,
        }
    }
}

pub fn filter_zones(zones: &[SafeZone], filter: ZoneFilter) -> Vec<SafeZone> {
    zones.iter().filter(|z| filter.admits(z)).cloned().collect()
}

/// Great-circle distance in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NearestZone {
    pub zone: SafeZone,
    pub distance_km: f64,
}

/// Closest shelter to `from`. Full shelters are skipped unless `include_full`.
pub fn nearest_zone(zones: &[SafeZone], from: GeoPoint, include_full: bool) -> Option<NearestZone> {
    zones
        .iter()
        .filter(|zone| include_full || zone.status != ZoneStatus::Full)
        .map(|zone| NearestZone {
            zone: zone.clone(),
            distance_km: haversine_km(from, zone.coords),
        })
        .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
}
