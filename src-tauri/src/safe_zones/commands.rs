use serde::Serialize;

use crate::models::Badge;

use super::{catalogue, filter_zones, nearest_zone, GeoPoint, NearestZone, SafeZone, ZoneStatus, DEFAULT_CENTER};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCard {
    #[serde(flatten)]
    pub zone: SafeZone,
    pub badge: Badge,
}

#[tauri::command]
pub fn list_safe_zones(status: Option<ZoneStatus>) -> Vec<ZoneCard> {
    filter_zones(&catalogue(), status.into())
        .into_iter()
        .map(|zone| ZoneCard {
            badge: zone.badge(),
            zone,
        })
        .collect()
}

#[tauri::command]
pub fn get_map_center() -> GeoPoint {
    DEFAULT_CENTER
}

/// A missing position means geolocation failed or was denied; the page
/// carries on without a nearest-zone hint.
#[tauri::command]
pub fn nearest_safe_zone(
    position: Option<GeoPoint>,
    include_full: Option<bool>,
) -> Option<NearestZone> {
    let Some(position) = position else {
        log::warn!("no user position available; skipping nearest safe zone");
        return None;
    };
    nearest_zone(&catalogue(), position, include_full.unwrap_or(false))
}
