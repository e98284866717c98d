//! Weekly rainfall and flood-risk series shown beside the alert feed.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub day: &'static str,
    /// Millimetres.
    pub rainfall: u32,
    /// Percent.
    pub flood_risk: u32,
}

const fn point(day: &'static str, rainfall: u32, flood_risk: u32) -> ForecastPoint {
    ForecastPoint {
        day,
        rainfall,
        flood_risk,
    }
}

const WEEKLY: [ForecastPoint; 7] = [
    point("Mon", 20, 10),
    point("Tue", 40, 25),
    point("Wed", 60, 50),
    point("Thu", 80, 70),
    point("Fri", 65, 55),
    point("Sat", 50, 35),
    point("Sun", 30, 15),
];

pub fn weekly_forecast() -> Vec<ForecastPoint> {
    WEEKLY.to_vec()
}

pub fn peak_flood_risk(points: &[ForecastPoint]) -> Option<&ForecastPoint> {
    points.iter().max_by_key(|p| p.flood_risk)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub points: Vec<ForecastPoint>,
    pub peak: Option<ForecastPoint>,
}

pub fn summary() -> ForecastSummary {
    let points = weekly_forecast();
    let peak = peak_flood_risk(&points).copied();
    ForecastSummary { points, peak }
}
