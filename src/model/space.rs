use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeatherEventType {
    Cme,
    Flare,
    Sep,
}

/// Canonical space-weather event, aggregated from the DONKI CME and
/// solar-flare feeds and ordered newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceWeatherEvent {
    #[serde(rename = "activityID")]
    pub activity_id: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "sourceLocation")]
    pub source_location: String,
    pub note: String,
    #[serde(rename = "type")]
    pub event_type: WeatherEventType,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssLocation {
    pub timestamp: i64,
    pub latitude: f64,
    pub longitude: f64,
    /// Average orbital altitude in km.
    pub altitude: f64,
    /// Average orbital velocity in km/h.
    pub velocity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub name: String,
    /// Distance from the Sun in AU.
    pub distance: f64,
    /// Heliocentric angle in degrees, derived from the day of year.
    pub angle: f64,
    /// Diameter relative to Earth.
    pub diameter: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub name: String,
    pub provider: String,
    pub vehicle: String,
    pub pad: String,
    pub location: String,
    /// No-earlier-than launch time, ISO-8601.
    pub net: String,
    pub status: String,
    pub mission: String,
    pub description: String,
}
