use serde::{Deserialize, Serialize};

/// A saved (or searchable) place. WeatherAPI's `search.json` returns these,
/// and the session's registry stores them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLocation {
    pub id: i64,
    pub name: String,
    pub region: String,
    pub country: String,
    pub url: String,
}

/// Complete weather document for one location, as returned by
/// WeatherAPI's `forecast.json`. Replaced wholesale on every fetch,
/// never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub location: LocationInfo,
    pub current: CurrentConditions,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInfo {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    /// Local time at the forecast location, e.g. "2026-08-26 14:30".
    /// Anchors the hourly view to the location's timezone.
    #[serde(default)]
    pub localtime: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub temp_c: Option<f64>,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub code: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub day: DaySummary,
    #[serde(default)]
    pub hour: Vec<HourEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySummary {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourEntry {
    /// Full timestamp string, e.g. "2026-08-26 15:00".
    pub time: String,
    pub temp_c: f64,
    pub condition: Condition,
}
