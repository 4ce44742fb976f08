//! Sensor reading value objects.

use serde::Serialize;

/// Geographic position of a sensor along a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    pub mile_post: f64,
}

/// One synthetic telemetry record.
///
/// String fields borrow from the [`Registry`](crate::Registry) the reading
/// was drawn from, so building a reading only allocates the sensor id and
/// the timestamp. Serializes to the NDJSON wire shape; `alert_level` is
/// left out of the object when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading<'r> {
    pub sensor_id: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: &'r str,
    pub value: f64,
    pub unit: &'r str,
    pub location: Location,
    pub pipeline_id: &'r str,
    pub status: &'r str,
    pub quality_score: f64,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub alert_level: &'r str,
}

impl SensorReading<'_> {
    /// Whether an alert is attached to this reading.
    pub fn has_alert(&self) -> bool {
        !self.alert_level.is_empty()
    }
}
