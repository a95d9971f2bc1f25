use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One venue object from the input document.
///
/// Every field is optional; a missing key and an explicit `null` both end up
/// as `None` and flatten to empty text. Unknown keys are ignored, and a key
/// repeated within one object keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct VenueRecord {
    pub name: Option<Value>,
    pub lat: Option<Value>,
    pub lon: Option<Value>,
    /// May contain an Instagram profile URL.
    pub link: Option<Value>,
    /// Comma-separated tag list.
    pub tags: Option<Value>,
    pub kind: Option<VenueType>,
    /// Possibly comma-separated; only the first entry is kept.
    pub time_category: Option<Value>,
    pub energy_ramp: Option<Value>,
    pub price: Option<Value>,
    pub duration: Option<Value>,
    pub cover: Option<Value>,
}

impl From<Map<String, Value>> for VenueRecord {
    fn from(mut object: Map<String, Value>) -> Self {
        let mut take = |key: &str| object.remove(key).filter(|value| !value.is_null());

        Self {
            name: take("name"),
            lat: take("lat"),
            lon: take("lon"),
            link: take("link"),
            tags: take("tags"),
            kind: take("type").map(VenueType::from),
            time_category: take("timeCategory"),
            energy_ramp: take("energyRamp"),
            price: take("price"),
            duration: take("duration"),
            cover: take("cover"),
        }
    }
}

/// The `type` field is either a list (first element wins) or a single value.
#[derive(Debug, Clone, PartialEq)]
pub enum VenueType {
    Sequence(Vec<Value>),
    Scalar(Value),
}

impl From<Value> for VenueType {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => VenueType::Sequence(items),
            other => VenueType::Scalar(other),
        }
    }
}

/// Output row. Field order is the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlatRow {
    pub name: String,
    pub lat: String,
    pub lon: String,
    pub instagram_handle: String,
    pub tags: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time_category: String,
    pub energy_ramp: String,
    pub price: String,
    pub duration: String,
    pub cover: String,
    pub city: String,
}

impl FlatRow {
    pub const HEADERS: [&'static str; 12] = [
        "name",
        "lat",
        "lon",
        "instagram_handle",
        "tags",
        "type",
        "time_category",
        "energy_ramp",
        "price",
        "duration",
        "cover",
        "city",
    ];
}

/// City label shared by every row of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Atl,
    Nyc,
    Unknown,
}

impl City {
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Atl => "atl",
            City::Nyc => "nyc",
            City::Unknown => "unknown",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub rows: Vec<FlatRow>,
    pub city: City,
    pub csv_output: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_venue_record_reads_camel_case_keys() {
        let record: VenueRecord = serde_json::from_value(json!({
            "name": "Ponce City Market",
            "timeCategory": "evening, night",
            "energyRamp": 3,
            "type": ["market", "food hall"],
            "unexpected": {"ignored": true}
        }))
        .unwrap();

        assert_eq!(record.name, Some(json!("Ponce City Market")));
        assert_eq!(record.time_category, Some(json!("evening, night")));
        assert_eq!(record.energy_ramp, Some(json!(3)));
        assert_eq!(
            record.kind,
            Some(VenueType::Sequence(vec![json!("market"), json!("food hall")]))
        );
        assert_eq!(record.cover, None);
    }

    #[test]
    fn test_venue_type_scalar_and_null() {
        let record: VenueRecord = serde_json::from_value(json!({"type": "bar"})).unwrap();
        assert_eq!(record.kind, Some(VenueType::Scalar(json!("bar"))));

        let record: VenueRecord = serde_json::from_value(json!({"type": null})).unwrap();
        assert_eq!(record.kind, None);
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let records: Vec<VenueRecord> =
            serde_json::from_str(r#"[{"name": "A", "name": "B", "tags": "x"}]"#).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, Some(json!("B")));
        assert_eq!(records[0].tags, Some(json!("x")));
    }

    #[test]
    fn test_non_object_element_is_rejected() {
        assert!(serde_json::from_str::<Vec<VenueRecord>>(r#"[{"name": "A"}, "B"]"#).is_err());
    }

    #[test]
    fn test_city_display() {
        assert_eq!(City::Atl.to_string(), "atl");
        assert_eq!(City::Nyc.as_str(), "nyc");
        assert_eq!(City::Unknown.to_string(), "unknown");
    }
}
