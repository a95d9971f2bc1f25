use crate::domain::model::{City, FlatRow, VenueRecord, VenueType};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static INSTAGRAM_HANDLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"instagram\.com/([A-Za-z0-9_.]+)/?").expect("instagram pattern is valid")
});

/// Infers the run's city from the input source identifier.
///
/// Case-insensitive substring match; `atl` is checked before `nyc`.
pub fn infer_city(source_id: &str) -> City {
    let source_id = source_id.to_lowercase();
    if source_id.contains("atl") {
        City::Atl
    } else if source_id.contains("nyc") {
        City::Nyc
    } else {
        City::Unknown
    }
}

/// Flattens every record into one row, tagging all rows with the same city.
pub fn flatten(records: &[VenueRecord], source_id: &str) -> Vec<FlatRow> {
    let city = infer_city(source_id);
    tracing::debug!("Inferred city '{}' from '{}'", city, source_id);

    flatten_for_city(records, city)
}

pub fn flatten_for_city(records: &[VenueRecord], city: City) -> Vec<FlatRow> {
    records
        .iter()
        .map(|record| flatten_record(record, city))
        .collect()
}

pub fn flatten_record(record: &VenueRecord, city: City) -> FlatRow {
    FlatRow {
        name: optional_text(record.name.as_ref()),
        lat: optional_text(record.lat.as_ref()),
        lon: optional_text(record.lon.as_ref()),
        instagram_handle: record
            .link
            .as_ref()
            .map(|link| extract_instagram_handle(&value_to_text(link)))
            .unwrap_or_default(),
        tags: format_tags(record.tags.as_ref()),
        kind: record.kind.as_ref().map(resolve_type).unwrap_or_default(),
        time_category: first_time_category(record.time_category.as_ref()),
        energy_ramp: optional_text(record.energy_ramp.as_ref()),
        price: optional_text(record.price.as_ref()),
        duration: optional_text(record.duration.as_ref()),
        cover: optional_text(record.cover.as_ref()),
        city: city.as_str().to_string(),
    }
}

/// Captured handle of the first Instagram profile URL in `link`, else empty.
pub fn extract_instagram_handle(link: &str) -> String {
    INSTAGRAM_HANDLE
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Splits on commas, trims, drops empties and wraps the result in braces.
///
/// A JSON array is accepted too; each element goes through the same split.
pub fn format_tags(tags: Option<&Value>) -> String {
    let pieces: Vec<String> = match tags {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .flat_map(|item| split_tags(&value_to_text(item)))
            .collect(),
        Some(value) => split_tags(&value_to_text(value)),
    };

    format!("{{{}}}", pieces.join(","))
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn resolve_type(kind: &VenueType) -> String {
    match kind {
        VenueType::Sequence(items) => match items.first() {
            Some(first) => value_to_text(first),
            None => {
                tracing::debug!("Empty type list, emitting empty type");
                String::new()
            }
        },
        VenueType::Scalar(value) => value_to_text(value),
    }
}

/// First comma-separated entry of `timeCategory`, trimmed.
pub fn first_time_category(time_category: Option<&Value>) -> String {
    let raw = optional_text(time_category);
    if raw.is_empty() {
        return String::new();
    }

    raw.split(',').next().unwrap_or_default().trim().to_string()
}

fn optional_text(value: Option<&Value>) -> String {
    value.map(value_to_text).unwrap_or_default()
}

/// Renders a JSON value as a CSV cell.
///
/// Strings as-is, numbers as their literals, booleans as `True`/`False`,
/// null as empty, arrays and objects as compact JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => {
            tracing::warn!("Coercing nested JSON value to text: {}", value);
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> VenueRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_infer_city() {
        assert_eq!(infer_city("atl_venues.json"), City::Atl);
        assert_eq!(infer_city("nyc_data.json"), City::Nyc);
        assert_eq!(infer_city("other.json"), City::Unknown);
        assert_eq!(infer_city("data/ATL/Venues.JSON"), City::Atl);
        assert_eq!(infer_city("NYC.json"), City::Nyc);
    }

    #[test]
    fn test_infer_city_atl_checked_first() {
        assert_eq!(infer_city("nyc_vs_atl.json"), City::Atl);
        // substring match, not a word match
        assert_eq!(infer_city("atlantic_nyc.json"), City::Atl);
    }

    #[test]
    fn test_format_tags() {
        assert_eq!(format_tags(Some(&json!("a, b ,,c"))), "{a,b,c}");
        assert_eq!(format_tags(Some(&json!(""))), "{}");
        assert_eq!(format_tags(Some(&json!(" , ,"))), "{}");
        assert_eq!(format_tags(None), "{}");
        assert_eq!(format_tags(Some(&json!(null))), "{}");
        assert_eq!(format_tags(Some(&json!(42))), "{42}");
        assert_eq!(format_tags(Some(&json!(["jazz", "live, music"]))), "{jazz,live,music}");
    }

    #[test]
    fn test_extract_instagram_handle() {
        assert_eq!(
            extract_instagram_handle("https://instagram.com/foo_bar.1/"),
            "foo_bar.1"
        );
        assert_eq!(
            extract_instagram_handle("https://www.instagram.com/thebasement?hl=en"),
            "thebasement"
        );
        assert_eq!(extract_instagram_handle("https://example.com/venue"), "");
        // the dot before "com" must be literal
        assert_eq!(extract_instagram_handle("https://instagramXcom/foo/"), "");
        assert_eq!(extract_instagram_handle(""), "");
    }

    #[test]
    fn test_resolve_type() {
        assert_eq!(
            resolve_type(&VenueType::Sequence(vec![json!("museum"), json!("gallery")])),
            "museum"
        );
        assert_eq!(resolve_type(&VenueType::Scalar(json!("bar"))), "bar");
        assert_eq!(resolve_type(&VenueType::Sequence(vec![])), "");
        assert_eq!(resolve_type(&VenueType::Sequence(vec![json!(7)])), "7");
    }

    #[test]
    fn test_first_time_category() {
        assert_eq!(first_time_category(Some(&json!("evening, night"))), "evening");
        assert_eq!(first_time_category(Some(&json!("  late  "))), "late");
        assert_eq!(first_time_category(Some(&json!(""))), "");
        assert_eq!(first_time_category(None), "");
    }

    #[test]
    fn test_value_to_text() {
        assert_eq!(value_to_text(&json!(33.749)), "33.749");
        assert_eq!(value_to_text(&json!(-84)), "-84");
        assert_eq!(value_to_text(&json!(true)), "True");
        assert_eq!(value_to_text(&json!(false)), "False");
        assert_eq!(value_to_text(&json!(null)), "");
        assert_eq!(value_to_text(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_flatten_full_record() {
        let venue = record(json!({
            "name": "The Earl",
            "lat": 33.74,
            "lon": "-84.35",
            "link": "https://instagram.com/theearl_eav/",
            "tags": "music, bar",
            "type": ["bar", "venue"],
            "timeCategory": "night, late",
            "energyRamp": "high",
            "price": "$$",
            "duration": 120,
            "cover": false
        }));

        let rows = flatten(&[venue], "atl_venues.json");
        assert_eq!(
            rows,
            vec![FlatRow {
                name: "The Earl".to_string(),
                lat: "33.74".to_string(),
                lon: "-84.35".to_string(),
                instagram_handle: "theearl_eav".to_string(),
                tags: "{music,bar}".to_string(),
                kind: "bar".to_string(),
                time_category: "night".to_string(),
                energy_ramp: "high".to_string(),
                price: "$$".to_string(),
                duration: "120".to_string(),
                cover: "False".to_string(),
                city: "atl".to_string(),
            }]
        );
    }

    #[test]
    fn test_flatten_empty_record_uses_defaults() {
        let rows = flatten(&[VenueRecord::default()], "other.json");
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0],
            FlatRow {
                tags: "{}".to_string(),
                city: "unknown".to_string(),
                ..FlatRow::default()
            }
        );
    }

    #[test]
    fn test_flatten_preserves_count_and_city() {
        let records = vec![
            record(json!({"name": "A"})),
            record(json!({"name": "B", "type": "bar"})),
            VenueRecord::default(),
        ];

        let rows = flatten(&records, "nyc_data.json");
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.city == "nyc"));
        assert_eq!(rows[0].name, "A");
        assert_eq!(rows[1].kind, "bar");
    }
}
