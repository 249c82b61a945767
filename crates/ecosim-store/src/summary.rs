//! Listing metadata derived from stored universe documents.
//!
//! A [`UniverseSummary`] is the lightweight projection the list endpoint
//! returns for each save file. Universe documents are opaque; only three
//! top-level fields are interpreted, each falling back to zero when
//! absent or mistyped.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::naming;

/// Summary record for one stored universe, serialized in camelCase for
/// the front-end.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseSummary {
    /// Display name derived from the filename.
    pub name: String,
    /// On-disk filename (`<stem>.json`).
    pub filename: String,
    /// The document's `tick` field (0 if absent).
    pub tick: u64,
    /// The document's `maxGeneration` field (0 if absent).
    pub generation: u64,
    /// Length of the document's `creatures` array (0 if absent).
    pub population: u64,
    /// File modification time in milliseconds since the Unix epoch.
    pub saved_at: i64,
    /// File size in bytes.
    pub file_size: u64,
}

impl UniverseSummary {
    /// Build a summary from a stored file's name, parsed document, and
    /// stat data.
    ///
    /// The document is only inspected, never re-serialized; fields that
    /// are missing or not unsigned integers (or not an array, for
    /// `creatures`) default to 0.
    pub fn from_stored(
        filename: &str,
        document: &Value,
        modified: DateTime<Utc>,
        file_size: u64,
    ) -> Self {
        let population = document
            .get("creatures")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);

        Self {
            name: naming::display_name(filename),
            filename: filename.to_owned(),
            tick: document.get("tick").and_then(Value::as_u64).unwrap_or(0),
            generation: document
                .get("maxGeneration")
                .and_then(Value::as_u64)
                .unwrap_or(0),
            population: u64::try_from(population).unwrap_or(u64::MAX),
            saved_at: modified.timestamp_millis(),
            file_size,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn fields_are_extracted() {
        let doc = serde_json::json!({
            "tick": 1200,
            "maxGeneration": 7,
            "creatures": [{}, {}, {}],
            "extra": "ignored",
        });
        let summary = UniverseSummary::from_stored("My_World.json", &doc, Utc::now(), 512);

        assert_eq!(summary.name, "My World");
        assert_eq!(summary.filename, "My_World.json");
        assert_eq!(summary.tick, 1200);
        assert_eq!(summary.generation, 7);
        assert_eq!(summary.population, 3);
        assert_eq!(summary.file_size, 512);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let doc = serde_json::json!({ "somethingElse": true });
        let summary = UniverseSummary::from_stored("empty.json", &doc, Utc::now(), 2);

        assert_eq!(summary.tick, 0);
        assert_eq!(summary.generation, 0);
        assert_eq!(summary.population, 0);
    }

    #[test]
    fn mistyped_fields_default_to_zero() {
        let doc = serde_json::json!({
            "tick": "not a number",
            "maxGeneration": -3,
            "creatures": "not an array",
        });
        let summary = UniverseSummary::from_stored("odd.json", &doc, Utc::now(), 64);

        assert_eq!(summary.tick, 0);
        assert_eq!(summary.generation, 0);
        assert_eq!(summary.population, 0);
    }

    #[test]
    fn serializes_in_camel_case() {
        let doc = serde_json::json!({});
        let summary = UniverseSummary::from_stored("w.json", &doc, Utc::now(), 1);
        let value = serde_json::to_value(&summary).unwrap();

        assert!(value.get("savedAt").is_some());
        assert!(value.get("fileSize").is_some());
        assert!(value.get("saved_at").is_none());
    }
}
