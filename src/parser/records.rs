use anyhow::{Context, Result};
use serde::Deserialize;

/// One update record as it appears in the embedded payload.
///
/// The page carries more fields per record; everything beyond these three is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUpdate {
    #[serde(rename = "releaseVersion")]
    pub release_version: String,
    pub id: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
}

/// Parse the extracted payload as a JSON array and validate that every
/// element carries id/releaseVersion/releaseDate.
///
/// A record missing any required field is fatal; the diagnostic includes the
/// offending element so the page change is obvious from the log alone.
pub fn parse_records(payload: &str) -> Result<Vec<RawUpdate>> {
    let elements: Vec<serde_json::Value> =
        serde_json::from_str(payload).context("Payload is not a JSON array")?;

    let mut records = Vec::with_capacity(elements.len());
    for element in elements {
        let record: RawUpdate = serde_json::from_value(element.clone()).with_context(|| {
            format!(
                "Can't handle updates without id/releaseVersion/releaseDate: {}",
                element
            )
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_records() {
        let payload = r#"[
            {"releaseVersion":"Monthly Rollup","id":"4338815","releaseDate":"2018-07-10T10:00:00","heading":"ignored"},
            {"releaseVersion":"Security Only Update","id":"4338823","releaseDate":"2018-07-10T10:00:00"}
        ]"#;
        let records = parse_records(payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "4338815");
        assert_eq!(records[1].release_version, "Security Only Update");
    }

    #[test]
    fn missing_id_is_fatal() {
        let payload = r#"[{"releaseVersion":"Monthly Rollup","releaseDate":"2018-07-10T10:00:00"}]"#;
        let err = parse_records(payload).unwrap_err();
        assert!(format!("{:#}", err).contains("Monthly Rollup"));
    }

    #[test]
    fn missing_release_date_is_fatal() {
        let payload = r#"[{"releaseVersion":"Monthly Rollup","id":"4338815"}]"#;
        assert!(parse_records(payload).is_err());
    }

    #[test]
    fn not_an_array_is_fatal() {
        assert!(parse_records(r#"{"id":"1"}"#).is_err());
    }

    #[test]
    fn empty_array_is_fine() {
        assert!(parse_records("[]\n").unwrap().is_empty());
    }
}
