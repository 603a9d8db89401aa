pub mod classify;
pub mod payload;
pub mod records;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Start of the embedded JSON array holding the update history.
const BEGIN_MARKER: &str = "\"minorVersions\":";
/// End of that array; the page keeps it on its own line.
const END_MARKER: &str = "]\n";
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One published update, validated, classified and date-parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub date: NaiveDate,
    pub cumulative: bool,
    pub kb_id: String,
}

/// Full extraction pipeline for one page: locate the payload, validate its
/// records, classify each release type, parse dates and sort ascending.
///
/// Line endings are normalized to LF first; the markers and the payload's
/// closing `]\n` are defined in LF form and vendor pages use either
/// convention. Ties on date keep the payload's order.
pub fn parse_updates(html: &str, url: &str) -> Result<Vec<Update>> {
    let html = html.replace("\r\n", "\n");
    let payload = payload::extract_payload(&html, BEGIN_MARKER, END_MARKER)
        .with_context(|| format!("in {}", url))?;
    let raw = records::parse_records(payload).with_context(|| format!("in {}", url))?;

    let mut updates = Vec::with_capacity(raw.len());
    for record in &raw {
        let cumulative = classify::is_cumulative(record)?;
        let date = NaiveDateTime::parse_from_str(&record.release_date, DATE_FORMAT)
            .with_context(|| format!("Bad releaseDate {:?} in {}", record.release_date, url))?
            .date();
        updates.push(Update {
            date,
            cumulative,
            kb_id: record.id.clone(),
        });
    }
    updates.sort_by_key(|u| u.date);
    Ok(updates)
}
