use anyhow::{bail, Result};

/// Cut the embedded JSON payload out of a support page.
///
/// Returns the substring strictly after the first occurrence of `begin` up to
/// and including the first occurrence of `end` after it. The caller is
/// expected to have normalized line endings already; `end` contains a bare LF.
///
/// A missing marker means the page no longer has the structure we scrape for,
/// which is fatal rather than retryable.
pub fn extract_payload<'a>(html: &'a str, begin: &str, end: &str) -> Result<&'a str> {
    let Some(begin_at) = html.find(begin) else {
        bail!("Unable to find marker {:?}", begin);
    };
    let payload_start = begin_at + begin.len();
    let Some(end_at) = html[payload_start..].find(end) else {
        bail!("Unable to find marker {:?}", end);
    };
    let payload_end = payload_start + end_at + end.len();
    Ok(&html[payload_start..payload_end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_between_markers() {
        let html = "junk BEGIN[1,2,3]\n trailing";
        let payload = extract_payload(html, "BEGIN", "]\n").unwrap();
        assert_eq!(payload, "[1,2,3]\n");
    }

    #[test]
    fn first_end_marker_after_begin_wins() {
        let html = "]\n BEGIN[1]\n[2]\n";
        let payload = extract_payload(html, "BEGIN", "]\n").unwrap();
        assert_eq!(payload, "[1]\n");
    }

    #[test]
    fn missing_begin_marker() {
        let err = extract_payload("no payload here", "BEGIN", "]\n").unwrap_err();
        assert!(err.to_string().contains("BEGIN"));
    }

    #[test]
    fn missing_end_marker() {
        let err = extract_payload("BEGIN[1,2,3", "BEGIN", "]\n").unwrap_err();
        assert!(err.to_string().contains("]\\n"));
    }

    #[test]
    fn end_marker_before_begin_does_not_count() {
        assert!(extract_payload("[0]\nBEGIN[1", "BEGIN", "]\n").is_err());
    }
}
