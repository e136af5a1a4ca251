//! HTTP Client
//!
//! Retrieval of the static weight-series JSON document. There is no API
//! server behind this path; the document is a deployment artifact served
//! alongside the page.

use gloo_net::http::Request;

use crate::state::global::WeightEntry;

/// Fixed path of the weight-series document.
pub const WEIGHTS_PATH: &str = "/data/weights.json";

/// Fetch the weight series.
///
/// Issued exactly once per mount. Any failure (network error, non-success
/// status, malformed body) leaves the caller's series untouched; there is
/// no retry.
pub async fn fetch_weights() -> Result<Vec<WeightEntry>, String> {
    let response = Request::get(WEIGHTS_PATH)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Unexpected status: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Body read error: {}", e))?;

    parse_weights(&body)
}

/// Parse a response body as an array of weight entries.
///
/// The document order is preserved as-is; entries are expected to already
/// be sorted ascending by date.
pub fn parse_weights(body: &str) -> Result<Vec<WeightEntry>, String> {
    serde_json::from_str(body).map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let body = r#"[
            {"date": "2025-05-22", "weight": 113.2},
            {"date": "2025-06-01", "weight": 104.6}
        ]"#;

        let series = parse_weights(body).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, "2025-05-22");
        assert_eq!(series[0].weight, 113.2);
        assert_eq!(series[1].date, "2025-06-01");
        assert_eq!(series[1].weight, 104.6);
    }

    #[test]
    fn test_parse_empty_array() {
        assert_eq!(parse_weights("[]").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_weights("not json").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(parse_weights(r#"{"date": "2025-05-22"}"#).is_err());
        assert!(parse_weights(r#"[{"date": "2025-05-22"}]"#).is_err());
        assert!(parse_weights(r#"[{"date": "2025-05-22", "weight": "heavy"}]"#).is_err());
    }
}
