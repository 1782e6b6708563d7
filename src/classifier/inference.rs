use anyhow::{Context, Result};
use reqwest::Response;
use serde_json::Value;

use crate::domain::{PredictionRequest, SpamStatus};

pub fn build_request(content: &str) -> PredictionRequest<'_> {
    PredictionRequest { content }
}

pub async fn parse_response(response: Response) -> Result<SpamStatus> {
    let body = response
        .text()
        .await
        .context("failed to read classifier response body")?;
    let payload: Value =
        serde_json::from_str(&body).context("classifier response was not valid JSON")?;

    let status = status_from_payload(&payload);
    let classification = payload.get("classification");
    let probability = payload.get("probability").and_then(Value::as_f64);
    tracing::debug!(
        target: "classifier",
        ?classification,
        ?probability,
        status = status.label(),
        "classifier responded"
    );
    Ok(status)
}

/// Only a numeric `classification` equal to 1 marks spam. Strings, booleans,
/// null, a missing field or a non-object payload all read as ham.
pub fn status_from_payload(payload: &Value) -> SpamStatus {
    match payload.get("classification").and_then(Value::as_f64) {
        Some(value) if value == 1.0 => SpamStatus::Spam,
        _ => SpamStatus::Ham,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numeric_one_is_spam() {
        assert_eq!(
            status_from_payload(&json!({ "classification": 1 })),
            SpamStatus::Spam
        );
        assert_eq!(
            status_from_payload(&json!({ "classification": 1.0, "probability": 0.97 })),
            SpamStatus::Spam
        );
    }

    #[test]
    fn anything_else_is_ham() {
        for payload in [
            json!({ "classification": 0 }),
            json!({ "classification": "1" }),
            json!({ "classification": null }),
            json!({ "classification": true }),
            json!({ "classification": 2 }),
            json!({ "classification": 0.5 }),
            json!({ "probability": 0.99 }),
            json!({}),
            json!([1]),
            json!(1),
        ] {
            assert_eq!(status_from_payload(&payload), SpamStatus::Ham, "{payload}");
        }
    }

    #[test]
    fn request_serializes_content_only() {
        let body = serde_json::to_string(&build_request("")).unwrap();
        assert_eq!(body, r#"{"content":""}"#);
    }
}
