use anyhow::{anyhow, Context};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::debug;

use crate::config::Credentials;
use crate::error::ReadError;
use crate::models::AnalysisResult;

const API_VERSION: &str = "2023-10-01";

/// Authenticated handle to the Image Analysis endpoint. Construction performs
/// no network I/O; a bad endpoint or key only surfaces on the first call.
#[derive(Debug, Clone)]
pub struct VisionClient {
    endpoint: String,
    key: String,
    http: reqwest::Client,
}

impl VisionClient {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            endpoint: credentials.endpoint.trim_end_matches('/').to_string(),
            key: credentials.key.clone(),
            http: reqwest::Client::new(),
        }
    }

    /// One POST requesting only the read feature. No retries, no timeout
    /// beyond the transport defaults.
    pub async fn analyze_read(&self, image: Vec<u8>) -> Result<AnalysisResult, ReadError> {
        let url = format!("{}/computervision/imageanalysis:analyze", self.endpoint);
        debug!(%url, bytes = image.len(), "sending image analysis request");

        let response = self
            .http
            .post(&url)
            .query(&[("api-version", API_VERSION), ("features", "read")])
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image)
            .send()
            .await
            .map_err(|err| ReadError::ServiceCall(err.into()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ReadError::ServiceCall(anyhow!(
                "image analysis API error ({}): {}",
                status,
                extract_service_error(&text).unwrap_or(text)
            )));
        }
        let analysis = parse_analysis(&text)?;
        if let Some(metadata) = &analysis.metadata {
            debug!(width = metadata.width, height = metadata.height, "analysis complete");
        }
        Ok(analysis)
    }
}

fn parse_analysis(text: &str) -> Result<AnalysisResult, ReadError> {
    serde_json::from_str(text)
        .with_context(|| "failed to parse image analysis response JSON")
        .map_err(ReadError::ServiceCall)
}

fn extract_service_error(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<ServiceError>,
    }

    #[derive(Deserialize)]
    struct ServiceError {
        code: Option<String>,
        message: Option<String>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let error = parsed.error?;
    let mut parts = Vec::new();
    if let Some(code) = error.code {
        if !code.trim().is_empty() {
            parts.push(format!("code: {}", code));
        }
    }
    if let Some(message) = error.message {
        if !message.trim().is_empty() {
            parts.push(message);
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_service_error, parse_analysis};

    #[test]
    fn parse_analysis_from_fixture() {
        let payload = include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/read_result.json"
        ));
        let analysis = parse_analysis(payload).unwrap();
        let page = analysis.read_result.expect("read result");
        let lines = page.first_block_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "ABRAHAM");
        assert_eq!(lines[0].bounding_polygon.len(), 4);
        let word = &lines[0].words[0];
        assert_eq!(word.text, "ABRAHAM");
        assert!((word.confidence - 0.993).abs() < 1e-6);
    }

    #[test]
    fn parse_analysis_without_text() {
        let analysis =
            parse_analysis(r#"{"modelVersion": "2023-10-01", "metadata": {"width": 10, "height": 10}}"#)
                .unwrap();
        assert!(analysis.read_result.is_none());
    }

    #[test]
    fn service_error_extracts_code_and_message() {
        let body = r#"{"error": {"code": "401", "message": "Access denied due to invalid subscription key."}}"#;
        assert_eq!(
            extract_service_error(body).unwrap(),
            "code: 401 | Access denied due to invalid subscription key."
        );
    }

    #[test]
    fn service_error_ignores_unparseable_bodies() {
        assert!(extract_service_error("<html>gateway timeout</html>").is_none());
        assert!(extract_service_error(r#"{"error": {}}"#).is_none());
    }
}
