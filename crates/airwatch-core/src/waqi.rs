//! HTTP client for the World Air Quality Index (WAQI) feed API.
//!
//! ## Wire format
//!
//! `GET {base}/{target}/?token={token}` where `{target}` is a percent-encoded
//! city name or `geo:{lat};{lon}`. The body is a JSON envelope with a
//! top-level `status` (`"ok"` / `"error"`) and `data`; on success `data`
//! holds the AQI payload, on rejection it holds a human-readable reason.

use crate::config::NetworkConfig;
use crate::error::{AirwatchError, Result};
use serde_json::Value;
use tracing::debug;

/// Client for the WAQI feed endpoint.
///
/// Built once at startup and shared for the process lifetime. Each call is
/// a single attempt bounded by the client timeout; no retries.
pub struct WaqiClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl WaqiClient {
    /// Create a new client targeting the given base URL.
    ///
    /// If `base_url` is `None`, defaults to the public WAQI API.
    pub fn new(token: impl Into<String>, base_url: Option<&str>) -> Self {
        let base_url = base_url
            .unwrap_or(NetworkConfig::WAQI_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let client = reqwest::Client::builder()
            .timeout(NetworkConfig::REQUEST_TIMEOUT)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url,
            token: token.into(),
            client,
        }
    }

    /// Fetch the AQI payload for a city by name.
    pub async fn fetch_by_city(&self, city: &str) -> Result<Value> {
        self.fetch_feed(&urlencoding::encode(city)).await
    }

    /// Fetch the AQI payload for a geographic point.
    pub async fn fetch_by_coords(&self, lat: f64, lon: f64) -> Result<Value> {
        self.fetch_feed(&format!("geo:{lat};{lon}")).await
    }

    fn feed_url(&self, target: &str) -> String {
        format!("{}/{}/?token={}", self.base_url, target, self.token)
    }

    async fn fetch_feed(&self, target: &str) -> Result<Value> {
        let url = self.feed_url(target);
        // The URL carries the token, so only the target is logged.
        debug!("fetching WAQI feed for {target}");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AirwatchError::NotFound);
        }
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(AirwatchError::InvalidToken);
        }
        if status != reqwest::StatusCode::OK {
            return Err(AirwatchError::Upstream {
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|_| AirwatchError::UpstreamMalformed)?;
        parse_feed_envelope(body)
    }
}

/// Interpret the WAQI response envelope of a 200 response.
fn parse_feed_envelope(body: Value) -> Result<Value> {
    match body.get("status").and_then(Value::as_str) {
        Some("ok") => Ok(body
            .get("data")
            .cloned()
            .unwrap_or_else(|| Value::Object(Default::default()))),
        Some("error") => {
            let detail = body
                .get("data")
                .and_then(Value::as_str)
                .unwrap_or("upstream reported an error")
                .to_string();
            Err(AirwatchError::UpstreamRejected { detail })
        }
        _ => Err(AirwatchError::UpstreamMalformed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feed_url_building() {
        let client = WaqiClient::new("secret", Some("http://upstream.test/feed/"));
        assert_eq!(
            client.feed_url("London"),
            "http://upstream.test/feed/London/?token=secret"
        );
        assert_eq!(
            client.feed_url("geo:48.8;2.3"),
            "http://upstream.test/feed/geo:48.8;2.3/?token=secret"
        );
    }

    #[test]
    fn test_city_names_are_percent_encoded() {
        assert_eq!(urlencoding::encode("São Paulo"), "S%C3%A3o%20Paulo");
        assert_eq!(urlencoding::encode("new york"), "new%20york");
    }

    #[test]
    fn test_envelope_ok_returns_data() {
        let body = json!({"status": "ok", "data": {"aqi": 50, "dominentpol": "pm25"}});
        let payload = parse_feed_envelope(body).unwrap();
        assert_eq!(payload["aqi"], 50);
    }

    #[test]
    fn test_envelope_ok_without_data_is_empty_object() {
        let payload = parse_feed_envelope(json!({"status": "ok"})).unwrap();
        assert_eq!(payload, json!({}));
    }

    #[test]
    fn test_envelope_error_carries_detail() {
        let body = json!({"status": "error", "data": "Invalid key"});
        match parse_feed_envelope(body) {
            Err(AirwatchError::UpstreamRejected { detail }) => {
                assert_eq!(detail, "Invalid key");
            }
            other => panic!("expected UpstreamRejected, got {:?}", other),
        }
    }

    #[test]
    fn test_envelope_unknown_status_is_malformed() {
        for body in [
            json!({"status": "nope", "data": {}}),
            json!({"data": {"aqi": 50}}),
            json!({"status": 7}),
        ] {
            assert!(matches!(
                parse_feed_envelope(body),
                Err(AirwatchError::UpstreamMalformed)
            ));
        }
    }
}
