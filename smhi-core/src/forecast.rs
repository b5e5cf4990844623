//! SMHI point-forecast client.

use reqwest::Client;
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::instrument;

use crate::error::FetchError;
use crate::loader::load_json;
use crate::model::{Scheme, Target};

/// Host serving the SMHI open-data meteorological forecasts.
pub const API_HOST: &str = "opendata-download-metfcst.smhi.se";
/// Forecast category (the PMP3g model).
pub const API_CATEGORY: &str = "pmp3g";
/// Forecast API version.
pub const API_VERSION: &str = "2";

/// Client for the SMHI point-forecast API.
///
/// Each fetch is independent: it builds its own request target, owns its
/// own body buffer, and resolves exactly once with either the parsed
/// forecast document or a [`FetchError`].
#[derive(Debug, Clone)]
pub struct SmhiClient {
    http: Client,
    scheme: Scheme,
    host: String,
}

impl SmhiClient {
    /// Client against the production SMHI endpoint, over HTTPS.
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Like [`SmhiClient::new`], but with a caller-configured HTTP client.
    ///
    /// Requests carry no timeout by default; pass a client built with one
    /// if the provider cannot be trusted to answer.
    pub fn with_client(http: Client) -> Self {
        Self {
            http,
            scheme: Scheme::Secure,
            host: API_HOST.to_string(),
        }
    }

    /// Point the client at a different endpoint, e.g. a local mock server.
    pub fn with_host(scheme: Scheme, host: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            scheme,
            host: host.into(),
        }
    }

    /// Fetch the point forecast for a coordinate.
    ///
    /// Coordinates are interpolated into the request path as text, without
    /// range validation; the provider rejects values it cannot serve, and
    /// such rejections surface the same way as any other non-JSON answer.
    #[instrument(skip(self), level = "debug")]
    pub async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<Value, FetchError> {
        let target = self.point_target(latitude, longitude);
        load_json(&self.http, &target).await
    }

    /// Issue the fetch immediately and hand back a channel for the outcome.
    ///
    /// The request starts on the current Tokio runtime; the returned
    /// receiver resolves exactly once with the result. Dropping the
    /// receiver discards the outcome but does not cancel the request.
    pub fn spawn_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> oneshot::Receiver<Result<Value, FetchError>> {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();
        tokio::spawn(async move {
            // The receiver may already be gone; delivery is best-effort.
            let _ = tx.send(client.get_forecast(latitude, longitude).await);
        });
        rx
    }

    fn point_target(&self, latitude: f64, longitude: f64) -> Target {
        let path = format!(
            "/api/category/{API_CATEGORY}/version/{API_VERSION}/geotype/point/lon/{longitude}/lat/{latitude}/data.json"
        );
        Target {
            scheme: self.scheme,
            host: self.host.clone(),
            path,
        }
    }
}

impl Default for SmhiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_path_interpolates_lon_then_lat() {
        let client = SmhiClient::new();
        let target = client.point_target(59.33, 18.06);

        assert_eq!(
            target.path,
            "/api/category/pmp3g/version/2/geotype/point/lon/18.06/lat/59.33/data.json"
        );
    }

    #[test]
    fn default_target_is_the_secure_production_host() {
        let client = SmhiClient::new();
        let target = client.point_target(55.61, 12.99);

        assert_eq!(target.scheme, Scheme::Secure);
        assert_eq!(target.host, API_HOST);
        assert!(
            target
                .url()
                .starts_with("https://opendata-download-metfcst.smhi.se/")
        );
    }

    #[test]
    fn coordinates_are_not_validated() {
        let client = SmhiClient::new();
        let target = client.point_target(-95.0, 200.0);

        assert_eq!(
            target.path,
            "/api/category/pmp3g/version/2/geotype/point/lon/200/lat/-95/data.json"
        );
    }

    #[test]
    fn with_host_overrides_the_endpoint() {
        let client = SmhiClient::with_host(Scheme::Plain, "127.0.0.1:9999");
        let target = client.point_target(59.33, 18.06);

        assert_eq!(target.scheme, Scheme::Plain);
        assert_eq!(target.host, "127.0.0.1:9999");
    }
}
