//! Runtime settings: service addresses and poll tuning.
//!
//! Resolution order for addresses is explicit flag, then environment
//! variable, then default.

use crate::acquisition::poller::PollConfig;
use crate::map::types::LayerKind;
use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

/// Environment variable naming the service base URL.
pub const BASE_URL_ENV: &str = "GRIDMAP_BASE_URL";
/// Environment variable naming the login page URL.
pub const LOGIN_URL_ENV: &str = "GRIDMAP_LOGIN_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Service base URL, without a trailing slash.
    pub base_url: String,
    /// Where to send the user when the session is unauthorized.
    pub login_url: String,
    /// Task status polling parameters.
    pub poll: PollConfig,
    /// Per-request transport timeout.
    pub request_timeout: Duration,
}

impl Settings {
    /// Resolve settings from explicit flags and the environment.
    pub fn resolve(base_url: Option<&str>, login_url: Option<&str>) -> Result<Self> {
        let base = base_url
            .map(str::to_string)
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base).with_context(|| format!("invalid service base URL: {base}"))?;

        let base = base.trim_end_matches('/').to_string();
        let login = login_url
            .map(str::to_string)
            .or_else(|| std::env::var(LOGIN_URL_ENV).ok())
            .unwrap_or_else(|| format!("{base}/login"));

        Ok(Self {
            login_url: login,
            base_url: base,
            poll: PollConfig::default(),
            request_timeout: REQUEST_TIMEOUT,
        })
    }

    /// Settings for a known-good service address, defaults elsewhere.
    pub fn for_service(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        Self {
            login_url: format!("{base}/login"),
            base_url: base,
            poll: PollConfig::default(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Address of one geographic layer of a network.
    pub fn resource_url(&self, network_id: &str, kind: LayerKind) -> String {
        format!("{}/api/v1/map/{network_id}/{}", self.base_url, kind.id())
    }

    /// Address of the map configuration endpoint (Mapbox token).
    pub fn map_config_url(&self) -> String {
        format!("{}/api/v1/map/config", self.base_url)
    }

    /// Address of the identity probe used at session start.
    pub fn auth_probe_url(&self) -> String {
        format!("{}/api/v1/auth/me", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_win() {
        let settings =
            Settings::resolve(Some("http://grid.example:9000/"), Some("http://sso.example/login"))
                .unwrap();
        assert_eq!(settings.base_url, "http://grid.example:9000");
        assert_eq!(settings.login_url, "http://sso.example/login");
    }

    #[test]
    fn login_defaults_under_base() {
        let settings = Settings::for_service("http://grid.example:9000");
        assert_eq!(settings.login_url, "http://grid.example:9000/login");
    }

    #[test]
    fn resource_addresses_are_per_network_and_kind() {
        let settings = Settings::for_service("http://grid.example:9000");
        assert_eq!(
            settings.resource_url("elec-2030", LayerKind::Buses),
            "http://grid.example:9000/api/v1/map/elec-2030/buses"
        );
        assert_eq!(
            settings.resource_url("elec-2030", LayerKind::Lines),
            "http://grid.example:9000/api/v1/map/elec-2030/lines"
        );
    }

    #[test]
    fn rejects_garbage_base_url() {
        assert!(Settings::resolve(Some("not a url"), None).is_err());
    }
}
