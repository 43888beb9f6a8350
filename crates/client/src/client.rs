//! Hosting provider HTTP client.
//!
//! Blocking reqwest client (no Tokio runtime required).
//! One request per operation; transport timeouts are reqwest's defaults.

use std::fs::File;

use reqwest::blocking::Response;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use sitekit_core::{ClientConfig, Deploy, Error, Result, Site};

/// Hosting API client (blocking).
#[derive(Clone)]
pub struct HostingClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl HostingClient {
    /// Create a client from connection settings.
    ///
    /// No network traffic happens here; the first request is made by
    /// whichever operation runs first.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.access_token))
                .map_err(|e| Error::ConfigParse(format!("Invalid access token: {}", e)))?,
        );

        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("sitekit/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url(),
        })
    }

    /// Register a new site under the given name.
    ///
    /// The name is forwarded untouched; whether it is acceptable (length,
    /// characters, uniqueness) is the provider's call.
    pub fn create_site(&self, name: &str) -> Result<Site> {
        let url = format!("{}sites", self.base_url);
        let resp = self.post_json(&url, &serde_json::json!({ "name": name }))?;
        resp.json().map_err(|e| Error::Parse(e.to_string()))
    }

    /// List every site on the account, in whatever order the provider uses.
    pub fn list_sites(&self) -> Result<Vec<Site>> {
        let url = format!("{}sites", self.base_url);
        let resp = self.get(&url)?;
        resp.json().map_err(|e| Error::Parse(e.to_string()))
    }

    /// Look up a site's id by exact name. First match wins.
    ///
    /// Re-fetches the site list on every call; site lists change between
    /// calls. Returns `Ok(None)` when no site carries the name.
    pub fn resolve_site_id(&self, name: &str) -> Result<Option<String>> {
        let sites = self.list_sites()?;
        let id = sites.iter().find(|s| s.name == name).map(|s| s.id.clone());
        if id.is_none() {
            tracing::warn!(site = name, "Site not found");
        }
        Ok(id)
    }

    /// Upload `{site_id}.zip` from the current directory as a new deploy.
    ///
    /// The provider also supports digest-based incremental deploys; this
    /// client only does whole-bundle zip uploads. Any failure to open the
    /// bundle — not-found or otherwise — means no request is made.
    pub fn deploy_site(&self, site_id: &str) -> Result<Deploy> {
        let bundle = format!("{}.zip", site_id);
        let file = match File::open(&bundle) {
            Ok(file) => file,
            Err(err) => {
                tracing::error!(bundle = %bundle, error = %err, "Cannot open deploy bundle");
                return Err(Error::Bundle(format!("{}: {}", bundle, err)));
            }
        };

        let url = format!("{}sites/{}/deploys", self.base_url, site_id);
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/zip")
            .body(file)
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let resp = check_status(response)?;
        resp.json().map_err(|e| Error::Parse(e.to_string()))
    }

    // ── Internal helpers ────────────────────────────────────────────

    fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;
        check_status(response)
    }

    fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<Response> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;
        check_status(response)
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        body,
    })
}
