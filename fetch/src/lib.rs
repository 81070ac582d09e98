//! Retrieval of published proofs and commitments by URI.
//!
//! Supported schemes:
//! - `http://` and `https://`: plain GET
//! - `ipfs://<cid>`: GET through a public gateway
//! - `file://<path>`: local file
//! - `twitter://<handle>`: first post by the account carrying a `devigny:` tag

pub mod config;
mod errors;

use std::fs;

use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

pub use crate::config::{FetchConfig, TwitterCredentials};
pub use crate::errors::FetchError;

/// Tag marking a post that carries a signature.
pub const SIGNATURE_TAG: &str = "devigny:";

#[derive(Deserialize)]
struct BearerToken {
    access_token: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    statuses: Vec<Status>,
}

#[derive(Deserialize)]
struct Status {
    text: String,
}

pub struct Fetcher {
    config: FetchConfig,
    client: Client,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(FetchConfig::from_env())
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Raw text content at `uri`.
    pub fn fetch(&self, uri: &str) -> Result<String, FetchError> {
        let url = Url::parse(uri).map_err(|e| FetchError::InvalidUri {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;
        debug!(scheme = url.scheme(), uri, "fetching");
        match url.scheme() {
            "http" | "https" => self.url_fetch(url),
            "ipfs" => self.ipfs_fetch(&url),
            "file" => file_fetch(uri),
            "twitter" => self.twitter_fetch(&url),
            other => Err(FetchError::UnknownScheme(other.to_string())),
        }
    }

    fn url_fetch(&self, url: Url) -> Result<String, FetchError> {
        Ok(self.client.get(url).send()?.error_for_status()?.text()?)
    }

    fn ipfs_fetch(&self, url: &Url) -> Result<String, FetchError> {
        let cid = host(url)?;
        let gateway_url = self.ipfs_url(cid);
        Ok(self
            .client
            .get(gateway_url)
            .send()?
            .error_for_status()?
            .text()?)
    }

    /// Gateway URL serving the content identifier `cid`.
    pub fn ipfs_url(&self, cid: &str) -> String {
        format!("{}/{}", self.config.ipfs_gateway.trim_end_matches('/'), cid)
    }

    fn twitter_fetch(&self, url: &Url) -> Result<String, FetchError> {
        let handle = twitter_handle(url)?;
        let creds = self
            .config
            .twitter
            .as_ref()
            .ok_or(FetchError::MissingCredentials)?;
        let api = self.config.twitter_api.trim_end_matches('/');

        let token: BearerToken = self
            .client
            .post(format!("{api}/oauth2/token"))
            .basic_auth(&creds.api_key, Some(&creds.api_secret_key))
            .form(&[("grant_type", "client_credentials")])
            .send()?
            .error_for_status()?
            .json()?;

        let query = format!("from:{handle} {SIGNATURE_TAG}");
        let found: SearchResponse = self
            .client
            .get(format!("{api}/1.1/search/tweets.json"))
            .bearer_auth(token.access_token)
            .query(&[("q", query.as_str())])
            .send()?
            .error_for_status()?
            .json()?;

        found
            .statuses
            .into_iter()
            .next()
            .map(|status| status.text)
            .ok_or(FetchError::NotFound(handle))
    }
}

/// Fetch `uri` with configuration taken from the environment.
pub fn fetch(uri: &str) -> Result<String, FetchError> {
    Fetcher::from_env().fetch(uri)
}

fn host(url: &Url) -> Result<&str, FetchError> {
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(host),
        _ => Err(FetchError::InvalidUri {
            uri: url.to_string(),
            reason: "missing host".to_string(),
        }),
    }
}

/// Account name of a `twitter://` URI, without a leading `@`.
pub fn twitter_handle(url: &Url) -> Result<String, FetchError> {
    Ok(host(url)?.trim_start_matches('@').to_string())
}

/// Local path named by a `file://` URI: the authority followed by any path,
/// so both `file://notes.txt` and `file:///abs/notes.txt` work.
///
/// Read from the raw text because `Url` lowercases the host of `file` URLs.
pub fn file_path(uri: &str) -> Result<String, FetchError> {
    let rest = uri.split_once("://").map_or("", |(_, rest)| rest);
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    let (authority, path) = rest.split_at(rest.find('/').unwrap_or(rest.len()));
    let path = match (authority, path) {
        ("", path) => path.to_string(),
        (host, path) if host.eq_ignore_ascii_case("localhost") => path.to_string(),
        (host, "" | "/") => host.to_string(),
        (host, path) => format!("{host}{path}"),
    };
    if path.is_empty() || path == "/" {
        return Err(FetchError::InvalidUri {
            uri: uri.to_string(),
            reason: "missing path".to_string(),
        });
    }
    Ok(path)
}

fn file_fetch(uri: &str) -> Result<String, FetchError> {
    let path = file_path(uri)?;
    fs::read_to_string(&path).map_err(|source| FetchError::Io { path, source })
}
