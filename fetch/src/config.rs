use std::env;
use std::fmt;

pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs";
pub const DEFAULT_TWITTER_API: &str = "https://api.twitter.com";

pub const TWITTER_API_KEY: &str = "TWITTER_API_KEY";
pub const TWITTER_API_SECRET_KEY: &str = "TWITTER_API_SECRET_KEY";
pub const IPFS_GATEWAY: &str = "DEVIGNY_IPFS_GATEWAY";

/// App-only Twitter credentials.
#[derive(Clone)]
pub struct TwitterCredentials {
    pub api_key: String,
    pub api_secret_key: String,
}

impl fmt::Debug for TwitterCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwitterCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret_key", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct FetchConfig {
    /// Gateway prefix; the content identifier is appended as a path segment.
    pub ipfs_gateway: String,
    pub twitter_api: String,
    pub twitter: Option<TwitterCredentials>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            ipfs_gateway: DEFAULT_IPFS_GATEWAY.to_string(),
            twitter_api: DEFAULT_TWITTER_API.to_string(),
            twitter: None,
        }
    }
}

impl FetchConfig {
    /// Read the gateway override and Twitter credentials from the
    /// environment. Credentials are only set when both variables are.
    pub fn from_env() -> Self {
        let twitter = match (env::var(TWITTER_API_KEY), env::var(TWITTER_API_SECRET_KEY)) {
            (Ok(api_key), Ok(api_secret_key)) => Some(TwitterCredentials {
                api_key,
                api_secret_key,
            }),
            _ => None,
        };
        Self {
            ipfs_gateway: env::var(IPFS_GATEWAY)
                .unwrap_or_else(|_| DEFAULT_IPFS_GATEWAY.to_string()),
            twitter,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_not_printed() {
        let creds = TwitterCredentials {
            api_key: "key".to_string(),
            api_secret_key: "hunter2".to_string(),
        };
        let shown = format!("{creds:?}");
        assert!(shown.contains("key"));
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn test_default_gateway() {
        let config = FetchConfig::default();
        assert_eq!(config.ipfs_gateway, DEFAULT_IPFS_GATEWAY);
        assert!(config.twitter.is_none());
    }
}
