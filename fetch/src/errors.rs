//! Error module.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("unknown fetch scheme {0:?}")]
    UnknownScheme(String),
    #[error("invalid uri {uri:?}: {reason}")]
    InvalidUri { uri: String, reason: String },
    #[error("TWITTER_API_KEY and TWITTER_API_SECRET_KEY environment variables not set")]
    MissingCredentials,
    #[error("could not find devigny signature attached to Twitter account @{0}")]
    NotFound(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
