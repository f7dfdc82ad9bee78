use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidUrl {
    #[error("URL scheme should be 'http' or 'https', got '{0}'")]
    UnsupportedScheme(String),
    #[error("URL must have a host")]
    MissingHost,
    #[error("invalid URL: {0}")]
    Malformed(#[from] url::ParseError),
}

/// An absolute `http`/`https` URL with a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Url", into = "Url")]
pub struct HttpUrl(Url);

impl HttpUrl {
    pub fn parse(input: &str) -> Result<Self, InvalidUrl> {
        Self::try_from(Url::parse(input)?)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<Url> for HttpUrl {
    type Error = InvalidUrl;

    fn try_from(url: Url) -> Result<Self, Self::Error> {
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(InvalidUrl::UnsupportedScheme(other.to_string())),
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(InvalidUrl::MissingHost);
        }
        Ok(Self(url))
    }
}

impl From<HttpUrl> for Url {
    fn from(value: HttpUrl) -> Self {
        value.0
    }
}

impl fmt::Display for HttpUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
