//! Errors returned while talking to a Radarr/Sonarr instance.

use thiserror::Error;

/// Longest response body, in characters, kept on an [ArrApiError::HttpStatus].
pub(crate) const BODY_SNIPPET_LIMIT: usize = 512;

#[derive(Debug, Error)]
pub enum ArrApiError {
    #[error("could not build the HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, TLS, timeout, ...).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{url} responded with HTTP {status}: {body}")]
    HttpStatus { url: String, status: u16, body: String },

    /// The server answered 2xx, but the body was not the JSON we expected.
    #[error("could not decode the response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ArrApiError {
    pub(crate) fn network(url: &str, source: reqwest::Error) -> Self {
        ArrApiError::Network {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn http_status(url: &str, status: u16, body: &str) -> Self {
        ArrApiError::HttpStatus {
            url: url.to_string(),
            status,
            body: snippet(body),
        }
    }

    pub(crate) fn decode(url: &str, source: serde_json::Error) -> Self {
        ArrApiError::Decode {
            url: url.to_string(),
            source,
        }
    }

    /// The HTTP status code, if the server got as far as sending one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ArrApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn snippet(body: &str) -> String {
    if body.chars().count() <= BODY_SNIPPET_LIMIT {
        return body.to_string();
    }
    let mut result: String = body.chars().take(BODY_SNIPPET_LIMIT).collect();
    result.push_str("...");
    result
}
