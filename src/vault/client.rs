//! Blocking HTTP client for the KV read endpoint.
//!
//! One `GET <base>/<name>` per call, authenticated with `X-Vault-Token`.
//! Nothing is retried and nothing is cached: the first error is returned.

use ureq::http::StatusCode;
use ureq::Agent;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, V2FileError};

use super::envelope::{SecretData, SecretEnvelope};

/// Header carrying the Vault token.
pub const TOKEN_HEADER: &str = "X-Vault-Token";

/// Fetches secrets from a single KV mount.
pub struct SecretFetcher {
    agent: Agent,
    base_url: String,
    token: Zeroizing<String>,
}

impl SecretFetcher {
    /// Create a fetcher for the mount described by `settings`.
    pub fn new(settings: &Settings) -> Self {
        // Non-2xx responses come back as normal responses so the status
        // line can be reported verbatim.
        let config = Agent::config_builder().http_status_as_error(false).build();

        Self {
            agent: Agent::new_with_config(config),
            base_url: settings.base_url(),
            token: settings.token.clone(),
        }
    }

    /// Build the full URL for a secret path.
    ///
    /// Example: `secret_url("myapp/prod")` → `<base>/myapp/prod`
    pub fn secret_url(&self, name: &str) -> Result<String> {
        let name = name.trim_start_matches('/');
        if name.is_empty() {
            return Err(V2FileError::InvalidRequest(
                "secret path cannot be empty".into(),
            ));
        }
        Ok(format!("{}/{name}", self.base_url))
    }

    /// Fetch the secret at `name` and return its data mapping.
    pub fn get(&self, name: &str) -> Result<SecretData> {
        let url = self.secret_url(name)?;

        let mut response = self
            .agent
            .get(url.as_str())
            .header(TOKEN_HEADER, self.token.as_str())
            .call()
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(V2FileError::UnexpectedStatus(status_line(status)));
        }

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| V2FileError::BodyRead(e.to_string()))?;

        let envelope = SecretEnvelope::from_json(&body)?;
        Ok(envelope.data)
    }
}

/// Split ureq failures into request-construction and transport errors.
fn classify_error(err: ureq::Error) -> V2FileError {
    match err {
        ureq::Error::BadUri(msg) => V2FileError::InvalidRequest(msg),
        ureq::Error::Http(e) => V2FileError::InvalidRequest(e.to_string()),
        other => V2FileError::Transport(other.to_string()),
    }
}

/// Format a status the way HTTP prints it, e.g. `404 Not Found`.
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}
