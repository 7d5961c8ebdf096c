use std::fmt;

use zeroize::Zeroizing;

use crate::errors::{Result, V2FileError};

/// Default Vault server address (the dev-server listener).
pub const DEFAULT_ADDR: &str = "http://127.0.0.1:8200";

/// Default mount point of the KV secrets engine.
pub const DEFAULT_MOUNT: &str = "kv";

/// Connection settings for the secret store.
///
/// Assembled from CLI flags and their environment-variable fallbacks.
/// There is no config file: every field is passed in explicitly so the
/// fetcher can be pointed at any server, including a local test double.
#[derive(Clone)]
pub struct Settings {
    /// Server address, e.g. `https://vault.example.com:8200`.
    pub addr: String,

    /// KV engine mount, e.g. `kv` or `secret`.
    pub mount: String,

    /// Token sent as `X-Vault-Token`. Wiped from memory on drop.
    pub token: Zeroizing<String>,
}

// ── Implementation ───────────────────────────────────────────────────

impl Settings {
    /// Build and validate settings.
    pub fn new(addr: &str, mount: &str, token: Zeroizing<String>) -> Result<Self> {
        let addr = addr.trim().trim_end_matches('/');
        if !(addr.starts_with("http://") || addr.starts_with("https://")) {
            return Err(V2FileError::ConfigError(format!(
                "server address '{addr}' must start with http:// or https://"
            )));
        }

        let mount = mount.trim().trim_matches('/');
        if mount.is_empty() {
            return Err(V2FileError::ConfigError("mount cannot be empty".into()));
        }
        if mount.contains('/') {
            return Err(V2FileError::ConfigError(format!(
                "mount '{mount}' cannot contain '/'"
            )));
        }

        if token.is_empty() {
            return Err(V2FileError::ConfigError("token cannot be empty".into()));
        }

        Ok(Self {
            addr: addr.to_string(),
            mount: mount.to_string(),
            token,
        })
    }

    /// Base URL every secret path is appended to.
    ///
    /// Example: `http://127.0.0.1:8200/v1/kv/data`
    pub fn base_url(&self) -> String {
        format!("{}/v1/{}/data", self.addr, self.mount)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("addr", &self.addr)
            .field("mount", &self.mount)
            .field("token", &"<redacted>")
            .finish()
    }
}

// ── Tests ────────────────────────────────────────────────────────────
