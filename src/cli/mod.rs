//! CLI module: Clap argument parser, output helpers, and the fetch command.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal};

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::settings::{DEFAULT_ADDR, DEFAULT_MOUNT};
use crate::config::Settings;
use crate::errors::{Result, V2FileError};

/// Environment variable holding the Vault token.
pub const TOKEN_ENV: &str = "VAULT_TOKEN";

/// v2file: write a Vault KV secret to a key=value file.
#[derive(Parser)]
#[command(
    name = "v2file",
    about = "Fetch a secret from Vault and write it as a key=value file",
    version
)]
pub struct Cli {
    /// Secret path under the KV mount (e.g. myapp/prod)
    pub secret_path: String,

    /// Output file to create or overwrite
    pub file_name: String,

    /// Vault server address
    #[arg(long, env = "VAULT_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// KV secrets engine mount
    #[arg(long, env = "V2FILE_MOUNT", default_value = DEFAULT_MOUNT)]
    pub mount: String,

    /// Vault token (prompted for when omitted)
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Flattening mode: text (default) or structured
    #[arg(short, long, default_value = "text")]
    pub mode: String,
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Get the Vault token, trying in order:
/// 1. `--token` / `VAULT_TOKEN`
/// 2. Interactive hidden prompt (only when stdin is a terminal)
///
/// Returns `Zeroizing<String>` so the token is wiped from memory on drop.
pub fn resolve_token(cli: &Cli) -> Result<Zeroizing<String>> {
    if let Some(token) = cli.token.as_deref() {
        if !token.is_empty() {
            return Ok(Zeroizing::new(token.to_string()));
        }
    }

    if !io::stdin().is_terminal() {
        return Err(V2FileError::ConfigError(format!(
            "no Vault token: pass --token or set {TOKEN_ENV}"
        )));
    }

    let token = dialoguer::Password::new()
        .with_prompt("Enter Vault token")
        .interact()
        .map_err(|e| V2FileError::CommandFailed(format!("token prompt: {e}")))?;
    Ok(Zeroizing::new(token))
}

/// Build validated connection settings from the CLI arguments.
pub fn settings(cli: &Cli) -> Result<Settings> {
    let token = resolve_token(cli)?;
    Settings::new(&cli.addr, &cli.mount, token)
}
