//! `v2file <secretPath> <fileName>`: fetch a secret and write it to a file.

use std::path::Path;

use crate::cli::{output, settings, Cli};
use crate::errors::Result;
use crate::flatten::{self, FlattenMode};
use crate::vault::SecretFetcher;

/// Execute the fetch-and-write pipeline.
pub fn execute(cli: &Cli) -> Result<()> {
    // Validate the mode before asking for a token or touching the network.
    let mode = FlattenMode::parse(&cli.mode)?;

    let settings = settings(cli)?;
    let fetcher = SecretFetcher::new(&settings);

    let data = fetcher.get(&cli.secret_path)?;
    output::info(&format!(
        "Data received from Vault: {} field(s) at {}",
        data.len(),
        cli.secret_path
    ));
    output::print_fields_table(&data);

    flatten::write_to_file(&data, Path::new(&cli.file_name), mode)?;

    output::success(&format!(
        "Data successfully written to {} (mode: {})",
        cli.file_name,
        mode.as_str()
    ));

    Ok(())
}
