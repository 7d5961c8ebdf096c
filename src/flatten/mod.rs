//! Flatten module: turning secret data into a `key=value` file.
//!
//! This module provides:
//! - YAML-based textual flattening, the default (`text`)
//! - Direct walk of the decoded mapping (`structured`)
//! - `write_to_file`, which renders and writes the output file

pub mod structured;
pub mod text;

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::errors::{Result, V2FileError};
use crate::vault::SecretData;

/// Permission bits for newly created output files (rw-r--r--).
pub const OUTPUT_FILE_MODE: u32 = 0o644;

/// How secret data is turned into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlattenMode {
    /// Serialize to YAML and rewrite the text.
    #[default]
    Text,
    /// Emit one quoted `.env` line per top-level field.
    Structured,
}

impl FlattenMode {
    /// Parse a mode name as given on the command line.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "text" => Ok(Self::Text),
            "structured" => Ok(Self::Structured),
            other => Err(V2FileError::CommandFailed(format!(
                "unknown flatten mode '{other}' (use 'text' or 'structured')"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Structured => "structured",
        }
    }
}

/// Render secret data to the final file content.
///
/// Non-empty output ends with exactly one newline.
pub fn render(data: &SecretData, mode: FlattenMode) -> Result<String> {
    let mut content = match mode {
        FlattenMode::Text => text::flatten(data)?,
        FlattenMode::Structured => structured::flatten(data),
    };
    if !content.is_empty() {
        content.push('\n');
    }
    Ok(content)
}

/// Render `data` and write it to `path`, replacing any existing file.
///
/// The content is fully rendered before the file is touched, so a
/// serialization failure never leaves an empty file behind.
pub fn write_to_file(data: &SecretData, path: &Path, mode: FlattenMode) -> Result<()> {
    let content = render(data, mode)?;
    write_output(path, &content)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    let write_failed = |source| V2FileError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    #[cfg(unix)]
    let mut file = {
        use std::os::unix::fs::OpenOptionsExt;
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(OUTPUT_FILE_MODE)
            .open(path)
            .map_err(write_failed)?
    };

    #[cfg(not(unix))]
    let mut file = fs::File::create(path).map_err(write_failed)?;

    file.write_all(content.as_bytes()).map_err(write_failed)?;
    file.flush().map_err(write_failed)?;
    Ok(())
}
