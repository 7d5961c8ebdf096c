//! Text-mode flattening: YAML serialization followed by line rewriting.
//!
//! The secret data is rendered as block-style YAML and then reshaped into
//! `key=value` lines with a fixed sequence of textual rewrites:
//!
//! 1. serialize to YAML
//! 2. cut everything from the first `metadata:` line onward
//! 3. drop `data:` header lines
//! 4. turn the first `": "` of each line into `=` (unquoting YAML scalars)
//! 5. strip indentation
//! 6. trim blank lines at both ends
//!
//! This works for flat secrets and for the KV v2 `data`/`metadata` shape.
//! Deeper nesting passes through as best-effort YAML fragments.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{Result, V2FileError};
use crate::vault::SecretData;

/// Line that starts the version metadata block of a KV v2 read.
const METADATA_MARKER: &str = "metadata:";

/// Header line wrapping the secret fields of a KV v2 read.
const DATA_HEADER: &str = "data:";

/// YAML key/value separator replaced by `=`.
const YAML_SEPARATOR: &str = ": ";

/// Leading spaces and tabs on any line.
fn indentation() -> &'static Regex {
    static INDENTATION: OnceLock<Regex> = OnceLock::new();
    INDENTATION.get_or_init(|| Regex::new(r"(?m)^[ \t]+").expect("indentation pattern is valid"))
}

/// Flatten secret data through the YAML rewrite pipeline.
pub fn flatten(data: &SecretData) -> Result<String> {
    let yaml = serde_yaml::to_string(data)
        .map_err(|e| V2FileError::Serialization(format!("YAML: {e}")))?;
    Ok(rewrite(&yaml))
}

/// Apply the rewrite steps (2–6) to already serialized YAML.
pub fn rewrite(yaml: &str) -> String {
    let text = truncate_at_metadata(yaml);
    let text = drop_data_header(text);
    let text = replace_separators(&text);
    let text = indentation().replace_all(&text, "");
    text.trim().to_string()
}

/// Keep only the text before the first line starting with `metadata:`.
fn truncate_at_metadata(text: &str) -> &str {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.starts_with(METADATA_MARKER) {
            return &text[..offset];
        }
        offset += line.len();
    }
    text
}

/// Remove every line that is only the `data:` header.
fn drop_data_header(text: &str) -> String {
    text.lines()
        .filter(|line| line.trim() != DATA_HEADER)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace the key/value separator on each line with `=`.
fn replace_separators(text: &str) -> String {
    text.lines()
        .map(|line| match split_entry(line) {
            Some((key, value)) => format!("{}={}", unquote(key), unquote(value)),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split a YAML line at its key/value separator.
///
/// A quoted key may itself contain `": "`, so the split happens after its
/// closing quote. Otherwise the first `": "` on the line is used.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start();
    let indent = line.len() - trimmed.len();

    if let Some(end) = quoted_key_end(trimmed) {
        let split = indent + end;
        if let Some(value) = line[split..].strip_prefix(YAML_SEPARATOR) {
            return Some((&line[..split], value));
        }
    }

    line.split_once(YAML_SEPARATOR)
}

/// Byte length of a leading quoted scalar, closing quote included.
fn quoted_key_end(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    let (_, quote) = chars.next()?;
    match quote {
        '\'' => {
            // `''` is an escaped quote inside a single-quoted scalar.
            let mut chars = chars.peekable();
            while let Some((i, c)) = chars.next() {
                if c == '\'' {
                    if chars.peek().is_some_and(|&(_, next)| next == '\'') {
                        chars.next();
                    } else {
                        return Some(i + 1);
                    }
                }
            }
            None
        }
        '"' => {
            while let Some((i, c)) = chars.next() {
                match c {
                    '\\' => {
                        chars.next();
                    }
                    '"' => return Some(i + 1),
                    _ => {}
                }
            }
            None
        }
        _ => None,
    }
}

/// Decode a quoted YAML scalar (`'1'`, `"a: b"`) back to its plain text.
///
/// Leading indentation is preserved. Anything that is not a complete
/// quoted scalar is returned unchanged.
fn unquote(scalar: &str) -> Cow<'_, str> {
    let trimmed = scalar.trim_start();
    let indent = &scalar[..scalar.len() - trimmed.len()];

    let quoted = trimmed.len() >= 2
        && ((trimmed.starts_with('\'') && trimmed.ends_with('\''))
            || (trimmed.starts_with('"') && trimmed.ends_with('"')));
    if !quoted {
        return Cow::Borrowed(scalar);
    }

    match serde_yaml::from_str::<String>(trimmed) {
        Ok(plain) => Cow::Owned(format!("{indent}{plain}")),
        Err(_) => Cow::Borrowed(scalar),
    }
}
