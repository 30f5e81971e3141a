//! Deploy-secret env files.
//!
//! Per-network secrets (`NODE_URI_*`, `ACCOUNTS_*`, `MNEMONIC_*`, explorer
//! keys) conventionally live in a project-local `.env` file rather than the
//! shell profile. This module reads that file into a plain map;
//! [`crate::env::EnvSnapshot`] layers it under the process environment.
//!
//! Accepted line forms:
//!
//! ```text
//! # full-line comment
//! NODE_URI_ETHEREUM=https://mainnet.example.com
//! export ACCOUNTS_ETHEREUM=0xabc...   # inline comment after unquoted value
//! MNEMONIC_POLYGON="test test test ... junk"
//! ETHERSCAN_API_KEY_BASE='raw # kept verbatim inside quotes'
//! ```
//!
//! Later assignments win, matching shell sourcing. Keys must be valid
//! environment variable names; a malformed line aborts the load with its
//! line number, since a silently skipped secret would surface much later as
//! a missing-configuration failure.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{ChainrigError, Result};

/// Load environment variables from a dotenv-style file.
///
/// # Errors
///
/// Returns `EnvFileNotFound` if the file doesn't exist and
/// `EnvFileParseError` for a line that is neither blank, a comment, nor a
/// well-formed assignment.
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ChainrigError::EnvFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ChainrigError::Io(e)
        }
    })?;

    let mut vars = HashMap::new();
    for (idx, raw) in content.lines().enumerate() {
        match classify(raw) {
            LineKind::Skip => {}
            LineKind::Assignment { key, value } => {
                // Last assignment wins, as when sourcing the file in a shell.
                vars.insert(key, value);
            }
            LineKind::Invalid(reason) => {
                return Err(ChainrigError::EnvFileParseError {
                    path: path.to_path_buf(),
                    message: format!("line {}: {reason}", idx + 1),
                });
            }
        }
    }

    Ok(vars)
}

enum LineKind {
    Skip,
    Assignment { key: String, value: String },
    Invalid(String),
}

fn classify(raw: &str) -> LineKind {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return LineKind::Skip;
    }

    // Tolerate shell-style `export KEY=value`.
    let line = line
        .strip_prefix("export ")
        .map(str::trim_start)
        .unwrap_or(line);

    let Some((key, rest)) = line.split_once('=') else {
        return LineKind::Invalid(format!("expected KEY=value, got '{line}'"));
    };

    let key = key.trim_end();
    if !is_valid_key(key) {
        return LineKind::Invalid(format!("'{key}' is not a valid variable name"));
    }

    match parse_value(rest.trim_start()) {
        Ok(value) => LineKind::Assignment {
            key: key.to_string(),
            value,
        },
        Err(reason) => LineKind::Invalid(reason),
    }
}

/// Environment variable names: leading letter or underscore, then letters,
/// digits, or underscores.
fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Quoted values are taken verbatim between the quotes (mnemonic phrases and
/// keys containing `#` need this). Unquoted values end at an inline
/// ` #` comment and are trimmed.
fn parse_value(raw: &str) -> std::result::Result<String, String> {
    for quote in ['"', '\''] {
        if let Some(inner) = raw.strip_prefix(quote) {
            return match inner.split_once(quote) {
                Some((value, trailing)) => {
                    let trailing = trailing.trim();
                    if trailing.is_empty() || trailing.starts_with('#') {
                        Ok(value.to_string())
                    } else {
                        Err(format!("unexpected content after closing quote: '{trailing}'"))
                    }
                }
                None => Err(format!("unterminated {quote} quote")),
            };
        }
    }

    let value = match raw.split_once(" #") {
        Some((before, _)) => before,
        None => raw,
    };
    Ok(value.trim().to_string())
}
