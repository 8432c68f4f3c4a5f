//! Keyed command-argument parsing
//!
//! Commands arrive as a keyword followed by whitespace-separated `KEY=VALUE`
//! parameters. Keys are case-insensitive (uppercased on parse); values keep
//! their original text and are interpreted by typed accessors at the
//! validation boundary.

use objexclude_core::{CommandError, Result};
use std::collections::HashMap;

/// Parsed keyed parameters of one command
#[derive(Debug, Clone, Default)]
pub struct CommandArgs {
    params: HashMap<String, String>,
}

impl CommandArgs {
    /// Parse the parameter portion of a command line
    ///
    /// Tokens without `=` are ignored; the value is everything after the
    /// first `=` in the token.
    pub fn parse(raw: &str) -> Self {
        let mut params = HashMap::new();
        for token in raw.split_whitespace() {
            if let Some((key, value)) = token.split_once('=') {
                params.insert(key.to_uppercase(), value.to_string());
            }
        }
        Self { params }
    }

    /// Fetch a required parameter
    pub fn get(&self, key: &str) -> Result<&str> {
        self.params
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| CommandError::MissingParameter {
                param: key.to_string(),
            })
    }

    /// Fetch an optional parameter
    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Split a command line into its uppercased keyword and parsed parameters
///
/// Returns `None` for blank lines.
pub fn split_command(line: &str) -> Option<(String, CommandArgs)> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let keyword = parts.next().filter(|k| !k.is_empty())?;
    let args = CommandArgs::parse(parts.next().unwrap_or(""));
    Some((keyword.to_uppercase(), args))
}

/// Parse a CENTER value of the form `x,y`
pub fn parse_center(raw: &str) -> Result<(f64, f64)> {
    let parse_err = |reason: String| CommandError::ParseError {
        param: "CENTER".to_string(),
        reason,
    };

    let coords: Vec<f64> = raw
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .map_err(|e| parse_err(format!("{}: {}", s.trim(), e)))
        })
        .collect::<Result<_>>()?;

    match coords.as_slice() {
        [x, y] => Ok((*x, *y)),
        _ => Err(parse_err(format!("expected 2 coordinates, got {}", coords.len()))),
    }
}

/// Parse a POLYGON value: a JSON array of `[x, y]` pairs
pub fn parse_polygon(raw: &str) -> Result<Vec<[f64; 2]>> {
    serde_json::from_str(raw).map_err(|e| CommandError::ParseError {
        param: "POLYGON".to_string(),
        reason: e.to_string(),
    })
}
