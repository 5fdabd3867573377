//! The static prefix route table.
//!
//! A table is an ordered list of `{prefix, target}` entries. Resolution
//! walks the list in declaration order; the first prefix matching the
//! start of the request path wins, the prefix is stripped, and the rest is
//! appended to the target base URL.
//!
//! The table is built once at startup and validated then: duplicate
//! prefixes and entries shadowed by an earlier prefix are construction
//! errors, not silent dead routes. A shadowed entry could never win under
//! first-match order, so a table that contains one is a mistake by
//! definition.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// One route: requests under `prefix` forward to `target`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path prefix, e.g. `/natacion`. Must start with `/` and name at
    /// least one segment.
    pub prefix: String,
    /// Upstream base URL, e.g. `http://localhost:8002`.
    pub target: String,
}

/// A successful resolution: where to forward and with which path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub target: &'a str,
    pub rewritten_path: String,
}

/// Ordered, validated prefix route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Builds a table, validating every entry.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, GatewayError> {
        for (i, entry) in entries.iter().enumerate() {
            if !entry.prefix.starts_with('/') || entry.prefix.len() < 2 {
                return Err(GatewayError::InvalidTable(format!(
                    "prefix must start with '/' and name a segment: {:?}",
                    entry.prefix
                )));
            }
            if entry.prefix.ends_with('/') {
                return Err(GatewayError::InvalidTable(format!(
                    "prefix must not end with '/': {:?}",
                    entry.prefix
                )));
            }
            if entry.target.is_empty() {
                return Err(GatewayError::InvalidTable(format!(
                    "empty target for prefix {}",
                    entry.prefix
                )));
            }
            for earlier in &entries[..i] {
                if earlier.prefix == entry.prefix {
                    return Err(GatewayError::InvalidTable(format!(
                        "duplicate prefix: {}",
                        entry.prefix
                    )));
                }
                if entry.prefix.starts_with(&earlier.prefix) {
                    return Err(GatewayError::InvalidTable(format!(
                        "prefix {} is shadowed by earlier prefix {}",
                        entry.prefix, earlier.prefix
                    )));
                }
            }
        }
        Ok(RouteTable { entries })
    }

    /// Loads and validates a table from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, GatewayError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| GatewayError::Config(format!("{}: {}", path.display(), e)))?;
        let entries: Vec<RouteEntry> =
            serde_yaml::from_str(&text).map_err(|e| GatewayError::Config(e.to_string()))?;
        RouteTable::new(entries)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// First-match resolution in declaration order.
    pub fn resolve(&self, path: &str) -> Result<Resolved<'_>, GatewayError> {
        for entry in &self.entries {
            if let Some(rest) = path.strip_prefix(&entry.prefix) {
                let rewritten = if rest.is_empty() { "/" } else { rest };
                return Ok(Resolved {
                    target: &entry.target,
                    rewritten_path: rewritten.to_string(),
                });
            }
        }
        Err(GatewayError::NoRoute(path.to_string()))
    }
}
