//! Configuration example parser
//!
//! Detects the top-level assignment keys of the module block in
//! `kube.tf.example`, both active (`  key = ...`) and commented out
//! (`  # key = ...`).

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Block keywords that look like assignments but are never configuration keys
pub const RESERVED_KEYWORDS: [&str; 7] = [
    "module",
    "variable",
    "locals",
    "output",
    "resource",
    "data",
    "terraform",
];

/// Commented-out assignment at exactly two spaces of indentation
static COMMENTED_ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^ {2}#[ \t]*([a-zA-Z_][a-zA-Z0-9_]*)[ \t]*=").expect("valid key regex")
});

/// Active assignment at exactly two spaces of indentation
static ACTIVE_ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^ {2}([a-zA-Z_][a-zA-Z0-9_]*)[ \t]*=").expect("valid key regex")
});

/// Parser for configuration example files
pub struct ConfigParser;

impl ConfigParser {
    /// Extract the configuration keys in first-seen order.
    ///
    /// All commented assignments are collected before any active one, so a
    /// key documented as `  # key = ...` anywhere in the file takes the
    /// position of its first commented occurrence and suppresses every active
    /// occurrence.
    pub fn extract_configuration_keys(content: &str) -> Vec<String> {
        let mut keys = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for pattern in [&*COMMENTED_ASSIGNMENT, &*ACTIVE_ASSIGNMENT] {
            for caps in pattern.captures_iter(content) {
                let Some(key) = caps.get(1).map(|m| m.as_str()) else {
                    continue;
                };
                if Self::is_reserved(key) {
                    continue;
                }
                if seen.insert(key) {
                    keys.push(key.to_string());
                }
            }
        }

        tracing::debug!("Detected {} configuration keys", keys.len());
        keys
    }

    pub fn is_reserved(key: &str) -> bool {
        RESERVED_KEYWORDS.contains(&key)
    }
}
