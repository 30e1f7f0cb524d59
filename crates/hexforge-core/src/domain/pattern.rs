//! Pattern tables: semantic key → relative namespace pattern.
//!
//! # Design
//!
//! A pattern is flat text with `{variable}` tokens, e.g.
//! `domain.{aggregate}.port.in`. There is no conditional or repetition
//! syntax. Each [`PathMode`] owns an independent key namespace, so `"model"`
//! in hexagonal mode and `"model"` in CRUD mode are unrelated entries.
//!
//! The built-in tables are process-wide constants built once on first use
//! (see [`PatternTable::defaults`]) and cloned into each resolver, so tests can
//! build resolvers from synthetic tables without touching shared state.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── PathMode ─────────────────────────────────────────────────────────────────

/// Which pattern namespace a key is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMode {
    /// Ports/adapters layout keyed by `{aggregate}` and `{category}`.
    Hexagonal,
    /// Flat layered layout keyed by `{name}`.
    Crud,
}

impl PathMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hexagonal => "hexagonal",
            Self::Crud => "crud",
        }
    }

    /// The pattern variable a single-value resolve binds in this mode.
    pub const fn primary_variable(&self) -> &'static str {
        match self {
            Self::Hexagonal => "aggregate",
            Self::Crud => "name",
        }
    }

    /// The configuration section holding this mode's overrides.
    pub const fn config_section(&self) -> &'static str {
        match self {
            Self::Hexagonal => "paths",
            Self::Crud => "crud",
        }
    }
}

impl fmt::Display for PathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hexagonal" | "hex" | "paths" => Ok(Self::Hexagonal),
            "crud" | "mvc" => Ok(Self::Crud),
            other => Err(DomainError::UnknownPathMode(other.to_string())),
        }
    }
}

// ── Built-in tables ──────────────────────────────────────────────────────────

const HEXAGONAL_DEFAULTS: &[(&str, &str)] = &[
    ("model", "domain.{aggregate}.model"),
    ("command", "domain.{aggregate}.command"),
    ("query", "domain.{aggregate}.query"),
    ("event", "domain.{aggregate}.event"),
    ("event-listener", "infrastructure.event.{aggregate}"),
    ("dto", "domain.{aggregate}.dto"),
    ("port-in", "domain.{aggregate}.port.in"),
    ("port-out", "domain.{aggregate}.port.out"),
    ("persistence", "infrastructure.persistence.{aggregate}"),
    ("controller", "infrastructure.web.{aggregate}"),
    ("adapter", "infrastructure.{category}.{aggregate}"),
    ("config", "infrastructure.config"),
    ("mediator", "infrastructure.mediator"),
    ("cqrs", "domain.cqrs"),
    ("domain-root", "domain"),
    ("service", "domain.{aggregate}.service"),
    ("factory", "infrastructure.factory.{aggregate}"),
    ("seeder", "infrastructure.seeder"),
];

const CRUD_DEFAULTS: &[(&str, &str)] = &[
    ("model", "{name}.model"),
    ("entity", "{name}.entity"),
    ("repository", "{name}.repository"),
    ("mapper", "{name}.mapper"),
    ("service", "{name}.service"),
    ("controller", "{name}.web"),
];

// ── PatternTable ─────────────────────────────────────────────────────────────

/// Mapping from semantic key to pattern.
///
/// Backed by a `BTreeMap` so listings (`hexforge paths`, `hexforge init`) come
/// out in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternTable {
    entries: BTreeMap<String, String>,
}

impl PatternTable {
    /// An empty table. Used as the override layer when a project has no
    /// configuration for a mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(key, pattern)` pairs. Later pairs win.
    pub fn from_pairs<I, K, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, p)| (k.into(), p.into()))
                .collect(),
        }
    }

    /// The built-in table for `mode`.
    pub fn defaults(mode: PathMode) -> &'static PatternTable {
        static HEXAGONAL: OnceLock<PatternTable> = OnceLock::new();
        static CRUD: OnceLock<PatternTable> = OnceLock::new();

        match mode {
            PathMode::Hexagonal => {
                HEXAGONAL.get_or_init(|| Self::from_pairs(HEXAGONAL_DEFAULTS.iter().copied()))
            }
            PathMode::Crud => CRUD.get_or_init(|| Self::from_pairs(CRUD_DEFAULTS.iter().copied())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, pattern: impl Into<String>) {
        self.entries.insert(key.into(), pattern.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, pattern)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for PatternTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for PatternTable {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

// ── Placeholder scanning ─────────────────────────────────────────────────────

/// Variable names of every `{name}` token left in `text`, in order of
/// appearance.
///
/// A token is a `{`, one or more characters that are neither braces nor
/// whitespace, then `}`. Double-brace stub tokens such as `{{PACKAGE}}` are
/// not reported; those belong to the stub renderer.
pub fn placeholders(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'{' {
            i += 1;
            continue;
        }
        let start = i + 1;
        let Some(len) = text[start..].find(['{', '}']) else {
            break;
        };
        let end = start + len;
        let name = &text[start..end];
        let doubled = i > 0 && bytes[i - 1] == b'{';
        if bytes[end] == b'}'
            && !name.is_empty()
            && !doubled
            && !name.chars().any(char::is_whitespace)
            && bytes.get(end + 1) != Some(&b'}')
        {
            found.push(name);
            i = end + 1;
        } else {
            i = end;
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexagonal_defaults_cover_known_keys() {
        let table = PatternTable::defaults(PathMode::Hexagonal);
        assert_eq!(table.len(), 18);
        assert_eq!(table.get("port-in"), Some("domain.{aggregate}.port.in"));
        assert_eq!(table.get("adapter"), Some("infrastructure.{category}.{aggregate}"));
        assert_eq!(table.get("domain-root"), Some("domain"));
    }

    #[test]
    fn crud_defaults_are_keyed_by_name() {
        let table = PatternTable::defaults(PathMode::Crud);
        assert_eq!(table.len(), 6);
        assert!(table.iter().all(|(_, p)| p.starts_with("{name}.")));
        assert_eq!(table.get("controller"), Some("{name}.web"));
    }

    #[test]
    fn modes_do_not_share_keys() {
        let hex = PatternTable::defaults(PathMode::Hexagonal);
        let crud = PatternTable::defaults(PathMode::Crud);
        assert_ne!(hex.get("model"), crud.get("model"));
        assert!(!crud.contains("port-in"));
    }

    #[test]
    fn from_pairs_later_wins() {
        let t = PatternTable::from_pairs([("a", "x"), ("a", "y")]);
        assert_eq!(t.get("a"), Some("y"));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn path_mode_parses() {
        assert_eq!("hex".parse::<PathMode>().unwrap(), PathMode::Hexagonal);
        assert_eq!("CRUD".parse::<PathMode>().unwrap(), PathMode::Crud);
        assert!("flat".parse::<PathMode>().is_err());
    }

    #[test]
    fn placeholders_found_in_order() {
        assert_eq!(
            placeholders("infrastructure.{category}.{aggregate}"),
            vec!["category", "aggregate"]
        );
        assert!(placeholders("domain.cqrs").is_empty());
    }

    #[test]
    fn placeholders_ignore_stub_tokens_and_stray_braces() {
        assert!(placeholders("package {{PACKAGE}};").is_empty());
        assert!(placeholders("a { b } c").is_empty());
        assert!(placeholders("dangling {open").is_empty());
        assert!(placeholders("{}").is_empty());
    }
}
