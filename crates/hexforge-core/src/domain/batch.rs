//! Placeholder batches: the `{{TOKEN}}` → value map a stub is rendered with.
//!
//! Batch tokens use double braces and are stored *with* their braces, so the
//! key is exactly the text replaced in the stub. Pattern variables (`{name}`)
//! are a different syntax handled by [`crate::domain::resolver::expand`].

use std::collections::BTreeMap;

use serde::Serialize;

/// Well-known batch tokens.
pub mod tokens {
    // Per-file / per-command
    pub const PACKAGE: &str = "{{PACKAGE}}";
    pub const BASE_PACKAGE: &str = "{{BASE_PACKAGE}}";
    pub const ENTITY_NAME: &str = "{{ENTITY_NAME}}";
    pub const ENTITY_NAME_LOWER: &str = "{{ENTITY_NAME_LOWER}}";
    pub const ENTITY_NAME_PLURAL: &str = "{{ENTITY_NAME_PLURAL}}";
    pub const TABLE_NAME: &str = "{{TABLE_NAME}}";
    pub const AGGREGATE: &str = "{{AGGREGATE}}";
    pub const SEEDER_NAME: &str = "{{SEEDER_NAME}}";
    pub const PACKAGE_FACTORY: &str = "{{PACKAGE_FACTORY}}";
    pub const PACKAGE_REPOSITORY: &str = "{{PACKAGE_REPOSITORY}}";

    // Hexagonal batch
    pub const PACKAGE_MODEL: &str = "{{PACKAGE_MODEL}}";
    pub const PACKAGE_PORT_OUT: &str = "{{PACKAGE_PORT_OUT}}";
    pub const PACKAGE_PORT_IN: &str = "{{PACKAGE_PORT_IN}}";
    pub const PACKAGE_CQRS: &str = "{{PACKAGE_CQRS}}";
    pub const PACKAGE_MEDIATOR: &str = "{{PACKAGE_MEDIATOR}}";
    pub const PACKAGE_EVENT: &str = "{{PACKAGE_EVENT}}";
    pub const PACKAGE_DOMAIN_ROOT: &str = "{{PACKAGE_DOMAIN_ROOT}}";

    // CRUD batch
    pub const PACKAGE_CRUD_MODEL: &str = "{{PACKAGE_CRUD_MODEL}}";
    pub const PACKAGE_CRUD_ENTITY: &str = "{{PACKAGE_CRUD_ENTITY}}";
    pub const PACKAGE_CRUD_REPOSITORY: &str = "{{PACKAGE_CRUD_REPOSITORY}}";
    pub const PACKAGE_CRUD_SERVICE: &str = "{{PACKAGE_CRUD_SERVICE}}";
    pub const PACKAGE_CRUD_MAPPER: &str = "{{PACKAGE_CRUD_MAPPER}}";
}

/// Token → value substitutions for one generation command.
///
/// Built fresh per command, filled progressively by several call sites, then
/// handed to the renderer. Inserting an existing token overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlaceholderBatch {
    tokens: BTreeMap<String, String>,
}

impl PlaceholderBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.tokens.insert(token.into(), value.into());
    }

    /// Copy of this batch with one more token; used for per-file `{{PACKAGE}}`.
    pub fn with(&self, token: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.insert(token, value);
        next
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.tokens.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Substitute every token occurrence in `text`.
    ///
    /// Exact substring replacement, no escaping. Tokens not in the batch are
    /// left as-is (`{{UNKNOWN}}` stays `{{UNKNOWN}}`).
    pub fn render(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (token, value) in &self.tokens {
            result = result.replace(token.as_str(), value);
        }
        result
    }

    /// `{{TOKEN}}` occurrences in `text` that this batch would not replace.
    pub fn unresolved_tokens<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut found: Vec<&str> = Vec::new();
        let mut rest = text;

        while let Some(open) = rest.find("{{") {
            let after = &rest[open..];
            let Some(close) = after[2..].find("}}") else {
                break;
            };
            let token = &after[..close + 4];
            let inner = &token[2..token.len() - 2];
            if !inner.is_empty()
                && !inner.contains(['{', '}'])
                && !self.contains(token)
                && !found.contains(&token)
            {
                found.push(token);
            }
            rest = &after[close + 4..];
        }

        found
    }
}

impl Extend<(String, String)> for PlaceholderBatch {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        self.tokens.extend(iter);
    }
}

impl FromIterator<(String, String)> for PlaceholderBatch {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}
