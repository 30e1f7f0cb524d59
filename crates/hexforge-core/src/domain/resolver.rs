//! Path resolution: semantic key + variable bindings → fully-qualified package.
//!
//! ```text
//! key ──► PatternLayers::lookup ──► pattern ──► expand(bindings) ──► base + "." + expanded
//!          (override → default → identity)
//! ```
//!
//! Every operation here is total. Unknown keys pass through as literal
//! segments and unbound `{var}` tokens stay in the output, so custom keys
//! declared only in project configuration and partially-known bindings both
//! work. Callers that want to surface leftovers use [`PathResolver::resolve_detailed`].

use std::collections::HashMap;
use std::fmt;

use tracing::{trace, warn};

use crate::domain::batch::{PlaceholderBatch, tokens};
use crate::domain::pattern::{PathMode, PatternTable, placeholders};

// ── Lookup strategy ──────────────────────────────────────────────────────────

/// Where a resolved pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternSource {
    /// The project's configuration overlay.
    Override,
    /// The built-in table.
    Default,
    /// Neither table knows the key; the key itself is the pattern.
    Identity,
}

impl PatternSource {
    /// Lookup precedence, first hit wins.
    pub const ORDER: [PatternSource; 3] = [Self::Override, Self::Default, Self::Identity];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::Default => "default",
            Self::Identity => "identity",
        }
    }
}

impl fmt::Display for PatternSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two tables that govern one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternLayers {
    overrides: PatternTable,
    defaults: PatternTable,
}

impl PatternLayers {
    pub fn new(defaults: PatternTable, overrides: PatternTable) -> Self {
        Self {
            overrides,
            defaults,
        }
    }

    /// Built-in defaults for `mode` under the given overlay.
    pub fn for_mode(mode: PathMode, overrides: PatternTable) -> Self {
        Self::new(PatternTable::defaults(mode).clone(), overrides)
    }

    /// Return the pattern governing `key` and where it came from.
    pub fn lookup<'a>(&'a self, key: &'a str) -> (&'a str, PatternSource) {
        PatternSource::ORDER
            .into_iter()
            .find_map(|source| {
                let hit = match source {
                    PatternSource::Override => self.overrides.get(key),
                    PatternSource::Default => self.defaults.get(key),
                    PatternSource::Identity => Some(key),
                };
                hit.map(|pattern| (pattern, source))
            })
            .unwrap_or((key, PatternSource::Identity))
    }

    /// Union of default and override keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.defaults.keys().chain(self.overrides.keys()).collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    pub fn overrides(&self) -> &PatternTable {
        &self.overrides
    }

    pub fn defaults(&self) -> &PatternTable {
        &self.defaults
    }
}

// ── Variable expansion ───────────────────────────────────────────────────────

/// Replace each `{name}` in `pattern` with its bound value.
///
/// The pattern is scanned once, left to right; substituted values are copied
/// to the output and never rescanned, so a value that itself looks like
/// `{other}` stays literal. Tokens with no binding are copied verbatim.
/// Matching is plain text: no character in a name or value is special.
pub fn expand<I, K, V>(pattern: &str, bindings: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let bindings: Vec<(K, V)> = bindings.into_iter().collect();
    if bindings.is_empty() || !pattern.contains('{') {
        return pattern.to_string();
    }

    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        // Longest `{name}` token starting here; names may contain braces.
        let hit = bindings
            .iter()
            .filter_map(|(k, v)| {
                let name = k.as_ref();
                after
                    .strip_prefix(name)?
                    .strip_prefix('}')
                    .map(|_| (name.len(), v.as_ref()))
            })
            .max_by_key(|(len, _)| *len);
        match hit {
            Some((len, value)) => {
                out.push_str(value);
                rest = &after[len + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    out
}

// ── Resolution result ────────────────────────────────────────────────────────

/// A resolved path plus what it took to produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub key: String,
    pub mode: PathMode,
    pub pattern: String,
    pub source: PatternSource,
    pub path: String,
    /// `{var}` tokens still present in `path`.
    pub unresolved: Vec<String>,
}

impl Resolution {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Human-readable warning, if any tokens were left unresolved.
    pub fn warning(&self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        let vars = self
            .unresolved
            .iter()
            .map(|v| format!("{{{v}}}"))
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!(
            "{} key '{}' resolved to '{}' with unresolved {}",
            self.mode, self.key, self.path, vars
        ))
    }
}

// ── PathResolver ─────────────────────────────────────────────────────────────

/// Resolves semantic keys to packages under one base package.
///
/// Built once per invocation and read-only afterwards; every method takes
/// `&self`, so a single resolver can serve a whole `make:crud` run.
#[derive(Debug, Clone)]
pub struct PathResolver {
    base_package: String,
    hexagonal: PatternLayers,
    crud: PatternLayers,
    diagnostics: bool,
}

impl PathResolver {
    /// Resolver over the built-in tables with the given overlays.
    pub fn new(
        base_package: impl Into<String>,
        paths: PatternTable,
        crud: PatternTable,
    ) -> Self {
        Self::with_layers(
            base_package,
            PatternLayers::for_mode(PathMode::Hexagonal, paths),
            PatternLayers::for_mode(PathMode::Crud, crud),
        )
    }

    /// Resolver over explicit tables, defaults included.
    pub fn with_layers(
        base_package: impl Into<String>,
        hexagonal: PatternLayers,
        crud: PatternLayers,
    ) -> Self {
        Self {
            base_package: base_package.into(),
            hexagonal,
            crud,
            diagnostics: false,
        }
    }

    /// Emit a `warn!` event whenever a resolved path keeps `{var}` tokens.
    /// Return values are unaffected.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    pub fn base_package(&self) -> &str {
        &self.base_package
    }

    pub fn layers(&self, mode: PathMode) -> &PatternLayers {
        match mode {
            PathMode::Hexagonal => &self.hexagonal,
            PathMode::Crud => &self.crud,
        }
    }

    /// The pattern `key` resolves to in `mode`, before expansion.
    pub fn pattern<'a>(&'a self, mode: PathMode, key: &'a str) -> (&'a str, PatternSource) {
        self.layers(mode).lookup(key)
    }

    /// Hexagonal resolve binding only `{aggregate}`.
    pub fn resolve(&self, key: &str, aggregate: &str) -> String {
        self.resolve_with(key, [("aggregate", aggregate)])
    }

    /// Hexagonal resolve with arbitrary bindings (`{category}` for adapters, …).
    pub fn resolve_with<I, K, V>(&self, key: &str, vars: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.finish(self.resolve_detailed(PathMode::Hexagonal, key, vars))
    }

    /// Hexagonal resolve with no bindings, for keys like `cqrs` or `mediator`.
    pub fn resolve_static(&self, key: &str) -> String {
        self.resolve_with(key, std::iter::empty::<(&str, &str)>())
    }

    /// CRUD resolve binding only `{name}`.
    pub fn resolve_crud(&self, key: &str, name: &str) -> String {
        self.finish(self.resolve_detailed(PathMode::Crud, key, [("name", name)]))
    }

    /// Full resolution record for `key` in `mode`.
    pub fn resolve_detailed<I, K, V>(&self, mode: PathMode, key: &str, vars: I) -> Resolution
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let (pattern, source) = self.pattern(mode, key);
        let expanded = expand(pattern, vars);
        let path = self.compose(&expanded);
        let unresolved = placeholders(&expanded)
            .into_iter()
            .map(str::to_string)
            .collect();

        trace!(%mode, key, pattern, %source, path = %path, "resolved");

        Resolution {
            key: key.to_string(),
            mode,
            pattern: pattern.to_string(),
            source,
            path,
            unresolved,
        }
    }

    /// Fill the hexagonal `{{PACKAGE_*}}` tokens for `aggregate`.
    pub fn populate_package_placeholders(&self, aggregate: &str, out: &mut PlaceholderBatch) {
        out.insert(tokens::PACKAGE_MODEL, self.resolve("model", aggregate));
        out.insert(tokens::PACKAGE_PORT_OUT, self.resolve("port-out", aggregate));
        out.insert(tokens::PACKAGE_PORT_IN, self.resolve("port-in", aggregate));
        out.insert(tokens::PACKAGE_CQRS, self.resolve_static("cqrs"));
        out.insert(tokens::PACKAGE_MEDIATOR, self.resolve_static("mediator"));
        out.insert(tokens::PACKAGE_EVENT, self.resolve("event", aggregate));
        out.insert(tokens::PACKAGE_DOMAIN_ROOT, self.resolve_static("domain-root"));
    }

    /// Fill the `{{PACKAGE_CRUD_*}}` tokens for the lowercase entity `name`.
    pub fn populate_crud_package_placeholders(&self, name: &str, out: &mut PlaceholderBatch) {
        out.insert(tokens::PACKAGE_CRUD_MODEL, self.resolve_crud("model", name));
        out.insert(tokens::PACKAGE_CRUD_ENTITY, self.resolve_crud("entity", name));
        out.insert(
            tokens::PACKAGE_CRUD_REPOSITORY,
            self.resolve_crud("repository", name),
        );
        out.insert(tokens::PACKAGE_CRUD_SERVICE, self.resolve_crud("service", name));
        out.insert(tokens::PACKAGE_CRUD_MAPPER, self.resolve_crud("mapper", name));
    }

    fn compose(&self, expanded: &str) -> String {
        format!("{}.{}", self.base_package, expanded)
    }

    fn finish(&self, resolution: Resolution) -> String {
        if self.diagnostics {
            if let Some(message) = resolution.warning() {
                warn!("{message}");
            }
        }
        resolution.path
    }
}

/// Convenience for building a binding map at call sites that need several
/// variables at once.
pub fn bindings<const N: usize>(pairs: [(&str, &str); N]) -> HashMap<String, String> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "com.example.app";

    fn resolver() -> PathResolver {
        PathResolver::new(BASE, PatternTable::new(), PatternTable::new())
    }

    fn with_paths(pairs: &[(&str, &str)]) -> PathResolver {
        PathResolver::new(
            BASE,
            PatternTable::from_pairs(pairs.iter().copied()),
            PatternTable::new(),
        )
    }

    // ── lookup ────────────────────────────────────────────────────────────

    #[test]
    fn default_command_pattern() {
        assert_eq!(
            resolver().resolve("command", "order"),
            "com.example.app.domain.order.command"
        );
    }

    #[test]
    fn override_takes_precedence() {
        let r = with_paths(&[("command", "app.commands.{aggregate}")]);
        assert_eq!(
            r.resolve("command", "order"),
            "com.example.app.app.commands.order"
        );
        assert_eq!(
            r.pattern(PathMode::Hexagonal, "command"),
            ("app.commands.{aggregate}", PatternSource::Override)
        );
    }

    #[test]
    fn override_never_consults_default_even_without_tokens() {
        let r = with_paths(&[("model", "shared")]);
        assert_eq!(r.resolve("model", "order"), "com.example.app.shared");
    }

    #[test]
    fn unknown_key_passes_through() {
        let r = resolver();
        assert_eq!(
            r.resolve("totally-unknown-key", "order"),
            "com.example.app.totally-unknown-key"
        );
        assert_eq!(
            r.pattern(PathMode::Hexagonal, "totally-unknown-key").1,
            PatternSource::Identity
        );
    }

    #[test]
    fn custom_key_only_in_overlay_works() {
        let r = with_paths(&[("projection", "read.{aggregate}.projection")]);
        assert_eq!(
            r.resolve("projection", "order"),
            "com.example.app.read.order.projection"
        );
    }

    #[test]
    fn crud_controller_default() {
        let r = PathResolver::new("com.app", PatternTable::new(), PatternTable::new());
        assert_eq!(r.resolve_crud("controller", "user"), "com.app.user.web");
    }

    #[test]
    fn crud_override_is_mode_scoped() {
        let r = PathResolver::new(
            BASE,
            PatternTable::new(),
            PatternTable::from_pairs([("model", "{name}.domain")]),
        );
        assert_eq!(r.resolve_crud("model", "user"), "com.example.app.user.domain");
        assert_eq!(r.resolve("model", "user"), "com.example.app.domain.user.model");
    }

    // ── expansion ─────────────────────────────────────────────────────────

    #[test]
    fn adapter_uses_category_and_aggregate() {
        let r = resolver();
        let vars = bindings([("aggregate", "order"), ("category", "messaging")]);
        assert_eq!(
            r.resolve_with("adapter", &vars),
            "com.example.app.infrastructure.messaging.order"
        );
    }

    #[test]
    fn expansion_is_single_pass() {
        let out = expand(
            "infrastructure.{category}.{aggregate}",
            [("aggregate", "{category}"), ("category", "billing")],
        );
        assert_eq!(out, "infrastructure.billing.{category}");

        // Binding order does not matter.
        let out = expand(
            "infrastructure.{category}.{aggregate}",
            [("category", "billing"), ("aggregate", "{category}")],
        );
        assert_eq!(out, "infrastructure.billing.{category}");
    }

    #[test]
    fn resolve_with_does_not_rescan_bound_values() {
        let r = resolver();
        let vars = bindings([("aggregate", "{category}"), ("category", "billing")]);
        for _ in 0..8 {
            assert_eq!(
                r.resolve_with("adapter", &vars),
                "com.example.app.infrastructure.billing.{category}"
            );
        }
    }

    #[test]
    fn names_are_matched_literally() {
        assert_eq!(expand("{a}b}", [("a}b", "X")]), "X");
        assert_eq!(expand("{a}b}", [("a", "1"), ("a}b", "X")]), "X");
        assert_eq!(expand("{a}b}", [("a", "1")]), "1b}");
        assert_eq!(expand("x.{a.b}", [("a.b", "y")]), "x.y");
    }

    #[test]
    fn unbound_placeholders_are_left_verbatim() {
        let r = resolver();
        assert_eq!(
            r.resolve("adapter", "order"),
            "com.example.app.infrastructure.{category}.order"
        );
    }

    #[test]
    fn resolve_static_equals_empty_bindings() {
        let r = resolver();
        for key in ["cqrs", "mediator", "domain-root", "model", "adapter", "nope"] {
            assert_eq!(
                r.resolve_static(key),
                r.resolve_with(key, HashMap::<String, String>::new()),
                "key {key}"
            );
        }
        assert_eq!(r.resolve_static("model"), "com.example.app.domain.{aggregate}.model");
    }

    #[test]
    fn values_are_not_treated_as_regex() {
        assert_eq!(expand("a.{aggregate}", [("aggregate", "$1.*")]), "a.$1.*");
        assert_eq!(expand("a.{x.y}", [("x.y", "ok")]), "a.ok");
    }

    #[test]
    fn repeated_tokens_all_replaced() {
        assert_eq!(
            expand("{name}.{name}", [("name", "user")]),
            "user.user"
        );
    }

    #[test]
    fn double_braces_match_str_replace_semantics() {
        assert_eq!(expand("{{aggregate}}", [("aggregate", "order")]), "{order}");
        assert_eq!(expand("{ {aggregate", [("aggregate", "order")]), "{ {aggregate");
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn every_path_starts_with_base() {
        let r = resolver();
        let prefix = format!("{BASE}.");
        for key in r.layers(PathMode::Hexagonal).keys() {
            assert!(r.resolve(key, "order").starts_with(&prefix));
        }
        for key in r.layers(PathMode::Crud).keys() {
            assert!(r.resolve_crud(key, "user").starts_with(&prefix));
        }
    }

    #[test]
    fn base_package_is_not_expanded() {
        let r = PathResolver::new("com.{aggregate}", PatternTable::new(), PatternTable::new());
        assert_eq!(r.resolve("model", "order"), "com.{aggregate}.domain.order.model");
    }

    // ── detailed ──────────────────────────────────────────────────────────

    #[test]
    fn detailed_reports_unresolved() {
        let r = resolver();
        let res = r.resolve_detailed(PathMode::Hexagonal, "adapter", [("aggregate", "order")]);
        assert_eq!(res.source, PatternSource::Default);
        assert_eq!(res.unresolved, vec!["category".to_string()]);
        assert!(res.warning().unwrap().contains("{category}"));

        let res = r.resolve_detailed(PathMode::Hexagonal, "model", [("aggregate", "order")]);
        assert!(res.is_complete());
        assert!(res.warning().is_none());
    }

    #[test]
    fn diagnostics_do_not_change_results() {
        let quiet = resolver();
        let loud = resolver().with_diagnostics(true);
        assert_eq!(quiet.resolve_static("model"), loud.resolve_static("model"));
    }

    // ── batches ───────────────────────────────────────────────────────────

    #[test]
    fn populate_hexagonal_batch() {
        let r = resolver();
        let mut batch = PlaceholderBatch::new();
        r.populate_package_placeholders("order", &mut batch);

        assert_eq!(batch.len(), 7);
        assert_eq!(
            batch.get(tokens::PACKAGE_PORT_IN),
            Some("com.example.app.domain.order.port.in")
        );
        assert_eq!(batch.get(tokens::PACKAGE_CQRS), Some("com.example.app.domain.cqrs"));
        assert_eq!(
            batch.get(tokens::PACKAGE_MEDIATOR),
            Some("com.example.app.infrastructure.mediator")
        );
        assert_eq!(batch.get(tokens::PACKAGE_DOMAIN_ROOT), Some("com.example.app.domain"));
    }

    #[test]
    fn populate_is_idempotent() {
        let r = resolver();
        let mut once = PlaceholderBatch::new();
        r.populate_package_placeholders("order", &mut once);

        let mut twice = PlaceholderBatch::new();
        r.populate_package_placeholders("order", &mut twice);
        r.populate_package_placeholders("order", &mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn populate_preserves_existing_tokens() {
        let r = resolver();
        let mut batch = PlaceholderBatch::new();
        batch.insert(tokens::BASE_PACKAGE, BASE);
        r.populate_package_placeholders("order", &mut batch);
        assert_eq!(batch.get(tokens::BASE_PACKAGE), Some(BASE));
        assert_eq!(batch.len(), 8);
    }

    #[test]
    fn populate_crud_batch_sets_five_tokens() {
        let r = resolver();
        let mut batch = PlaceholderBatch::new();
        r.populate_crud_package_placeholders("product", &mut batch);

        let expected = [
            (tokens::PACKAGE_CRUD_MODEL, "model"),
            (tokens::PACKAGE_CRUD_ENTITY, "entity"),
            (tokens::PACKAGE_CRUD_REPOSITORY, "repository"),
            (tokens::PACKAGE_CRUD_SERVICE, "service"),
            (tokens::PACKAGE_CRUD_MAPPER, "mapper"),
        ];
        assert_eq!(batch.len(), expected.len());
        for (token, category) in expected {
            let value = batch.get(token).unwrap();
            assert!(value.ends_with(&format!(".product.{category}")), "{token} = {value}");
        }
    }
}
