//! Project path configuration: base package plus per-mode overlays.
//!
//! The on-disk format belongs to the adapters; this is the shape they fill:
//!
//! ```toml
//! base-package = "com.example.app"
//!
//! [paths]
//! command = "app.commands.{aggregate}"
//!
//! [crud]
//! controller = "{name}.api"
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    DomainValidator, error::DomainError, pattern::PathMode, pattern::PatternTable,
    resolver::PathResolver,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PathConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_package: Option<String>,

    /// Hexagonal overrides.
    #[serde(default, skip_serializing_if = "PatternTable::is_empty")]
    pub paths: PatternTable,

    /// CRUD overrides.
    #[serde(default, skip_serializing_if = "PatternTable::is_empty")]
    pub crud: PatternTable,
}

impl PathConfig {
    pub fn paths(&self) -> &PatternTable {
        &self.paths
    }

    pub fn crud(&self) -> &PatternTable {
        &self.crud
    }

    pub fn overrides(&self, mode: PathMode) -> &PatternTable {
        match mode {
            PathMode::Hexagonal => &self.paths,
            PathMode::Crud => &self.crud,
        }
    }

    /// Check the overlays and, if set, the base package.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(base) = &self.base_package {
            DomainValidator::validate_base_package(base)?;
        }
        DomainValidator::validate_pattern_table(PathMode::Hexagonal, &self.paths)?;
        DomainValidator::validate_pattern_table(PathMode::Crud, &self.crud)?;
        Ok(())
    }

    /// Build the resolver for this invocation.
    ///
    /// `base_override` (the `--base-package` flag) wins over the file value.
    /// With neither, there is nothing to prefix paths with and this fails.
    pub fn into_resolver(self, base_override: Option<&str>) -> Result<PathResolver, DomainError> {
        self.validate()?;

        let base = match base_override {
            Some(flag) => flag.to_string(),
            None => self.base_package.ok_or(DomainError::MissingBasePackage)?,
        };
        DomainValidator::validate_base_package(&base)?;

        debug!(
            base_package = %base,
            path_overrides = self.paths.len(),
            crud_overrides = self.crud.len(),
            "Path resolver configured"
        );

        Ok(PathResolver::new(base, self.paths, self.crud))
    }
}
