use crate::domain::{
    error::DomainError,
    pattern::{PathMode, PatternTable},
};

/// Centralized boundary validation.
///
/// The resolver accepts any string; everything that has to be a legal Java
/// name is checked here before it reaches it.
pub struct DomainValidator;

impl DomainValidator {
    /// A single Java identifier: letter or `_` first, then letters, digits, `_`.
    pub fn validate_identifier(kind: &'static str, value: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidIdentifier {
            kind,
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = value.chars();
        let Some(first) = chars.next() else {
            return Err(invalid("must not be empty"));
        };
        if !(first.is_alphabetic() || first == '_') {
            return Err(invalid("must start with a letter or '_'"));
        }
        if let Some(bad) = chars.find(|c| !(c.is_alphanumeric() || *c == '_')) {
            return Err(invalid(&format!("contains '{bad}'")));
        }
        Ok(())
    }

    /// Dotted sequence of identifiers, e.g. `com.example.app`.
    pub fn validate_base_package(value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::MissingBasePackage);
        }
        for segment in value.split('.') {
            Self::validate_identifier("package segment", segment).map_err(|e| {
                DomainError::InvalidBasePackage {
                    value: value.to_string(),
                    reason: match e {
                        DomainError::InvalidIdentifier { value, .. } if value.is_empty() => {
                            "empty segment".to_string()
                        }
                        DomainError::InvalidIdentifier { value, reason, .. } => {
                            format!("segment '{value}' {reason}")
                        }
                        other => other.to_string(),
                    },
                }
            })?;
        }
        Ok(())
    }

    /// Every pattern in an override table must have some text.
    pub fn validate_pattern_table(mode: PathMode, table: &PatternTable) -> Result<(), DomainError> {
        for (key, pattern) in table.iter() {
            if key.trim().is_empty() {
                return Err(DomainError::InvalidPattern {
                    key: key.to_string(),
                    reason: format!("empty key in [{}]", mode.config_section()),
                });
            }
            if pattern.trim().is_empty() {
                return Err(DomainError::InvalidPattern {
                    key: key.to_string(),
                    reason: format!("empty pattern in [{}]", mode.config_section()),
                });
            }
        }
        Ok(())
    }
}
