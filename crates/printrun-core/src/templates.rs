//! Garment template catalog.
//!
//! A [`TemplateRegistry`] is built once at process start from YAML (the
//! bundled `config/templates.yaml` or an operator-supplied override) and is
//! read-only afterwards. Malformed catalogs are rejected at load time.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const BUNDLED_TEMPLATES: &str = include_str!("../../../config/templates.yaml");

/// One color of a garment and the remote variant ids for its sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGroup {
    pub color_name: String,
    pub color_code: String,
    /// Remote variant ids ordered smallest size first. Position determines
    /// the price tier, so this order is part of the catalog contract.
    pub size_variant_ids: Vec<i64>,
}

/// A sellable garment definition on the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Registry key used by callers, e.g. `"tshirt"`.
    pub key: String,
    pub remote_product_id: i64,
    /// Appended to the design name to form the listing title.
    pub name_suffix: String,
    pub base_price: Decimal,
    #[serde(default)]
    pub tier2_price: Option<Decimal>,
    #[serde(default)]
    pub tier3_price: Option<Decimal>,
    pub color_groups: Vec<ColorGroup>,
}

impl Template {
    /// Total number of variants [`crate::expand`] produces for this template.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.color_groups
            .iter()
            .map(|g| g.size_variant_ids.len())
            .sum()
    }

    /// Listing title for a design published on this garment.
    #[must_use]
    pub fn listing_title(&self, design_name: &str) -> String {
        format!("{} {}", design_name.trim(), self.name_suffix.trim())
    }
}

#[derive(Debug, Deserialize)]
struct TemplatesFile {
    templates: Vec<Template>,
}

/// Immutable lookup table of garment templates keyed by product type.
///
/// Iteration order is catalog file order; that order is what "all known
/// types" expands to.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    /// Builds a registry from already-parsed templates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the catalog is malformed.
    pub fn from_templates(templates: Vec<Template>) -> Result<Self, ConfigError> {
        validate_templates(&templates)?;
        Ok(Self { templates })
    }

    /// Returns the template registered under `key`. An unknown key is not an
    /// error; callers skip it.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Load and validate the template catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_registry(path: &Path) -> Result<TemplateRegistry, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TemplatesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_registry(&content)
}

/// Load the catalog compiled into the binary from `config/templates.yaml`.
///
/// # Errors
///
/// Returns `ConfigError` if the bundled catalog fails to parse or validate.
pub fn load_bundled_registry() -> Result<TemplateRegistry, ConfigError> {
    parse_registry(BUNDLED_TEMPLATES)
}

fn parse_registry(content: &str) -> Result<TemplateRegistry, ConfigError> {
    let file: TemplatesFile = serde_yaml::from_str(content)?;
    TemplateRegistry::from_templates(file.templates)
}

fn validate_templates(templates: &[Template]) -> Result<(), ConfigError> {
    let mut seen_keys = HashSet::new();

    for template in templates {
        let key = template.key.trim();
        if key.is_empty() {
            return Err(ConfigError::Validation(
                "template key must be non-empty".to_string(),
            ));
        }
        if key != template.key {
            return Err(ConfigError::Validation(format!(
                "template key '{}' has surrounding whitespace",
                template.key
            )));
        }
        if !seen_keys.insert(key.to_string()) {
            return Err(ConfigError::Validation(format!(
                "duplicate template key: '{key}'"
            )));
        }
        if template.name_suffix.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "template '{key}' has an empty name_suffix"
            )));
        }
        if template.base_price <= Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "template '{key}' has non-positive base_price {}",
                template.base_price
            )));
        }
        if template.color_groups.is_empty() {
            return Err(ConfigError::Validation(format!(
                "template '{key}' has no color groups"
            )));
        }

        let mut seen_variants = HashSet::new();
        for group in &template.color_groups {
            if group.size_variant_ids.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "template '{key}' color '{}' has no size variants",
                    group.color_name
                )));
            }
            for id in &group.size_variant_ids {
                if !seen_variants.insert(*id) {
                    return Err(ConfigError::Validation(format!(
                        "template '{key}' lists variant id {id} more than once"
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "templates_test.rs"]
mod tests;
