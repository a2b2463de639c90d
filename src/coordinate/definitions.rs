//! Registry of coordinate reference systems known by code
//!
//! Definitions are embedded from `crs_definitions.toml` and parsed once.

use std::collections::HashMap;
use lazy_static::lazy_static;
use log::warn;

use crate::geojson::errors::{GeoError, GeoResult};

lazy_static! {
    static ref CRS_DEFINITIONS: CrsDefinitions = {
        let content = include_str!("../../crs_definitions.toml");
        CrsDefinitions::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse CRS definitions: {}", e);
            CrsDefinitions::default()
        })
    };
}

/// A named CRS and its PROJ parameter string
#[derive(Debug, Clone, PartialEq)]
pub struct CrsDefinition {
    /// Normalized code, e.g. `EPSG:2229`
    pub code: String,
    /// Human readable name
    pub name: String,
    /// PROJ parameter string
    pub proj: String,
}

/// Container for CRS definitions and code aliases
#[derive(Debug, Default)]
pub struct CrsDefinitions {
    definitions: HashMap<String, CrsDefinition>,
    aliases: HashMap<String, String>,
}

impl CrsDefinitions {
    /// Parse definitions from a TOML string
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| GeoError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut defs = CrsDefinitions::default();

        if let Some(table) = toml_value.get("crs").and_then(|v| v.as_table()) {
            for (code, entry) in table {
                let proj = entry.get("proj").and_then(|v| v.as_str()).ok_or_else(|| {
                    GeoError::ConfigError(format!("CRS '{}' has no proj string", code))
                })?;
                let name = entry.get("name")
                    .and_then(|v| v.as_str())
                    .unwrap_or(code.as_str());

                let code = normalize_code(code);
                defs.definitions.insert(code.clone(), CrsDefinition {
                    code,
                    name: name.to_string(),
                    proj: proj.to_string(),
                });
            }
        }

        if let Some(table) = toml_value.get("aliases").and_then(|v| v.as_table()) {
            for (alias, target) in table {
                if let Some(target) = target.as_str() {
                    defs.aliases.insert(normalize_code(alias), normalize_code(target));
                }
            }
        }

        Ok(defs)
    }

    /// Find a definition by code or alias (case insensitive, bare numbers mean EPSG)
    pub fn lookup(&self, code: &str) -> Option<&CrsDefinition> {
        let code = normalize_code(code);
        let resolved = self.aliases.get(&code).unwrap_or(&code);
        self.definitions.get(resolved)
    }

    /// All known codes, sorted
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.definitions.keys().map(|k| k.as_str()).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// The embedded registry
pub fn builtin() -> &'static CrsDefinitions {
    &CRS_DEFINITIONS
}

fn normalize_code(code: &str) -> String {
    let code = code.trim().to_uppercase();
    if !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()) {
        format!("EPSG:{}", code)
    } else {
        code
    }
}
