//! Environment configuration

use crate::catalog::{Catalog, CatalogError};
use std::path::PathBuf;

/// Submission endpoint address
pub const SUBMIT_URL_VAR: &str = "VALENTINE_SUBMIT_URL";
/// Optional JSON catalog overriding the built-in lists
pub const CATALOG_VAR: &str = "VALENTINE_CATALOG";
/// Where the terminal front end writes its logs
pub const LOG_FILE_VAR: &str = "VALENTINE_LOG_FILE";

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// `None` when absent or blank
    pub submit_url: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub log_file: PathBuf,
}

impl PickerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let log_file = non_blank(LOG_FILE_VAR).map_or_else(
            || {
                let home = lookup("HOME").unwrap_or_else(|| "/tmp".to_string());
                PathBuf::from(format!("{home}/.valentine-planner/planner.log"))
            },
            PathBuf::from,
        );

        Self {
            submit_url: non_blank(SUBMIT_URL_VAR),
            catalog_path: non_blank(CATALOG_VAR).map(PathBuf::from),
            log_file,
        }
    }

    #[must_use]
    pub fn endpoint_configured(&self) -> bool {
        self.submit_url.is_some()
    }

    /// The catalog file if one is configured, otherwise the built-in lists
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogError`] from the configured file.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_json_file(path),
            None => Ok(Catalog::builtin()),
        }
    }
}
