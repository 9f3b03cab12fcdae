//! Permission catalog source configuration

use libra_domain::{CatalogDocument, PermissionDefinition, RoleDefinition};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the permission catalog comes from
///
/// Entries from `path` and inline entries are merged before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// TOML or JSON catalog document
    pub path: Option<PathBuf>,

    /// Inline permissions
    #[serde(default)]
    pub permissions: Vec<PermissionDefinition>,

    /// Inline roles
    #[serde(default)]
    pub roles: Vec<RoleDefinition>,
}

impl CatalogConfig {
    /// Inline declarations as a document
    pub fn inline_document(&self) -> CatalogDocument {
        CatalogDocument {
            permissions: self.permissions.clone(),
            roles: self.roles.clone(),
        }
    }
}
