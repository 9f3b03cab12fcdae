//! Permission catalog
//!
//! A [`CatalogDocument`] is validated once into an immutable
//! [`PermissionCatalog`] and published through a [`CatalogHandle`]. Requests
//! read a snapshot; republishing swaps the whole catalog.

use super::matcher::UrlPatternMatcher;
use crate::config::CatalogConfig;
use crate::error_ext::ErrorContext;
use arc_swap::ArcSwapOption;
use libra_domain::{CatalogDocument, Error, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// A validated permission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permission {
    /// Unique name
    pub name: String,
    /// Upper-cased HTTP method
    pub method: String,
    /// URL pattern
    pub pattern: String,
    /// Description
    pub description: String,
}

impl Permission {
    /// Whether this permission covers `method` on `path`
    pub fn grants(&self, path: &str, method: &str) -> bool {
        self.method.eq_ignore_ascii_case(method) && UrlPatternMatcher::matches(path, &self.pattern)
    }
}

/// A validated role with its permissions resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    /// Name as declared
    pub name: String,
    /// Description
    pub description: String,
    /// Granted permissions
    pub permissions: Vec<Arc<Permission>>,
}

/// Immutable role → permission table
#[derive(Debug, Default)]
pub struct PermissionCatalog {
    permissions: HashMap<String, Arc<Permission>>,
    // Keyed by upper-cased role name
    roles: HashMap<String, Role>,
}

impl PermissionCatalog {
    /// Validate a document into a catalog
    ///
    /// Duplicate permission or role names, roles referencing unknown
    /// permissions, and permissions without a method or an absolute URL
    /// pattern are configuration errors.
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        let mut permissions = HashMap::with_capacity(document.permissions.len());
        for definition in document.permissions {
            let method = definition.method.trim().to_ascii_uppercase();
            if method.is_empty() {
                return Err(Error::configuration(format!(
                    "Permission '{}' has no HTTP method",
                    definition.name
                )));
            }
            if !definition.url.starts_with('/') {
                return Err(Error::configuration(format!(
                    "Permission '{}' has a non-absolute URL pattern '{}'",
                    definition.name, definition.url
                )));
            }

            let permission = Permission {
                name: definition.name.clone(),
                method,
                pattern: definition.url,
                description: definition.description,
            };
            match permissions.entry(definition.name) {
                Entry::Occupied(entry) => {
                    return Err(Error::configuration(format!(
                        "Duplicate permission '{}'",
                        entry.key()
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(Arc::new(permission));
                }
            }
        }

        let mut roles = HashMap::with_capacity(document.roles.len());
        for definition in document.roles {
            let granted = definition
                .permissions
                .iter()
                .map(|name| {
                    permissions.get(name).cloned().ok_or_else(|| {
                        Error::configuration(format!(
                            "Role '{}' references unknown permission '{}'",
                            definition.name, name
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            let role = Role {
                name: definition.name.clone(),
                description: definition.description,
                permissions: granted,
            };
            match roles.entry(definition.name.to_ascii_uppercase()) {
                Entry::Occupied(_) => {
                    return Err(Error::configuration(format!(
                        "Duplicate role '{}'",
                        definition.name
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(role);
                }
            }
        }

        Ok(Self { permissions, roles })
    }

    /// Look up a role, ignoring case
    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.get(&name.to_ascii_uppercase())
    }

    /// Look up a permission by exact name
    pub fn permission(&self, name: &str) -> Option<&Permission> {
        self.permissions.get(name).map(Arc::as_ref)
    }

    /// Whether `role` may call `method` on `path`; unknown roles are denied
    pub fn is_allowed(&self, role: &str, path: &str, method: &str) -> bool {
        self.role(role).is_some_and(|role| {
            role.permissions
                .iter()
                .any(|permission| permission.grants(path, method))
        })
    }

    /// Number of roles
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// Number of permissions
    pub fn permission_count(&self) -> usize {
        self.permissions.len()
    }
}

/// Atomic publication point for the catalog
///
/// Empty until [`CatalogHandle::publish`] is called.
#[derive(Debug, Default)]
pub struct CatalogHandle {
    current: ArcSwapOption<PermissionCatalog>,
}

impl CatalogHandle {
    /// Create an unpublished handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle already serving `catalog`
    pub fn published(catalog: PermissionCatalog) -> Self {
        let handle = Self::new();
        handle.publish(catalog);
        handle
    }

    /// Replace the served catalog
    pub fn publish(&self, catalog: PermissionCatalog) {
        info!(
            roles = catalog.role_count(),
            permissions = catalog.permission_count(),
            "Permission catalog published"
        );
        self.current.store(Some(Arc::new(catalog)));
    }

    /// The catalog currently served, if any
    pub fn snapshot(&self) -> Option<Arc<PermissionCatalog>> {
        self.current.load_full()
    }

    /// Whether a catalog has been published
    pub fn is_ready(&self) -> bool {
        self.current.load().is_some()
    }
}

/// Reads catalog documents from disk and configuration
pub struct CatalogLoader;

impl CatalogLoader {
    /// Read a TOML or JSON document; `.json` files are parsed as JSON
    pub fn load_document(path: &Path) -> Result<CatalogDocument> {
        let content = std::fs::read_to_string(path)
            .io_context(format!("Failed to read catalog file {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(&content)
                .config_context(format!("Invalid catalog JSON in {}", path.display()))
        } else {
            toml::from_str(&content)
                .config_context(format!("Invalid catalog TOML in {}", path.display()))
        }
    }

    /// Merge the configured file and inline entries, then validate
    pub fn from_config(config: &CatalogConfig) -> Result<PermissionCatalog> {
        let mut document = match &config.path {
            Some(path) => Self::load_document(path)?,
            None => CatalogDocument::default(),
        };
        document.extend(config.inline_document());

        if document.is_empty() {
            warn!("Permission catalog is empty; every authenticated request will be denied");
        }
        PermissionCatalog::from_document(document)
    }
}
