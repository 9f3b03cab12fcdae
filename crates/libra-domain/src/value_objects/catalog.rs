//! Permission catalog declarations
//!
//! The declaration format operators edit. It is loaded and validated into
//! an immutable in-memory catalog by the infrastructure layer.

use serde::{Deserialize, Serialize};

/// One permission: an HTTP method plus a URL pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDefinition {
    /// Unique permission name, e.g. `BOOK_READ`
    pub name: String,
    /// HTTP method, compared case-insensitively
    pub method: String,
    /// URL pattern in one of the supported dialects
    pub url: String,
    /// Human readable description
    #[serde(default)]
    pub description: String,
}

impl PermissionDefinition {
    /// Create a new permission definition
    pub fn new(
        name: impl Into<String>,
        method: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            method: method.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

/// One role and the names of the permissions it grants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// Unique role name, e.g. `USER`
    pub name: String,
    /// Human readable description
    #[serde(default)]
    pub description: String,
    /// Names of granted permissions
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl RoleDefinition {
    /// Create a new role definition
    pub fn new<I, S>(name: impl Into<String>, description: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Complete permission and role table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// All declared permissions
    #[serde(default)]
    pub permissions: Vec<PermissionDefinition>,
    /// All declared roles
    #[serde(default)]
    pub roles: Vec<RoleDefinition>,
}

impl CatalogDocument {
    /// Whether the document declares nothing
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty() && self.roles.is_empty()
    }

    /// Append another document's declarations
    pub fn extend(&mut self, other: CatalogDocument) {
        self.permissions.extend(other.permissions);
        self.roles.extend(other.roles);
    }
}
