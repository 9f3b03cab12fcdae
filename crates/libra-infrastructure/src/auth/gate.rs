//! Authorization decisions

use super::catalog::CatalogHandle;
use libra_domain::AuthRejection;
use std::sync::Arc;

/// Decides whether a role may call a method on a path
///
/// Fails closed: an unknown role or an unpublished catalog is a denial.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    catalog: Arc<CatalogHandle>,
}

impl AuthorizationGate {
    /// Create a gate reading from `catalog`
    pub fn new(catalog: Arc<CatalogHandle>) -> Self {
        Self { catalog }
    }

    /// Whether `role` may call `method` on `path`
    pub fn is_allowed(&self, role: &str, path: &str, method: &str) -> bool {
        self.check(role, path, method).is_ok()
    }

    /// Like [`AuthorizationGate::is_allowed`] but says why a request is denied
    pub fn check(&self, role: &str, path: &str, method: &str) -> Result<(), AuthRejection> {
        let catalog = self
            .catalog
            .snapshot()
            .ok_or(AuthRejection::CatalogNotReady)?;
        if catalog.is_allowed(role, path, method) {
            Ok(())
        } else {
            Err(AuthRejection::AccessDenied)
        }
    }

    /// The handle this gate reads from
    pub fn catalog(&self) -> &Arc<CatalogHandle> {
        &self.catalog
    }
}
