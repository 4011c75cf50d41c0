// antiphon-authz/src/error.rs
// ============================================================================
// Module: Antiphon Access Errors
// Description: Denial taxonomy for the composed authorization check.
// Purpose: Keep permission denials distinguishable from tenant denials.
// Dependencies: antiphon-catalog, thiserror
// ============================================================================

//! ## Overview
//! The two denial kinds demand different client remediation: a permission
//! denial is recoverable by an administrator granting a key, while a
//! tenant-boundary denial is not — it indicates either a bug or a forged
//! identifier, and callers typically map it to a generic not-found response
//! to avoid leaking tenant existence. Expected denials on the hot path stay
//! boolean; this error type serves the composed [`crate::authorize`] entry
//! point and `?`-style handlers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use antiphon_catalog::PermissionKey;
use thiserror::Error;

// ============================================================================
// SECTION: Access Errors
// ============================================================================

/// Denial reasons surfaced by the composed authorization check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Role and grant set do not cover the required permission. Recoverable
    /// by an administrator granting the key.
    #[error("permission denied: {permission}")]
    PermissionDenied {
        /// Permission key the principal lacks.
        permission: PermissionKey,
    },
    /// The target resource belongs to a different tenant. Not recoverable
    /// by any permission grant.
    #[error("resource belongs to a different tenant")]
    TenantBoundary,
}
