// antiphon-authz/src/tenant.rs
// ============================================================================
// Module: Antiphon Tenant Scope Guard
// Description: Strict tenant-boundary check independent of permissions.
// Purpose: Confirm the target resource belongs to the principal's tenant.
// Dependencies: crate::{error, principal}
// ============================================================================

//! ## Overview
//! The guard is a second, independent check applied after permission
//! evaluation: a principal can hold a permission and still be denied when
//! the target entity belongs to a different tenant. The guard always
//! enforces strict match — the community-library cross-tenant read path
//! opts out by not invoking it, never by a special case here. Only the
//! top-level operator role is exempt.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::AccessError;
use crate::principal::Principal;
use crate::principal::TenantId;

// ============================================================================
// SECTION: Tenant Guard
// ============================================================================

/// Returns whether the principal may act within the resource's tenant.
///
/// Allowed when the principal holds the cross-tenant role, or when the
/// principal's tenant equals the resource's tenant. Both absent counts as
/// equal (a global resource touched by an unaffiliated principal); an
/// absent principal tenant against a present resource tenant denies rather
/// than vacuously allowing.
#[must_use]
pub fn same_tenant(principal: &Principal, resource_tenant: Option<&TenantId>) -> bool {
    if principal.role().is_cross_tenant() {
        return true;
    }

    principal.tenant_id() == resource_tenant
}

/// Checks the tenant boundary, surfacing the distinct denial kind.
///
/// # Errors
///
/// Returns [`AccessError::TenantBoundary`] when the resource belongs to a
/// different tenant.
pub fn check_same_tenant(
    principal: &Principal,
    resource_tenant: Option<&TenantId>,
) -> Result<(), AccessError> {
    if same_tenant(principal, resource_tenant) {
        Ok(())
    } else {
        Err(AccessError::TenantBoundary)
    }
}
