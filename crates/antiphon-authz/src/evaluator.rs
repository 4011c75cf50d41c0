// antiphon-authz/src/evaluator.rs
// ============================================================================
// Module: Antiphon Permission Evaluator
// Description: Role and grant-set evaluation with any-of/all-of composition.
// Purpose: Decide whether a principal may perform a named action.
// Dependencies: crate::{error, grants, principal, tenant}, antiphon-catalog
// ============================================================================

//! ## Overview
//! Evaluation is exact-key-match only: `schedule.view.all` never implies
//! `schedule.view.own` or vice versa, and there is no prefix or wildcard
//! matching. Roles on the fixed bypass list short-circuit the grant check;
//! everything else resolves through the dependency rules so an aggregate
//! counts as granted only while all of its constituents are present. Keys
//! absent from the catalog are still evaluated as plain set members.

// ============================================================================
// SECTION: Imports
// ============================================================================

use antiphon_catalog::PermissionKey;
use antiphon_catalog::catalog;

use crate::error::AccessError;
use crate::grants::GrantSet;
use crate::principal::Principal;
use crate::principal::RoleTier;
use crate::principal::TenantId;
use crate::tenant::check_same_tenant;

// ============================================================================
// SECTION: Permission Evaluation
// ============================================================================

/// Returns whether the role and grant set cover the permission key.
///
/// Decision order: roles on the fixed bypass list pass unconditionally;
/// otherwise the key's effective presence is decided by the dependency
/// rules — an aggregate key is granted if and only if every constituent
/// is present, and any other key by exact membership. This runs on nearly
/// every API call, so it never clones or materializes the effective set:
/// the catalog validator keeps rules flat, which reduces an aggregate key
/// to a single rule lookup.
#[must_use]
pub fn has_permission(role: RoleTier, key: &PermissionKey, grants: &GrantSet) -> bool {
    if role.bypasses_permission_checks() {
        return true;
    }

    match catalog().dependency_rules().iter().find(|rule| &rule.aggregate == key) {
        Some(rule) => rule.constituents.iter().all(|constituent| grants.contains(constituent)),
        None => grants.contains(key),
    }
}

/// Returns whether the principal holds the permission key.
#[must_use]
pub fn can(principal: &Principal, key: &PermissionKey) -> bool {
    has_permission(principal.role(), key, principal.grants())
}

/// Returns whether the principal holds at least one of the keys.
///
/// Short-circuits on the first success. An empty key sequence is false.
#[must_use]
pub fn can_any(principal: &Principal, keys: &[PermissionKey]) -> bool {
    keys.iter().any(|key| can(principal, key))
}

/// Returns whether the principal holds every key.
///
/// An empty key sequence is vacuously true. Callers passing a dynamic
/// requirement list must guard against accidentally empty input if their
/// product intent is denial.
#[must_use]
pub fn can_all(principal: &Principal, keys: &[PermissionKey]) -> bool {
    keys.iter().all(|key| can(principal, key))
}

// ============================================================================
// SECTION: Composed Authorization
// ============================================================================

/// Authorizes an action against both the permission layer and the tenant
/// boundary. Both checks must pass; either failing yields its distinct
/// denial so callers can choose between "ask an admin" and not-found
/// messaging.
///
/// # Errors
///
/// Returns [`AccessError::PermissionDenied`] when the role and grants do
/// not cover the key, or [`AccessError::TenantBoundary`] when the resource
/// belongs to a different tenant.
pub fn authorize(
    principal: &Principal,
    key: &PermissionKey,
    resource_tenant: Option<&TenantId>,
) -> Result<(), AccessError> {
    if !can(principal, key) {
        return Err(AccessError::PermissionDenied {
            permission: key.clone(),
        });
    }

    check_same_tenant(principal, resource_tenant)
}
