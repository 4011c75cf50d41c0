// antiphon-catalog/src/rules.rs
// ============================================================================
// Module: Antiphon Dependency Rules
// Description: Aggregate-to-constituent permission dependency rule data.
// Purpose: Declare which aggregate keys derive from constituent key lists.
// Dependencies: crate::definition, serde
// ============================================================================

//! ## Overview
//! A dependency rule maps one aggregate permission key (for example
//! `rehearsal.manage`) to the fixed list of constituent keys that must all
//! be present for the aggregate to be considered granted. This module holds
//! rule data only; the resolution and cascade algorithms live in
//! `antiphon-authz`. Catalog validation rejects nested or cyclic rules, so
//! constituents are never themselves aggregates.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::definition::PermissionKey;

// ============================================================================
// SECTION: Rule Type
// ============================================================================

/// Aggregate permission rule: the aggregate key is effectively granted if
/// and only if every constituent key is granted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRule {
    /// Aggregate permission key derived from the constituents.
    pub aggregate: PermissionKey,
    /// Constituent keys that must all be present.
    pub constituents: Vec<PermissionKey>,
}

impl DependencyRule {
    /// Creates a new dependency rule from string keys.
    #[must_use]
    pub fn new(aggregate: &str, constituents: &[&str]) -> Self {
        Self {
            aggregate: PermissionKey::from(aggregate),
            constituents: constituents.iter().copied().map(PermissionKey::from).collect(),
        }
    }
}
