// antiphon-catalog/src/definition.rs
// ============================================================================
// Module: Antiphon Permission Definitions
// Description: Permission keys and catalog definition entries.
// Purpose: Provide strongly typed permission identifiers and their metadata.
// Dependencies: crate::category, serde
// ============================================================================

//! ## Overview
//! Permission keys are opaque dot-namespaced strings (for example
//! `member.manage`). Evaluation treats keys as pure set members; the
//! metadata carried by [`PermissionDefinition`] (label, category, premium
//! and future flags) exists for the administrative surface. A key absent
//! from the catalog is still evaluatable — catalog absence is a
//! display-layer concern, never an evaluation-layer concern.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::category::PermissionCategory;

// ============================================================================
// SECTION: Permission Key
// ============================================================================

/// Opaque dot-namespaced permission identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionKey(String);

impl PermissionKey {
    /// Creates a new permission key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PermissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for PermissionKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PermissionKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Permission Definition
// ============================================================================

/// Immutable catalog entry describing one fine-grained permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDefinition {
    /// Unique permission key.
    pub key: PermissionKey,
    /// Human-readable display label.
    pub label: String,
    /// Catalog category for administrative grouping.
    pub category: PermissionCategory,
    /// Whether the permission is gated behind a premium subscription plan.
    pub premium: bool,
    /// Whether the permission is catalogued for UI rendering but not yet
    /// available. Future permissions must never be grantable.
    pub future: bool,
}

impl PermissionDefinition {
    /// Creates a plain (non-premium, available) permission definition.
    #[must_use]
    pub fn new(
        key: impl Into<PermissionKey>,
        label: impl Into<String>,
        category: PermissionCategory,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            category,
            premium: false,
            future: false,
        }
    }

    /// Marks the permission as premium-gated.
    #[must_use]
    pub const fn premium(mut self) -> Self {
        self.premium = true;
        self
    }

    /// Marks the permission as not yet available.
    #[must_use]
    pub const fn future(mut self) -> Self {
        self.future = true;
        self
    }

    /// Returns whether the administrative surface may grant this key.
    #[must_use]
    pub const fn grantable(&self) -> bool {
        !self.future
    }
}
