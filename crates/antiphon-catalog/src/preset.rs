// antiphon-catalog/src/preset.rs
// ============================================================================
// Module: Antiphon Permission Presets
// Description: Named, immutable permission bundles (role archetypes).
// Purpose: Define full-replace grant bundles applied by administrators.
// Dependencies: crate::definition, serde
// ============================================================================

//! ## Overview
//! A preset is a named, fixed bundle of permission keys representing a role
//! archetype (for example `MEMBRO`). Applying a preset replaces the target
//! principal's entire grant set; presets are never merged with existing
//! grants. Preset contents are compile-time constants recomputed only when
//! the catalog itself changes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::definition::PermissionKey;

// ============================================================================
// SECTION: Preset Type
// ============================================================================

/// Named, immutable bundle of permission keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionPreset {
    /// Stable preset key (for example `MEMBRO`).
    pub key: String,
    /// Human-readable display label.
    pub label: String,
    /// Short description of the archetype the preset represents.
    pub description: String,
    /// Permission keys granted by the preset, in catalog order.
    pub permissions: Vec<PermissionKey>,
}

impl PermissionPreset {
    /// Creates a new preset from string keys.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        permissions: &[&str],
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
            permissions: permissions.iter().copied().map(PermissionKey::from).collect(),
        }
    }
}
