// antiphon-authz/src/preset.rs
// ============================================================================
// Module: Antiphon Preset Applier
// Description: Full-replace application of catalog permission presets.
// Purpose: Produce a fresh grant set from a named role archetype.
// Dependencies: crate::grants, antiphon-catalog, thiserror
// ============================================================================

//! ## Overview
//! Applying a preset replaces the target principal's entire grant set with
//! the preset's permission list — never a merge, since presets represent a
//! complete role archetype. The result flows through the same effective
//! grant resolution as every other mutation path. This is an
//! administrative convenience, not part of the hot evaluation path.

// ============================================================================
// SECTION: Imports
// ============================================================================

use antiphon_catalog::catalog;
use thiserror::Error;

use crate::grants::GrantSet;
use crate::grants::resolve_effective_grants;

// ============================================================================
// SECTION: Preset Application
// ============================================================================

/// Builds the replacement grant set for a preset key.
///
/// # Errors
///
/// Returns [`PresetError::InvalidPreset`] when the preset key does not
/// resolve in the catalog; an unknown preset is a caller programming
/// error, not a normal authorization outcome.
pub fn apply_preset(preset_key: &str) -> Result<GrantSet, PresetError> {
    let preset = catalog()
        .find_preset(preset_key)
        .ok_or_else(|| PresetError::InvalidPreset(preset_key.to_string()))?;

    let grants: GrantSet = preset.permissions.iter().cloned().collect();
    Ok(resolve_effective_grants(&grants))
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Preset application errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    /// The requested preset key does not exist in the catalog.
    #[error("unknown permission preset: {0}")]
    InvalidPreset(String),
}
