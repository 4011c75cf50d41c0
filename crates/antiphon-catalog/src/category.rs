// antiphon-catalog/src/category.rs
// ============================================================================
// Module: Antiphon Permission Categories
// Description: Closed set of permission categories used for catalog grouping.
// Purpose: Drive admin-surface grouping and preset derivation filters.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every permission definition belongs to exactly one category. Categories
//! group the catalog for administrative rendering and for deriving preset
//! bundles; they carry no evaluation semantics.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Category Type
// ============================================================================

/// Permission category used for catalog grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    /// Membership, settings, and plan administration.
    Administrative,
    /// Songs, repertoire, and musical preparation.
    Musical,
    /// Schedules, rehearsals, and presence.
    Schedule,
    /// Reporting and exports.
    Reports,
    /// Messages, announcements, and broadcasts.
    Communication,
    /// Media, integrations, and audit tooling.
    Technical,
    /// Self-service profile management.
    Profile,
    /// Ministry goals and season planning.
    Strategic,
}

impl PermissionCategory {
    /// Returns the stable snake_case label for the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Administrative => "administrative",
            Self::Musical => "musical",
            Self::Schedule => "schedule",
            Self::Reports => "reports",
            Self::Communication => "communication",
            Self::Technical => "technical",
            Self::Profile => "profile",
            Self::Strategic => "strategic",
        }
    }
}

impl fmt::Display for PermissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
