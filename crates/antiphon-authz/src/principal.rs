// antiphon-authz/src/principal.rs
// ============================================================================
// Module: Antiphon Principal Model
// Description: Role tiers, tenant identifiers, and the validated principal.
// Purpose: Provide the authenticated actor's shape for authorization checks.
// Dependencies: crate::grants, serde, thiserror, tracing
// ============================================================================

//! ## Overview
//! A principal is the authenticated actor: exactly one role tier, at most
//! one tenant affiliation, and an explicit grant set. Principals are
//! constructed once at the authentication boundary through
//! [`Principal::new`], which enforces the cross-tenant invariant, and are
//! passed by value into the engine — never re-derived ad hoc per call
//! site. Corrupt role strings fail closed to the least-privileged tier.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::grants::GrantSet;

// ============================================================================
// SECTION: Tenant Identifier
// ============================================================================

/// Tenant (ministry group) identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Creates a new tenant identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TenantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TenantId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Role Tier
// ============================================================================

/// Coarse role tier assigned to a principal. Exactly one per principal,
/// ordered from most to least privileged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleTier {
    /// Top-level cross-tenant operator. No tenant affiliation, exempt from
    /// tenant-scope checks, passes every permission check.
    SuperAdmin,
    /// Tenant administrator. Passes permission checks for tenant-scoped
    /// administrative actions but remains bound by tenant isolation.
    Admin,
    /// Tenant team-leader.
    Leader,
    /// Tenant member. Also the fail-closed tier for corrupt role values.
    #[default]
    Member,
}

impl RoleTier {
    /// Returns the stable wire form of the role tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Admin => "ADMIN",
            Self::Leader => "LEADER",
            Self::Member => "MEMBER",
        }
    }

    /// Parses a role string, mapping unknown values to [`RoleTier::Member`]
    /// (least privilege) and emitting a data-integrity warning. A corrupt
    /// role must never evaluate as a bypass.
    #[must_use]
    pub fn from_str_lenient(value: &str) -> Self {
        match value.parse() {
            Ok(role) => role,
            Err(UnknownRoleError(_)) => {
                tracing::warn!(role = %value, "unknown role tier; treating as least privilege");
                Self::Member
            }
        }
    }

    /// Returns whether the role is on the fixed permission-bypass list.
    ///
    /// The top-level operator always passes; the tenant administrator
    /// passes for tenant-scoped actions because tenant isolation still
    /// constrains it independently.
    #[must_use]
    pub const fn bypasses_permission_checks(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }

    /// Returns whether the role is exempt from tenant-scope checks.
    #[must_use]
    pub const fn is_cross_tenant(self) -> bool {
        matches!(self, Self::SuperAdmin)
    }
}

impl fmt::Display for RoleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleTier {
    type Err = UnknownRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            "ADMIN" => Ok(Self::Admin),
            "LEADER" => Ok(Self::Leader),
            "MEMBER" => Ok(Self::Member),
            other => Err(UnknownRoleError(other.to_string())),
        }
    }
}

/// Error raised by strict role parsing for values outside the fixed tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role tier: {0}")]
pub struct UnknownRoleError(
    /// The unrecognized role value.
    pub String,
);

// ============================================================================
// SECTION: Principal
// ============================================================================

/// Validated authenticated actor: role, tenant affiliation, and grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Role tier assigned to the principal.
    role: RoleTier,
    /// Tenant affiliation, absent for unaffiliated principals.
    tenant_id: Option<TenantId>,
    /// Explicit fine-grained permission grants.
    grants: GrantSet,
}

impl Principal {
    /// Creates a validated principal.
    ///
    /// # Errors
    ///
    /// Returns [`PrincipalError::CrossTenantRoleWithTenant`] when a
    /// top-level operator carries a tenant affiliation.
    pub fn new(
        role: RoleTier,
        tenant_id: Option<TenantId>,
        grants: GrantSet,
    ) -> Result<Self, PrincipalError> {
        if role.is_cross_tenant() && tenant_id.is_some() {
            return Err(PrincipalError::CrossTenantRoleWithTenant);
        }

        Ok(Self {
            role,
            tenant_id,
            grants,
        })
    }

    /// Returns the principal's role tier.
    #[must_use]
    pub const fn role(&self) -> RoleTier {
        self.role
    }

    /// Returns the principal's tenant affiliation.
    #[must_use]
    pub const fn tenant_id(&self) -> Option<&TenantId> {
        self.tenant_id.as_ref()
    }

    /// Returns the principal's grant set.
    #[must_use]
    pub const fn grants(&self) -> &GrantSet {
        &self.grants
    }
}

/// Principal construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrincipalError {
    /// A top-level operator must not carry a tenant affiliation.
    #[error("cross-tenant role must not carry a tenant affiliation")]
    CrossTenantRoleWithTenant,
}
