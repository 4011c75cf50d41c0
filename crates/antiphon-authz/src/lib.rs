// antiphon-authz/src/lib.rs
// ============================================================================
// Module: Antiphon Authorization Library
// Description: Public API surface for the Antiphon authorization engine.
// Purpose: Expose principal, evaluator, resolver, guard, and preset helpers.
// Dependencies: crate::{error, evaluator, grants, preset, principal, tenant}
// ============================================================================

//! ## Overview
//! The Antiphon authorization engine decides whether an authenticated
//! principal may perform a named action. It layers a coarse role tier
//! (bypass shortcuts for operators and tenant administrators) over a
//! fine-grained permission grant set with aggregate dependency rules, and
//! enforces tenant isolation as an independent second check. Every
//! operation is a pure synchronous function over immutable inputs; the
//! only shared state is the read-only catalog from `antiphon-catalog`.
//!
//! Request handlers call [`authorize`] (or the finer-grained [`can`] /
//! [`same_tenant`] pair) after loading the principal and the target
//! resource. Grant mutation paths call [`toggle_grant`] or
//! [`apply_preset`] inside a single read-modify-write transaction owned
//! by the persistence layer.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod evaluator;
pub mod grants;
pub mod preset;
pub mod principal;
pub mod tenant;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::AccessError;
pub use evaluator::authorize;
pub use evaluator::can;
pub use evaluator::can_all;
pub use evaluator::can_any;
pub use evaluator::has_permission;
pub use grants::GrantSet;
pub use grants::resolve_effective_grants;
pub use grants::resolve_effective_grants_with;
pub use grants::toggle_grant;
pub use grants::toggle_grant_with;
pub use preset::PresetError;
pub use preset::apply_preset;
pub use principal::Principal;
pub use principal::PrincipalError;
pub use principal::RoleTier;
pub use principal::TenantId;
pub use principal::UnknownRoleError;
pub use tenant::check_same_tenant;
pub use tenant::same_tenant;
