// antiphon-catalog/src/lib.rs
// ============================================================================
// Module: Antiphon Permission Catalog Library
// Description: Public API surface for the Antiphon permission catalog.
// Purpose: Expose permission definitions, presets, and dependency rule data.
// Dependencies: crate::{catalog, category, definition, preset, rules}
// ============================================================================

//! ## Overview
//! The Antiphon catalog is the static registry of every fine-grained
//! permission the ministry platform knows about, together with the named
//! presets (role archetypes) and the aggregate-to-constituent dependency
//! rules. The catalog is loaded once at process startup, is never mutated
//! at runtime, and is safe for concurrent reads from any number of
//! request-handling tasks. Evaluation logic lives in `antiphon-authz`;
//! this crate is data plus lookup.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod category;
pub mod definition;
pub mod preset;
pub mod rules;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::CatalogError;
pub use catalog::PermissionCatalog;
pub use catalog::catalog;
pub use category::PermissionCategory;
pub use definition::PermissionDefinition;
pub use definition::PermissionKey;
pub use preset::PermissionPreset;
pub use rules::DependencyRule;
