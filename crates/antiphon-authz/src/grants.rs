// antiphon-authz/src/grants.rs
// ============================================================================
// Module: Antiphon Grant Sets and Dependency Resolution
// Description: Grant set type, effective-grant resolution, and toggling.
// Purpose: Centralize every grant mutation behind one cascade algorithm.
// Dependencies: antiphon-catalog, serde
// ============================================================================

//! ## Overview
//! A grant set is an order-irrelevant set of permission keys attached to a
//! principal. Aggregate permissions (for example `rehearsal.manage`) are
//! effectively granted only while every constituent is present; this module
//! owns that resolution and the write-time toggle cascade so that every
//! mutation path — API updates, administrative bulk edits, preset
//! application — flows through the same logic. These functions never fail:
//! unknown keys pass through untouched and the result is always a valid
//! set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use antiphon_catalog::DependencyRule;
use antiphon_catalog::PermissionKey;
use antiphon_catalog::catalog;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Grant Set
// ============================================================================

/// Order-irrelevant set of permission keys with deterministic iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrantSet(BTreeSet<PermissionKey>);

impl GrantSet {
    /// Creates an empty grant set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Creates a grant set from string keys.
    #[must_use]
    pub fn from_keys(keys: &[&str]) -> Self {
        keys.iter().copied().map(PermissionKey::from).collect()
    }

    /// Returns whether the set contains the key.
    #[must_use]
    pub fn contains(&self, key: &PermissionKey) -> bool {
        self.0.contains(key)
    }

    /// Inserts a key, returning whether it was newly added.
    pub fn insert(&mut self, key: PermissionKey) -> bool {
        self.0.insert(key)
    }

    /// Removes a key, returning whether it was present.
    pub fn remove(&mut self, key: &PermissionKey) -> bool {
        self.0.remove(key)
    }

    /// Returns the number of granted keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the granted keys in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &PermissionKey> {
        self.0.iter()
    }
}

impl FromIterator<PermissionKey> for GrantSet {
    fn from_iter<I: IntoIterator<Item = PermissionKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a GrantSet {
    type Item = &'a PermissionKey;
    type IntoIter = std::collections::btree_set::Iter<'a, PermissionKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// SECTION: Effective Grant Resolution
// ============================================================================

/// Resolves the effective grant set against explicit dependency rules.
///
/// An aggregate key is present in the result if and only if every
/// constituent is present: rules whose constituents are all granted add
/// the aggregate (idempotent union), and a raw aggregate whose
/// constituents are incomplete — persisted before a rule gained a
/// constituent, or mutated outside [`toggle_grant`] — is swept out rather
/// than conferring a capability the constituents no longer justify. Both
/// passes iterate to a fixed point so a future nested rule set would
/// still converge; the catalog validator rejects cyclic rule data, and
/// each pass is monotone over a finite candidate set, so iteration always
/// terminates.
#[must_use]
pub fn resolve_effective_grants_with(grants: &GrantSet, rules: &[DependencyRule]) -> GrantSet {
    let mut effective = grants.clone();
    let mut changed = true;
    while changed {
        changed = false;
        for rule in rules {
            if !effective.contains(&rule.aggregate) && constituents_present(&effective, rule) {
                effective.insert(rule.aggregate.clone());
                changed = true;
            }
        }
    }
    cascade_revoke(&mut effective, rules);
    effective
}

/// Resolves the effective grant set against the built-in catalog rules.
#[must_use]
pub fn resolve_effective_grants(grants: &GrantSet) -> GrantSet {
    resolve_effective_grants_with(grants, catalog().dependency_rules())
}

// ============================================================================
// SECTION: Grant Toggling
// ============================================================================

/// Toggles a single key against explicit dependency rules.
///
/// Toggling an aggregate on adds the aggregate plus all constituents;
/// toggling it off removes only the aggregate key. Any other key flips
/// alone. After every toggle the cascade runs: an aggregate whose
/// constituents are no longer all present is removed even when it was not
/// directly toggled.
#[must_use]
pub fn toggle_grant_with(
    grants: &GrantSet,
    key: &PermissionKey,
    rules: &[DependencyRule],
) -> GrantSet {
    let mut next = grants.clone();

    if next.contains(key) {
        next.remove(key);
    } else {
        next.insert(key.clone());
        if let Some(rule) = rules.iter().find(|rule| &rule.aggregate == key) {
            for constituent in &rule.constituents {
                next.insert(constituent.clone());
            }
        }
    }

    cascade_revoke(&mut next, rules);
    next
}

/// Toggles a single key against the built-in catalog rules.
#[must_use]
pub fn toggle_grant(grants: &GrantSet, key: &PermissionKey) -> GrantSet {
    toggle_grant_with(grants, key, catalog().dependency_rules())
}

// ============================================================================
// SECTION: Cascade
// ============================================================================

/// Removes aggregates whose constituents are incomplete, to a fixed point.
/// Runs after every mutation, not only aggregate toggles, since removing a
/// constituent silently invalidates an aggregate the caller never touched.
fn cascade_revoke(grants: &mut GrantSet, rules: &[DependencyRule]) {
    let mut changed = true;
    while changed {
        changed = false;
        for rule in rules {
            if grants.contains(&rule.aggregate) && !constituents_present(grants, rule) {
                grants.remove(&rule.aggregate);
                changed = true;
            }
        }
    }
}

/// Returns whether every constituent of the rule is present.
fn constituents_present(grants: &GrantSet, rule: &DependencyRule) -> bool {
    rule.constituents.iter().all(|constituent| grants.contains(constituent))
}
