// antiphon-authz/tests/grants.rs
// ============================================================================
// Module: Grant Resolution and Toggle Tests
// Description: Tests for effective-grant resolution and the toggle cascade.
// ============================================================================
//! ## Overview
//! Validates the aggregate resolution contract, the write-time toggle
//! behavior, and the cascading revoke that runs after every mutation.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic grant fixtures.")]
#![allow(clippy::expect_used, reason = "Tests use expect for explicit failure messages.")]

use antiphon_authz::GrantSet;
use antiphon_authz::resolve_effective_grants;
use antiphon_authz::resolve_effective_grants_with;
use antiphon_authz::toggle_grant;
use antiphon_catalog::DependencyRule;
use antiphon_catalog::PermissionKey;
use antiphon_catalog::catalog;

/// The six constituents of `rehearsal.manage`.
const REHEARSAL_CONSTITUENTS: [&str; 6] = [
    "rehearsal.view",
    "rehearsal.create",
    "rehearsal.edit",
    "rehearsal.publish",
    "rehearsal.delete",
    "rehearsal.reminder",
];

// ============================================================================
// SECTION: Wire Form
// ============================================================================

#[test]
fn test_grant_set_serializes_as_sorted_sequence() {
    let grants = GrantSet::from_keys(&["song.view", "member.view", "song.edit"]);
    let json = serde_json::to_value(&grants).unwrap();
    assert_eq!(json, serde_json::json!(["member.view", "song.edit", "song.view"]));

    let back: GrantSet = serde_json::from_value(json).unwrap();
    assert_eq!(back, grants);
}

// ============================================================================
// SECTION: Effective Resolution
// ============================================================================

#[test]
fn test_aggregate_present_iff_constituents_superset() {
    for rule in catalog().dependency_rules() {
        let complete: GrantSet = rule.constituents.iter().cloned().collect();
        assert!(resolve_effective_grants(&complete).contains(&rule.aggregate));

        for missing in &rule.constituents {
            let mut partial: GrantSet = rule
                .constituents
                .iter()
                .filter(|constituent| *constituent != missing)
                .cloned()
                .collect();
            assert!(
                !resolve_effective_grants(&partial).contains(&rule.aggregate),
                "{aggregate} must not resolve without {missing}",
                aggregate = rule.aggregate
            );

            // Only-if direction: a raw aggregate with a missing constituent
            // must be swept out, not waved through.
            partial.insert(rule.aggregate.clone());
            assert!(
                !resolve_effective_grants(&partial).contains(&rule.aggregate),
                "raw {aggregate} must not survive resolution without {missing}",
                aggregate = rule.aggregate
            );
        }
    }
}

#[test]
fn test_dangling_aggregate_is_swept_from_the_effective_set() {
    // A set persisted before a rule gained a constituent, or mutated
    // outside toggle_grant, can hold a bare aggregate key.
    let grants = GrantSet::from_keys(&["rehearsal.manage"]);
    let effective = resolve_effective_grants(&grants);
    assert!(!effective.contains(&PermissionKey::from("rehearsal.manage")));
    assert!(effective.is_empty());
}

#[test]
fn test_resolution_preserves_unknown_keys() {
    let grants = GrantSet::from_keys(&["legacy.import", "song.view"]);
    let effective = resolve_effective_grants(&grants);
    assert!(effective.contains(&PermissionKey::from("legacy.import")));
    assert_eq!(effective.len(), 2);
}

#[test]
fn test_resolution_is_idempotent() {
    let grants = GrantSet::from_keys(&["song.view", "song.create", "song.edit", "song.delete"]);
    let once = resolve_effective_grants(&grants);
    let twice = resolve_effective_grants(&once);
    assert_eq!(once, twice);
    assert!(once.contains(&PermissionKey::from("song.manage")));
}

#[test]
fn test_nested_rules_resolve_to_fixed_point() {
    // The built-in catalog keeps rules flat; resolution itself must still
    // converge on a chained rule set.
    let rules = vec![
        DependencyRule::new("team.manage", &["team.view", "team.edit"]),
        DependencyRule::new("area.manage", &["team.manage", "area.view"]),
    ];
    let grants = GrantSet::from_keys(&["team.view", "team.edit", "area.view"]);
    let effective = resolve_effective_grants_with(&grants, &rules);
    assert!(effective.contains(&PermissionKey::from("team.manage")));
    assert!(effective.contains(&PermissionKey::from("area.manage")));
}

// ============================================================================
// SECTION: Toggle Behavior
// ============================================================================

#[test]
fn test_toggle_aggregate_on_adds_all_constituents() {
    let manage = PermissionKey::from("rehearsal.manage");
    let toggled = toggle_grant(&GrantSet::new(), &manage);

    assert!(toggled.contains(&manage));
    for constituent in REHEARSAL_CONSTITUENTS {
        assert!(toggled.contains(&PermissionKey::from(constituent)));
    }
    assert_eq!(toggled.len(), 7);
}

#[test]
fn test_toggle_satisfied_aggregate_adds_only_the_aggregate() {
    let grants = GrantSet::from_keys(&[
        "rehearsal.view",
        "rehearsal.attendance",
        "rehearsal.create",
        "rehearsal.edit",
        "rehearsal.publish",
        "rehearsal.delete",
        "rehearsal.reminder",
    ]);
    let toggled = toggle_grant(&grants, &PermissionKey::from("rehearsal.manage"));

    assert_eq!(toggled.len(), grants.len() + 1);
    assert!(toggled.contains(&PermissionKey::from("rehearsal.manage")));
    for key in &grants {
        assert!(toggled.contains(key));
    }
}

#[test]
fn test_toggle_aggregate_off_keeps_constituents() {
    let manage = PermissionKey::from("rehearsal.manage");
    let on = toggle_grant(&GrantSet::new(), &manage);
    let off = toggle_grant(&on, &manage);

    assert!(!off.contains(&manage));
    for constituent in REHEARSAL_CONSTITUENTS {
        assert!(off.contains(&PermissionKey::from(constituent)));
    }
}

#[test]
fn test_toggle_plain_key_flips_only_that_key() {
    let grants = GrantSet::from_keys(&["song.view"]);
    let key = PermissionKey::from("song.edit");

    let added = toggle_grant(&grants, &key);
    assert!(added.contains(&key));
    assert_eq!(added.len(), 2);

    let removed = toggle_grant(&added, &key);
    assert_eq!(removed, grants);
}

#[test]
fn test_toggle_unknown_key_round_trips() {
    let grants = GrantSet::from_keys(&["song.view"]);
    let key = PermissionKey::from("not.in.catalog");

    let added = toggle_grant(&grants, &key);
    assert!(added.contains(&key));
    let removed = toggle_grant(&added, &key);
    assert_eq!(removed, grants);
}

// ============================================================================
// SECTION: Cascading Revoke
// ============================================================================

#[test]
fn test_removing_any_constituent_revokes_the_aggregate() {
    let manage = PermissionKey::from("rehearsal.manage");
    let full = toggle_grant(&GrantSet::new(), &manage);

    for constituent in REHEARSAL_CONSTITUENTS {
        let constituent = PermissionKey::from(constituent);
        let after = toggle_grant(&full, &constituent);
        assert!(!after.contains(&constituent));
        assert!(
            !after.contains(&manage),
            "removing {constituent} must cascade-revoke the aggregate"
        );
    }
}

#[test]
fn test_cascade_runs_on_non_aggregate_toggles() {
    let grants = GrantSet::from_keys(&[
        "member.view",
        "member.create",
        "member.edit",
        "member.deactivate",
        "member.delete",
        "member.manage",
    ]);

    // Toggling an unrelated plain key must still sweep invalidated
    // aggregates; here the aggregate stays valid.
    let untouched = toggle_grant(&grants, &PermissionKey::from("song.view"));
    assert!(untouched.contains(&PermissionKey::from("member.manage")));

    let invalidated = toggle_grant(&grants, &PermissionKey::from("member.delete"));
    assert!(!invalidated.contains(&PermissionKey::from("member.manage")));
}

#[test]
fn test_toggle_off_on_off_returns_to_original_effective_set() {
    let original = GrantSet::from_keys(&["song.view", "song.edit"]);
    let key = PermissionKey::from("song.view");

    let off = toggle_grant(&original, &key);
    let on = toggle_grant(&off, &key);
    let off_again = toggle_grant(&on, &key);

    assert_eq!(resolve_effective_grants(&on), resolve_effective_grants(&original));
    assert_eq!(resolve_effective_grants(&off_again), resolve_effective_grants(&off));
}
