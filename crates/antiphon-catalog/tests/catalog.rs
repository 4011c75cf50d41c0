// antiphon-catalog/tests/catalog.rs
// ============================================================================
// Module: Permission Catalog Tests
// Description: Tests for catalog validation, lookups, and built-in data.
// ============================================================================
//! ## Overview
//! Pins the built-in catalog invariants and the lookup contract (absent
//! lookups return `None`, never an error).

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic catalog fixtures.")]
#![allow(clippy::expect_used, reason = "Tests use expect for explicit failure messages.")]

use antiphon_catalog::CatalogError;
use antiphon_catalog::DependencyRule;
use antiphon_catalog::PermissionCatalog;
use antiphon_catalog::PermissionCategory;
use antiphon_catalog::PermissionDefinition;
use antiphon_catalog::PermissionKey;
use antiphon_catalog::PermissionPreset;
use antiphon_catalog::catalog;

// ============================================================================
// SECTION: Built-In Catalog
// ============================================================================

#[test]
fn test_builtin_catalog_is_valid() {
    catalog().validate().expect("built-in catalog must validate");
}

#[test]
fn test_builtin_catalog_size() {
    assert_eq!(catalog().permissions().len(), 63);
    assert_eq!(catalog().presets().len(), 7);
    assert_eq!(catalog().dependency_rules().len(), 4);
}

#[test]
fn test_builtin_catalog_order_is_stable() {
    let first = catalog().permissions().first().unwrap();
    assert_eq!(first.key.as_str(), "member.view");

    let last = catalog().permissions().last().unwrap();
    assert_eq!(last.key.as_str(), "strategy.ministry.health.view");
}

#[test]
fn test_find_permission_present_and_absent() {
    let key = PermissionKey::from("rehearsal.manage");
    let definition = catalog().find_permission(&key).unwrap();
    assert_eq!(definition.category, PermissionCategory::Schedule);
    assert!(definition.grantable());

    let missing = PermissionKey::from("no.such.permission");
    assert!(catalog().find_permission(&missing).is_none());
}

#[test]
fn test_future_permissions_are_not_grantable() {
    let key = PermissionKey::from("integration.calendar.sync");
    let definition = catalog().find_permission(&key).unwrap();
    assert!(definition.future);
    assert!(!definition.grantable());
}

#[test]
fn test_premium_flags_survive_serialization() {
    let key = PermissionKey::from("plan.manage");
    let definition = catalog().find_permission(&key).unwrap();
    assert!(definition.premium);

    let json = serde_json::to_value(definition).unwrap();
    assert_eq!(json["premium"], serde_json::Value::Bool(true));
    assert_eq!(json["category"], serde_json::Value::String("administrative".to_string()));
}

// ============================================================================
// SECTION: Presets
// ============================================================================

#[test]
fn test_membro_preset_contents_are_literal() {
    let preset = catalog().find_preset("MEMBRO").unwrap();
    let keys: Vec<&str> = preset.permissions.iter().map(PermissionKey::as_str).collect();
    assert_eq!(keys, vec![
        "schedule.presence.confirm.self",
        "schedule.future.view",
        "profile.self.edit",
        "profile.availability.update",
        "communication.direct.send",
    ]);
}

#[test]
fn test_find_preset_absent_returns_none() {
    assert!(catalog().find_preset("VISITANTE").is_none());
}

#[test]
fn test_presets_only_bundle_grantable_permissions() {
    for preset in catalog().presets() {
        for key in &preset.permissions {
            let definition = catalog().find_permission(key).unwrap();
            assert!(definition.grantable(), "preset {} bundles future key {key}", preset.key);
        }
    }
}

// ============================================================================
// SECTION: Dependency Rules
// ============================================================================

#[test]
fn test_rehearsal_manage_has_six_constituents() {
    let rule = catalog()
        .dependency_rules()
        .iter()
        .find(|rule| rule.aggregate.as_str() == "rehearsal.manage")
        .unwrap();

    let keys: Vec<&str> = rule.constituents.iter().map(PermissionKey::as_str).collect();
    assert_eq!(keys, vec![
        "rehearsal.view",
        "rehearsal.create",
        "rehearsal.edit",
        "rehearsal.publish",
        "rehearsal.delete",
        "rehearsal.reminder",
    ]);
    assert!(!keys.contains(&"rehearsal.attendance"));
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Builds a minimal valid catalog for mutation in validation tests.
fn small_catalog() -> (Vec<PermissionDefinition>, Vec<PermissionPreset>, Vec<DependencyRule>) {
    let permissions = vec![
        PermissionDefinition::new("song.view", "View songs", PermissionCategory::Musical),
        PermissionDefinition::new("song.edit", "Edit songs", PermissionCategory::Musical),
        PermissionDefinition::new("song.manage", "Manage songs", PermissionCategory::Musical),
    ];
    let presets =
        vec![PermissionPreset::new("BASICO", "Básico", "Song viewing only.", &["song.view"])];
    let rules = vec![DependencyRule::new("song.manage", &["song.view", "song.edit"])];
    (permissions, presets, rules)
}

#[test]
fn test_validate_rejects_duplicate_permission() {
    let (mut permissions, presets, rules) = small_catalog();
    permissions.push(PermissionDefinition::new(
        "song.view",
        "View songs again",
        PermissionCategory::Musical,
    ));

    let result = PermissionCatalog::new(permissions, presets, rules).validate();
    assert!(matches!(result, Err(CatalogError::DuplicatePermission(key)) if key == "song.view"));
}

#[test]
fn test_validate_rejects_undefined_preset_entry() {
    let (permissions, mut presets, rules) = small_catalog();
    presets.push(PermissionPreset::new("QUEBRADO", "Quebrado", "Broken.", &["song.transpose"]));

    let result = PermissionCatalog::new(permissions, presets, rules).validate();
    assert!(matches!(result, Err(CatalogError::UndefinedPresetEntry { .. })));
}

#[test]
fn test_validate_rejects_future_preset_entry() {
    let (mut permissions, mut presets, rules) = small_catalog();
    permissions.push(
        PermissionDefinition::new("song.ai.suggest", "Suggest songs", PermissionCategory::Musical)
            .future(),
    );
    presets.push(PermissionPreset::new("FUTURO", "Futuro", "Too early.", &["song.ai.suggest"]));

    let result = PermissionCatalog::new(permissions, presets, rules).validate();
    assert!(matches!(result, Err(CatalogError::FuturePresetEntry { .. })));
}

#[test]
fn test_validate_rejects_empty_rule() {
    let (permissions, presets, mut rules) = small_catalog();
    rules.push(DependencyRule::new("song.view", &[]));

    let result = PermissionCatalog::new(permissions, presets, rules).validate();
    assert!(matches!(result, Err(CatalogError::EmptyRule(_))));
}

#[test]
fn test_validate_rejects_nested_rules() {
    let (mut permissions, presets, mut rules) = small_catalog();
    permissions.push(PermissionDefinition::new(
        "song.super.manage",
        "Super manage songs",
        PermissionCategory::Musical,
    ));
    rules.push(DependencyRule::new("song.super.manage", &["song.manage"]));

    let result = PermissionCatalog::new(permissions, presets, rules).validate();
    assert!(matches!(result, Err(CatalogError::NestedRule { .. })));
}

#[test]
fn test_validate_rejects_undefined_rule_constituent() {
    let (permissions, presets, mut rules) = small_catalog();
    rules.remove(0);
    rules.push(DependencyRule::new("song.manage", &["song.view", "song.archive"]));

    let result = PermissionCatalog::new(permissions, presets, rules).validate();
    assert!(matches!(result, Err(CatalogError::UndefinedRuleKey { .. })));
}
