// antiphon-catalog/src/catalog.rs
// ============================================================================
// Module: Antiphon Permission Catalog
// Description: Process-wide registry of permissions, presets, and rules.
// Purpose: Provide validated, immutable catalog data with stable lookups.
// Dependencies: crate::{category, definition, preset, rules}, thiserror
// ============================================================================

//! ## Overview
//! The catalog is assembled once behind a `LazyLock` and never mutated at
//! runtime. Lookups return options rather than errors: an unknown key is a
//! no-op capability for callers, not a crash, because the same catalog
//! drives forward-compatible rendering of not-yet-available permissions.
//! Validation runs over the assembled data and enforces the invariants the
//! rest of the engine assumes (unique keys, resolvable preset entries, flat
//! acyclic dependency rules).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use thiserror::Error;

use crate::category::PermissionCategory;
use crate::definition::PermissionDefinition;
use crate::definition::PermissionKey;
use crate::preset::PermissionPreset;
use crate::rules::DependencyRule;

// ============================================================================
// SECTION: Catalog Type
// ============================================================================

/// Immutable registry of permission definitions, presets, and rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCatalog {
    /// Permission definitions in stable catalog order.
    permissions: Vec<PermissionDefinition>,
    /// Permission presets in stable catalog order.
    presets: Vec<PermissionPreset>,
    /// Aggregate dependency rules.
    rules: Vec<DependencyRule>,
}

impl PermissionCatalog {
    /// Creates a catalog from its parts.
    ///
    /// The caller is expected to run [`PermissionCatalog::validate`] before
    /// serving requests; the built-in catalog is pinned valid by tests.
    #[must_use]
    pub const fn new(
        permissions: Vec<PermissionDefinition>,
        presets: Vec<PermissionPreset>,
        rules: Vec<DependencyRule>,
    ) -> Self {
        Self {
            permissions,
            presets,
            rules,
        }
    }

    /// Returns all permission definitions in stable order.
    #[must_use]
    pub fn permissions(&self) -> &[PermissionDefinition] {
        &self.permissions
    }

    /// Returns all presets in stable order.
    #[must_use]
    pub fn presets(&self) -> &[PermissionPreset] {
        &self.presets
    }

    /// Returns the aggregate dependency rules.
    #[must_use]
    pub fn dependency_rules(&self) -> &[DependencyRule] {
        &self.rules
    }

    /// Looks up a permission definition by key.
    #[must_use]
    pub fn find_permission(&self, key: &PermissionKey) -> Option<&PermissionDefinition> {
        self.permissions.iter().find(|definition| &definition.key == key)
    }

    /// Looks up a preset by key.
    #[must_use]
    pub fn find_preset(&self, key: &str) -> Option<&PermissionPreset> {
        self.presets.iter().find(|preset| preset.key == key)
    }

    /// Validates the catalog invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when validation fails.
    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique_permission_keys(&self.permissions)?;
        ensure_unique_preset_keys(&self.presets)?;
        ensure_preset_entries_resolve(&self.presets, &self.permissions)?;
        ensure_preset_entries_grantable(&self.presets, &self.permissions)?;
        ensure_rules_resolve(&self.rules, &self.permissions)?;
        ensure_rules_flat(&self.rules)?;

        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog validation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Duplicate permission keys detected.
    #[error("duplicate permission key: {0}")]
    DuplicatePermission(String),
    /// Duplicate preset keys detected.
    #[error("duplicate preset key: {0}")]
    DuplicatePreset(String),
    /// Preset references a permission that is not defined.
    #[error("preset {preset} references undefined permission: {permission}")]
    UndefinedPresetEntry {
        /// Preset key containing the entry.
        preset: String,
        /// Undefined permission key.
        permission: String,
    },
    /// Preset contains a permission flagged as not yet available.
    #[error("preset {preset} contains future permission: {permission}")]
    FuturePresetEntry {
        /// Preset key containing the entry.
        preset: String,
        /// Future-flagged permission key.
        permission: String,
    },
    /// Dependency rule references a permission that is not defined.
    #[error("dependency rule {aggregate} references undefined permission: {permission}")]
    UndefinedRuleKey {
        /// Aggregate key of the offending rule.
        aggregate: String,
        /// Undefined permission key.
        permission: String,
    },
    /// Dependency rule has no constituents.
    #[error("dependency rule {0} has no constituents")]
    EmptyRule(String),
    /// Duplicate aggregate keys across rules.
    #[error("duplicate dependency rule for aggregate: {0}")]
    DuplicateRule(String),
    /// A constituent is itself an aggregate (nested or cyclic rules).
    #[error("dependency rule {aggregate} nests aggregate constituent: {constituent}")]
    NestedRule {
        /// Aggregate key of the offending rule.
        aggregate: String,
        /// Constituent that is itself an aggregate.
        constituent: String,
    },
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Ensures permission keys are unique within the catalog.
fn ensure_unique_permission_keys(
    permissions: &[PermissionDefinition],
) -> Result<(), CatalogError> {
    for (index, definition) in permissions.iter().enumerate() {
        if permissions.iter().skip(index + 1).any(|other| other.key == definition.key) {
            return Err(CatalogError::DuplicatePermission(definition.key.to_string()));
        }
    }
    Ok(())
}

/// Ensures preset keys are unique within the catalog.
fn ensure_unique_preset_keys(presets: &[PermissionPreset]) -> Result<(), CatalogError> {
    for (index, preset) in presets.iter().enumerate() {
        if presets.iter().skip(index + 1).any(|other| other.key == preset.key) {
            return Err(CatalogError::DuplicatePreset(preset.key.clone()));
        }
    }
    Ok(())
}

/// Ensures every preset entry references a defined permission.
fn ensure_preset_entries_resolve(
    presets: &[PermissionPreset],
    permissions: &[PermissionDefinition],
) -> Result<(), CatalogError> {
    for preset in presets {
        for key in &preset.permissions {
            if !permissions.iter().any(|definition| &definition.key == key) {
                return Err(CatalogError::UndefinedPresetEntry {
                    preset: preset.key.clone(),
                    permission: key.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Ensures no preset bundles a future-flagged permission.
fn ensure_preset_entries_grantable(
    presets: &[PermissionPreset],
    permissions: &[PermissionDefinition],
) -> Result<(), CatalogError> {
    for preset in presets {
        for key in &preset.permissions {
            let future = permissions
                .iter()
                .find(|definition| &definition.key == key)
                .is_some_and(|definition| definition.future);
            if future {
                return Err(CatalogError::FuturePresetEntry {
                    preset: preset.key.clone(),
                    permission: key.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Ensures rule keys resolve to defined permissions and rules are non-empty
/// and unique per aggregate.
fn ensure_rules_resolve(
    rules: &[DependencyRule],
    permissions: &[PermissionDefinition],
) -> Result<(), CatalogError> {
    for (index, rule) in rules.iter().enumerate() {
        if rule.constituents.is_empty() {
            return Err(CatalogError::EmptyRule(rule.aggregate.to_string()));
        }
        if rules.iter().skip(index + 1).any(|other| other.aggregate == rule.aggregate) {
            return Err(CatalogError::DuplicateRule(rule.aggregate.to_string()));
        }
        if !permissions.iter().any(|definition| definition.key == rule.aggregate) {
            return Err(CatalogError::UndefinedRuleKey {
                aggregate: rule.aggregate.to_string(),
                permission: rule.aggregate.to_string(),
            });
        }
        for constituent in &rule.constituents {
            if !permissions.iter().any(|definition| &definition.key == constituent) {
                return Err(CatalogError::UndefinedRuleKey {
                    aggregate: rule.aggregate.to_string(),
                    permission: constituent.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Ensures no constituent is itself an aggregate. A flat rule set cannot
/// chain or cycle, so fixed-point resolution is trivially terminating.
fn ensure_rules_flat(rules: &[DependencyRule]) -> Result<(), CatalogError> {
    for rule in rules {
        for constituent in &rule.constituents {
            if rules.iter().any(|other| &other.aggregate == constituent) {
                return Err(CatalogError::NestedRule {
                    aggregate: rule.aggregate.to_string(),
                    constituent: constituent.to_string(),
                });
            }
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Built-In Catalog
// ============================================================================

/// Process-wide built-in catalog, assembled once.
static CATALOG: LazyLock<PermissionCatalog> = LazyLock::new(builtin);

/// Returns the process-wide built-in catalog.
#[must_use]
pub fn catalog() -> &'static PermissionCatalog {
    &CATALOG
}

/// Assembles the built-in catalog data.
fn builtin() -> PermissionCatalog {
    PermissionCatalog::new(builtin_permissions(), builtin_presets(), builtin_rules())
}

/// Shorthand for a plain permission definition.
fn entry(key: &str, label: &str, category: PermissionCategory) -> PermissionDefinition {
    PermissionDefinition::new(key, label, category)
}

/// Built-in permission definitions in stable catalog order.
#[allow(clippy::too_many_lines, reason = "Flat data table; splitting it obscures catalog order.")]
fn builtin_permissions() -> Vec<PermissionDefinition> {
    use PermissionCategory::Administrative;
    use PermissionCategory::Communication;
    use PermissionCategory::Musical;
    use PermissionCategory::Profile;
    use PermissionCategory::Reports;
    use PermissionCategory::Schedule;
    use PermissionCategory::Strategic;
    use PermissionCategory::Technical;

    vec![
        // Administrative
        entry("member.view", "View members", Administrative),
        entry("member.create", "Add members", Administrative),
        entry("member.edit", "Edit members", Administrative),
        entry("member.deactivate", "Deactivate members", Administrative),
        entry("member.delete", "Remove members", Administrative),
        entry("member.manage", "Manage members", Administrative),
        entry("permission.assign", "Assign permissions", Administrative),
        entry("group.settings.edit", "Edit ministry settings", Administrative),
        entry("plan.view", "View subscription plan", Administrative),
        entry("plan.manage", "Manage subscription plan", Administrative).premium(),
        // Musical
        entry("song.view", "View songs", Musical),
        entry("song.create", "Add songs", Musical),
        entry("song.edit", "Edit songs", Musical),
        entry("song.delete", "Remove songs", Musical),
        entry("song.manage", "Manage songs", Musical),
        entry("song.key.set", "Set song keys", Musical),
        entry("song.chart.upload", "Upload song charts", Musical),
        entry("song.community.browse", "Browse community library", Musical),
        entry("song.community.publish", "Publish to community library", Musical),
        entry("repertoire.view", "View repertoire", Musical),
        entry("repertoire.manage", "Manage repertoire", Musical),
        // Schedule
        entry("schedule.view.own", "View own schedules", Schedule),
        entry("schedule.view.all", "View all schedules", Schedule),
        entry("schedule.create", "Create schedules", Schedule),
        entry("schedule.edit", "Edit schedules", Schedule),
        entry("schedule.publish", "Publish schedules", Schedule),
        entry("schedule.delete", "Delete schedules", Schedule),
        entry("schedule.manage", "Manage schedules", Schedule),
        entry("schedule.future.view", "View upcoming schedules", Schedule),
        entry("schedule.presence.confirm.self", "Confirm own presence", Schedule),
        entry("schedule.presence.confirm.any", "Confirm presence for others", Schedule),
        entry("schedule.swap.request", "Request schedule swaps", Schedule),
        entry("schedule.swap.approve", "Approve schedule swaps", Schedule),
        entry("rehearsal.view", "View rehearsals", Schedule),
        entry("rehearsal.attendance", "Record rehearsal attendance", Schedule),
        entry("rehearsal.create", "Create rehearsals", Schedule),
        entry("rehearsal.edit", "Edit rehearsals", Schedule),
        entry("rehearsal.publish", "Publish rehearsals", Schedule),
        entry("rehearsal.delete", "Delete rehearsals", Schedule),
        entry("rehearsal.reminder", "Send rehearsal reminders", Schedule),
        entry("rehearsal.manage", "Manage rehearsals", Schedule),
        // Reports
        entry("report.schedule.view", "View schedule reports", Reports),
        entry("report.presence.view", "View presence reports", Reports),
        entry("report.song.usage.view", "View song usage reports", Reports),
        entry("report.member.engagement.view", "View engagement reports", Reports).premium(),
        entry("report.export", "Export reports", Reports),
        // Communication
        entry("communication.direct.send", "Send direct messages", Communication),
        entry("communication.announcement.send", "Send announcements", Communication),
        entry("communication.broadcast.send", "Send broadcasts", Communication).premium(),
        entry("communication.template.manage", "Manage message templates", Communication),
        // Technical
        entry("media.upload", "Upload media", Technical),
        entry("media.delete", "Delete media", Technical),
        entry("integration.calendar.sync", "Sync external calendars", Technical).future(),
        entry("integration.streaming.manage", "Manage streaming integrations", Technical)
            .premium(),
        entry("audit.log.view", "View audit log", Technical).premium(),
        // Profile
        entry("profile.self.edit", "Edit own profile", Profile),
        entry("profile.availability.update", "Update own availability", Profile),
        entry("profile.photo.upload", "Upload profile photo", Profile),
        entry("profile.skills.edit", "Edit own skills", Profile),
        // Strategic
        entry("strategy.goals.view", "View ministry goals", Strategic),
        entry("strategy.goals.manage", "Manage ministry goals", Strategic),
        entry("strategy.season.plan", "Plan ministry seasons", Strategic).premium(),
        entry("strategy.ministry.health.view", "View ministry health", Strategic).future(),
    ]
}

/// Built-in presets in stable catalog order.
fn builtin_presets() -> Vec<PermissionPreset> {
    vec![
        PermissionPreset::new(
            "ADMINISTRADOR",
            "Administrador",
            "Full tenant administration: membership, schedules, and settings.",
            &[
                "member.view",
                "member.create",
                "member.edit",
                "member.deactivate",
                "member.delete",
                "member.manage",
                "permission.assign",
                "group.settings.edit",
                "plan.view",
                "schedule.view.all",
                "schedule.create",
                "schedule.edit",
                "schedule.publish",
                "schedule.delete",
                "schedule.manage",
                "report.schedule.view",
                "report.presence.view",
                "report.export",
                "communication.announcement.send",
            ],
        ),
        PermissionPreset::new(
            "LIDER",
            "Líder de equipe",
            "Team leadership: schedules, rehearsals, and presence management.",
            &[
                "schedule.view.all",
                "schedule.create",
                "schedule.edit",
                "schedule.publish",
                "schedule.delete",
                "schedule.manage",
                "schedule.presence.confirm.any",
                "schedule.swap.approve",
                "rehearsal.view",
                "rehearsal.attendance",
                "rehearsal.create",
                "rehearsal.edit",
                "rehearsal.publish",
                "rehearsal.delete",
                "rehearsal.reminder",
                "rehearsal.manage",
                "song.view",
                "repertoire.view",
                "communication.direct.send",
                "communication.announcement.send",
            ],
        ),
        PermissionPreset::new(
            "SECRETARIO",
            "Secretaria do ministério",
            "Ministry office: membership records, reports, and messaging.",
            &[
                "member.view",
                "member.create",
                "member.edit",
                "schedule.view.all",
                "schedule.future.view",
                "report.schedule.view",
                "report.presence.view",
                "report.export",
                "communication.direct.send",
                "communication.announcement.send",
                "communication.template.manage",
            ],
        ),
        PermissionPreset::new(
            "MUSICO",
            "Músico",
            "Band member: songs, rehearsals, and self-service presence.",
            &[
                "song.view",
                "song.key.set",
                "repertoire.view",
                "rehearsal.view",
                "rehearsal.attendance",
                "schedule.view.own",
                "schedule.future.view",
                "schedule.presence.confirm.self",
                "schedule.swap.request",
                "profile.self.edit",
                "profile.availability.update",
                "profile.skills.edit",
                "communication.direct.send",
            ],
        ),
        PermissionPreset::new(
            "SONOPLASTA",
            "Sonoplastia e mídia",
            "Sound and media team: uploads, charts, and rehearsal support.",
            &[
                "media.upload",
                "media.delete",
                "song.view",
                "song.chart.upload",
                "rehearsal.view",
                "rehearsal.attendance",
                "schedule.view.own",
                "schedule.future.view",
                "schedule.presence.confirm.self",
                "profile.self.edit",
                "profile.availability.update",
                "communication.direct.send",
            ],
        ),
        PermissionPreset::new(
            "RELATORIOS",
            "Relatórios e análise",
            "Read-only analysis: reports, exports, and ministry goals.",
            &[
                "schedule.view.all",
                "report.schedule.view",
                "report.presence.view",
                "report.song.usage.view",
                "report.export",
                "strategy.goals.view",
            ],
        ),
        PermissionPreset::new(
            "MEMBRO",
            "Membro",
            "Baseline member: own schedule, own profile, direct messages.",
            &[
                "schedule.presence.confirm.self",
                "schedule.future.view",
                "profile.self.edit",
                "profile.availability.update",
                "communication.direct.send",
            ],
        ),
    ]
}

/// Built-in aggregate dependency rules. Rules are flat: constituents are
/// never themselves aggregates.
fn builtin_rules() -> Vec<DependencyRule> {
    vec![
        DependencyRule::new("member.manage", &[
            "member.view",
            "member.create",
            "member.edit",
            "member.deactivate",
            "member.delete",
        ]),
        DependencyRule::new("song.manage", &[
            "song.view",
            "song.create",
            "song.edit",
            "song.delete",
        ]),
        DependencyRule::new("schedule.manage", &[
            "schedule.view.all",
            "schedule.create",
            "schedule.edit",
            "schedule.publish",
            "schedule.delete",
        ]),
        DependencyRule::new("rehearsal.manage", &[
            "rehearsal.view",
            "rehearsal.create",
            "rehearsal.edit",
            "rehearsal.publish",
            "rehearsal.delete",
            "rehearsal.reminder",
        ]),
    ]
}
