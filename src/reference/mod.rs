//! Reference data — the immutable lookup tables behind every scorer.
//!
//! [`ReferenceData`] is the serializable, human-editable form.  It is
//! validated once by [`ReferenceData::compile`], which produces
//! [`ReferenceTables`]: fixed-size arrays indexed by type, option, domain and
//! instinct, so scoring calls never do a fallible lookup.
//!
//! ```yaml
//! foundation_weights:        # 9 sets × 3 options
//!   - - [{type: 1, weight: 2}, {type: 9, weight: 2}]
//!     - ...
//! wings:       [{type: 1, left: 9, right: 2}, ...]
//! arrows:      [{type: 1, integration: 7, disintegration: 4}, ...]
//! priority_domains: [{instinct: sp, domains: [health, finances]}, ...]
//! sensitivity: [{type: 1, bonuses: {health: 5, relationships: -5}}, ...]
//! impact_texts: [{domain: health, high: "...", low: "..."}, ...]
//! trajectories: {declining: [..3], stable: [..3], improving: [..3]}
//! priority_bonus: 15
//! ```

mod builtin;
pub mod error;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{Instinct, LifeDomain, TypeNumber, FOUNDATION_SETS, OPTIONS_PER_SET};

pub use error::ReferenceError;

lazy_static::lazy_static! {
    static ref BUILTIN: ReferenceData = builtin::reference_data();
}

// ============================================================================
// Serializable form
// ============================================================================

/// One weighted type contribution of a foundation option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightEntry {
    #[serde(rename = "type")]
    pub type_number: TypeNumber,
    pub weight: u32,
}

/// The two legal wings of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WingEntry {
    #[serde(rename = "type")]
    pub type_number: TypeNumber,
    /// Wing chosen by a left pick.
    pub left: TypeNumber,
    /// Wing chosen by a right pick.
    pub right: TypeNumber,
}

/// Fixed mood-shift targets of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrowEntry {
    #[serde(rename = "type")]
    pub type_number: TypeNumber,
    /// Good-mood (integration) target.
    pub integration: TypeNumber,
    /// Bad-mood (disintegration) target.
    pub disintegration: TypeNumber,
}

/// The two life domains a priority instinct favours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityAlignment {
    pub instinct: Instinct,
    pub domains: [LifeDomain; 2],
}

/// Per-domain score adjustments for one type.  Absent domains count as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitivityEntry {
    #[serde(rename = "type")]
    pub type_number: TypeNumber,
    #[serde(default)]
    pub bonuses: BTreeMap<LifeDomain, i32>,
}

/// Current-impact texts for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactText {
    pub domain: LifeDomain,
    /// Used when the domain score is at or above the high-impact threshold.
    pub high: String,
    pub low: String,
}

/// Trajectory labels, each row ordered short / medium / long term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryTable {
    pub declining: [String; 3],
    pub stable: [String; 3],
    pub improving: [String; 3],
}

fn default_priority_bonus() -> i32 {
    builtin::PRIORITY_BONUS
}

/// All reference tables in their editable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// `[set][option]` → weighted types.
    pub foundation_weights: Vec<Vec<Vec<WeightEntry>>>,
    pub wings: Vec<WingEntry>,
    pub arrows: Vec<ArrowEntry>,
    pub priority_domains: Vec<PriorityAlignment>,
    /// May omit types; an omitted type contributes no bonus.
    #[serde(default)]
    pub sensitivity: Vec<SensitivityEntry>,
    pub impact_texts: Vec<ImpactText>,
    pub trajectories: TrajectoryTable,
    #[serde(default = "default_priority_bonus")]
    pub priority_bonus: i32,
}

impl ReferenceData {
    /// The tables the questionnaire ships with.
    pub fn builtin() -> &'static ReferenceData {
        &BUILTIN
    }

    /// Parse reference data from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ReferenceError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse reference data from a YAML file on disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Serialize to YAML (useful as a template for overrides).
    pub fn to_yaml(&self) -> Result<String, ReferenceError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check consistency without keeping the compiled tables.
    pub fn validate(&self) -> Result<(), ReferenceError> {
        self.compile().map(|_| ())
    }

    /// Validate every table and build the indexed form.
    pub fn compile(&self) -> Result<ReferenceTables, ReferenceError> {
        let weights = compile_weights(&self.foundation_weights)?;
        let wings = compile_wings(&self.wings)?;
        let arrows = compile_arrows(&self.arrows, &wings)?;
        let alignment = compile_alignment(&self.priority_domains)?;
        let sensitivity = compile_sensitivity(&self.sensitivity)?;
        let impact_texts = compile_impact_texts(&self.impact_texts)?;
        check_trajectories(&self.trajectories)?;

        if !(0..=100).contains(&self.priority_bonus) {
            return Err(ReferenceError::invalid(
                "priority_bonus",
                format!("{} is outside 0..=100", self.priority_bonus),
            ));
        }

        log::debug!(
            "Compiled reference data: {} sensitivity rows, priority bonus {}",
            self.sensitivity.len(),
            self.priority_bonus
        );

        Ok(ReferenceTables {
            weights,
            wings,
            arrows,
            alignment,
            sensitivity,
            impact_texts,
            trajectories: self.trajectories.clone(),
            priority_bonus: self.priority_bonus,
        })
    }
}

// ============================================================================
// Compiled form
// ============================================================================

/// Wing pair of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WingPair {
    pub left: TypeNumber,
    pub right: TypeNumber,
}

impl WingPair {
    pub fn contains(&self, t: TypeNumber) -> bool {
        self.left == t || self.right == t
    }
}

/// Arrow targets of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowPair {
    pub integration: TypeNumber,
    pub disintegration: TypeNumber,
}

/// Validated reference tables, indexed for direct lookup.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    weights: [[Vec<(TypeNumber, u32)>; OPTIONS_PER_SET]; FOUNDATION_SETS],
    wings: [WingPair; TypeNumber::COUNT],
    arrows: [ArrowPair; TypeNumber::COUNT],
    alignment: [[LifeDomain; 2]; 3],
    sensitivity: [Option<[i32; 8]>; TypeNumber::COUNT],
    impact_texts: [(String, String); 8],
    trajectories: TrajectoryTable,
    priority_bonus: i32,
}

impl ReferenceTables {
    /// Weighted types for a foundation `set` and `option`.
    pub fn weights(&self, set: usize, option: usize) -> &[(TypeNumber, u32)] {
        self.weights
            .get(set)
            .and_then(|s| s.get(option))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn wings(&self, t: TypeNumber) -> WingPair {
        self.wings[t.index()]
    }

    pub fn arrows(&self, t: TypeNumber) -> ArrowPair {
        self.arrows[t.index()]
    }

    /// Domains aligned with a priority instinct.
    pub fn aligned_domains(&self, instinct: Instinct) -> [LifeDomain; 2] {
        self.alignment[instinct.index()]
    }

    /// Type bonus for a domain; 0 when the type has no sensitivity row.
    pub fn type_bonus(&self, t: TypeNumber, domain: LifeDomain) -> i32 {
        self.sensitivity[t.index()]
            .map(|row| row[domain.index()])
            .unwrap_or(0)
    }

    /// `(high, low)` impact texts for a domain.
    pub fn impact_text(&self, domain: LifeDomain) -> (&str, &str) {
        let (high, low) = &self.impact_texts[domain.index()];
        (high.as_str(), low.as_str())
    }

    pub fn trajectories(&self) -> &TrajectoryTable {
        &self.trajectories
    }

    pub fn priority_bonus(&self) -> i32 {
        self.priority_bonus
    }
}

// ============================================================================
// Validation
// ============================================================================

fn compile_weights(
    sets: &[Vec<Vec<WeightEntry>>],
) -> Result<[[Vec<(TypeNumber, u32)>; OPTIONS_PER_SET]; FOUNDATION_SETS], ReferenceError> {
    const TABLE: &str = "foundation_weights";

    if sets.len() != FOUNDATION_SETS {
        return Err(ReferenceError::shape(
            TABLE,
            format!("expected {} stone sets, found {}", FOUNDATION_SETS, sets.len()),
        ));
    }

    let mut compiled = Vec::with_capacity(FOUNDATION_SETS);
    for (set_idx, options) in sets.iter().enumerate() {
        if options.len() != OPTIONS_PER_SET {
            return Err(ReferenceError::shape(
                TABLE,
                format!(
                    "set {} has {} options, expected {}",
                    set_idx,
                    options.len(),
                    OPTIONS_PER_SET
                ),
            ));
        }

        let mut row = Vec::with_capacity(OPTIONS_PER_SET);
        for (opt_idx, entries) in options.iter().enumerate() {
            if entries.is_empty() {
                return Err(ReferenceError::invalid(
                    TABLE,
                    format!("set {} option {} weights no type", set_idx, opt_idx),
                ));
            }
            let mut seen = HashSet::new();
            for entry in entries {
                if entry.weight == 0 {
                    return Err(ReferenceError::invalid(
                        TABLE,
                        format!(
                            "set {} option {} gives type {} a zero weight",
                            set_idx, opt_idx, entry.type_number
                        ),
                    ));
                }
                if !seen.insert(entry.type_number) {
                    return Err(ReferenceError::Duplicate {
                        table: TABLE,
                        key: format!("type {} in set {} option {}", entry.type_number, set_idx, opt_idx),
                    });
                }
            }
            row.push(
                entries
                    .iter()
                    .map(|e| (e.type_number, e.weight))
                    .collect::<Vec<_>>(),
            );
        }
        let row: [Vec<(TypeNumber, u32)>; OPTIONS_PER_SET] = row
            .try_into()
            .map_err(|_| ReferenceError::shape(TABLE, format!("set {} is malformed", set_idx)))?;
        compiled.push(row);
    }

    compiled
        .try_into()
        .map_err(|_| ReferenceError::shape(TABLE, "stone set count changed during compile"))
}

/// Index type-keyed rows, rejecting duplicates and gaps.
fn index_by_type<T: Copy>(
    table: &'static str,
    rows: impl Iterator<Item = (TypeNumber, T)>,
) -> Result<[T; TypeNumber::COUNT], ReferenceError> {
    let mut slots: [Option<T>; TypeNumber::COUNT] = [None; TypeNumber::COUNT];
    for (type_number, value) in rows {
        let slot = &mut slots[type_number.index()];
        if slot.is_some() {
            return Err(ReferenceError::Duplicate {
                table,
                key: format!("type {}", type_number),
            });
        }
        *slot = Some(value);
    }

    let mut out = Vec::with_capacity(TypeNumber::COUNT);
    for type_number in TypeNumber::ALL {
        match slots[type_number.index()] {
            Some(value) => out.push(value),
            None => return Err(ReferenceError::MissingType { table, type_number }),
        }
    }
    out.try_into()
        .map_err(|_| ReferenceError::shape(table, "expected one row per type"))
}

fn compile_wings(rows: &[WingEntry]) -> Result<[WingPair; TypeNumber::COUNT], ReferenceError> {
    const TABLE: &str = "wings";

    for row in rows {
        if row.left == row.right {
            return Err(ReferenceError::invalid(
                TABLE,
                format!("type {} has the same left and right wing", row.type_number),
            ));
        }
        if row.left == row.type_number || row.right == row.type_number {
            return Err(ReferenceError::invalid(
                TABLE,
                format!("type {} lists itself as a wing", row.type_number),
            ));
        }
    }

    index_by_type(
        TABLE,
        rows.iter().map(|r| {
            (
                r.type_number,
                WingPair {
                    left: r.left,
                    right: r.right,
                },
            )
        }),
    )
}

fn compile_arrows(
    rows: &[ArrowEntry],
    wings: &[WingPair; TypeNumber::COUNT],
) -> Result<[ArrowPair; TypeNumber::COUNT], ReferenceError> {
    const TABLE: &str = "arrows";

    let arrows = index_by_type(
        TABLE,
        rows.iter().map(|r| {
            (
                r.type_number,
                ArrowPair {
                    integration: r.integration,
                    disintegration: r.disintegration,
                },
            )
        }),
    )?;

    let mut integration_targets = HashSet::new();
    let mut disintegration_targets = HashSet::new();
    for type_number in TypeNumber::ALL {
        let pair = arrows[type_number.index()];
        if pair.integration == pair.disintegration {
            return Err(ReferenceError::invalid(
                TABLE,
                format!("type {} has the same integration and disintegration target", type_number),
            ));
        }
        for target in [pair.integration, pair.disintegration] {
            if target == type_number {
                return Err(ReferenceError::invalid(
                    TABLE,
                    format!("type {} points at itself", type_number),
                ));
            }
            if wings[type_number.index()].contains(target) {
                return Err(ReferenceError::invalid(
                    TABLE,
                    format!("type {} points at its own wing {}", type_number, target),
                ));
            }
        }
        if !integration_targets.insert(pair.integration) {
            return Err(ReferenceError::Duplicate {
                table: TABLE,
                key: format!("integration target {}", pair.integration),
            });
        }
        if !disintegration_targets.insert(pair.disintegration) {
            return Err(ReferenceError::Duplicate {
                table: TABLE,
                key: format!("disintegration target {}", pair.disintegration),
            });
        }
    }

    Ok(arrows)
}

fn compile_alignment(rows: &[PriorityAlignment]) -> Result<[[LifeDomain; 2]; 3], ReferenceError> {
    const TABLE: &str = "priority_domains";

    let mut slots: [Option<[LifeDomain; 2]>; 3] = [None; 3];
    for row in rows {
        if row.domains[0] == row.domains[1] {
            return Err(ReferenceError::invalid(
                TABLE,
                format!("{} lists {} twice", row.instinct.tag(), row.domains[0]),
            ));
        }
        let slot = &mut slots[row.instinct.index()];
        if slot.is_some() {
            return Err(ReferenceError::Duplicate {
                table: TABLE,
                key: row.instinct.tag().to_string(),
            });
        }
        *slot = Some(row.domains);
    }

    let mut out = [[LifeDomain::Health; 2]; 3];
    for instinct in Instinct::ALL {
        out[instinct.index()] = slots[instinct.index()].ok_or_else(|| {
            ReferenceError::invalid(TABLE, format!("no domains for {}", instinct.tag()))
        })?;
    }
    Ok(out)
}

fn compile_sensitivity(
    rows: &[SensitivityEntry],
) -> Result<[Option<[i32; 8]>; TypeNumber::COUNT], ReferenceError> {
    const TABLE: &str = "sensitivity";

    let mut out: [Option<[i32; 8]>; TypeNumber::COUNT] = [None; TypeNumber::COUNT];
    for row in rows {
        let slot = &mut out[row.type_number.index()];
        if slot.is_some() {
            return Err(ReferenceError::Duplicate {
                table: TABLE,
                key: format!("type {}", row.type_number),
            });
        }
        let mut bonuses = [0i32; 8];
        for (domain, bonus) in &row.bonuses {
            if !(-100..=100).contains(bonus) {
                return Err(ReferenceError::invalid(
                    TABLE,
                    format!("type {} {} bonus {} is outside -100..=100", row.type_number, domain, bonus),
                ));
            }
            bonuses[domain.index()] = *bonus;
        }
        *slot = Some(bonuses);
    }
    Ok(out)
}

fn compile_impact_texts(rows: &[ImpactText]) -> Result<[(String, String); 8], ReferenceError> {
    const TABLE: &str = "impact_texts";

    let mut slots: [Option<(String, String)>; 8] = Default::default();
    for row in rows {
        if row.high.trim().is_empty() || row.low.trim().is_empty() {
            return Err(ReferenceError::invalid(
                TABLE,
                format!("{} has an empty text", row.domain),
            ));
        }
        let slot = &mut slots[row.domain.index()];
        if slot.is_some() {
            return Err(ReferenceError::Duplicate {
                table: TABLE,
                key: row.domain.to_string(),
            });
        }
        *slot = Some((row.high.clone(), row.low.clone()));
    }

    let mut out: Vec<(String, String)> = Vec::with_capacity(8);
    for domain in LifeDomain::ALL {
        match slots[domain.index()].take() {
            Some(texts) => out.push(texts),
            None => {
                return Err(ReferenceError::invalid(
                    TABLE,
                    format!("no texts for {}", domain),
                ))
            }
        }
    }
    out.try_into()
        .map_err(|_| ReferenceError::shape(TABLE, "expected one row per domain"))
}

fn check_trajectories(table: &TrajectoryTable) -> Result<(), ReferenceError> {
    let empty = [&table.declining, &table.stable, &table.improving]
        .iter()
        .flat_map(|row| row.iter())
        .any(|label| label.trim().is_empty());
    if empty {
        return Err(ReferenceError::invalid("trajectories", "empty label"));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> ReferenceData {
        ReferenceData::builtin().clone()
    }

    #[test]
    fn test_builtin_compiles() {
        let tables = ReferenceData::builtin().compile().unwrap();
        let one = TypeNumber::new(1).unwrap();
        assert_eq!(
            tables.wings(one),
            WingPair {
                left: TypeNumber::new(9).unwrap(),
                right: TypeNumber::new(2).unwrap(),
            }
        );
        assert_eq!(tables.arrows(one).integration.get(), 7);
        assert_eq!(tables.arrows(one).disintegration.get(), 4);
        assert_eq!(tables.priority_bonus(), 15);
        assert_eq!(tables.weights(0, 0).len(), 3);
        assert!(tables.weights(9, 0).is_empty());
    }

    #[test]
    fn test_builtin_wings_are_cycle_neighbours() {
        let tables = ReferenceData::builtin().compile().unwrap();
        for t in TypeNumber::ALL {
            let n = t.get();
            let prev = if n == 1 { 9 } else { n - 1 };
            let next = if n == 9 { 1 } else { n + 1 };
            let pair = tables.wings(t);
            assert_eq!((pair.left.get(), pair.right.get()), (prev, next));
        }
    }

    #[test]
    fn test_missing_arrow_row_is_config_error() {
        let mut data = builtin();
        data.arrows.retain(|a| a.type_number.get() != 5);
        match data.compile() {
            Err(ReferenceError::MissingType { table, type_number }) => {
                assert_eq!(table, "arrows");
                assert_eq!(type_number.get(), 5);
            }
            other => panic!("expected MissingType, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_wing_row_rejected() {
        let mut data = builtin();
        let first = data.wings[0];
        data.wings.push(first);
        assert!(matches!(data.compile(), Err(ReferenceError::Duplicate { table: "wings", .. })));
    }

    #[test]
    fn test_arrow_onto_wing_rejected() {
        let mut data = builtin();
        // Type 1's wings are 9 and 2.
        data.arrows[0].integration = TypeNumber::new(2).unwrap();
        let err = data.compile().unwrap_err();
        assert!(err.to_string().contains("wing"), "{}", err);
    }

    #[test]
    fn test_weight_table_shape_checked() {
        let mut data = builtin();
        data.foundation_weights.pop();
        assert!(matches!(data.compile(), Err(ReferenceError::Shape { .. })));

        let mut data = builtin();
        data.foundation_weights[2].pop();
        assert!(matches!(data.compile(), Err(ReferenceError::Shape { .. })));

        let mut data = builtin();
        data.foundation_weights[0][0][0].weight = 0;
        assert!(matches!(data.compile(), Err(ReferenceError::Invalid { .. })));
    }

    #[test]
    fn test_sensitivity_may_omit_types() {
        let mut data = builtin();
        data.sensitivity.retain(|s| s.type_number.get() != 3);
        let tables = data.compile().unwrap();
        let three = TypeNumber::new(3).unwrap();
        for domain in LifeDomain::ALL {
            assert_eq!(tables.type_bonus(three, domain), 0);
        }
    }

    fn arrow_row(data: &mut ReferenceData, n: u8) -> &mut ArrowEntry {
        data.arrows
            .iter_mut()
            .find(|a| a.type_number.get() == n)
            .unwrap()
    }

    #[test]
    fn test_arrow_targets_must_be_permutation() {
        // Type 1 already integrates to 7.
        let mut data = builtin();
        arrow_row(&mut data, 2).integration = TypeNumber::new(7).unwrap();
        match data.compile() {
            Err(ReferenceError::Duplicate { table, key }) => {
                assert_eq!(table, "arrows");
                assert_eq!(key, "integration target 7");
            }
            other => panic!("expected Duplicate, got {:?}", other),
        }

        // Type 2 already disintegrates to 8.
        let mut data = builtin();
        arrow_row(&mut data, 3).disintegration = TypeNumber::new(8).unwrap();
        match data.compile() {
            Err(ReferenceError::Duplicate { table, key }) => {
                assert_eq!(table, "arrows");
                assert_eq!(key, "disintegration target 8");
            }
            other => panic!("expected Duplicate, got {:?}", other),
        }
    }

    #[test]
    fn test_arrow_onto_own_type_rejected() {
        let mut data = builtin();
        arrow_row(&mut data, 1).integration = TypeNumber::new(1).unwrap();
        let err = data.compile().unwrap_err();
        assert!(matches!(err, ReferenceError::Invalid { table: "arrows", .. }));
        assert!(err.to_string().contains("points at itself"), "{}", err);
    }

    #[test]
    fn test_self_wing_rejected() {
        let mut data = builtin();
        let row = data.wings.iter_mut().find(|w| w.type_number.get() == 1).unwrap();
        row.left = TypeNumber::new(1).unwrap();
        let err = data.compile().unwrap_err();
        assert!(matches!(err, ReferenceError::Invalid { table: "wings", .. }));
        assert!(err.to_string().contains("type 1 lists itself as a wing"), "{}", err);

        let mut data = builtin();
        let row = data.wings.iter_mut().find(|w| w.type_number.get() == 1).unwrap();
        row.left = row.right;
        let err = data.compile().unwrap_err();
        assert!(err.to_string().contains("same left and right wing"), "{}", err);
    }

    #[test]
    fn test_priority_bonus_range_checked() {
        for bonus in [-1, 101] {
            let mut data = builtin();
            data.priority_bonus = bonus;
            assert!(
                matches!(data.compile(), Err(ReferenceError::Invalid { table: "priority_bonus", .. })),
                "bonus {} accepted",
                bonus
            );
        }
        for bonus in [0, 100] {
            let mut data = builtin();
            data.priority_bonus = bonus;
            assert_eq!(data.compile().unwrap().priority_bonus(), bonus);
        }
    }

    #[test]
    fn test_sensitivity_bonus_range_checked() {
        for bonus in [-101, 500] {
            let mut data = builtin();
            let row = data
                .sensitivity
                .iter_mut()
                .find(|s| s.type_number.get() == 1)
                .unwrap();
            row.bonuses.insert(LifeDomain::Health, bonus);
            assert!(
                matches!(data.compile(), Err(ReferenceError::Invalid { table: "sensitivity", .. })),
                "bonus {} accepted",
                bonus
            );
        }

        let mut data = builtin();
        let row = data
            .sensitivity
            .iter_mut()
            .find(|s| s.type_number.get() == 1)
            .unwrap();
        row.bonuses.insert(LifeDomain::Health, -100);
        let tables = data.compile().unwrap();
        assert_eq!(tables.type_bonus(TypeNumber::new(1).unwrap(), LifeDomain::Health), -100);
    }

    #[test]
    fn test_duplicate_priority_domains_rejected() {
        let mut data = builtin();
        let first = data.priority_domains[0];
        data.priority_domains.push(first);
        assert!(matches!(
            data.compile(),
            Err(ReferenceError::Duplicate { table: "priority_domains", .. })
        ));
    }

    #[test]
    fn test_missing_impact_text_rejected() {
        let mut data = builtin();
        data.impact_texts.retain(|t| t.domain != LifeDomain::Growth);
        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("no texts for Personal Growth"), "{}", err);
    }

    #[test]
    fn test_yaml_file_roundtrip() {
        use std::io::Write;

        let yaml = ReferenceData::builtin().to_yaml().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let loaded = ReferenceData::from_yaml_file(file.path()).unwrap();
        assert_eq!(&loaded, ReferenceData::builtin());
        loaded.validate().unwrap();
    }

    #[test]
    fn test_yaml_rejects_bad_type_number() {
        let yaml = ReferenceData::builtin()
            .to_yaml()
            .unwrap()
            .replacen("type: 1\n", "type: 11\n", 1);
        assert!(matches!(ReferenceData::from_yaml(&yaml), Err(ReferenceError::Yaml(_))));
    }

    #[test]
    fn test_priority_bonus_defaults_when_omitted() {
        let yaml = ReferenceData::builtin().to_yaml().unwrap();
        let without: String = yaml
            .lines()
            .filter(|l| !l.starts_with("priority_bonus"))
            .collect::<Vec<_>>()
            .join("\n");
        let data = ReferenceData::from_yaml(&without).unwrap();
        assert_eq!(data.priority_bonus, 15);
    }
}
