//! Serializable learner state.
//!
//! A snapshot carries the schema alongside the boundaries so a saved model
//! can validate and classify instances on its own.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VersionSpaceError};
use crate::hypothesis::{Hypothesis, Slot};
use crate::schema::Schema;
use crate::trainer::CandidateElimination;

/// Format version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub version: u32,
    pub schema: Schema,
    pub positive_label: String,
    pub specific: Vec<Hypothesis>,
    pub general: Vec<Hypothesis>,
    pub examples_seen: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed_at: Option<usize>,
}

impl ModelSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

impl CandidateElimination {
    pub fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            version: SNAPSHOT_VERSION,
            schema: self.schema().clone(),
            positive_label: self.positive_label().to_string(),
            specific: self.specific().to_vec(),
            general: self.general().to_vec(),
            examples_seen: self.examples_seen(),
            collapsed_at: self.collapsed_at(),
        }
    }

    /// Restore a learner, checking every hypothesis against the schema.
    pub fn from_snapshot(snapshot: ModelSnapshot) -> Result<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(VersionSpaceError::snapshot(format!(
                "unsupported version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }
        check_schema(&snapshot.schema)?;
        let seed = matches!(snapshot.specific.as_slice(), [s] if is_seed(s));
        for h in &snapshot.specific {
            check_hypothesis(&snapshot.schema, h, seed)?;
        }
        for h in &snapshot.general {
            check_hypothesis(&snapshot.schema, h, false)?;
        }
        CandidateElimination::from_parts(
            snapshot.schema,
            snapshot.positive_label,
            snapshot.specific,
            snapshot.general,
            snapshot.examples_seen,
            snapshot.collapsed_at,
        )
    }
}

fn check_schema(schema: &Schema) -> Result<()> {
    schema
        .class_attribute()
        .map_err(|e| VersionSpaceError::snapshot(format!("bad schema: {}", e)))?;
    if schema.arity() == 0 {
        return Err(VersionSpaceError::snapshot("schema has no non-class attributes"));
    }
    Ok(())
}

/// The untouched bottom seed: every slot empty.
fn is_seed(h: &Hypothesis) -> bool {
    !h.is_empty() && h.slots().iter().all(Slot::is_empty)
}

/// `seed_allowed` is set only when S is exactly one bottom seed; `∅` slots
/// are rejected everywhere else.
fn check_hypothesis(schema: &Schema, h: &Hypothesis, seed_allowed: bool) -> Result<()> {
    if h.is_bottom() && !seed_allowed {
        return Err(VersionSpaceError::snapshot(format!(
            "hypothesis {} holds an empty slot outside the initial S seed",
            h
        )));
    }
    if h.len() != schema.arity() {
        return Err(VersionSpaceError::snapshot(format!(
            "hypothesis {} has {} slots, schema has {} attributes",
            h,
            h.len(),
            schema.arity()
        )));
    }
    for (attribute, slot) in schema.features().zip(h.slots()) {
        if let Slot::Value(v) = slot {
            if !attribute.contains(v) {
                return Err(VersionSpaceError::unknown_value(&attribute.name, v));
            }
        }
    }
    Ok(())
}
