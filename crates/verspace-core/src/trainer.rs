//! Candidate-Elimination: maintenance of the S and G boundary sets.
//!
//! The trainer owns both boundaries. Each call to
//! [`CandidateElimination::observe`] folds one labeled example into them:
//!
//! - **Positive**: drop G members that miss it, minimally generalize S
//!   members that miss it (keeping only generalizations some G member still
//!   covers), then drop S members more general than another.
//! - **Negative**: drop S members that match it, replace each matching G
//!   member by its minimal specializations that stay above some S member,
//!   then drop G members more specific than another.
//!
//! When either boundary empties the version space has collapsed: no
//! representable hypothesis fits the data. Collapse is a terminal state,
//! not an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, VersionSpaceError};
use crate::hypothesis::Hypothesis;
use crate::lattice::{
    covers, covers_values, generalize_to_fit, minimal_specializations, prune_dominated, Retain,
};
use crate::render::Boundaries;
use crate::schema::{Instance, Schema};
use crate::space::VersionSpace;

/// Default value of the positive class.
pub const DEFAULT_POSITIVE_LABEL: &str = "yes";

/// Learner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Class value treated as positive; every other value is negative.
    pub positive_label: String,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            positive_label: DEFAULT_POSITIVE_LABEL.to_string(),
        }
    }
}

impl TrainerConfig {
    pub fn with_positive_label(label: impl Into<String>) -> Self {
        Self {
            positive_label: label.into(),
        }
    }
}

/// Binary prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    pub fn is_positive(self) -> bool {
        matches!(self, Label::Positive)
    }
}

/// Outcome of a single [`CandidateElimination::observe`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// A positive example was folded in.
    Positive,
    /// A negative example was folded in.
    Negative,
    /// The version space is empty; the example was not (or no longer) used.
    Collapsed,
}

/// Final state after a training run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub specific: Vec<Hypothesis>,
    pub general: Vec<Hypothesis>,
    /// Examples that reached the boundaries, including the collapsing one.
    pub examples_seen: usize,
    /// Zero-based index of the example that emptied a boundary.
    pub collapsed_at: Option<usize>,
}

impl TrainingResult {
    pub fn is_collapsed(&self) -> bool {
        self.specific.is_empty() || self.general.is_empty()
    }

    /// The single hypothesis when S and G have met.
    pub fn converged(&self) -> Option<&Hypothesis> {
        converged(&self.specific, &self.general)
    }
}

pub(crate) fn converged<'a>(
    specific: &'a [Hypothesis],
    general: &'a [Hypothesis],
) -> Option<&'a Hypothesis> {
    match (specific, general) {
        ([s], [g]) if s == g => Some(s),
        _ => None,
    }
}

/// Candidate-Elimination learner for one binary concept.
#[derive(Debug, Clone)]
pub struct CandidateElimination {
    schema: Schema,
    positive_label: String,
    specific: Vec<Hypothesis>,
    general: Vec<Hypothesis>,
    examples_seen: usize,
    collapsed_at: Option<usize>,
}

impl CandidateElimination {
    /// Create a learner with S = {bottom} and G = {top}.
    ///
    /// Fails if the schema has no class position, no other attributes, or a
    /// class domain without the positive label.
    pub fn new(schema: Schema, config: TrainerConfig) -> Result<Self> {
        let class = schema.class_attribute()?;
        if !class.contains(&config.positive_label) {
            return Err(VersionSpaceError::UnknownPositiveLabel {
                label: config.positive_label,
                class: class.name.clone(),
            });
        }
        let arity = schema.arity();
        if arity == 0 {
            return Err(VersionSpaceError::NoAttributes);
        }
        Ok(Self {
            schema,
            positive_label: config.positive_label,
            specific: vec![Hypothesis::bottom(arity)],
            general: vec![Hypothesis::top(arity)],
            examples_seen: 0,
            collapsed_at: None,
        })
    }

    /// Rebuild a learner from already computed boundaries.
    pub(crate) fn from_parts(
        schema: Schema,
        positive_label: String,
        specific: Vec<Hypothesis>,
        general: Vec<Hypothesis>,
        examples_seen: usize,
        collapsed_at: Option<usize>,
    ) -> Result<Self> {
        let mut learner = Self::new(schema, TrainerConfig::with_positive_label(positive_label))?;
        learner.specific = specific;
        learner.general = general;
        learner.examples_seen = examples_seen;
        learner.collapsed_at = collapsed_at;
        Ok(learner)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn positive_label(&self) -> &str {
        &self.positive_label
    }

    /// The S boundary, in insertion order.
    pub fn specific(&self) -> &[Hypothesis] {
        &self.specific
    }

    /// The G boundary, in insertion order.
    pub fn general(&self) -> &[Hypothesis] {
        &self.general
    }

    pub fn examples_seen(&self) -> usize {
        self.examples_seen
    }

    pub fn collapsed_at(&self) -> Option<usize> {
        self.collapsed_at
    }

    pub fn is_collapsed(&self) -> bool {
        self.specific.is_empty() || self.general.is_empty()
    }

    /// The single remaining hypothesis, once S and G have met.
    pub fn converged(&self) -> Option<&Hypothesis> {
        converged(&self.specific, &self.general)
    }

    pub fn version_space(&self) -> VersionSpace<'_> {
        VersionSpace::new(&self.schema, &self.specific, &self.general)
    }

    pub fn boundaries(&self) -> Boundaries<'_> {
        Boundaries::new(&self.specific, &self.general)
    }

    /// Fold one labeled example into the boundaries.
    ///
    /// Once collapsed, further calls return [`Observation::Collapsed`]
    /// without looking at the instance.
    pub fn observe(&mut self, instance: &Instance) -> Result<Observation> {
        if self.is_collapsed() {
            return Ok(Observation::Collapsed);
        }

        self.schema.validate_values(&instance.values)?;
        let class = instance
            .class
            .as_deref()
            .ok_or(VersionSpaceError::UnlabeledInstance)?;
        let class_attribute = self.schema.class_attribute()?;
        if !class_attribute.contains(class) {
            return Err(VersionSpaceError::unknown_value(&class_attribute.name, class));
        }

        let index = self.examples_seen;
        self.examples_seen += 1;
        let positive = class == self.positive_label;
        let x = &instance.values;

        debug!(
            "example {} ({}): {:?}",
            index + 1,
            if positive { "positive" } else { "negative" },
            x
        );
        debug!("before:\n{}", self.boundaries());

        if positive {
            self.general.retain(|g| covers_values(g, x));
            self.generalize_specific(x);
        } else {
            self.specific.retain(|s| !covers_values(s, x));
            self.specialize_general(x);
        }

        debug!("after:\n{}", self.boundaries());

        if self.is_collapsed() {
            self.collapsed_at = Some(index);
            info!(
                "version space collapsed at example {} (|S|={}, |G|={})",
                index + 1,
                self.specific.len(),
                self.general.len()
            );
            return Ok(Observation::Collapsed);
        }

        Ok(if positive {
            Observation::Positive
        } else {
            Observation::Negative
        })
    }

    /// Observe every instance in order, stopping at collapse.
    pub fn train<'a, I>(&mut self, instances: I) -> Result<TrainingResult>
    where
        I: IntoIterator<Item = &'a Instance>,
    {
        for instance in instances {
            if self.observe(instance)? == Observation::Collapsed {
                break;
            }
        }
        Ok(self.result())
    }

    /// Snapshot of the current boundaries.
    pub fn result(&self) -> TrainingResult {
        TrainingResult {
            specific: self.specific.clone(),
            general: self.general.clone(),
            examples_seen: self.examples_seen,
            collapsed_at: self.collapsed_at,
        }
    }

    /// Predict the label of an attribute vector.
    ///
    /// Commits to a prediction only when S and G have converged to a single
    /// hypothesis; otherwise the answer is [`Label::Negative`].
    pub fn classify(&self, values: &[String]) -> Result<Label> {
        self.schema.validate_values(values)?;
        Ok(match self.converged() {
            Some(h) if covers_values(h, values) => Label::Positive,
            _ => Label::Negative,
        })
    }

    /// [`classify`](Self::classify) on an instance; its class is ignored.
    pub fn classify_instance(&self, instance: &Instance) -> Result<Label> {
        self.classify(&instance.values)
    }

    fn generalize_specific(&mut self, x: &[String]) {
        let (kept, missed): (Vec<_>, Vec<_>) = std::mem::take(&mut self.specific)
            .into_iter()
            .partition(|s| !s.is_bottom() && covers_values(s, x));

        let mut added: Vec<Hypothesis> = Vec::new();
        for s in missed {
            let h = if s.is_bottom() {
                Hypothesis::from_values(x.iter().cloned())
            } else {
                let h = generalize_to_fit(&s, x);
                if !self.general.iter().any(|g| covers(g, &h)) {
                    continue;
                }
                h
            };
            if !added.contains(&h) && !kept.contains(&h) {
                added.push(h);
            }
        }

        let mut specific = kept;
        specific.extend(added);
        self.specific = prune_dominated(specific, Retain::MostSpecific);
    }

    fn specialize_general(&mut self, x: &[String]) {
        let (matched, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.general)
            .into_iter()
            .partition(|g| covers_values(g, x));

        let mut added: Vec<Hypothesis> = Vec::new();
        for g in &matched {
            for candidate in minimal_specializations(g, x, &self.schema) {
                if !self.is_above_specific(&candidate) {
                    continue;
                }
                if !added.contains(&candidate) && !kept.contains(&candidate) {
                    added.push(candidate);
                }
            }
        }

        let mut general = kept;
        general.extend(added);
        self.general = prune_dominated(general, Retain::MostGeneral);
    }

    /// Some S member lies below `h`. The bottom seed lies below everything.
    fn is_above_specific(&self, h: &Hypothesis) -> bool {
        self.specific
            .iter()
            .any(|s| s.is_bottom() || covers(h, s))
    }
}
