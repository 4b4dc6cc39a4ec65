//! One-vs-rest training: one independent concept per class value.
//!
//! Each concept is a sequential fold over the same examples; concepts share
//! nothing mutable, so they train on the rayon pool side by side.

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::schema::{Instance, Schema};
use crate::trainer::{CandidateElimination, TrainerConfig, TrainingResult};

/// Result of learning one class value as the positive label.
#[derive(Debug, Clone)]
pub struct Concept {
    pub label: String,
    pub result: TrainingResult,
}

/// Train one learner per class value, returned in class-domain order.
pub fn train_one_vs_rest(schema: &Schema, instances: &[Instance]) -> Result<Vec<Concept>> {
    let labels = schema.class_attribute()?.values.clone();
    debug!("training {} concepts over {} examples", labels.len(), instances.len());

    labels
        .into_par_iter()
        .map(|label| {
            let mut learner = CandidateElimination::new(
                schema.clone(),
                TrainerConfig::with_positive_label(label.clone()),
            )?;
            let result = learner.train(instances)?;
            Ok(Concept { label, result })
        })
        .collect()
}
