//! Verspace Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use verspace_core::prelude::*;
//! ```

pub use crate::hypothesis::{Hypothesis, Slot};
pub use crate::schema::{Attribute, Instance, Schema};

pub use crate::lattice::{
    covers, covers_values, generalize_to_fit, minimal_specializations, prune_dominated, Retain,
};

pub use crate::trainer::{
    CandidateElimination, Label, Observation, TrainerConfig, TrainingResult,
    DEFAULT_POSITIVE_LABEL,
};

pub use crate::concepts::{train_one_vs_rest, Concept};
pub use crate::render::Boundaries;
pub use crate::snapshot::ModelSnapshot;
pub use crate::space::{VersionSpace, Vote};

pub use crate::error::{Result, VersionSpaceError};
