//! # Verspace
//!
//! Version-space concept learning over nominal attributes.
//!
//! Verspace learns a binary target concept from labeled examples with the
//! Candidate-Elimination algorithm. Instead of committing to one hypothesis
//! it keeps every conjunctive hypothesis consistent with the data, through
//! the two boundaries of that set.
//!
//! ## Quick Start
//!
//! ```rust
//! use verspace::prelude::*;
//!
//! let text = "\
//! @relation sky
//! @attribute sky {sunny, rainy}
//! @attribute temp {warm, cold}
//! @attribute enjoy {yes, no}
//! @data
//! sunny, warm, yes
//! rainy, warm, no
//! sunny, cold, yes
//! ";
//!
//! let data = parse_arff(text).unwrap().with_last_as_class().unwrap();
//! let mut learner = CandidateElimination::new(data.schema().clone(), TrainerConfig::default()).unwrap();
//! let result = learner.train(&data.instances().unwrap()).unwrap();
//!
//! println!("{}", result);
//! assert!(result.converged().is_some());
//! ```
//!
//! ## Architecture
//!
//! - [`verspace_core`] - Hypotheses, lattice moves, the boundary-set trainer
//! - [`verspace_data`] - ARFF loading and class selection
//!
//! ## Key Concepts
//!
//! | Term | Meaning |
//! |------|---------|
//! | S | Most specific hypotheses consistent with the examples |
//! | G | Most general hypotheses consistent with the examples |
//! | Version space | Every hypothesis between S and G |
//! | Collapse | S or G empty: no conjunctive hypothesis fits the data |
//!
//! A learner predicts positive only once S and G have met in a single
//! hypothesis that covers the instance; every other case is negative.

pub use verspace_core as core;
pub use verspace_data as data;

/// Prelude module for convenient imports.
///
/// ```rust
/// use verspace::prelude::*;
/// ```
pub mod prelude {
    pub use verspace_core::prelude::*;

    pub use verspace_data::arff::parse as parse_arff;
    pub use verspace_data::{load_arff, DataError, Dataset, Row};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
