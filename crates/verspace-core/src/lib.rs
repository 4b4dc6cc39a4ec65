//! # Verspace Core
//!
//! Version-space concept learning over nominal attributes.
//!
//! The crate keeps the exact set of conjunctive hypotheses consistent with
//! every labeled example seen so far, represented by its two boundaries:
//!
//! - **S**: the most specific consistent hypotheses
//! - **G**: the most general consistent hypotheses
//!
//! [`trainer::CandidateElimination`] maintains both boundaries example by
//! example using the pure lattice moves in [`lattice`].
//!
//! ## Quick Start
//!
//! ```rust
//! use verspace_core::prelude::*;
//!
//! let schema = Schema::new(vec![
//!     Attribute::new("sky", ["sunny", "rainy"]),
//!     Attribute::new("temp", ["warm", "cold"]),
//!     Attribute::new("enjoy", ["yes", "no"]),
//! ])
//! .with_last_as_class()
//! .unwrap();
//!
//! let mut learner = CandidateElimination::new(schema, TrainerConfig::default()).unwrap();
//! let result = learner
//!     .train(&[
//!         Instance::labeled(["sunny", "warm"], "yes"),
//!         Instance::labeled(["rainy", "warm"], "no"),
//!         Instance::labeled(["sunny", "cold"], "yes"),
//!     ])
//!     .unwrap();
//!
//! assert!(result.converged().is_some());
//! let label = learner.classify(&["sunny".into(), "warm".into()]).unwrap();
//! assert_eq!(label, Label::Positive);
//! ```

pub mod concepts;
pub mod error;
pub mod hypothesis;
pub mod lattice;
pub mod prelude;
pub mod render;
pub mod schema;
pub mod snapshot;
pub mod space;
pub mod trainer;
