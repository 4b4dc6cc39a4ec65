//! # Verspace Data
//!
//! Loads nominal datasets for the learners in `verspace-core`.
//!
//! The loader describes attributes and rows; choosing the class attribute is
//! an explicit step, since a learner refuses a schema without one:
//!
//! ```rust
//! use verspace_data::arff;
//!
//! let text = "@relation r\n@attribute sky {sunny, rainy}\n@attribute enjoy {yes, no}\n@data\nsunny, yes\n";
//! let data = arff::parse(text).unwrap().with_last_as_class().unwrap();
//! let instances = data.instances().unwrap();
//! assert_eq!(instances[0].class.as_deref(), Some("yes"));
//! ```

pub mod arff;
pub mod dataset;
pub mod error;

pub use arff::load_arff;
pub use dataset::{Dataset, Row};
pub use error::{DataError, Result};
