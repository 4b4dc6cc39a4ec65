//! Hypothesis representation.
//!
//! A hypothesis is a conjunction of per-attribute constraints. Each slot
//! either pins an attribute to one value, accepts any value, or (only in
//! the initial most-specific seed) accepts nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Constraint on a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Matches exactly this value.
    Value(String),
    /// Matches any value.
    Any,
    /// Matches nothing. Only the bottom seed of S carries it.
    Empty,
}

impl Slot {
    pub fn value(v: impl Into<String>) -> Self {
        Slot::Value(v.into())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Slot::Any)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Whether this slot admits `value`.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Slot::Value(v) => v == value,
            Slot::Any => true,
            Slot::Empty => false,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Value(v) => f.write_str(v),
            Slot::Any => f.write_str("?"),
            Slot::Empty => f.write_str("∅"),
        }
    }
}

/// A candidate concept: one [`Slot`] per non-class attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hypothesis(Vec<Slot>);

impl Hypothesis {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self(slots)
    }

    /// The most general hypothesis: every slot is [`Slot::Any`].
    pub fn top(arity: usize) -> Self {
        Self(vec![Slot::Any; arity])
    }

    /// The most specific hypothesis: every slot is [`Slot::Empty`].
    pub fn bottom(arity: usize) -> Self {
        Self(vec![Slot::Empty; arity])
    }

    /// Lift an attribute vector to the hypothesis that matches only it.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(|v| Slot::Value(v.into())).collect())
    }

    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this is the bottom seed (contains an [`Slot::Empty`]).
    pub fn is_bottom(&self) -> bool {
        self.0.iter().any(Slot::is_empty)
    }

    /// Copy with slot `index` replaced.
    pub fn with_slot(&self, index: usize, slot: Slot) -> Self {
        let mut slots = self.0.clone();
        slots[index] = slot;
        Self(slots)
    }

    /// Number of [`Slot::Any`] positions.
    pub fn wildcards(&self) -> usize {
        self.0.iter().filter(|s| s.is_any()).count()
    }
}

impl From<Vec<Slot>> for Hypothesis {
    fn from(slots: Vec<Slot>) -> Self {
        Self(slots)
    }
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", slot)?;
        }
        f.write_str("]")
    }
}
