//! Read-only view of the hypotheses bounded by S and G.

use serde::{Deserialize, Serialize};

use crate::hypothesis::{Hypothesis, Slot};
use crate::lattice::{covers, covers_values};
use crate::schema::Schema;
use crate::trainer::converged;

/// How the members of a version space split on one instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub positive: usize,
    pub negative: usize,
}

impl Vote {
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    /// Every member agrees.
    pub fn is_unanimous(&self) -> bool {
        self.positive == 0 || self.negative == 0
    }
}

/// The set `{ h | ∃s∈S: h ⪰ s, ∃g∈G: g ⪰ h }`.
#[derive(Debug, Clone, Copy)]
pub struct VersionSpace<'a> {
    schema: &'a Schema,
    specific: &'a [Hypothesis],
    general: &'a [Hypothesis],
}

impl<'a> VersionSpace<'a> {
    pub fn new(schema: &'a Schema, specific: &'a [Hypothesis], general: &'a [Hypothesis]) -> Self {
        Self {
            schema,
            specific,
            general,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.specific.is_empty() || self.general.is_empty()
    }

    pub fn is_converged(&self) -> bool {
        self.hypothesis().is_some()
    }

    /// The single hypothesis left, if S and G have met.
    pub fn hypothesis(&self) -> Option<&'a Hypothesis> {
        converged(self.specific, self.general)
    }

    /// Whether `h` lies between the boundaries. The bottom seed of S counts
    /// as lying below every hypothesis.
    pub fn contains(&self, h: &Hypothesis) -> bool {
        self.specific.iter().any(|s| s.is_bottom() || covers(h, s))
            && self.general.iter().any(|g| covers(g, h))
    }

    /// Size of the whole hypothesis space (each domain plus `?`), saturating.
    pub fn space_size(&self) -> u64 {
        self.schema
            .features()
            .fold(1u64, |acc, a| acc.saturating_mul(a.values.len() as u64 + 1))
    }

    /// Every representable hypothesis inside the boundaries.
    ///
    /// Walks the full product of each attribute's domain plus `?`, so the
    /// cost is exponential in the number of attributes.
    pub fn members(&self) -> Vec<Hypothesis> {
        if self.is_empty() {
            return Vec::new();
        }
        let choices: Vec<Vec<Slot>> = self
            .schema
            .features()
            .map(|a| {
                a.values
                    .iter()
                    .map(|v| Slot::Value(v.clone()))
                    .chain(std::iter::once(Slot::Any))
                    .collect()
            })
            .collect();

        let mut out = Vec::new();
        let mut current: Vec<Slot> = Vec::with_capacity(choices.len());
        self.walk(&choices, &mut current, &mut out);
        out
    }

    fn walk(&self, choices: &[Vec<Slot>], current: &mut Vec<Slot>, out: &mut Vec<Hypothesis>) {
        let depth = current.len();
        if depth == choices.len() {
            let h = Hypothesis::new(current.clone());
            if self.contains(&h) {
                out.push(h);
            }
            return;
        }
        for slot in &choices[depth] {
            current.push(slot.clone());
            self.walk(choices, current, out);
            current.pop();
        }
    }

    /// Count members that do and do not match `values`.
    pub fn vote(&self, values: &[String]) -> Vote {
        self.members()
            .iter()
            .fold(Vote::default(), |mut vote, h| {
                if covers_values(h, values) {
                    vote.positive += 1;
                } else {
                    vote.negative += 1;
                }
                vote
            })
    }
}
