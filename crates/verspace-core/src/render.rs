//! Human-readable rendering of boundary sets.

use std::fmt;

use crate::hypothesis::Hypothesis;
use crate::trainer::{CandidateElimination, TrainingResult};

/// Compact two-line view of S and G, used for per-example traces.
#[derive(Debug, Clone, Copy)]
pub struct Boundaries<'a> {
    pub specific: &'a [Hypothesis],
    pub general: &'a [Hypothesis],
}

impl<'a> Boundaries<'a> {
    pub fn new(specific: &'a [Hypothesis], general: &'a [Hypothesis]) -> Self {
        Self { specific, general }
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, name: &str, set: &[Hypothesis]) -> fmt::Result {
    write!(f, "  {}: ", name)?;
    if set.is_empty() {
        return f.write_str("[empty]");
    }
    for (i, h) in set.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", h)?;
    }
    Ok(())
}

impl fmt::Display for Boundaries<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_line(f, "S", self.specific)?;
        writeln!(f)?;
        write_line(f, "G", self.general)
    }
}

/// Full report of a learned version space.
fn write_report(
    f: &mut fmt::Formatter<'_>,
    specific: &[Hypothesis],
    general: &[Hypothesis],
) -> fmt::Result {
    if specific.is_empty() || general.is_empty() {
        return writeln!(f, "Candidate-Elimination: version space is empty (inconsistent)");
    }
    writeln!(f, "Candidate-Elimination")?;
    writeln!(f, "---------------------")?;
    writeln!(f, "S (most specific):")?;
    for h in specific {
        writeln!(f, "\t{}", h)?;
    }
    writeln!(f, "G (most general):")?;
    for h in general {
        writeln!(f, "\t{}", h)?;
    }
    Ok(())
}

impl fmt::Display for CandidateElimination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self.specific(), self.general())
    }
}

impl fmt::Display for TrainingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, &self.specific, &self.general)
    }
}
