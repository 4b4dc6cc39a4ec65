//! Property tests: boundary maintenance over noise-free data drawn from a
//! conjunctive target concept.

use std::collections::HashSet;

use proptest::prelude::*;
use verspace_core::lattice::{covers_values, is_antichain};
use verspace_core::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn distinct(set: &[Hypothesis]) -> bool {
    set.iter().collect::<HashSet<_>>().len() == set.len()
}

#[test]
fn distinct_sees_non_adjacent_duplicates() {
    let a = Hypothesis::top(2);
    let b = Hypothesis::bottom(2);
    assert!(distinct(&[a.clone(), b.clone()]));
    assert!(!distinct(&[a.clone(), b, a]));
}

/// Domain sizes for one to three attributes.
fn arb_domains() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(2usize..=3, 1..=3)
}

fn build_schema(domains: &[usize]) -> Schema {
    let mut attributes: Vec<Attribute> = domains
        .iter()
        .enumerate()
        .map(|(i, &n)| Attribute::new(format!("a{}", i), (0..n).map(|j| format!("v{}_{}", i, j))))
        .collect();
    attributes.push(Attribute::new("class", ["yes", "no"]));
    Schema::new(attributes).with_last_as_class().unwrap()
}

/// A target hypothesis (None = wildcard) and a stream of examples, all as
/// value indices.
fn arb_problem() -> impl Strategy<Value = (Vec<usize>, Vec<Option<usize>>, Vec<Vec<usize>>)> {
    arb_domains().prop_flat_map(|domains| {
        let target = domains
            .iter()
            .map(|&n| prop::option::of(0..n))
            .collect::<Vec<_>>();
        let example = domains.iter().map(|&n| 0..n).collect::<Vec<_>>();
        (
            Just(domains.clone()),
            target,
            prop::collection::vec(example, 1..12),
        )
    })
}

fn target_hypothesis(target: &[Option<usize>]) -> Hypothesis {
    Hypothesis::new(
        target
            .iter()
            .enumerate()
            .map(|(i, t)| match t {
                Some(j) => Slot::value(format!("v{}_{}", i, j)),
                None => Slot::Any,
            })
            .collect(),
    )
}

fn label(target: &Hypothesis, example: &[usize]) -> Instance {
    let values: Vec<String> = example
        .iter()
        .enumerate()
        .map(|(i, j)| format!("v{}_{}", i, j))
        .collect();
    let class = if covers_values(target, &values) { "yes" } else { "no" };
    Instance::labeled(values, class)
}

/// Every representable hypothesis of the schema (no bottom).
fn all_hypotheses(schema: &Schema) -> Vec<Hypothesis> {
    let mut out = vec![Vec::new()];
    for attribute in schema.features() {
        let mut next = Vec::new();
        for prefix in &out {
            for slot in attribute
                .values
                .iter()
                .map(|v| Slot::value(v.clone()))
                .chain(std::iter::once(Slot::Any))
            {
                let mut h: Vec<Slot> = prefix.clone();
                h.push(slot);
                next.push(h);
            }
        }
        out = next;
    }
    out.into_iter().map(Hypothesis::new).collect()
}

fn consistent(h: &Hypothesis, seen: &[Instance]) -> bool {
    seen.iter()
        .all(|x| covers_values(h, &x.values) == (x.class.as_deref() == Some("yes")))
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Positives stay covered by both boundaries, negatives by neither.
    #[test]
    fn boundaries_respect_each_example((domains, target, examples) in arb_problem()) {
        let schema = build_schema(&domains);
        let target = target_hypothesis(&target);
        let mut ce = CandidateElimination::new(schema, TrainerConfig::default()).unwrap();

        for e in &examples {
            let x = label(&target, e);
            let positive = x.class.as_deref() == Some("yes");
            ce.observe(&x).unwrap();

            prop_assert!(!ce.is_collapsed());
            for h in ce.specific().iter().chain(ce.general()) {
                if positive {
                    prop_assert!(h.is_bottom() || covers_values(h, &x.values));
                } else {
                    prop_assert!(!covers_values(h, &x.values));
                }
            }
            if positive {
                prop_assert!(ce.specific().iter().all(|s| covers_values(s, &x.values)));
            }
        }
    }

    /// Neither boundary ever holds two comparable or equal members.
    #[test]
    fn boundaries_stay_antichains((domains, target, examples) in arb_problem()) {
        let schema = build_schema(&domains);
        let target = target_hypothesis(&target);
        let mut ce = CandidateElimination::new(schema, TrainerConfig::default()).unwrap();

        for e in &examples {
            ce.observe(&label(&target, e)).unwrap();
            prop_assert!(is_antichain(ce.specific()));
            prop_assert!(is_antichain(ce.general()));
            prop_assert!(distinct(ce.specific()), "duplicate in S: {:?}", ce.specific());
            prop_assert!(distinct(ce.general()), "duplicate in G: {:?}", ce.general());
        }
    }

    /// The bounded set is exactly the consistent hypotheses and only shrinks.
    #[test]
    fn version_space_is_exact_and_shrinks((domains, target, examples) in arb_problem()) {
        let schema = build_schema(&domains);
        let everything = all_hypotheses(&schema);
        let target = target_hypothesis(&target);
        let mut ce = CandidateElimination::new(schema, TrainerConfig::default()).unwrap();

        let mut seen = Vec::new();
        let mut previous = ce.version_space().members();
        for e in &examples {
            let x = label(&target, e);
            ce.observe(&x).unwrap();
            seen.push(x);

            let members = ce.version_space().members();
            prop_assert!(members.iter().all(|h| previous.contains(h)));
            prop_assert!(members.contains(&target));
            for h in &everything {
                prop_assert_eq!(members.contains(h), consistent(h, &seen), "hypothesis {}", h);
            }
            previous = members;
        }
    }

    /// After collapse nothing moves and every prediction is negative.
    #[test]
    fn collapse_is_terminal((domains, _target, examples) in arb_problem()) {
        let schema = build_schema(&domains);
        let mut ce = CandidateElimination::new(schema, TrainerConfig::default()).unwrap();

        let first = label(&Hypothesis::top(domains.len()), &examples[0]);
        let mut contradiction = first.clone();
        contradiction.class = Some("no".into());
        ce.observe(&first).unwrap();
        prop_assert_eq!(ce.observe(&contradiction).unwrap(), Observation::Collapsed);

        let frozen = ce.result();
        prop_assert_eq!(frozen.collapsed_at, Some(1));
        for e in &examples {
            let x = label(&Hypothesis::top(domains.len()), e);
            prop_assert_eq!(ce.observe(&x).unwrap(), Observation::Collapsed);
            prop_assert_eq!(ce.classify(&x.values).unwrap(), Label::Negative);
        }
        prop_assert_eq!(ce.result(), frozen);
    }
}
