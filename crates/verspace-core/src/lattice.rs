//! Generality order and minimal moves over the hypothesis lattice.
//!
//! Every function here is pure: inputs are borrowed and results are new
//! values, so boundary sets never alias each other's members.

use crate::hypothesis::{Hypothesis, Slot};
use crate::schema::Schema;

/// Which end of a boundary [`prune_dominated`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retain {
    /// Keep the most specific members (S boundary).
    MostSpecific,
    /// Keep the most general members (G boundary).
    MostGeneral,
}

/// `general ⪰ specific`: `general` is at least as general as `specific`.
///
/// False as soon as `general` holds an [`Slot::Empty`], whatever the other
/// slots say. A [`Slot::Value`] must match the other side exactly, so a
/// concrete slot never covers [`Slot::Any`] or [`Slot::Empty`].
pub fn covers(general: &Hypothesis, specific: &Hypothesis) -> bool {
    debug_assert_eq!(general.len(), specific.len());
    if general.is_bottom() {
        return false;
    }
    general
        .slots()
        .iter()
        .zip(specific.slots())
        .all(|(g, s)| match g {
            Slot::Any => true,
            Slot::Value(_) => g == s,
            Slot::Empty => false,
        })
}

/// Whether `h` matches the attribute vector `values`.
pub fn covers_values(h: &Hypothesis, values: &[String]) -> bool {
    debug_assert_eq!(h.len(), values.len());
    if h.is_bottom() {
        return false;
    }
    h.slots().iter().zip(values).all(|(slot, v)| slot.admits(v))
}

/// Alias for [`covers`] when reading the relation as an order.
pub fn more_general_or_equal(a: &Hypothesis, b: &Hypothesis) -> bool {
    covers(a, b)
}

/// `a ⪰ b` and not `b ⪰ a`.
pub fn strictly_more_general(a: &Hypothesis, b: &Hypothesis) -> bool {
    covers(a, b) && !covers(b, a)
}

/// The least generalization of `h` that matches `example`.
///
/// Mismatching concrete slots are relaxed straight to [`Slot::Any`]; nominal
/// domains have nothing in between.
pub fn generalize_to_fit(h: &Hypothesis, example: &[String]) -> Hypothesis {
    debug_assert_eq!(h.len(), example.len());
    h.slots()
        .iter()
        .zip(example)
        .map(|(slot, v)| match slot {
            Slot::Any => Slot::Any,
            Slot::Value(x) if x == v => slot.clone(),
            _ => Slot::Any,
        })
        .collect::<Vec<_>>()
        .into()
}

/// Every one-slot specialization of `g` that excludes `negative`.
///
/// Only wildcard slots are narrowed, each to every domain value that differs
/// from the negative example. Results come in attribute order, then domain
/// order.
pub fn minimal_specializations(
    g: &Hypothesis,
    negative: &[String],
    schema: &Schema,
) -> Vec<Hypothesis> {
    let mut result: Vec<Hypothesis> = Vec::new();
    for (i, attribute) in schema.features().enumerate() {
        if !g.slots()[i].is_any() {
            continue;
        }
        for value in attribute.values.iter().filter(|v| **v != negative[i]) {
            let candidate = g.with_slot(i, Slot::Value(value.clone()));
            if !result.contains(&candidate) {
                result.push(candidate);
            }
        }
    }
    result
}

/// Drop duplicates and dominated members, preserving insertion order.
///
/// With [`Retain::MostSpecific`] a member is dropped when it is strictly
/// more general than another member; with [`Retain::MostGeneral`] when it is
/// strictly more specific than another member.
pub fn prune_dominated(set: Vec<Hypothesis>, retain: Retain) -> Vec<Hypothesis> {
    let mut unique: Vec<Hypothesis> = Vec::with_capacity(set.len());
    for h in set {
        if !unique.contains(&h) {
            unique.push(h);
        }
    }

    let dominated: Vec<bool> = unique
        .iter()
        .map(|h| {
            unique.iter().any(|other| match retain {
                Retain::MostSpecific => strictly_more_general(h, other),
                Retain::MostGeneral => strictly_more_general(other, h),
            })
        })
        .collect();

    unique
        .into_iter()
        .zip(dominated)
        .filter_map(|(h, d)| (!d).then_some(h))
        .collect()
}

/// Whether no member is strictly more general than another.
pub fn is_antichain(set: &[Hypothesis]) -> bool {
    set.iter()
        .all(|a| set.iter().all(|b| !strictly_more_general(a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Attribute;

    fn h(slots: &[&str]) -> Hypothesis {
        Hypothesis::new(
            slots
                .iter()
                .map(|s| match *s {
                    "?" => Slot::Any,
                    "0" => Slot::Empty,
                    v => Slot::value(v),
                })
                .collect(),
        )
    }

    fn values(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn sky_temp() -> Schema {
        Schema::new(vec![
            Attribute::new("sky", ["sunny", "rainy", "cloudy"]),
            Attribute::new("temp", ["warm", "cold"]),
            Attribute::new("enjoy", ["yes", "no"]),
        ])
        .with_last_as_class()
        .unwrap()
    }

    #[test]
    fn wildcard_covers_everything_concrete() {
        assert!(covers(&h(&["?", "?"]), &h(&["sunny", "warm"])));
        assert!(covers(&h(&["sunny", "?"]), &h(&["sunny", "cold"])));
        assert!(!covers(&h(&["sunny", "?"]), &h(&["rainy", "cold"])));
    }

    #[test]
    fn concrete_slot_does_not_cover_wildcard() {
        assert!(!covers(&h(&["sunny", "?"]), &h(&["?", "?"])));
        assert!(covers(&h(&["?", "?"]), &h(&["sunny", "?"])));
    }

    #[test]
    fn bottom_covers_nothing() {
        assert!(!covers(&h(&["0", "0"]), &h(&["0", "0"])));
        assert!(!covers(&h(&["0", "?"]), &h(&["sunny", "warm"])));
        assert!(!covers_values(&h(&["0", "0"]), &values(&["sunny", "warm"])));
    }

    #[test]
    fn order_is_reflexive_for_non_bottom() {
        let a = h(&["sunny", "?"]);
        assert!(more_general_or_equal(&a, &a));
        assert!(!strictly_more_general(&a, &a));
    }

    #[test]
    fn generalize_relaxes_only_mismatches() {
        let s = h(&["sunny", "warm"]);
        let g = generalize_to_fit(&s, &values(&["sunny", "cold"]));
        assert_eq!(g, h(&["sunny", "?"]));
        assert!(covers_values(&g, &values(&["sunny", "cold"])));
        assert!(covers_values(&g, &values(&["sunny", "warm"])));
    }

    #[test]
    fn generalize_is_identity_when_already_covered() {
        let s = h(&["sunny", "?"]);
        assert_eq!(generalize_to_fit(&s, &values(&["sunny", "cold"])), s);
    }

    #[test]
    fn specializations_exclude_the_negative() {
        let schema = sky_temp();
        let negative = values(&["rainy", "warm"]);
        let specs = minimal_specializations(&h(&["?", "?"]), &negative, &schema);
        assert_eq!(
            specs,
            vec![h(&["sunny", "?"]), h(&["cloudy", "?"]), h(&["?", "cold"])]
        );
        assert!(specs.iter().all(|s| !covers_values(s, &negative)));
    }

    #[test]
    fn specializations_leave_concrete_slots_alone() {
        let schema = sky_temp();
        let specs = minimal_specializations(
            &h(&["sunny", "?"]),
            &values(&["sunny", "warm"]),
            &schema,
        );
        assert_eq!(specs, vec![h(&["sunny", "cold"])]);
    }

    #[test]
    fn prune_most_specific_drops_more_general_members() {
        let set = vec![h(&["sunny", "?"]), h(&["sunny", "warm"]), h(&["sunny", "warm"])];
        assert_eq!(
            prune_dominated(set, Retain::MostSpecific),
            vec![h(&["sunny", "warm"])]
        );
    }

    #[test]
    fn prune_most_general_drops_more_specific_members() {
        let set = vec![h(&["sunny", "warm"]), h(&["?", "warm"]), h(&["?", "cold"])];
        assert_eq!(
            prune_dominated(set, Retain::MostGeneral),
            vec![h(&["?", "warm"]), h(&["?", "cold"])]
        );
    }

    #[test]
    fn incomparable_members_survive() {
        let set = vec![h(&["sunny", "?"]), h(&["?", "cold"])];
        let pruned = prune_dominated(set.clone(), Retain::MostGeneral);
        assert_eq!(pruned, set);
        assert!(is_antichain(&pruned));
    }
}
