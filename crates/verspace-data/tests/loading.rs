//! Loading datasets from disk and training on them.

use std::io::Write;
use std::path::PathBuf;

use verspace_core::prelude::*;
use verspace_data::{load_arff, DataError};

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name)
}

fn slot(v: &str) -> Slot {
    if v == "?" {
        Slot::Any
    } else {
        Slot::value(v)
    }
}

fn h(slots: &[&str]) -> Hypothesis {
    Hypothesis::new(slots.iter().map(|s| slot(s)).collect())
}

#[test]
fn enjoysport_matches_textbook_boundaries() {
    let data = load_arff(&data_file("enjoysport.arff"))
        .unwrap()
        .with_last_as_class()
        .unwrap();
    let instances = data.instances().unwrap();
    assert_eq!(instances.len(), 4);

    let mut ce = CandidateElimination::new(data.schema().clone(), TrainerConfig::default()).unwrap();
    let result = ce.train(&instances).unwrap();

    assert_eq!(result.collapsed_at, None);
    assert_eq!(
        result.specific,
        vec![h(&["sunny", "warm", "?", "strong", "?", "?"])]
    );
    assert_eq!(
        result.general,
        vec![
            h(&["sunny", "?", "?", "?", "?", "?"]),
            h(&["?", "warm", "?", "?", "?", "?"]),
        ]
    );

    let space = ce.version_space();
    assert_eq!(space.members().len(), 6);

    let x: Vec<String> = ["sunny", "warm", "normal", "strong", "cool", "change"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(space.vote(&x), Vote { positive: 6, negative: 0 });
    // Unanimous, but not converged: the prediction stays negative.
    assert_eq!(ce.classify(&x).unwrap(), Label::Negative);
}

#[test]
fn weather_collapses_on_second_positive() {
    let data = load_arff(&data_file("weather.nominal.arff"))
        .unwrap()
        .with_class_attribute("play")
        .unwrap();
    assert_eq!(data.relation(), "weather.symbolic");
    let instances = data.instances().unwrap();
    assert_eq!(instances.len(), 14);

    let mut ce = CandidateElimination::new(data.schema().clone(), TrainerConfig::default()).unwrap();
    let result = ce.train(&instances).unwrap();
    assert_eq!(result.collapsed_at, Some(3));
    assert_eq!(result.examples_seen, 4);
    assert!(result.general.is_empty());
}

#[test]
fn loads_from_a_temporary_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "@relation t\n@attribute sky {{sunny, rainy}}\n@attribute go {{yes, no}}\n@data\nsunny, yes\nrainy, no\n"
    )
    .unwrap();

    let data = load_arff(file.path()).unwrap().with_last_as_class().unwrap();
    let mut ce = CandidateElimination::new(data.schema().clone(), TrainerConfig::default()).unwrap();
    let result = ce.train(&data.instances().unwrap()).unwrap();
    assert_eq!(result.converged(), Some(&h(&["sunny"])));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_arff(&data_file("does-not-exist.arff")).unwrap_err();
    assert!(matches!(err, DataError::Io(_)));
}
