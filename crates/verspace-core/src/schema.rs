//! Attribute metadata and instances supplied by a data source.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VersionSpaceError};

/// A nominal attribute with an ordered, finite domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub values: Vec<String>,
}

impl Attribute {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }
}

/// Ordered attribute list plus the position of the class attribute.
///
/// The class position is optional so that a data source can describe a
/// dataset before a class has been chosen. Learners refuse a schema without
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    attributes: Vec<Attribute>,
    class_index: Option<usize>,
}

impl Schema {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self {
            attributes,
            class_index: None,
        }
    }

    /// Set the class position. Fails if it is out of range.
    pub fn with_class_index(mut self, index: usize) -> Result<Self> {
        if index >= self.attributes.len() {
            return Err(VersionSpaceError::InvalidClassIndex {
                index,
                attributes: self.attributes.len(),
            });
        }
        self.class_index = Some(index);
        Ok(self)
    }

    /// Use the last attribute as the class.
    pub fn with_last_as_class(self) -> Result<Self> {
        let last = self
            .attributes
            .len()
            .checked_sub(1)
            .ok_or(VersionSpaceError::NoAttributes)?;
        self.with_class_index(last)
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn class_index(&self) -> Option<usize> {
        self.class_index
    }

    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name == name)
    }

    /// The class attribute, or [`VersionSpaceError::MissingClass`].
    ///
    /// A deserialized schema may carry a position past the attribute list;
    /// that is reported as [`VersionSpaceError::InvalidClassIndex`].
    pub fn class_attribute(&self) -> Result<&Attribute> {
        let index = self.class_index.ok_or(VersionSpaceError::MissingClass)?;
        self.attributes
            .get(index)
            .ok_or(VersionSpaceError::InvalidClassIndex {
                index,
                attributes: self.attributes.len(),
            })
    }

    /// Non-class attributes in declaration order.
    pub fn features(&self) -> impl Iterator<Item = &Attribute> + '_ {
        let class = self.class_index;
        self.attributes
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != class)
            .map(|(_, a)| a)
    }

    /// Number of hypothesis slots.
    pub fn arity(&self) -> usize {
        self.attributes
            .len()
            .saturating_sub(usize::from(self.class_index.is_some()))
    }

    /// Split a full data row into attribute values and class value.
    ///
    /// The row must have one value per declared attribute, class included.
    pub fn instance_from_row(&self, mut row: Vec<String>) -> Result<Instance> {
        if row.len() != self.attributes.len() {
            return Err(VersionSpaceError::ArityMismatch {
                expected: self.attributes.len(),
                found: row.len(),
            });
        }
        self.class_attribute()?;
        let class_index = self.class_index.ok_or(VersionSpaceError::MissingClass)?;
        let class = row.remove(class_index);
        Ok(Instance::labeled(row, class))
    }

    /// Check that `values` is a well-formed attribute vector for this schema.
    pub fn validate_values(&self, values: &[String]) -> Result<()> {
        let expected = self.arity();
        if values.len() != expected {
            return Err(VersionSpaceError::ArityMismatch {
                expected,
                found: values.len(),
            });
        }
        for (attribute, value) in self.features().zip(values) {
            if !attribute.contains(value) {
                return Err(VersionSpaceError::unknown_value(&attribute.name, value));
            }
        }
        Ok(())
    }
}

/// One example: a value per non-class attribute and an optional class value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub values: Vec<String>,
    pub class: Option<String>,
}

impl Instance {
    pub fn labeled<I, S>(values: I, class: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            class: Some(class.into()),
        }
    }

    pub fn unlabeled<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            class: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> Schema {
        Schema::new(vec![
            Attribute::new("sky", ["sunny", "rainy"]),
            Attribute::new("play", ["yes", "no"]),
            Attribute::new("temp", ["warm", "cold"]),
        ])
    }

    #[test]
    fn class_in_the_middle_is_skipped_by_features() {
        let schema = weather().with_class_index(1).unwrap();
        let names: Vec<_> = schema.features().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["sky", "temp"]);
        assert_eq!(schema.arity(), 2);
        assert_eq!(schema.class_attribute().unwrap().name, "play");
    }

    #[test]
    fn missing_class_is_reported() {
        let schema = weather();
        assert_eq!(schema.class_attribute(), Err(VersionSpaceError::MissingClass));
        assert!(schema
            .instance_from_row(vec!["sunny".into(), "yes".into(), "warm".into()])
            .is_err());
    }

    #[test]
    fn out_of_range_class_index_is_rejected() {
        assert!(matches!(
            weather().with_class_index(3),
            Err(VersionSpaceError::InvalidClassIndex { index: 3, attributes: 3 })
        ));
    }

    #[test]
    fn deserialized_class_index_is_range_checked() {
        let schema: Schema = serde_json::from_str(
            r#"{"attributes":[{"name":"sky","values":["sunny"]}],"class_index":7}"#,
        )
        .unwrap();
        assert_eq!(
            schema.class_attribute(),
            Err(VersionSpaceError::InvalidClassIndex { index: 7, attributes: 1 })
        );

        let empty: Schema = serde_json::from_str(r#"{"attributes":[],"class_index":0}"#).unwrap();
        assert_eq!(empty.arity(), 0);
        assert!(empty.class_attribute().is_err());
    }

    #[test]
    fn row_is_split_at_class_position() {
        let schema = weather().with_class_index(1).unwrap();
        let inst = schema
            .instance_from_row(vec!["sunny".into(), "yes".into(), "warm".into()])
            .unwrap();
        assert_eq!(inst.values, ["sunny", "warm"]);
        assert_eq!(inst.class.as_deref(), Some("yes"));
    }

    #[test]
    fn validation_catches_out_of_domain_values() {
        let schema = weather().with_last_as_class().unwrap();
        assert!(schema
            .validate_values(&["sunny".into(), "yes".into()])
            .is_ok());
        assert_eq!(
            schema.validate_values(&["foggy".into(), "yes".into()]),
            Err(VersionSpaceError::unknown_value("sky", "foggy"))
        );
        assert!(matches!(
            schema.validate_values(&["sunny".into()]),
            Err(VersionSpaceError::ArityMismatch { expected: 2, found: 1 })
        ));
    }
}
