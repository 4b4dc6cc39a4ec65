//! In-memory nominal dataset with a selectable class attribute.

use tracing::warn;
use verspace_core::schema::{Attribute, Instance, Schema};

use crate::error::{DataError, Result};

/// One data row as read from the source. `None` marks a missing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based source line, for error messages.
    pub line: usize,
    pub values: Vec<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    relation: String,
    schema: Schema,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(relation: impl Into<String>, attributes: Vec<Attribute>, rows: Vec<Row>) -> Self {
        Self {
            relation: relation.into(),
            schema: Schema::new(attributes),
            rows,
        }
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn with_class_index(mut self, index: usize) -> Result<Self> {
        self.schema = self.schema.with_class_index(index)?;
        Ok(self)
    }

    pub fn with_class_attribute(self, name: &str) -> Result<Self> {
        let index = self
            .schema
            .attribute_index(name)
            .ok_or_else(|| DataError::UnknownAttribute(name.to_string()))?;
        self.with_class_index(index)
    }

    /// Use the last declared attribute as the class.
    pub fn with_last_as_class(mut self) -> Result<Self> {
        self.schema = self.schema.with_last_as_class()?;
        Ok(self)
    }

    /// Labeled instances in source order.
    ///
    /// Rows without a class value are skipped. A missing value anywhere else
    /// is an error.
    pub fn instances(&self) -> Result<Vec<Instance>> {
        let class_index = self
            .schema
            .class_index()
            .ok_or(verspace_core::error::VersionSpaceError::MissingClass)?;

        let mut out = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            if row.values[class_index].is_none() {
                warn!("line {}: skipping row without class value", row.line);
                continue;
            }
            let mut full = Vec::with_capacity(row.values.len());
            for (attribute, value) in self.schema.attributes().iter().zip(&row.values) {
                match value {
                    Some(v) => full.push(v.clone()),
                    None => {
                        return Err(DataError::MissingValue {
                            line: row.line,
                            attribute: attribute.name.clone(),
                        })
                    }
                }
            }
            out.push(self.schema.instance_from_row(full)?);
        }
        Ok(out)
    }
}
