//! ARFF reader for nominal datasets.
//!
//! Supported subset:
//!
//! ```text
//! % comment
//! @relation weather
//! @attribute outlook {sunny, overcast, rainy}
//! @attribute 'play tennis' {yes, no}
//! @data
//! sunny, yes
//! rainy, ?
//! ```
//!
//! Keywords are case-insensitive, names and values may be quoted with `'` or
//! `"`, and `?` marks a missing value. Numeric, string and date attributes
//! and sparse rows are rejected.

use std::path::Path;

use tracing::debug;
use verspace_core::schema::Attribute;

use crate::dataset::{Dataset, Row};
use crate::error::{DataError, Result};

/// Read and parse an ARFF file.
pub fn load_arff(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)?;
    let dataset = parse(&text)?;
    debug!(
        "loaded {} rows of '{}' from {}",
        dataset.len(),
        dataset.relation(),
        path.display()
    );
    Ok(dataset)
}

#[derive(PartialEq)]
enum Section {
    Header,
    Data,
}

/// Parse ARFF text. No class attribute is selected.
pub fn parse(text: &str) -> Result<Dataset> {
    let mut relation = String::new();
    let mut attributes: Vec<Attribute> = Vec::new();
    let mut rows: Vec<Row> = Vec::new();
    let mut section = Section::Header;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }

        if section == Section::Data {
            rows.push(parse_row(line, line_no, &attributes)?);
            continue;
        }

        let (keyword, rest) = split_keyword(line);
        match keyword.to_ascii_lowercase().as_str() {
            "@relation" => {
                let (name, _) = take_token(rest, line_no)?;
                relation = name;
            }
            "@attribute" => attributes.push(parse_attribute(rest, line_no)?),
            "@data" => {
                if attributes.is_empty() {
                    return Err(DataError::syntax(line_no, "@data before any @attribute"));
                }
                section = Section::Data;
            }
            other => {
                return Err(DataError::syntax(
                    line_no,
                    format!("unexpected '{}' in header", other),
                ))
            }
        }
    }

    if section != Section::Data {
        return Err(DataError::syntax(text.lines().count(), "missing @data section"));
    }
    Ok(Dataset::new(relation, attributes, rows))
}

fn split_keyword(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], line[pos..].trim_start()),
        None => (line, ""),
    }
}

/// Read one possibly quoted token; returns it and the remaining input.
fn take_token(input: &str, line: usize) -> Result<(String, &str)> {
    let input = input.trim_start();
    let mut chars = input.char_indices();
    match chars.next() {
        None => Err(DataError::syntax(line, "expected a name")),
        Some((_, q @ ('\'' | '"'))) => {
            for (pos, c) in chars {
                if c == q {
                    return Ok((input[1..pos].to_string(), &input[pos + 1..]));
                }
            }
            Err(DataError::syntax(line, "unterminated quote"))
        }
        Some(_) => {
            let end = input
                .find(|c: char| c.is_whitespace() || c == '{')
                .unwrap_or(input.len());
            Ok((input[..end].to_string(), &input[end..]))
        }
    }
}

fn parse_attribute(rest: &str, line: usize) -> Result<Attribute> {
    let (name, rest) = take_token(rest, line)?;
    let rest = rest.trim();
    let Some(body) = rest.strip_prefix('{') else {
        let kind = rest.split_whitespace().next().unwrap_or("").to_string();
        return Err(DataError::UnsupportedAttribute {
            line,
            attribute: name,
            kind,
        });
    };
    let body = body
        .strip_suffix('}')
        .ok_or_else(|| DataError::syntax(line, format!("unclosed value list for '{}'", name)))?;

    let values: Vec<String> = split_values(body, line)?
        .into_iter()
        .map(|v| v.ok_or_else(|| DataError::syntax(line, "'?' cannot be a declared value")))
        .collect::<Result<_>>()?;
    if values.is_empty() {
        return Err(DataError::syntax(line, format!("attribute '{}' has no values", name)));
    }
    Ok(Attribute::new(name, values))
}

fn parse_row(line: &str, line_no: usize, attributes: &[Attribute]) -> Result<Row> {
    if line.starts_with('{') {
        return Err(DataError::syntax(line_no, "sparse rows are not supported"));
    }
    let values = split_values(line, line_no)?;
    if values.len() != attributes.len() {
        return Err(DataError::syntax(
            line_no,
            format!("expected {} values, found {}", attributes.len(), values.len()),
        ));
    }
    for (attribute, value) in attributes.iter().zip(&values) {
        if let Some(v) = value {
            if !attribute.contains(v) {
                return Err(DataError::UnknownValue {
                    line: line_no,
                    attribute: attribute.name.clone(),
                    value: v.clone(),
                });
            }
        }
    }
    Ok(Row {
        line: line_no,
        values,
    })
}

/// Split a comma-separated list, honouring quotes. An unquoted `?` becomes
/// `None`.
fn split_values(input: &str, line: usize) -> Result<Vec<Option<String>>> {
    let mut out = Vec::new();
    let mut rest = input.trim();
    if rest.is_empty() {
        return Ok(out);
    }
    loop {
        let (value, tail) = if rest.starts_with('\'') || rest.starts_with('"') {
            let (v, tail) = take_token(rest, line)?;
            (Some(v), tail.trim_start())
        } else {
            let end = rest.find(',').unwrap_or(rest.len());
            let v = rest[..end].trim();
            if v.is_empty() {
                return Err(DataError::syntax(line, "empty value"));
            }
            ((v != "?").then(|| v.to_string()), &rest[end..])
        };
        out.push(value);

        if tail.is_empty() {
            return Ok(out);
        }
        rest = tail
            .strip_prefix(',')
            .ok_or_else(|| DataError::syntax(line, "expected ','"))?
            .trim_start();
    }
}
