use serde::Serialize;

use super::error::FilterError;

/// A SeaTable filter expression built from escaped string literals.
///
/// Values never reach the expression unquoted, so a username such as
/// `x" or "1" = "1` stays a single literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr {
    conditions: Vec<String>,
}

impl FilterExpr {
    pub fn eq(column: &str, value: &str) -> Result<Self, FilterError> {
        Ok(Self {
            conditions: vec![condition(column, value)?],
        })
    }

    pub fn and_eq(mut self, column: &str, value: &str) -> Result<Self, FilterError> {
        self.conditions.push(condition(column, value)?);
        Ok(self)
    }

    pub fn to_filter_string(&self) -> String {
        self.conditions.join(" and ")
    }
}

/// Body of a filtered query against a table.
#[derive(Debug, Clone, Serialize)]
pub struct FilterQuery {
    pub filter: String,
    pub limit: u32,
}

impl FilterQuery {
    pub fn new(expr: &FilterExpr, limit: u32) -> Result<Self, FilterError> {
        if limit == 0 {
            return Err(FilterError::InvalidLimit(limit));
        }
        Ok(Self {
            filter: expr.to_filter_string(),
            limit,
        })
    }
}

fn condition(column: &str, value: &str) -> Result<String, FilterError> {
    validate_column(column)?;
    Ok(format!("{} = {}", column, quote(value)))
}

fn validate_column(column: &str) -> Result<(), FilterError> {
    let valid = !column.is_empty()
        && column.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !column.starts_with(|c: char| c.is_ascii_digit());

    if valid {
        Ok(())
    } else {
        Err(FilterError::InvalidColumn(column.to_string()))
    }
}

/// Double-quote a literal, escaping backslashes and embedded quotes.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
