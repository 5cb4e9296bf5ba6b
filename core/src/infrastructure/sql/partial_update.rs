//! `SET` clause assembly for partial updates.
//!
//! Callers describe a sparse change set in field names (as they appear on the
//! wire) and translate them to column names through a fixed alias table.
//! Values are never written into the SQL text; each assignment gets its own
//! positional placeholder.

use sea_orm::Value;

use crate::domain::common::entities::app_errors::CoreError;

/// Field name -> column name translation for one entity.
///
/// Fields without an entry are assumed to already match their column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnAliases<'a>(&'a [(&'a str, &'a str)]);

impl<'a> ColumnAliases<'a> {
    pub const fn new(entries: &'a [(&'a str, &'a str)]) -> Self {
        Self(entries)
    }

    pub const fn none() -> Self {
        Self(&[])
    }

    pub fn column_for<'f>(&self, field: &'f str) -> &'f str
    where
        'a: 'f,
    {
        self.0
            .iter()
            .find(|(alias, _)| *alias == field)
            .map(|(_, column)| *column)
            .unwrap_or(field)
    }
}

/// Insertion-ordered field -> value mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldChanges {
    fields: Vec<(String, Value)>,
}

impl FieldChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Setting a field twice keeps its original position.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn set_if_some<V: Into<Value>>(&mut self, field: &str, value: Option<V>) {
        if let Some(value) = value {
            self.set(field, value);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(field, value)| (field.as_str(), value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    pub assignments: Vec<String>,
    pub values: Vec<Value>,
}

impl PartialUpdate {
    /// Assignments joined for use after `SET`.
    pub fn set_clause(&self) -> String {
        self.assignments.join(", ")
    }

    /// Placeholder for the first value bound after the assignments, usually
    /// the key in the `WHERE` clause.
    pub fn next_placeholder(&self) -> String {
        format!("${}", self.values.len() + 1)
    }
}

pub fn sql_for_partial_update(
    changes: &FieldChanges,
    aliases: ColumnAliases<'_>,
) -> Result<PartialUpdate, CoreError> {
    if changes.is_empty() {
        return Err(CoreError::InvalidInput("no data".to_string()));
    }

    let (assignments, values): (Vec<String>, Vec<Value>) = changes
        .iter()
        .enumerate()
        .map(|(index, (field, value))| {
            (
                format!("\"{}\"=${}", aliases.column_for(field), index + 1),
                value.clone(),
            )
        })
        .unzip();

    Ok(PartialUpdate {
        assignments,
        values,
    })
}
