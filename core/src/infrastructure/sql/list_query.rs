//! Filtered list queries.
//!
//! Each listable entity declares a [`ListDescriptor`]: a fixed selection, the
//! filters it accepts and how each one maps to a condition. Raw options are
//! checked against that declaration before any SQL is produced.

use crate::{
    domain::common::{entities::app_errors::CoreError, value_objects::ListFilters},
    infrastructure::sql::where_clause::{BuiltQuery, WhereClause},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Case-insensitive substring match.
    Contains,
    /// `column >= value`
    AtLeast,
    /// `column <= value`
    AtMost,
    /// Boolean flag; `true` adds `predicate`, `false` adds nothing.
    Flag { predicate: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct FilterDef {
    pub key: &'static str,
    pub column: &'static str,
    pub kind: FilterKind,
}

#[derive(Debug, Clone, Copy)]
pub struct ListDescriptor {
    pub select: &'static str,
    /// Applied in this order when present.
    pub filters: &'static [FilterDef],
    /// `(min_key, max_key)` pairs that must not cross.
    pub bounds: &'static [(&'static str, &'static str)],
    pub order_by: &'static str,
}

impl ListDescriptor {
    pub fn allows(&self, key: &str) -> bool {
        self.filters.iter().any(|filter| filter.key == key)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum FilterValue {
    Text(String),
    Number(i32),
    Flag(bool),
}

impl FilterDef {
    fn parse(&self, raw: &str) -> Result<FilterValue, CoreError> {
        match self.kind {
            FilterKind::Contains => Ok(FilterValue::Text(raw.to_string())),
            FilterKind::AtLeast | FilterKind::AtMost => raw
                .trim()
                .parse()
                .map(FilterValue::Number)
                .map_err(|_| CoreError::InvalidFilter(format!("{} must be an integer", self.key))),
            FilterKind::Flag { .. } => raw
                .trim()
                .parse()
                .map(FilterValue::Flag)
                .map_err(|_| CoreError::InvalidFilter(format!("{} must be a boolean", self.key))),
        }
    }
}

pub fn build_list_query(
    list: &ListDescriptor,
    filters: &ListFilters,
) -> Result<BuiltQuery, CoreError> {
    let unknown: Vec<&str> = filters.keys().filter(|key| !list.allows(key)).collect();
    if !unknown.is_empty() {
        return Err(CoreError::InvalidFilter(format!(
            "unknown filter(s): {}",
            unknown.join(", ")
        )));
    }

    let present = list
        .filters
        .iter()
        .filter_map(|def| filters.get(def.key).map(|raw| def.parse(raw).map(|value| (def, value))))
        .collect::<Result<Vec<_>, _>>()?;

    let number = |key: &str| {
        present.iter().find_map(|(def, value)| match value {
            FilterValue::Number(n) if def.key == key => Some(*n),
            _ => None,
        })
    };

    for (min_key, max_key) in list.bounds {
        if let (Some(min), Some(max)) = (number(min_key), number(max_key))
            && min > max
        {
            return Err(CoreError::FilterConflict(format!(
                "{min_key} cannot be greater than {max_key}"
            )));
        }
    }

    let mut clause = WhereClause::new(list.select);
    for (def, value) in present {
        match (def.kind, value) {
            (FilterKind::Contains, FilterValue::Text(text)) => {
                clause.and_bind(def.column, "ILIKE", format!("%{text}%"));
            }
            (FilterKind::AtLeast, FilterValue::Number(n)) => {
                clause.and_bind(def.column, ">=", n);
            }
            (FilterKind::AtMost, FilterValue::Number(n)) => {
                clause.and_bind(def.column, "<=", n);
            }
            (FilterKind::Flag { predicate }, FilterValue::Flag(true)) => {
                clause.and(predicate);
            }
            _ => {}
        }
    }

    Ok(clause.order_by(list.order_by))
}

#[cfg(test)]
mod tests {
    use sea_orm::Value;

    use super::*;
    use crate::infrastructure::sql::where_clause::placeholder_indexes;

    const WIDGETS: ListDescriptor = ListDescriptor {
        select: "SELECT id, label, size FROM widgets",
        filters: &[
            FilterDef {
                key: "label",
                column: "label",
                kind: FilterKind::Contains,
            },
            FilterDef {
                key: "minSize",
                column: "size",
                kind: FilterKind::AtLeast,
            },
            FilterDef {
                key: "maxSize",
                column: "size",
                kind: FilterKind::AtMost,
            },
            FilterDef {
                key: "shiny",
                column: "gloss",
                kind: FilterKind::Flag {
                    predicate: "gloss > 0",
                },
            },
        ],
        bounds: &[("minSize", "maxSize")],
        order_by: "label",
    };

    #[test]
    fn test_no_filters() {
        let query = build_list_query(&WIDGETS, &ListFilters::new()).unwrap();
        assert_eq!(query.sql, "SELECT id, label, size FROM widgets ORDER BY label");
        assert!(query.values.is_empty());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let filters = ListFilters::new().with("label", "a").with("colour", "red");
        assert_eq!(
            build_list_query(&WIDGETS, &filters),
            Err(CoreError::InvalidFilter("unknown filter(s): colour".to_string()))
        );
    }

    #[test]
    fn test_every_allowed_subset_builds() {
        let keys = ["label", "minSize", "maxSize", "shiny"];
        for mask in 0..(1 << keys.len()) {
            let filters: ListFilters = keys
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << *i) != 0)
                .map(|(_, key)| {
                    let value = match *key {
                        "label" => "w",
                        "minSize" => "1",
                        "maxSize" => "9",
                        _ => "true",
                    };
                    (*key, value)
                })
                .collect();

            let query = build_list_query(&WIDGETS, &filters).unwrap();
            assert_eq!(
                placeholder_indexes(&query.sql),
                (1..=query.values.len()).collect::<Vec<_>>(),
                "{}",
                query.sql
            );
        }
    }

    #[test]
    fn test_crossed_bounds_conflict() {
        let filters = ListFilters::new().with("minSize", "100").with("maxSize", "50");
        assert!(matches!(
            build_list_query(&WIDGETS, &filters),
            Err(CoreError::FilterConflict(_))
        ));
    }

    #[test]
    fn test_equal_bounds_allowed() {
        let filters = ListFilters::new().with("minSize", "7").with("maxSize", "7");
        let query = build_list_query(&WIDGETS, &filters).unwrap();
        assert_eq!(query.values, vec![Value::from(7), Value::from(7)]);
    }

    #[test]
    fn test_placeholders_skip_absent_filters() {
        let filters = ListFilters::new().with("maxSize", "20").with("label", "bolt");
        let query = build_list_query(&WIDGETS, &filters).unwrap();

        assert_eq!(
            query.sql,
            "SELECT id, label, size FROM widgets WHERE label ILIKE $1 AND size <= $2 ORDER BY label"
        );
        assert_eq!(query.values, vec![Value::from("%bolt%"), Value::from(20)]);
    }

    #[test]
    fn test_flag_binds_nothing() {
        let on = build_list_query(&WIDGETS, &ListFilters::new().with("shiny", "true")).unwrap();
        assert_eq!(
            on.sql,
            "SELECT id, label, size FROM widgets WHERE gloss > 0 ORDER BY label"
        );
        assert!(on.values.is_empty());

        let off = build_list_query(&WIDGETS, &ListFilters::new().with("shiny", "false")).unwrap();
        assert_eq!(off.sql, "SELECT id, label, size FROM widgets ORDER BY label");
    }

    #[test]
    fn test_bad_number_rejected() {
        let filters = ListFilters::new().with("minSize", "lots");
        assert_eq!(
            build_list_query(&WIDGETS, &filters),
            Err(CoreError::InvalidFilter("minSize must be an integer".to_string()))
        );
    }

    #[test]
    fn test_unknown_key_wins_over_bad_value() {
        let filters = ListFilters::new().with("minSize", "lots").with("zzz", "1");
        assert!(matches!(
            build_list_query(&WIDGETS, &filters),
            Err(CoreError::InvalidFilter(message)) if message.contains("zzz")
        ));
    }
}
