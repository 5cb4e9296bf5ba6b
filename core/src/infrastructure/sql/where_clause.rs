use sea_orm::{DatabaseBackend, Statement, Value};

/// Accumulates a `SELECT` statement's `WHERE` conditions and their bind
/// values together.
///
/// Placeholders are only produced here, from the number of values already
/// bound, so `$n` in the text always refers to `values[n - 1]`.
#[derive(Debug, Clone)]
pub struct WhereClause {
    sql: String,
    values: Vec<Value>,
    conditions: usize,
}

impl WhereClause {
    pub fn new(base: &str) -> Self {
        Self {
            sql: base.to_string(),
            values: Vec::new(),
            conditions: 0,
        }
    }

    /// Appends `column operator $n` and binds `value` as `$n`.
    pub fn and_bind(&mut self, column: &str, operator: &str, value: impl Into<Value>) -> &mut Self {
        let placeholder = self.next_placeholder();
        self.push_keyword();
        self.sql.push_str(&format!("{column} {operator} {placeholder}"));
        self.values.push(value.into());
        self
    }

    /// Appends a fixed predicate that binds nothing.
    pub fn and(&mut self, predicate: &str) -> &mut Self {
        self.push_keyword();
        self.sql.push_str(predicate);
        self
    }

    pub fn next_placeholder(&self) -> String {
        format!("${}", self.values.len() + 1)
    }

    pub fn order_by(self, columns: &str) -> BuiltQuery {
        BuiltQuery {
            sql: format!("{} ORDER BY {columns}", self.sql),
            values: self.values,
        }
    }

    fn push_keyword(&mut self) {
        self.sql.push_str(if self.conditions == 0 {
            " WHERE "
        } else {
            " AND "
        });
        self.conditions += 1;
    }
}

/// Finished SQL text with its positional values.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub values: Vec<Value>,
}

impl BuiltQuery {
    pub fn into_statement(self) -> Statement {
        Statement::from_sql_and_values(DatabaseBackend::Postgres, self.sql, self.values)
    }
}

#[cfg(test)]
pub(crate) fn placeholder_indexes(sql: &str) -> Vec<usize> {
    let mut indexes = Vec::new();
    let mut chars = sql.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            continue;
        }
        let mut digits = String::new();
        while let Some(d) = chars.peek().filter(|d| d.is_ascii_digit()) {
            digits.push(*d);
            chars.next();
        }
        if let Ok(n) = digits.parse() {
            indexes.push(n);
        }
    }
    indexes
}

#[cfg(test)]
mod tests {
    use super::*;

    impl WhereClause {
        fn sql(&self) -> &str {
            &self.sql
        }

        fn values(&self) -> &[Value] {
            &self.values
        }
    }

    #[test]
    fn test_no_conditions() {
        let query = WhereClause::new("SELECT handle FROM companies").order_by("name");
        assert_eq!(query.sql, "SELECT handle FROM companies ORDER BY name");
        assert!(query.values.is_empty());
    }

    #[test]
    fn test_first_condition_uses_where_then_and() {
        let mut clause = WhereClause::new("SELECT id FROM jobs");
        clause
            .and_bind("title", "ILIKE", "%dev%")
            .and("equity > 0")
            .and_bind("salary", ">=", 1000);

        assert_eq!(
            clause.sql(),
            "SELECT id FROM jobs WHERE title ILIKE $1 AND equity > 0 AND salary >= $2"
        );
        assert_eq!(clause.values(), &[Value::from("%dev%"), Value::from(1000)]);
    }

    #[test]
    fn test_placeholders_track_values() {
        let mut clause = WhereClause::new("SELECT 1");
        for n in 0..5 {
            assert_eq!(clause.next_placeholder(), format!("${}", n + 1));
            clause.and_bind("x", "=", n);
            assert_eq!(
                placeholder_indexes(clause.sql()),
                (1..=clause.values().len()).collect::<Vec<_>>()
            );
        }
    }
}
