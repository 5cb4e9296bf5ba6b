pub mod list_query;
pub mod partial_update;
pub mod where_clause;

pub use list_query::{FilterDef, FilterKind, ListDescriptor, build_list_query};
pub use partial_update::{ColumnAliases, FieldChanges, PartialUpdate, sql_for_partial_update};
pub use where_clause::{BuiltQuery, WhereClause};
