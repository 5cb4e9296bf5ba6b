use crate::infrastructure::sql::{ColumnAliases, FilterDef, FilterKind, ListDescriptor};

pub const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

/// Every updatable job field already matches its column.
pub const JOB_ALIASES: ColumnAliases<'static> = ColumnAliases::none();

pub const JOB_LIST: ListDescriptor = ListDescriptor {
    select: "SELECT id, title, salary, equity, company_handle FROM jobs",
    filters: &[
        FilterDef {
            key: "title",
            column: "title",
            kind: FilterKind::Contains,
        },
        FilterDef {
            key: "minSalary",
            column: "salary",
            kind: FilterKind::AtLeast,
        },
        FilterDef {
            key: "hasEquity",
            column: "equity",
            kind: FilterKind::Flag {
                predicate: "equity > 0",
            },
        },
    ],
    bounds: &[],
    order_by: "title, id",
};
