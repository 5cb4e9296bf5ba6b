use crate::infrastructure::sql::{ColumnAliases, FilterDef, FilterKind, ListDescriptor};

pub const COMPANY_COLUMNS: &str = "handle, name, description, num_employees, logo_url";

pub const COMPANY_ALIASES: ColumnAliases<'static> = ColumnAliases::new(&[
    ("numEmployees", "num_employees"),
    ("logoUrl", "logo_url"),
]);

pub const COMPANY_LIST: ListDescriptor = ListDescriptor {
    select: "SELECT handle, name, description, num_employees, logo_url FROM companies",
    filters: &[
        FilterDef {
            key: "name",
            column: "name",
            kind: FilterKind::Contains,
        },
        FilterDef {
            key: "minEmployees",
            column: "num_employees",
            kind: FilterKind::AtLeast,
        },
        FilterDef {
            key: "maxEmployees",
            column: "num_employees",
            kind: FilterKind::AtMost,
        },
    ],
    bounds: &[("minEmployees", "maxEmployees")],
    order_by: "name",
};
