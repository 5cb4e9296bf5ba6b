#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCompanyInput {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

/// Sparse company update. `None` leaves the column untouched; the handle is
/// the lookup key and cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCompanyInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}
