use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateJobInput {
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// Sparse job update. The id and the owning company are fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateJobInput {
    pub title: Option<String>,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
}
