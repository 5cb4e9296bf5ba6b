use crate::{
    domain::company::{entities::Company, value_objects::UpdateCompanyInput},
    entity::companies::Model as CompanyModel,
    infrastructure::sql::FieldChanges,
};

impl From<CompanyModel> for Company {
    fn from(model: CompanyModel) -> Self {
        Company {
            handle: model.handle,
            name: model.name,
            description: model.description,
            num_employees: model.num_employees,
            logo_url: model.logo_url,
        }
    }
}

/// Keyed by wire name; see [`super::queries::COMPANY_ALIASES`].
impl From<UpdateCompanyInput> for FieldChanges {
    fn from(input: UpdateCompanyInput) -> Self {
        let mut changes = FieldChanges::new();
        changes.set_if_some("name", input.name);
        changes.set_if_some("description", input.description);
        changes.set_if_some("numEmployees", input.num_employees);
        changes.set_if_some("logoUrl", input.logo_url);
        changes
    }
}
