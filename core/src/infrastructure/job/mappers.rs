use crate::{
    domain::job::{
        entities::{Job, JobSummary},
        value_objects::UpdateJobInput,
    },
    entity::jobs::Model as JobModel,
    infrastructure::sql::FieldChanges,
};

impl From<JobModel> for Job {
    fn from(model: JobModel) -> Self {
        Job {
            id: model.id,
            title: model.title,
            salary: model.salary,
            equity: model.equity,
            company_handle: model.company_handle,
        }
    }
}

impl From<&JobModel> for JobSummary {
    fn from(model: &JobModel) -> Self {
        JobSummary {
            id: model.id,
            title: model.title.clone(),
            salary: model.salary,
            equity: model.equity,
        }
    }
}

impl From<UpdateJobInput> for FieldChanges {
    fn from(input: UpdateJobInput) -> Self {
        let mut changes = FieldChanges::new();
        changes.set_if_some("title", input.title);
        changes.set_if_some("salary", input.salary);
        changes.set_if_some("equity", input.equity);
        changes
    }
}
