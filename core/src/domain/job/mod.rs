pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Job, JobDetail, JobSummary};
pub use ports::{JobRepository, JobService};
