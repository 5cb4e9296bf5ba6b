pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Company, CompanyDetail};
pub use ports::{CompanyRepository, CompanyService};
