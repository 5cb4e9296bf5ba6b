pub mod create_company;
pub mod delete_company;
pub mod get_companies;
pub mod get_company;
pub mod update_company;
