pub mod company;
pub mod db;
pub mod job;
pub mod sql;
