pub mod job_repository;
