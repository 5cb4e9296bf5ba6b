pub mod company;
pub mod job;
pub mod query_extractor;
pub mod server;

#[cfg(test)]
pub mod test;
