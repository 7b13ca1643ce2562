pub mod activities_repo;
pub mod participants_repo;
pub mod pool;
pub mod schema;

pub use pool::{connect_in_memory, seed_directory};
