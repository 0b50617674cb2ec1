mod memory_user_repository;
mod sqlite_user_repository;

pub use memory_user_repository::*;
pub use sqlite_user_repository::*;
