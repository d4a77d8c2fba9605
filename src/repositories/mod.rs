pub mod epass_repository;
pub mod event_repository;
pub mod user_repository;

pub use epass_repository::{EPassRepository, SqliteEPassRepository};
pub use event_repository::{EventRepository, SqliteEventRepository};
pub use user_repository::{RepositoryError, RepositoryResult, SqliteUserRepository, UserRepository};
