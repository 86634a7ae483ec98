pub mod app_config;
pub mod database;
pub mod memory_repo;
pub mod notifier;
pub mod request_repo;

pub use database::DbClient;
pub use memory_repo::InMemoryRequestRepository;
pub use notifier::{NoopNotifier, ResendNotifier};
pub use request_repo::PgRequestRepository;
