// Service exports
pub mod db;
pub mod directory;
pub mod history;

pub use db::{connect_pool, DbError};
pub use directory::DirectoryClient;
pub use history::HistoryClient;
