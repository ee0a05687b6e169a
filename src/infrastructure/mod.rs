//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod plugins;
pub mod repository;
pub mod users;
pub mod workspace;

pub use config::Config;
pub use plugins::list_plugin_scripts;
pub use repository::{DocumentEntry, DocumentStore, FileSystemStore};
pub use users::UserTable;
pub use workspace::{Settings, Workspace};
