//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_documents;
pub mod manage_config;
pub mod new_document;
pub mod open_document;
pub mod save_document;
pub mod search_documents;

pub use list_documents::list_documents;
pub use manage_config::ConfigService;
pub use new_document::create_document;
pub use open_document::{newest_document_slug, open_document, EditorView};
pub use save_document::{save_document, SaveOutcome};
pub use search_documents::search_documents;
