//! Domain layer - Business logic and domain models

pub mod naming;
pub mod navigation;
pub mod preview;
pub mod search;
pub mod title;

pub use naming::{plan_save, unique_name, SavePlan};
pub use navigation::Neighbors;
pub use preview::render_markdown;
pub use search::SearchHit;
