pub mod export;
pub mod markdown;
pub mod tag;

// Re-export commonly used types
pub use export::{BookEntry, ExportResponse, Highlight};
pub use markdown::{compose_entry, ATTACHMENT_PLACEHOLDER};
pub use tag::{format_tag, Tag};
