//! CLI command handlers, one per file.

mod discover;
mod files;
mod normalize;
mod pagination;

pub use discover::run_discover;
pub use files::run_files;
pub use normalize::run_normalize;
pub use pagination::run_pagination;
