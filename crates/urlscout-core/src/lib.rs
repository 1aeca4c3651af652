pub mod config;
pub mod error;
pub mod logging;

pub mod content;
pub mod discovery;

pub use error::DiscoveryError;
