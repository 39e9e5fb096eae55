pub mod cli;
pub mod config;
pub mod core;
pub mod extractors;

pub use crate::config::Config;
pub use crate::core::{ExtractionResult, FieldExtractor, RelayClient, RelayError};
pub use crate::extractors::SsstikFields;
