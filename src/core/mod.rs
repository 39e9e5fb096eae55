pub mod client;
pub mod error;
pub mod extractor;
pub mod result;

pub use client::RelayClient;
pub use error::{RelayError, Result};
pub use extractor::FieldExtractor;
pub use result::{Downloads, ExtractionResult, Statistics};
