pub mod ssstik;
pub mod tiktok;

pub use ssstik::SsstikFields;
pub use tiktok::{is_supported_url, validate};
