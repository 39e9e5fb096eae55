use crate::core::{RelayError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Host must be tiktok.com or one of its known subdomains. After the host
    // comes either an ID-bearing path/query or a short-link word segment.
    static ref TIKTOK_URL: Regex = Regex::new(
        r"https://(?:m|www|vm|vt|lite)?\.?tiktok\.com/((?:.*\b(?:(?:usr|v|embed|user|video|photo)/|\?shareId=|&item_id=)(\d+))|\w+)"
    )
    .unwrap();
}

/// True if `input` contains a TikTok URL the relay can resolve. Reachability
/// is not checked.
pub fn is_supported_url(input: &str) -> bool {
    TIKTOK_URL.is_match(input)
}

pub fn validate(input: &str) -> Result<()> {
    if is_supported_url(input) {
        Ok(())
    } else {
        Err(RelayError::Validation(input.to_string()))
    }
}
