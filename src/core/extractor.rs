use crate::core::ExtractionResult;
use scraper::Html;

/// Maps a parsed relay response onto an [`ExtractionResult`].
///
/// The relay exposes no stable identifiers, so implementations select by
/// structure and position. Keeping that mapping behind this trait means a
/// markup change touches one implementation and nothing else.
pub trait FieldExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Never fails: an element that cannot be found becomes an empty string.
    fn extract(&self, document: &Html) -> ExtractionResult;
}
