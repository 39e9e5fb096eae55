use serde::Serialize;

/// What one relay response yields. Every field is best-effort and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub username: String,
    pub description: String,
    pub statistics: Statistics,
    pub downloads: Downloads,
}

/// Counts as the relay renders them, e.g. "12.3K".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub like_count: String,
    pub comment_count: String,
    pub share_count: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Downloads {
    pub avatar_url: String,
    pub overlay_url: String,
    pub video_url: String,
    pub music_url: String,
}

impl ExtractionResult {
    /// Names of fields that came back empty, in display order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("username", &self.username),
            ("description", &self.description),
            ("likeCount", &self.statistics.like_count),
            ("commentCount", &self.statistics.comment_count),
            ("shareCount", &self.statistics.share_count),
            ("avatarUrl", &self.downloads.avatar_url),
            ("overlayUrl", &self.downloads.overlay_url),
            ("videoUrl", &self.downloads.video_url),
            ("musicUrl", &self.downloads.music_url),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
