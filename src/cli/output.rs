use crate::core::ExtractionResult;
use std::io::{self, Write};

/// Tab-indented, labelled text block. Layout and order are fixed.
pub fn render(result: &ExtractionResult) -> String {
    let stats = &result.statistics;
    let downloads = &result.downloads;

    format!(
        "Result:\n\
         \tUsername:\t{}\n\
         \tDescription:\t{}\n\
         \tStatistics:\n\
         \t\tLike Count:\t{}\n\
         \t\tComment Count:\t{}\n\
         \t\tShare Count:\t{}\n\
         \tDownloads:\n\
         \t\tAvatar URL:\t{}\n\
         \t\tOverlay URL:\t{}\n\
         \t\tVideo URL:\t{}\n\
         \t\tMusic URL:\t{}\n",
        result.username,
        result.description,
        stats.like_count,
        stats.comment_count,
        stats.share_count,
        downloads.avatar_url,
        downloads.overlay_url,
        downloads.video_url,
        downloads.music_url,
    )
}

pub fn render_json(result: &ExtractionResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_default()
}

pub fn present(result: &ExtractionResult, json: bool) -> io::Result<()> {
    let text = if json {
        render_json(result) + "\n"
    } else {
        render(result)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}
