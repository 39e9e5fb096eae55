//! Everything that depends on ssstik.io's markup: the homepage token
//! assignment, the result page selectors and the overlay style rule.

use crate::core::{Downloads, ExtractionResult, FieldExtractor, RelayError, Result, Statistics};
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

pub const DEFAULT_BASE_URL: &str = "https://ssstik.io";

lazy_static! {
    static ref SESSION_TOKEN: Regex = Regex::new(r#"s_tt\s*=\s*(?:'([^']+)'|"([^"]+)")"#).unwrap();
    static ref OVERLAY_STYLE: Regex = Regex::new(
        r#"#mainpicture \.result_overlay\s*\{\s*background-image:\s*url\(["']?([^"']+)["']?\);\s*\}"#
    )
    .unwrap();
}

/// Pulls the `s_tt` session token out of the relay homepage. The value is
/// returned verbatim.
pub fn parse_session_token(body: &str) -> Result<String> {
    SESSION_TOKEN
        .captures(body)
        .and_then(|captures| captures.get(1).or_else(|| captures.get(2)))
        .map(|token| token.as_str().to_string())
        .ok_or(RelayError::TokenNotFound)
}

/// The cover image is only present as a CSS background on the result page.
pub fn parse_overlay_url(style: &str) -> Option<String> {
    OVERLAY_STYLE
        .captures(style)
        .and_then(|captures| captures.get(1))
        .map(|url| url.as_str().to_string())
}

/// Positional field mapping for the ssstik.io `/abc?url=dl` response.
pub struct SsstikFields {
    username: Selector,
    description: Selector,
    like_count: Selector,
    comment_count: Selector,
    share_count: Selector,
    avatar: Selector,
    video_link: Selector,
    music_link: Selector,
    style: Selector,
}

impl SsstikFields {
    pub fn new() -> Self {
        Self {
            username: selector("h2"),
            description: selector(".maintext"),
            like_count: selector("div.trending-actions > div.justify-content-start"),
            comment_count: selector("div.trending-actions > div.justify-content-center > div"),
            share_count: selector("div.trending-actions > div.justify-content-end > div"),
            avatar: selector("img.result_author"),
            video_link: selector("a.without_watermark"),
            music_link: selector("a.music"),
            style: selector("style"),
        }
    }

    fn text(&self, document: &Html, selector: &Selector) -> String {
        document
            .select(selector)
            .next()
            .map(|element| element_text(&element))
            .unwrap_or_default()
    }

    fn attr(&self, document: &Html, selector: &Selector, name: &str) -> String {
        document
            .select(selector)
            .next()
            .and_then(|element| element.value().attr(name))
            .map(str::to_string)
            .unwrap_or_default()
    }

    fn overlay(&self, document: &Html) -> String {
        let style: String = document
            .select(&self.style)
            .flat_map(|element| element.text())
            .collect();

        parse_overlay_url(&style).unwrap_or_default()
    }
}

impl Default for SsstikFields {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SsstikFields {
    fn name(&self) -> &'static str {
        "ssstik"
    }

    fn extract(&self, document: &Html) -> ExtractionResult {
        ExtractionResult {
            username: self.text(document, &self.username),
            description: self.text(document, &self.description),
            statistics: Statistics {
                like_count: self.text(document, &self.like_count),
                comment_count: self.text(document, &self.comment_count),
                share_count: self.text(document, &self.share_count),
            },
            downloads: Downloads {
                avatar_url: self.attr(document, &self.avatar, "src"),
                overlay_url: self.overlay(document),
                video_url: self.attr(document, &self.video_link, "href"),
                music_url: self.attr(document, &self.music_link, "href"),
            },
        }
    }
}

// The selector strings above are fixed literals.
fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULT_PAGE: &str = r#"
<style>
#mainpicture .result_overlay { background-image: url('https://cdn.example/cover.jpg'); }
</style>
<div id="mainpicture"><div class="result_overlay"></div></div>
<img class="result_author" src="https://cdn.example/avatar.jpg">
<h2>alice</h2>
<p class="maintext"> hello world </p>
<div class="trending-actions">
  <div class="justify-content-start"><svg></svg> 12.3K </div>
  <div class="justify-content-center"><svg></svg><div>456</div></div>
  <div class="justify-content-end"><svg></svg><div>7</div></div>
</div>
<a class="without_watermark" href="https://cdn.example/video.mp4">Without watermark</a>
<a class="music" href="https://cdn.example/music.mp3">Music</a>
"#;

    #[test]
    fn test_parse_session_token() {
        let body = "<script>var s_tt = 'dGVzdA==';</script>";
        assert_eq!(parse_session_token(body).unwrap(), "dGVzdA==");

        let body = r#"<script>s_tt="abc123"</script>"#;
        assert_eq!(parse_session_token(body).unwrap(), "abc123");
    }

    #[test]
    fn test_parse_session_token_keeps_other_quote() {
        let body = r#"<script>s_tt = 'ab"cd';</script>"#;
        assert_eq!(parse_session_token(body).unwrap(), r#"ab"cd"#);

        let body = r#"<script>s_tt = "it's";</script>"#;
        assert_eq!(parse_session_token(body).unwrap(), "it's");
    }

    #[test]
    fn test_parse_session_token_is_stable() {
        let body = "<script>s_tt = 'token-xyz'; other = 'nope';</script>";
        let first = parse_session_token(body).unwrap();
        let second = parse_session_token(body).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "token-xyz");
    }

    #[test]
    fn test_parse_session_token_missing() {
        for body in ["", "<html><body>maintenance</body></html>", "s_tt = ''"] {
            assert!(matches!(
                parse_session_token(body),
                Err(RelayError::TokenNotFound)
            ));
        }
    }

    #[test]
    fn test_parse_overlay_url() {
        let style = r#"#mainpicture .result_overlay {
            background-image: url("https://cdn.example/cover.jpg");
        }"#;
        assert_eq!(
            parse_overlay_url(style).as_deref(),
            Some("https://cdn.example/cover.jpg")
        );

        let style = "#mainpicture .result_overlay{background-image:url(https://cdn.example/a.jpg);}";
        assert_eq!(
            parse_overlay_url(style).as_deref(),
            Some("https://cdn.example/a.jpg")
        );

        assert_eq!(parse_overlay_url(".other { color: red; }"), None);
    }

    #[test]
    fn test_extract_all_fields() {
        let document = Html::parse_document(RESULT_PAGE);
        let result = SsstikFields::new().extract(&document);

        assert_eq!(result.username, "alice");
        assert_eq!(result.description, "hello world");
        assert_eq!(result.statistics.like_count, "12.3K");
        assert_eq!(result.statistics.comment_count, "456");
        assert_eq!(result.statistics.share_count, "7");
        assert_eq!(result.downloads.avatar_url, "https://cdn.example/avatar.jpg");
        assert_eq!(result.downloads.overlay_url, "https://cdn.example/cover.jpg");
        assert_eq!(result.downloads.video_url, "https://cdn.example/video.mp4");
        assert_eq!(result.downloads.music_url, "https://cdn.example/music.mp3");
        assert!(result.missing_fields().is_empty());
    }

    #[test]
    fn test_missing_music_link_leaves_only_music_empty() {
        let page = RESULT_PAGE.replace(
            r#"<a class="music" href="https://cdn.example/music.mp3">Music</a>"#,
            "",
        );
        let document = Html::parse_document(&page);
        let result = SsstikFields::new().extract(&document);

        assert_eq!(result.missing_fields(), vec!["musicUrl"]);
    }

    #[test]
    fn test_attributes_come_from_first_match_only() {
        let page = r#"
<a class="music">No link yet</a>
<a class="music" href="https://cdn.example/second.mp3">Music</a>
<img class="result_author" src=" https://cdn.example/avatar.jpg ">
"#;
        let document = Html::parse_document(page);
        let result = SsstikFields::new().extract(&document);

        assert_eq!(result.downloads.music_url, "");
        assert_eq!(result.downloads.avatar_url, " https://cdn.example/avatar.jpg ");
    }

    #[test]
    fn test_unrelated_page_yields_empty_result() {
        let document = Html::parse_document("<p>Something went wrong</p>");
        let result = SsstikFields::new().extract(&document);

        assert_eq!(result, ExtractionResult::default());
    }
}
