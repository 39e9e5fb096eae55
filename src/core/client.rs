use crate::config::Config;
use crate::core::{ExtractionResult, FieldExtractor, RelayError, Result};
use crate::extractors::ssstik::{parse_session_token, SsstikFields};
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Talks to the relay: one GET for the session token, one POST for the result.
pub struct RelayClient {
    client: reqwest::Client,
    base_url: String,
    locale: String,
    fields: Box<dyn FieldExtractor>,
}

impl RelayClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(RelayError::network("create HTTP client"))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            locale: config.locale.clone(),
            fields: Box::new(SsstikFields::new()),
        })
    }

    pub fn with_field_extractor(mut self, fields: Box<dyn FieldExtractor>) -> Self {
        self.fields = fields;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Loads the relay homepage and returns its session token. Never cached.
    pub async fn fetch_token(&self) -> Result<String> {
        let url = format!("{}/", self.base_url);
        debug!("Fetching session token from {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(RelayError::network("fetch the relay homepage"))?
            .text()
            .await
            .map_err(RelayError::network("read the relay homepage"))?;

        debug!("Homepage body: {} bytes", body.len());
        parse_session_token(&body)
    }

    /// Submits `target_url` to the relay and maps the returned page.
    pub async fn extract(&self, target_url: &str, token: &str) -> Result<ExtractionResult> {
        let url = format!("{}/abc?url=dl", self.base_url);
        let form = self.form_body(target_url, token);
        debug!("Posting to {}", url);

        let body = self
            .client
            .post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Origin", self.base_url.as_str())
            .header("Referer", format!("{}/en", self.base_url))
            .body(form)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(RelayError::network("send the extraction request"))?
            .bytes()
            .await
            .map_err(RelayError::network("read the extraction response"))?;

        debug!("Extraction response: {} bytes", body.len());

        let html = String::from_utf8_lossy(&body);
        let result = self.map_fields(&html)?;

        let missing = result.missing_fields();
        if !missing.is_empty() {
            warn!("Fields not found in relay response: {}", missing.join(", "));
        }
        info!("Extracted result for {} via {}", target_url, self.fields.name());

        Ok(result)
    }

    fn form_body(&self, target_url: &str, token: &str) -> String {
        format!(
            "id={}&locale={}&tt={}",
            urlencoding::encode(target_url),
            urlencoding::encode(&self.locale),
            urlencoding::encode(token)
        )
    }

    // Kept out of the async path: `Html` must not live across an await.
    fn map_fields(&self, html: &str) -> Result<ExtractionResult> {
        let document = Html::parse_document(html);
        if !has_markup(&document) {
            return Err(RelayError::Parse(
                "response contains no HTML elements".to_string(),
            ));
        }

        Ok(self.fields.extract(&document))
    }
}

/// The parser always synthesises `html`, `head` and `body`; anything beyond
/// those means the body actually carried markup.
fn has_markup(document: &Html) -> bool {
    let Ok(any) = Selector::parse("*") else {
        return false;
    };

    document
        .select(&any)
        .any(|element| !matches!(element.value().name(), "html" | "head" | "body"))
}
