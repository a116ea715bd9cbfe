//! Lyrics page scraping.
//!
//! Lyrics pages have no stable markup: the container's class name has
//! changed with every site redesign. Extraction therefore walks an ordered
//! list of [`LyricsMatcher`]s and takes the first container that matches.
//! A layout none of them knows yields `LyricsNotFound`.

use reqwest::{header, Client};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::{LyricArtError, Result};

/// Browser user agent sent with page requests.
pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 ",
    "(KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
);

/// Matchers tried in order, oldest layout first.
pub const DEFAULT_MATCHERS: [LyricsMatcher; 3] = [
    LyricsMatcher::ClassName("lyrics"),
    LyricsMatcher::ClassName("Lyrics__Container-sc-1ynbvzw-6"),
    LyricsMatcher::ClassPrefix("Lyrics__Container-"),
];

/// One way of locating the lyrics container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LyricsMatcher {
    /// A `div` carrying exactly this class among its classes.
    ClassName(&'static str),
    /// A `div` whose `class` attribute starts with this prefix.
    ClassPrefix(&'static str),
}

impl LyricsMatcher {
    /// CSS selector for this matcher.
    pub fn css(&self) -> String {
        match self {
            LyricsMatcher::ClassName(name) => format!("div[class~=\"{}\"]", name),
            LyricsMatcher::ClassPrefix(prefix) => format!("div[class^=\"{}\"]", prefix),
        }
    }

    fn compile(&self) -> Result<Selector> {
        let css = self.css();
        Selector::parse(&css)
            .map_err(|e| LyricArtError::Selector(format!("invalid selector '{}': {:?}", css, e)))
    }
}

/// A compiled, prioritized list of matchers.
#[derive(Debug, Clone)]
pub struct LyricsExtractor {
    matchers: Vec<(LyricsMatcher, Selector)>,
}

impl LyricsExtractor {
    /// Compile the given matchers, keeping their order.
    pub fn new(matchers: &[LyricsMatcher]) -> Result<Self> {
        let matchers = matchers
            .iter()
            .map(|m| m.compile().map(|selector| (*m, selector)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { matchers })
    }

    /// Extractor with the built-in layouts.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&DEFAULT_MATCHERS)
    }

    /// Find the lyrics container and return its text.
    ///
    /// Text nodes inside the container are joined with newlines and the
    /// result is trimmed. Returns `None` when no matcher finds a container.
    pub fn extract_from_html(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);

        for (matcher, selector) in &self.matchers {
            if let Some(container) = document.select(selector).next() {
                debug!("Lyrics container matched by {:?}", matcher);
                return Some(container_text(container));
            }
        }

        None
    }
}

fn container_text(container: ElementRef<'_>) -> String {
    container
        .text()
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Fetches lyrics pages and extracts their lyrics.
#[derive(Debug, Clone)]
pub struct LyricsScraper {
    client: Client,
    extractor: LyricsExtractor,
}

impl LyricsScraper {
    /// Create a scraper on a shared HTTP client with the default matchers.
    pub fn new(client: Client) -> Result<Self> {
        Ok(Self {
            client,
            extractor: LyricsExtractor::with_defaults()?,
        })
    }

    /// Fetch a lyrics page and extract the lyrics.
    ///
    /// The page is requested without credentials. Error pages are parsed
    /// like any other page and simply fail to match.
    pub async fn extract(&self, page_url: &str) -> Result<String> {
        debug!("GET {}", page_url);
        let response = self
            .client
            .get(page_url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Lyrics page {} returned {}", page_url, status);
        }

        let html = response.text().await?;
        self.extractor
            .extract_from_html(&html)
            .ok_or_else(|| LyricArtError::LyricsNotFound(page_url.to_string()))
    }
}
