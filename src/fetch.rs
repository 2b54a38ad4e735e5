//! Page navigation over the wiki.
//!
//! A [`Fetcher`] turns a URL into HTML; the [`Navigator`] layers the
//! readiness contract on top: a navigation only succeeds once the page's
//! required DOM marker is present in the parsed document. Extraction code
//! never talks to the network directly, so the whole pipeline runs the same
//! against a live site or saved fixtures.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::{Html, Selector};

use crate::error::{Result, ScrapeError};

pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetch `url`, bounded by `timeout` when given.
    fn fetch(&self, url: &str, timeout: Option<Duration>) -> Result<String>;
}

/// Blocking reqwest-backed fetcher. One client is shared across the whole
/// run; the wiki needs no cookies or authentication.
pub struct WikiFetcher {
    client: Client,
}

impl WikiFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("arc_scrape/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ScrapeError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl Fetcher for WikiFetcher {
    fn name(&self) -> &'static str {
        "reqwest-blocking"
    }

    fn fetch(&self, url: &str, timeout: Option<Duration>) -> Result<String> {
        let timeout_ms = timeout.map(|t| t.as_millis() as u64).unwrap_or(0);
        let mut req = self.client.get(url);
        if let Some(t) = timeout {
            req = req.timeout(t);
        }
        let resp = req
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ScrapeError::from_reqwest(url, timeout_ms, e))?;
        resp.text()
            .map_err(|e| ScrapeError::from_reqwest(url, timeout_ms, e))
    }
}

/// Sequential navigator over a single fetcher. Mirrors the one-tab model:
/// only one navigation is ever in flight.
pub struct Navigator<'a> {
    fetcher: &'a dyn Fetcher,
}

impl<'a> Navigator<'a> {
    pub fn new(fetcher: &'a dyn Fetcher) -> Self {
        Self { fetcher }
    }

    /// Navigate to `url` and wait for `readiness_css` to be present in the
    /// document. A missing marker fails this navigation only, not the run.
    pub fn goto(
        &self,
        url: &str,
        readiness_css: &str,
        timeout: Option<Duration>,
    ) -> Result<Html> {
        let sel = Selector::parse(readiness_css).map_err(|_| ScrapeError::MissingMarker {
            url: url.to_string(),
            selector: readiness_css.to_string(),
        })?;
        let body = self.fetcher.fetch(url, timeout)?;
        let doc = Html::parse_document(&body);
        if doc.select(&sel).next().is_none() {
            return Err(ScrapeError::MissingMarker {
                url: url.to_string(),
                selector: readiness_css.to_string(),
            });
        }
        Ok(doc)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FixtureFetcher;
    use super::*;
    use crate::selectors::INFOBOX_CSS;

    #[test]
    fn goto_succeeds_when_marker_present() {
        let fetcher = FixtureFetcher::new().with_page(
            "https://arcraiders.wiki/wiki/Ferro",
            r#"<html><body><table class="infobox floatright"><tbody><tr><td>x</td></tr></tbody></table></body></html>"#,
        );
        let nav = Navigator::new(&fetcher);
        let doc = nav
            .goto("https://arcraiders.wiki/wiki/Ferro", INFOBOX_CSS, None)
            .expect("navigation succeeds");
        assert!(doc.select(&crate::selectors::INFOBOX).next().is_some());
    }

    #[test]
    fn goto_reports_missing_marker() {
        let fetcher = FixtureFetcher::new().with_page(
            "https://arcraiders.wiki/wiki/Empty",
            "<html><body><p>No infobox here.</p></body></html>",
        );
        let nav = Navigator::new(&fetcher);
        let err = nav
            .goto(
                "https://arcraiders.wiki/wiki/Empty",
                INFOBOX_CSS,
                Some(Duration::from_secs(10)),
            )
            .unwrap_err();
        match err {
            ScrapeError::MissingMarker { selector, .. } => assert_eq!(selector, INFOBOX_CSS),
            other => panic!("expected MissingMarker, got {other}"),
        }
    }

    #[test]
    fn unreachable_page_is_a_per_item_error() {
        let fetcher = FixtureFetcher::new();
        let nav = Navigator::new(&fetcher);
        assert!(nav
            .goto("https://arcraiders.wiki/wiki/Missing", INFOBOX_CSS, None)
            .is_err());
    }
}
