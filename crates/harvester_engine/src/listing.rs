use harvester_core::Link;
use scraper::{Html, Selector};
use url::Url;

use crate::config::ConfigError;
use crate::HarvestError;

/// Row links and pagination state of one rendered listing page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingPage {
    pub row_links: Vec<Link>,
    pub has_next_page: bool,
}

pub trait ListingParser: Send + Sync {
    fn parse(&self, html: &str) -> Result<ListingPage, HarvestError>;
}

/// CSS-selector driven listing parser.
///
/// Each element matched by `row` must contain an element matched by `link`
/// carrying an `href`; the first such element is the row's link. The page has
/// a successor when anything matches `next`.
#[derive(Debug, Clone)]
pub struct SelectorListingParser {
    row: Selector,
    link: Selector,
    next: Selector,
    base_url: Option<Url>,
}

impl SelectorListingParser {
    pub fn new(row: &str, link: &str, next: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            row: parse_selector(row)?,
            link: parse_selector(link)?,
            next: parse_selector(next)?,
            base_url: None,
        })
    }

    /// Resolve relative hrefs against `base_url`.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url).map_err(|err| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            message: err.to_string(),
        })?;
        self.base_url = Some(url);
        Ok(self)
    }
}

impl ListingParser for SelectorListingParser {
    fn parse(&self, html: &str) -> Result<ListingPage, HarvestError> {
        let document = Html::parse_document(html);

        let mut row_links = Vec::new();
        for (index, row) in document.select(&self.row).enumerate() {
            let href = row
                .select(&self.link)
                .next()
                .and_then(|anchor| anchor.value().attr("href"))
                .ok_or_else(|| HarvestError::Parse(format!("row {index} has no link href")))?;
            row_links.push(resolve_href(href, self.base_url.as_ref()));
        }

        let has_next_page = document.select(&self.next).next().is_some();

        Ok(ListingPage {
            row_links,
            has_next_page,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|err| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

/// Absolute hrefs pass through; relative ones are joined onto `base` when
/// possible and kept verbatim otherwise.
fn resolve_href(href: &str, base: Option<&Url>) -> Link {
    let trimmed = href.trim();
    if Url::parse(trimmed).is_ok() {
        return Link::from(trimmed);
    }
    base.and_then(|base| base.join(trimmed).ok())
        .map(|url| Link::from(String::from(url)))
        .unwrap_or_else(|| Link::from(trimmed))
}
