use chrono::NaiveDate;
use scout_core::{JobRecord, DATE_FORMAT};
use scraper::{ElementRef, Html, Selector};

/// Number of leading characters of the `datetime` attribute holding the calendar date.
const DATE_PREFIX_LEN: usize = 10;

/// Best-effort listing fields before the posting date is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    /// Zero-based position of the container in document order.
    pub position: usize,
    pub title: String,
    pub company: String,
    pub posted_raw: String,
    pub link: String,
}

impl RawListing {
    pub fn into_record(self) -> Result<JobRecord, ParseError> {
        let prefix: String = self.posted_raw.chars().take(DATE_PREFIX_LEN).collect();
        let posted = NaiveDate::parse_from_str(&prefix, DATE_FORMAT).map_err(|_| {
            ParseError::InvalidDate {
                position: self.position,
                raw: self.posted_raw.clone(),
            }
        })?;
        Ok(JobRecord::new(self.title, self.company, posted, self.link))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("listing {position}: missing {field}")]
    MissingField { position: usize, field: &'static str },
    #[error("listing {position}: unparseable posting date {raw:?}")]
    InvalidDate { position: usize, raw: String },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::MissingField { position, .. } | ParseError::InvalidDate { position, .. } => {
                *position
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid selector {selector:?}: {message}")]
pub struct SelectorError {
    pub selector: String,
    pub message: String,
}

/// Extracts listings from one page of markup.
pub trait ListingParser: Send + Sync {
    /// One entry per listing container, in document order.
    fn parse(&self, html: &str) -> Vec<Result<RawListing, ParseError>>;
}

/// CSS selectors describing where each field lives inside a job card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorSet {
    pub card: String,
    pub title: String,
    pub company: String,
    pub date: String,
    pub date_attr: String,
    pub link: String,
    pub link_attr: String,
}

impl SelectorSet {
    /// Public LinkedIn job search result cards.
    pub fn linkedin() -> Self {
        Self {
            card: "div.job-search-card".to_string(),
            title: "h3.base-search-card__title".to_string(),
            company: "h4.base-search-card__subtitle".to_string(),
            date: "time".to_string(),
            date_attr: "datetime".to_string(),
            link: "a.base-card__full-link".to_string(),
            link_attr: "href".to_string(),
        }
    }
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self::linkedin()
    }
}

#[derive(Debug)]
pub struct CssListingParser {
    card: Selector,
    title: Selector,
    company: Selector,
    date: Selector,
    date_attr: String,
    link: Selector,
    link_attr: String,
}

impl CssListingParser {
    pub fn new(selectors: &SelectorSet) -> Result<Self, SelectorError> {
        Ok(Self {
            card: compile(&selectors.card)?,
            title: compile(&selectors.title)?,
            company: compile(&selectors.company)?,
            date: compile(&selectors.date)?,
            date_attr: selectors.date_attr.clone(),
            link: compile(&selectors.link)?,
            link_attr: selectors.link_attr.clone(),
        })
    }

    pub fn linkedin() -> Result<Self, SelectorError> {
        Self::new(&SelectorSet::linkedin())
    }

    fn extract(&self, position: usize, card: ElementRef<'_>) -> Result<RawListing, ParseError> {
        let missing = |field: &'static str| ParseError::MissingField { position, field };

        let title = first_text(card, &self.title).ok_or_else(|| missing("title"))?;
        let company = first_text(card, &self.company).ok_or_else(|| missing("company"))?;
        let posted_raw =
            first_attr(card, &self.date, &self.date_attr).ok_or_else(|| missing("date"))?;
        // An empty href would otherwise resolve to the search page itself.
        let link = first_attr(card, &self.link, &self.link_attr)
            .map(|href| href.trim().to_string())
            .filter(|href| !href.is_empty())
            .ok_or_else(|| missing("link"))?;

        Ok(RawListing {
            position,
            title,
            company,
            posted_raw,
            link,
        })
    }
}

impl ListingParser for CssListingParser {
    fn parse(&self, html: &str) -> Vec<Result<RawListing, ParseError>> {
        let doc = Html::parse_document(html);
        doc.select(&self.card)
            .enumerate()
            .map(|(position, card)| self.extract(position, card))
            .collect()
    }
}

/// Parse a page and validate each listing into a [`JobRecord`].
pub fn parse_records(parser: &dyn ListingParser, html: &str) -> Vec<Result<JobRecord, ParseError>> {
    parser
        .parse(html)
        .into_iter()
        .map(|listing| listing.and_then(RawListing::into_record))
        .collect()
}

fn compile(selector: &str) -> Result<Selector, SelectorError> {
    Selector::parse(selector).map_err(|err| SelectorError {
        selector: selector.to_string(),
        message: format!("{err:?}"),
    })
}

fn first_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
}

fn first_attr(card: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    card.select(selector)
        .next()
        .and_then(|node| node.value().attr(attr))
        .map(str::to_string)
}
