//! Label extraction from the upstream search form markup.

use scraper::{Html, Selector};

use super::errors::ScrapeError;

/// List items inside the search form's value lists that carry a label.
pub const LABEL_SELECTOR: &str = "ul.search-values li[data-label]";

/// Attribute holding the location label on each list item.
pub const LABEL_ATTRIBUTE: &str = "data-label";

/// Extract raw labels in document order, duplicates included.
///
/// Parsing is lenient: malformed markup still yields a document, so the only
/// failure is the selector itself. Items whose label is empty are skipped.
pub fn extract_labels(html: &str) -> Result<Vec<String>, ScrapeError> {
    let selector =
        Selector::parse(LABEL_SELECTOR).map_err(|e| ScrapeError::Selector(e.to_string()))?;
    let document = Html::parse_document(html);

    let labels = document
        .select(&selector)
        .filter_map(|el| el.value().attr(LABEL_ATTRIBUTE))
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect();

    Ok(labels)
}
