//! Quote extraction from an HTML document
//!
//! This module is a pure function over the document: it performs no I/O
//! and never fails on missing inner elements. A quote block with no
//! text, author, or tags yields empty fields rather than an error.

use crate::quote::Quote;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Everything extracted from one page
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// Quotes in document order
    pub quotes: Vec<Quote>,

    /// Absolute URL of the next page, if the pager links one
    pub next_url: Option<Url>,
}

/// Parses HTML content and extracts quotes plus the next-page link
///
/// Quote blocks are elements carrying the `quote` class, visited in
/// document order. Within each block the first `.text` and `.author`
/// descendants supply the record fields (empty strings when absent) and
/// every `.tags .tag` descendant supplies a tag, in document order.
///
/// The pager link is the `href` of an anchor under `.pager .next`,
/// resolved against `site_origin`. When several anchors match, the last
/// one wins. No matching anchor, or an anchor without an `href`, yields
/// `None` and ends pagination.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `site_origin` - The origin relative pager links are resolved against
///
/// # Returns
///
/// * `Ok(ExtractedPage)` - Quotes and the optional next-page URL
/// * `Err(String)` - A selector failed to compile
pub fn extract_page(html: &str, site_origin: &Url) -> Result<ExtractedPage, String> {
    let document = Html::parse_document(html);

    let quote_selector = selector(".quote")?;
    let text_selector = selector(".text")?;
    let author_selector = selector(".author")?;
    let tag_selector = selector(".tags .tag")?;
    let next_selector = selector(".pager .next a")?;

    let mut quotes = Vec::new();
    for block in document.select(&quote_selector) {
        let text = first_text(block, &text_selector);
        let author = first_text(block, &author_selector);
        let tags: Vec<String> = block
            .select(&tag_selector)
            .map(|el| collect_text(el))
            .collect();

        quotes.push(Quote { text, author, tags });
    }

    // Last matching anchor wins.
    let mut next_url = None;
    for anchor in document.select(&next_selector) {
        if let Some(href) = anchor.value().attr("href") {
            if let Ok(resolved) = site_origin.join(href) {
                next_url = Some(resolved);
            }
        }
    }

    Ok(ExtractedPage { quotes, next_url })
}

/// Text content of the first element matching `sel` inside `block`,
/// or the empty string if nothing matches
fn first_text(block: ElementRef, sel: &Selector) -> String {
    block
        .select(sel)
        .next()
        .map(collect_text)
        .unwrap_or_default()
}

fn collect_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn selector(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("invalid selector '{}': {:?}", css, e))
}
