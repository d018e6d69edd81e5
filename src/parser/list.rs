use scraper::Html;
use thiserror::Error;

use super::{find, find_all, select_first, stripped_text, text_of};
use crate::record::CompanyRecord;

const CONTAINER: &str = "div.apparel_stores_company_list";
const HEADER_CLASS: &str = "header_section";

/// Structural failures that abort the whole run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListPageError {
    #[error("Failed to locate the companies list container.")]
    MissingContainer,
    #[error("Failed to locate the companies list element.")]
    MissingList,
}

/// Parse the featured-program listing into list-level records, in page order.
pub fn parse_list(html: &str) -> Result<Vec<CompanyRecord>, ListPageError> {
    let doc = Html::parse_document(html);
    let container = select_first(&doc, CONTAINER).ok_or(ListPageError::MissingContainer)?;
    let ul = find(container, "ul").ok_or(ListPageError::MissingList)?;

    let records = find_all(ul, "li")
        .into_iter()
        .filter(|li| !li.value().classes().any(|c| c == HEADER_CLASS))
        .map(|li| {
            let mut record = CompanyRecord::default();
            if let Some(a) = find(li, "span.companyName").and_then(|span| find(span, "a")) {
                record.company_name = stripped_text(a);
                record.detail_link = a.value().attr("href").map(str::to_string);
            }
            record.industry = text_of(li, "span.industryName");
            record.sector = text_of(li, "span.sectorName");
            record
        })
        .collect();

    Ok(records)
}
