use scraper::Html;

use super::{find, find_all, select_first, stripped_text, text_of};
use crate::record::DetailFields;

/// Parse one company's detail page. Missing blocks are normal and yield empty fields.
pub fn parse_detail(html: &str) -> DetailFields {
    let doc = Html::parse_document(html);

    let (employees, location) = match select_first(&doc, "div.left_list_block02") {
        Some(block) => (text_of(block, "li.employees"), text_of(block, "li.location")),
        None => (String::new(), String::new()),
    };

    let description = select_first(&doc, "div.company_description")
        .map(stripped_text)
        .unwrap_or_default();

    let social_media = select_first(&doc, "div.social_media")
        .and_then(|social| find(social, "div.social_media_icons"))
        .map(|icons| {
            let hrefs: Vec<&str> = find_all(icons, "a")
                .into_iter()
                // An anchor without href keeps its number with an empty URL.
                .map(|a| a.value().attr("href").unwrap_or_default())
                .collect();
            format_social_links(&hrefs)
        })
        .unwrap_or_default();

    DetailFields {
        employees,
        location,
        description,
        social_media,
    }
}

/// `Social media 1: <href>` per link, 1-indexed, newline separated.
pub fn format_social_links(hrefs: &[&str]) -> String {
    hrefs
        .iter()
        .enumerate()
        .map(|(i, href)| format!("Social media {}: {}", i + 1, href))
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}
