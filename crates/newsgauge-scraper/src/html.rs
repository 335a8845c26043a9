//! HTML helpers for article title and main-text extraction.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Elements whose text is never part of the article body.
const BOILERPLATE_TAGS: &[&str] = &[
    "nav", "header", "footer", "aside", "script", "style", "noscript", "form", "figcaption",
    "button", "template", "iframe",
];

/// Class / id fragments marking sharing widgets, promos and comment threads.
const BOILERPLATE_MARKERS: &[&str] = &[
    "comment",
    "share",
    "social",
    "newsletter",
    "related",
    "promo",
    "subscribe",
    "advert",
    "cookie",
    "breadcrumb",
];

/// Containers that usually wrap the article body, most specific first.
const CONTENT_CONTAINERS: &[&str] = &[
    "[itemprop=\"articleBody\"]",
    "article",
    "main",
    "[role=\"main\"]",
];

/// Paragraphs shorter than this (in words) are treated as captions or chrome.
const MIN_PARAGRAPH_WORDS: usize = 5;

pub(crate) fn extract_title(document: &Html) -> String {
    let og = meta_content(document, "meta[property=\"og:title\"]");
    if !og.is_empty() {
        return og;
    }

    for css in ["title", "h1"] {
        let selector = Selector::parse(css).expect("valid title selector");
        if let Some(el) = document.select(&selector).next() {
            let text = element_text(el);
            if !text.is_empty() {
                return text;
            }
        }
    }
    String::new()
}

pub(crate) fn extract_meta_description(document: &Html) -> String {
    let description = meta_content(document, "meta[name=\"description\"]");
    if !description.is_empty() {
        return description;
    }
    meta_content(document, "meta[property=\"og:description\"]")
}

/// Main article text as paragraphs separated by blank lines.
///
/// Picks the content container holding the most paragraph text; falls back
/// to every paragraph in the document when no container qualifies.
pub(crate) fn extract_main_text(document: &Html) -> String {
    let mut best: Vec<String> = Vec::new();
    let mut best_len = 0usize;

    for css in CONTENT_CONTAINERS {
        let selector = Selector::parse(css).expect("valid container selector");
        for container in document.select(&selector) {
            let paragraphs = collect_paragraphs(container);
            let len: usize = paragraphs.iter().map(String::len).sum();
            if len > best_len {
                best_len = len;
                best = paragraphs;
            }
        }
    }

    if best.is_empty() {
        best = collect_paragraphs(document.root_element());
    }

    best.join("\n\n")
}

fn collect_paragraphs(container: ElementRef<'_>) -> Vec<String> {
    let selector = Selector::parse("p").expect("valid paragraph selector");
    container
        .select(&selector)
        .filter(|p| !in_boilerplate(*p))
        .map(element_text)
        .filter(|text| text.split_whitespace().count() >= MIN_PARAGRAPH_WORDS)
        .collect()
}

fn in_boilerplate(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(is_boilerplate_element)
}

fn is_boilerplate_element(element: ElementRef<'_>) -> bool {
    let value = element.value();
    if BOILERPLATE_TAGS.contains(&value.name()) {
        return true;
    }
    let marker_attrs = [value.attr("class"), value.attr("id")];
    marker_attrs.into_iter().flatten().any(|attr| {
        let lower = attr.to_lowercase();
        BOILERPLATE_MARKERS.iter().any(|m| lower.contains(m))
    })
}

fn meta_content(document: &Html, css: &str) -> String {
    let Ok(selector) = Selector::parse(css) else {
        return String::new();
    };
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("content"))
        .map(clean_text)
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

fn tags_regex() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"(?is)<[^>]+>").expect("valid tags regex"))
}

/// Strip stray tags and collapse whitespace.
pub(crate) fn clean_text(input: &str) -> String {
    let no_tags = tags_regex().replace_all(input, " ");
    no_tags
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(" ,", ",")
        .replace(" .", ".")
}
