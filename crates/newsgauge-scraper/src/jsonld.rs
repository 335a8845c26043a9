//! JSON-LD structured data lookup for article pages.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::html::clean_text;

/// Article fields found in a page's JSON-LD blocks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct JsonLdArticle {
    pub headline: String,
    pub body: String,
    pub date_published: Option<String>,
}

/// Collect the richest article node across all JSON-LD script blocks.
///
/// Nodes are ranked by body length. Returns `None` when no block contains an
/// article-typed node.
pub(crate) fn extract_json_ld_article(html: &str) -> Option<JsonLdArticle> {
    let mut candidates = Vec::new();
    for cap in script_regex().captures_iter(html) {
        let raw = cap.get(1).map_or("", |m| m.as_str()).trim();
        if raw.is_empty() {
            continue;
        }
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            continue;
        };
        collect_article_nodes(&value, &mut candidates);
    }

    candidates.into_iter().max_by_key(|c| c.body.len())
}

fn script_regex() -> &'static Regex {
    static SCRIPT: OnceLock<Regex> = OnceLock::new();
    SCRIPT.get_or_init(|| {
        Regex::new(
            r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#,
        )
        .expect("valid json-ld script regex")
    })
}

fn collect_article_nodes(value: &Value, out: &mut Vec<JsonLdArticle>) {
    match value {
        Value::Object(map) => {
            if looks_like_article_node(map.get("@type")) {
                let text_field = |key: &str| {
                    map.get(key)
                        .and_then(Value::as_str)
                        .map(clean_text)
                        .unwrap_or_default()
                };
                let headline = {
                    let h = text_field("headline");
                    if h.is_empty() {
                        text_field("name")
                    } else {
                        h
                    }
                };
                let date_published = map
                    .get("datePublished")
                    .or_else(|| map.get("dateCreated"))
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned);

                out.push(JsonLdArticle {
                    headline,
                    body: text_field("articleBody"),
                    date_published,
                });
            }

            for child in map.values() {
                collect_article_nodes(child, out);
            }
        }
        Value::Array(items) => {
            for child in items {
                collect_article_nodes(child, out);
            }
        }
        _ => {}
    }
}

fn contains_article_token(value: &str) -> bool {
    let lower = value.to_lowercase();
    lower.contains("article") || lower.contains("blogposting") || lower.contains("report")
}

fn looks_like_article_node(node_type: Option<&Value>) -> bool {
    let Some(node_type) = node_type else {
        return false;
    };

    match node_type {
        Value::String(s) => contains_article_token(s),
        Value::Array(values) => values
            .iter()
            .filter_map(Value::as_str)
            .any(contains_article_token),
        _ => false,
    }
}
