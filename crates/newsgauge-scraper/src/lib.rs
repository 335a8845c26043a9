//! News acquisition for newsgauge.
//!
//! Discovers article links on a news search page and downloads article pages,
//! extracting title, main text, an extractive summary and a publish date.

pub mod article;
pub mod client;
pub mod dates;
pub mod discovery;
pub mod error;
pub mod summarize;

mod html;
mod jsonld;

pub use article::{extract_article, ExtractedArticle};
pub use client::NewsClient;
pub use error::ScraperError;
pub use summarize::summarize;
