use quick_xml::de::from_str;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{DblpError, Result};

/// `<authors>` root of an author search response
#[derive(Debug, Deserialize)]
struct AuthorsResponse {
    #[serde(rename = "author", default)]
    authors: Vec<AuthorHit>,
}

#[derive(Debug, Deserialize)]
struct AuthorHit {
    #[serde(rename = "@urlpt")]
    urlpt: Option<String>,
}

/// Extract the `urlpt` attribute of every `<author>` in a search response
///
/// Hits without a `urlpt` attribute are skipped. Document order is kept.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_author_search_xml(xml: &str) -> Result<Vec<String>> {
    let response: AuthorsResponse =
        from_str(xml).map_err(|e| DblpError::XmlError(format!("author search response: {e}")))?;

    let urlpts: Vec<String> = response
        .authors
        .into_iter()
        .filter_map(|hit| hit.urlpt)
        .collect();

    debug!(hits = urlpts.len(), "Parsed author search response");
    Ok(urlpts)
}
