use tracing::{debug, instrument};

use super::xml_utils::{XmlElement, parse_document};
use crate::error::{DblpError, Result};
use crate::models::{Citation, PublicationRecord, Series};

/// Text of a `<cite>` entry standing for an elided reference
const CITATION_PLACEHOLDER: &str = "...";

/// Parse a `/rec/bibtex/{key}.xml` publication document
///
/// The publication is the first child element of the `<dblp>` root. A
/// document without one yields [`DblpError::RecordNotFound`].
#[instrument(skip(xml), fields(key = %key, xml_size = xml.len()))]
pub fn parse_publication_xml(xml: &str, key: &str) -> Result<PublicationRecord> {
    let root = parse_document(xml)?;

    let publication = match root.name() {
        "dblp" => root.first_element(),
        _ => None,
    }
    .ok_or_else(|| DblpError::RecordNotFound {
        key: key.to_string(),
    })?;

    debug!(publication_type = publication.name(), "Found publication element");

    let first = |tag: &str| publication.first_text_of(tag);
    let (publisher, publisher_href) = parse_publisher(publication);

    Ok(PublicationRecord {
        publication_type: publication.name().to_string(),
        sub_type: publication.attr("publtype").map(str::to_string),
        mdate: publication.attr("mdate").map(str::to_string),
        authors: publication.texts_of("author"),
        editors: publication.texts_of("editor"),
        title: first("title"),
        year: parse_year(publication)?,
        month: first("month"),
        journal: first("journal"),
        volume: first("volume"),
        number: first("number"),
        chapter: first("chapter"),
        pages: first("pages"),
        ee: first("ee"),
        isbn: first("isbn"),
        url: first("url"),
        booktitle: first("booktitle"),
        crossref: first("crossref"),
        publisher,
        publisher_href,
        school: first("school"),
        citations: parse_citations(publication),
        series: publication.first_child_named("series").map(|series| Series {
            text: series.text(),
            href: series.attr("href").map(str::to_string),
        }),
    })
}

fn parse_year(publication: &XmlElement) -> Result<i32> {
    let value = publication
        .first_text_of("year")
        .ok_or(DblpError::MissingField {
            record: "publication",
            field: "year",
        })?;

    value.parse().map_err(|_| DblpError::InvalidYear { value })
}

/// Name and `href` of the first `<publisher>` that has a name
fn parse_publisher(publication: &XmlElement) -> (Option<String>, Option<String>) {
    publication
        .children_named("publisher")
        .find_map(|publisher| {
            let name = publisher.text()?;
            Some((Some(name), publisher.attr("href").map(str::to_string)))
        })
        .unwrap_or((None, None))
}

fn parse_citations(publication: &XmlElement) -> Vec<Citation> {
    publication
        .children_named("cite")
        .filter_map(|cite| {
            let reference = cite.text().unwrap_or_default();
            if reference == CITATION_PLACEHOLDER {
                return None;
            }
            Some(Citation {
                reference,
                label: cite.attr("label").map(str::to_string),
            })
        })
        .collect()
}
