use tracing::{debug, instrument};

use super::xml_utils::parse_document;
use crate::error::{DblpError, Result};

/// Value of `dblpkey/@type` marking a homepage entry
const PERSON_RECORD_TYPE: &str = "person record";

/// Contents of a `<dblpperson>` document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    /// Primary name, from the root `name` attribute
    pub name: String,
    /// Keys of `<dblpkey>` entries without a `type` attribute
    pub publication_keys: Vec<String>,
    /// Texts of `<dblpkey type="person record">` entries
    pub homepages: Vec<String>,
    /// Texts of `<homonym>` entries
    pub homonyms: Vec<String>,
}

/// Parse a `/pers/xk/{urlpt}` person document
///
/// The root `name` attribute is required; the lists are only read when the
/// root element is `<dblpperson>`.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_person_xml(xml: &str) -> Result<PersonRecord> {
    let root = parse_document(xml)?;

    let name = root
        .attr("name")
        .ok_or(DblpError::MissingField {
            record: "author",
            field: "name",
        })?
        .to_string();

    let mut record = PersonRecord {
        name,
        publication_keys: Vec::new(),
        homepages: Vec::new(),
        homonyms: Vec::new(),
    };

    if root.name() != "dblpperson" {
        debug!(root = root.name(), "Unexpected person document root");
        return Ok(record);
    }

    for key in root.children_named("dblpkey") {
        let Some(text) = key.text() else { continue };
        match key.attr("type") {
            None => record.publication_keys.push(text),
            Some(PERSON_RECORD_TYPE) => record.homepages.push(text),
            Some(_) => {}
        }
    }
    record.homonyms = root.texts_of("homonym");

    Ok(record)
}
