//! DBLP XML document parsers
//!
//! Each parser turns one response body into a plain data structure; the
//! lazily loaded records in [`crate::records`] wrap these results.
//!
//! - `person` - `/pers/xk/{urlpt}` person documents
//! - `publication` - `/rec/bibtex/{key}.xml` publication documents
//! - `search` - `/search/author` result lists
//! - `xml_utils` - element tree used by the document parsers

mod person;
mod publication;
mod search;
pub(crate) mod xml_utils;

pub use person::{PersonRecord, parse_person_xml};
pub use publication::parse_publication_xml;
pub use search::parse_author_search_xml;
