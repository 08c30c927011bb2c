use serde::{Deserialize, Serialize};

/// A work cited by a publication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Text of the `<cite>` element, usually the cited record's key
    pub reference: String,
    /// `label` attribute, if present
    pub label: Option<String>,
}

/// The series a publication appears in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub text: Option<String>,
    pub href: Option<String>,
}

/// Publisher name with its optional link
///
/// Built on demand by [`PublicationRecord::publisher_details`]; the
/// `publisher` field itself is the plain name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    pub name: String,
    pub href: Option<String>,
}

/// Every field of a materialized DBLP publication
///
/// Fields that the underlying XML does not provide are `None` or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Publication element tag, e.g. "article", "inproceedings", "phdthesis"
    #[serde(rename = "type")]
    pub publication_type: String,
    /// `publtype` attribute, e.g. "informal publication", "survey"
    pub sub_type: Option<String>,
    /// Modification date attribute
    pub mdate: Option<String>,
    pub authors: Vec<String>,
    pub editors: Vec<String>,
    pub title: Option<String>,
    pub year: i32,
    pub month: Option<String>,
    pub journal: Option<String>,
    pub volume: Option<String>,
    pub number: Option<String>,
    pub chapter: Option<String>,
    pub pages: Option<String>,
    /// Electronic edition URL
    pub ee: Option<String>,
    pub isbn: Option<String>,
    pub url: Option<String>,
    pub booktitle: Option<String>,
    /// Key of the containing record, e.g. proceedings
    pub crossref: Option<String>,
    pub publisher: Option<String>,
    /// `href` attribute of the first `<publisher>` element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_href: Option<String>,
    pub school: Option<String>,
    pub citations: Vec<Citation>,
    pub series: Option<Series>,
}

impl PublicationRecord {
    /// Publisher as a (name, href) pair
    pub fn publisher_details(&self) -> Option<Publisher> {
        self.publisher.as_ref().map(|name| Publisher {
            name: name.clone(),
            href: self.publisher_href.clone(),
        })
    }
}
