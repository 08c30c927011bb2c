use tracing::{info, instrument, warn};

use super::{FieldValue, Publication};
use crate::client::DblpClient;
use crate::error::Result;
use crate::lazy::{Lazy, LazyRecord, RecordField};
use crate::parser::parse_person_xml;

/// Lazily loaded fields of an [`Author`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorField {
    Name,
    Publications,
    Homepages,
    Homonyms,
}

impl RecordField for AuthorField {
    const RECORD: &'static str = "author";
    const ALL: &'static [Self] = &[
        AuthorField::Name,
        AuthorField::Publications,
        AuthorField::Homepages,
        AuthorField::Homonyms,
    ];

    fn as_str(self) -> &'static str {
        match self {
            AuthorField::Name => "name",
            AuthorField::Publications => "publications",
            AuthorField::Homepages => "homepages",
            AuthorField::Homonyms => "homonyms",
        }
    }
}

#[derive(Debug, Clone)]
struct AuthorData {
    xml: String,
    name: String,
    publications: Vec<Publication>,
    homepages: Vec<String>,
    homonyms: Vec<String>,
}

/// A DBLP author
///
/// Everything but the `urlpt` is loaded from the person document on first
/// access.
///
/// # Example
///
/// ```no_run
/// use dblp_client::DblpClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = DblpClient::new();
///     let author = client.author("k/Knuth:Donald_E=");
///
///     println!("{}", author.name().await?);
///     for publication in author.publications().await?.iter().take(3) {
///         println!("  {:?}", publication.title().await?);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Author {
    urlpt: String,
    client: DblpClient,
    data: Lazy<AuthorData>,
}

impl Author {
    pub fn new(client: DblpClient, urlpt: impl Into<String>) -> Self {
        Self {
            urlpt: urlpt.into(),
            client,
            data: Lazy::new(),
        }
    }

    /// Path token identifying the author
    pub fn urlpt(&self) -> &str {
        &self.urlpt
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_loaded()
    }

    /// Raw person document, once loaded
    pub fn xml(&self) -> Option<&str> {
        self.data.get().map(|data| data.xml.as_str())
    }

    /// Materialize the record now
    pub async fn load(&self) -> Result<()> {
        self.ensure_loaded().await.map(|_| ())
    }

    /// Primary name
    pub async fn name(&self) -> Result<&str> {
        Ok(&self.ensure_loaded().await?.name)
    }

    /// Unloaded records of the author's publications, in document order
    pub async fn publications(&self) -> Result<&[Publication]> {
        Ok(&self.ensure_loaded().await?.publications)
    }

    /// Homepage record keys
    pub async fn homepages(&self) -> Result<&[String]> {
        Ok(&self.ensure_loaded().await?.homepages)
    }

    /// Aliases
    pub async fn homonyms(&self) -> Result<&[String]> {
        Ok(&self.ensure_loaded().await?.homonyms)
    }

    /// Read a field by name
    ///
    /// Unknown names fail with `DblpError::UnknownAttribute` without loading.
    pub async fn get(&self, field: &str) -> Result<FieldValue<'_>> {
        let field = AuthorField::parse(field)?;
        self.field(field).await
    }

    pub async fn field(&self, field: AuthorField) -> Result<FieldValue<'_>> {
        let data = self.ensure_loaded().await?;
        Ok(match field {
            AuthorField::Name => FieldValue::Text(&data.name),
            AuthorField::Publications => FieldValue::Publications(&data.publications),
            AuthorField::Homepages => FieldValue::TextList(&data.homepages),
            AuthorField::Homonyms => FieldValue::TextList(&data.homonyms),
        })
    }

    async fn ensure_loaded(&self) -> Result<&AuthorData> {
        self.data.get_or_load(|| self.load_data()).await
    }

    #[instrument(skip(self), fields(urlpt = %self.urlpt))]
    async fn load_data(&self) -> Result<AuthorData> {
        let xml = self.client.fetch_xml(&self.client.person_url(&self.urlpt)).await?;

        let person = parse_person_xml(&xml).inspect_err(|e| {
            warn!("Failed to parse person XML: {}", e);
        })?;

        info!(
            name = %person.name,
            publications_count = person.publication_keys.len(),
            homepages_count = person.homepages.len(),
            "Successfully loaded author"
        );

        Ok(AuthorData {
            name: person.name,
            publications: person
                .publication_keys
                .into_iter()
                .map(|key| Publication::new(self.client.clone(), key))
                .collect(),
            homepages: person.homepages,
            homonyms: person.homonyms,
            xml,
        })
    }
}

impl LazyRecord for Author {
    type Field = AuthorField;

    fn is_loaded(&self) -> bool {
        self.data.is_loaded()
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.urlpt == other.urlpt
    }
}

impl Eq for Author {}
