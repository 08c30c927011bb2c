use tracing::{info, instrument, warn};

use super::FieldValue;
use crate::client::DblpClient;
use crate::error::Result;
use crate::lazy::{Lazy, LazyRecord, RecordField};
use crate::models::{Citation, PublicationRecord, Series};
use crate::parser::parse_publication_xml;

/// Lazily loaded fields of a [`Publication`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicationField {
    Type,
    SubType,
    Mdate,
    Authors,
    Editors,
    Title,
    Year,
    Month,
    Journal,
    Volume,
    Number,
    Chapter,
    Pages,
    Ee,
    Isbn,
    Url,
    Booktitle,
    Crossref,
    Publisher,
    School,
    Citations,
    Series,
}

impl RecordField for PublicationField {
    const RECORD: &'static str = "publication";
    const ALL: &'static [Self] = &[
        PublicationField::Type,
        PublicationField::SubType,
        PublicationField::Mdate,
        PublicationField::Authors,
        PublicationField::Editors,
        PublicationField::Title,
        PublicationField::Year,
        PublicationField::Month,
        PublicationField::Journal,
        PublicationField::Volume,
        PublicationField::Number,
        PublicationField::Chapter,
        PublicationField::Pages,
        PublicationField::Ee,
        PublicationField::Isbn,
        PublicationField::Url,
        PublicationField::Booktitle,
        PublicationField::Crossref,
        PublicationField::Publisher,
        PublicationField::School,
        PublicationField::Citations,
        PublicationField::Series,
    ];

    fn as_str(self) -> &'static str {
        match self {
            PublicationField::Type => "type",
            PublicationField::SubType => "sub_type",
            PublicationField::Mdate => "mdate",
            PublicationField::Authors => "authors",
            PublicationField::Editors => "editors",
            PublicationField::Title => "title",
            PublicationField::Year => "year",
            PublicationField::Month => "month",
            PublicationField::Journal => "journal",
            PublicationField::Volume => "volume",
            PublicationField::Number => "number",
            PublicationField::Chapter => "chapter",
            PublicationField::Pages => "pages",
            PublicationField::Ee => "ee",
            PublicationField::Isbn => "isbn",
            PublicationField::Url => "url",
            PublicationField::Booktitle => "booktitle",
            PublicationField::Crossref => "crossref",
            PublicationField::Publisher => "publisher",
            PublicationField::School => "school",
            PublicationField::Citations => "citations",
            PublicationField::Series => "series",
        }
    }
}

#[derive(Debug, Clone)]
struct PublicationData {
    xml: String,
    record: PublicationRecord,
}

/// A DBLP publication: article, inproceedings, book, thesis and so on
///
/// Everything but the key is loaded from the publication document on first
/// access. Fields the document does not provide are `None` or empty.
#[derive(Debug, Clone)]
pub struct Publication {
    key: String,
    client: DblpClient,
    data: Lazy<PublicationData>,
}

impl Publication {
    pub fn new(client: DblpClient, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            client,
            data: Lazy::new(),
        }
    }

    /// DBLP key, e.g. `journals/cacm/Knuth74`
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_loaded()
    }

    /// Raw publication document, once loaded
    pub fn xml(&self) -> Option<&str> {
        self.data.get().map(|data| data.xml.as_str())
    }

    /// Materialize the record now
    pub async fn load(&self) -> Result<()> {
        self.record().await.map(|_| ())
    }

    /// All fields at once
    pub async fn record(&self) -> Result<&PublicationRecord> {
        Ok(&self.ensure_loaded().await?.record)
    }

    /// Publication type, the tag of the publication element
    pub async fn publication_type(&self) -> Result<&str> {
        Ok(&self.record().await?.publication_type)
    }

    pub async fn sub_type(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.sub_type.as_deref())
    }

    pub async fn mdate(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.mdate.as_deref())
    }

    pub async fn authors(&self) -> Result<&[String]> {
        Ok(&self.record().await?.authors)
    }

    pub async fn editors(&self) -> Result<&[String]> {
        Ok(&self.record().await?.editors)
    }

    pub async fn title(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.title.as_deref())
    }

    pub async fn year(&self) -> Result<i32> {
        Ok(self.record().await?.year)
    }

    pub async fn month(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.month.as_deref())
    }

    pub async fn journal(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.journal.as_deref())
    }

    pub async fn volume(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.volume.as_deref())
    }

    pub async fn number(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.number.as_deref())
    }

    pub async fn chapter(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.chapter.as_deref())
    }

    pub async fn pages(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.pages.as_deref())
    }

    /// Electronic edition URL
    pub async fn ee(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.ee.as_deref())
    }

    pub async fn isbn(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.isbn.as_deref())
    }

    pub async fn url(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.url.as_deref())
    }

    pub async fn booktitle(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.booktitle.as_deref())
    }

    pub async fn crossref(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.crossref.as_deref())
    }

    /// Publisher name; see [`PublicationRecord::publisher_details`] for the link
    pub async fn publisher(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.publisher.as_deref())
    }

    pub async fn school(&self) -> Result<Option<&str>> {
        Ok(self.record().await?.school.as_deref())
    }

    /// Cited works, without elided `...` entries
    pub async fn citations(&self) -> Result<&[Citation]> {
        Ok(&self.record().await?.citations)
    }

    pub async fn series(&self) -> Result<Option<&Series>> {
        Ok(self.record().await?.series.as_ref())
    }

    /// Read a field by name
    ///
    /// Unknown names fail with `DblpError::UnknownAttribute` without loading.
    pub async fn get(&self, field: &str) -> Result<FieldValue<'_>> {
        let field = PublicationField::parse(field)?;
        self.field(field).await
    }

    pub async fn field(&self, field: PublicationField) -> Result<FieldValue<'_>> {
        let record = self.record().await?;
        Ok(match field {
            PublicationField::Type => FieldValue::Text(&record.publication_type),
            PublicationField::SubType => FieldValue::OptionalText(record.sub_type.as_deref()),
            PublicationField::Mdate => FieldValue::OptionalText(record.mdate.as_deref()),
            PublicationField::Authors => FieldValue::TextList(&record.authors),
            PublicationField::Editors => FieldValue::TextList(&record.editors),
            PublicationField::Title => FieldValue::OptionalText(record.title.as_deref()),
            PublicationField::Year => FieldValue::Integer(record.year),
            PublicationField::Month => FieldValue::OptionalText(record.month.as_deref()),
            PublicationField::Journal => FieldValue::OptionalText(record.journal.as_deref()),
            PublicationField::Volume => FieldValue::OptionalText(record.volume.as_deref()),
            PublicationField::Number => FieldValue::OptionalText(record.number.as_deref()),
            PublicationField::Chapter => FieldValue::OptionalText(record.chapter.as_deref()),
            PublicationField::Pages => FieldValue::OptionalText(record.pages.as_deref()),
            PublicationField::Ee => FieldValue::OptionalText(record.ee.as_deref()),
            PublicationField::Isbn => FieldValue::OptionalText(record.isbn.as_deref()),
            PublicationField::Url => FieldValue::OptionalText(record.url.as_deref()),
            PublicationField::Booktitle => FieldValue::OptionalText(record.booktitle.as_deref()),
            PublicationField::Crossref => FieldValue::OptionalText(record.crossref.as_deref()),
            PublicationField::Publisher => FieldValue::OptionalText(record.publisher.as_deref()),
            PublicationField::School => FieldValue::OptionalText(record.school.as_deref()),
            PublicationField::Citations => FieldValue::Citations(&record.citations),
            PublicationField::Series => FieldValue::Series(record.series.as_ref()),
        })
    }

    async fn ensure_loaded(&self) -> Result<&PublicationData> {
        self.data.get_or_load(|| self.load_data()).await
    }

    #[instrument(skip(self), fields(key = %self.key))]
    async fn load_data(&self) -> Result<PublicationData> {
        let xml = self
            .client
            .fetch_xml(&self.client.publication_url(&self.key))
            .await?;

        let record = parse_publication_xml(&xml, &self.key).inspect_err(|e| {
            warn!("Failed to parse publication XML: {}", e);
        })?;

        info!(
            publication_type = %record.publication_type,
            year = record.year,
            authors_count = record.authors.len(),
            citations_count = record.citations.len(),
            "Successfully loaded publication"
        );

        Ok(PublicationData { xml, record })
    }
}

impl LazyRecord for Publication {
    type Field = PublicationField;

    fn is_loaded(&self) -> bool {
        self.data.is_loaded()
    }
}

impl PartialEq for Publication {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Publication {}
