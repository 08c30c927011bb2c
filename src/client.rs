use crate::config::ClientConfig;
use crate::error::{DblpError, Result};
use crate::parser::parse_author_search_xml;
use crate::records::{Author, Publication};
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

/// Client for the DBLP web interface
///
/// Cloning is cheap; every record created by this client keeps a clone to
/// load itself later.
#[derive(Debug, Clone)]
pub struct DblpClient {
    client: Client,
    base_url: String,
}

impl DblpClient {
    /// Create a new DBLP client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use dblp_client::DblpClient;
    ///
    /// let client = DblpClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new DBLP client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use dblp_client::{ClientConfig, DblpClient};
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig::new()
    ///     .with_base_url("https://dblp.org")
    ///     .with_timeout(Duration::from_secs(10));
    ///
    /// let client = DblpClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        Self::try_with_config(config).expect("Failed to create HTTP client")
    }

    /// Create a new DBLP client with custom configuration, reporting HTTP
    /// client construction failures
    ///
    /// # Errors
    ///
    /// * `DblpError::InvalidConfig` - If the HTTP client cannot be built,
    ///   e.g. because the user agent is not a valid header value
    pub fn try_with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .map_err(|e| DblpError::InvalidConfig(format!("HTTP client: {e}")))?;

        Ok(Self::with_client_and_config(client, &config))
    }

    /// Create a new DBLP client with a custom HTTP client and default configuration
    pub fn with_client(client: Client) -> Self {
        Self::with_client_and_config(client, &ClientConfig::new())
    }

    fn with_client_and_config(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.effective_base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Unloaded author record for a DBLP `urlpt` path token
    pub fn author(&self, urlpt: impl Into<String>) -> Author {
        Author::new(self.clone(), urlpt)
    }

    /// Unloaded publication record for a DBLP key
    pub fn publication(&self, key: impl Into<String>) -> Publication {
        Publication::new(self.clone(), key)
    }

    /// URL of the person document for `urlpt`
    pub fn person_url(&self, urlpt: &str) -> String {
        format!("{}/pers/xk/{}", self.base_url, urlpt)
    }

    /// URL of the publication document for `key`
    pub fn publication_url(&self, key: &str) -> String {
        format!("{}/rec/bibtex/{}.xml", self.base_url, key)
    }

    /// URL of the author search for `query`
    pub fn author_search_url(&self, query: &str) -> String {
        format!(
            "{}/search/author?xauthor={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    /// Search authors by name
    ///
    /// Returns one unloaded [`Author`] per hit, in the order the service
    /// lists them. The query is sent as given, even when empty.
    ///
    /// # Errors
    ///
    /// * `DblpError::RequestError` / `DblpError::ApiError` - If the request fails
    /// * `DblpError::XmlError` - If the response is not a valid result list
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dblp_client::DblpClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = DblpClient::new();
    ///     for author in client.search_authors("Donald E. Knuth").await? {
    ///         println!("{}: {}", author.urlpt(), author.name().await?);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search_authors(&self, query: &str) -> Result<Vec<Author>> {
        let xml = self.fetch_xml(&self.author_search_url(query)).await?;
        let authors: Vec<Author> = parse_author_search_xml(&xml)?
            .into_iter()
            .map(|urlpt| self.author(urlpt))
            .collect();

        info!(results_found = authors.len(), "Author search completed");
        Ok(authors)
    }

    /// GET `url` and return the response body
    ///
    /// No retry: a transport failure or non-success status is returned as is.
    #[instrument(skip(self))]
    pub async fn fetch_xml(&self, url: &str) -> Result<String> {
        debug!("Making DBLP API request");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(DblpError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        let body = response.text().await?;
        debug!(body_size = body.len(), "Received successful API response");
        Ok(body)
    }
}

impl Default for DblpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Search authors by name using a default client
///
/// See [`DblpClient::search_authors`].
pub async fn search(query: &str) -> Result<Vec<Author>> {
    DblpClient::new().search_authors(query).await
}
