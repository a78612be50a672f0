use async_trait::async_trait;
use quick_xml::de::from_str;
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pipeline::LiteratureSource;
use crate::pubmed::responses::ESearchResult;

/// Client for the two E-utilities endpoints the pipeline uses
///
/// Holds one `reqwest::Client`, so the connection pool is reused between the
/// search and the detail fetch. Build it once and pass it to
/// [`run_pipeline`](crate::run_pipeline).
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration (no API key)
    ///
    /// # Errors
    ///
    /// Returns [`PubMedError::RequestError`] if the HTTP client cannot be
    /// built (e.g. the TLS backend fails to initialize).
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_affil::PubMedClient;
    ///
    /// let client = PubMedClient::new()?;
    /// # Ok::<(), pubmed_affil::PubMedError>(())
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_affil::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@university.edu");
    ///
    /// let client = PubMedClient::with_config(config)?;
    /// # Ok::<(), pubmed_affil::PubMedError>(())
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.effective_user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self::with_client(client, config))
    }

    /// Create a PubMed client around an existing HTTP client
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();
        Self {
            client,
            base_url,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search PubMed and return up to `page_size` PMIDs in upstream order
    ///
    /// A blank query returns an empty list without touching the network, as
    /// does a search with no hits.
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::ApiError` - If NCBI answers with a non-2xx status
    /// * `PubMedError::XmlParseError` - If the response body is not valid ESearch XML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_affil::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let pmids = client.search_ids("monoclonal antibody").await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, retmax = self.config.page_size))]
    pub async fn search_ids(&self, query: &str) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}",
            self.base_url,
            urlencoding::encode(query),
            self.config.page_size
        );

        debug!("Making ESearch API request");
        let body = self.make_request(&url).await?.text().await?;

        let search_result: ESearchResult =
            from_str(&body).map_err(|e| PubMedError::XmlParseError {
                message: format!("Failed to parse ESearch response: {e}"),
            })?;

        if let Some(error_msg) = &search_result.error {
            warn!(error = %error_msg, "NCBI ESearch reported an error");
        }

        let total = search_result.count.clone();
        let pmids = search_result.into_ids();

        info!(
            results_found = pmids.len(),
            total_count = total.as_deref().unwrap_or("?"),
            "Search completed"
        );
        Ok(pmids)
    }

    /// Fetch the EFetch XML for a batch of PMIDs in one request
    ///
    /// The identifiers are comma-joined into a single `id` parameter. The body
    /// is returned as-is; parsing is left to
    /// [`extract_rows`](crate::pubmed::parser::extract_rows).
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::ApiError` - If NCBI answers with a non-2xx status
    #[instrument(skip(self, pmids), fields(pmids_count = pmids.len()))]
    pub async fn fetch_details(&self, pmids: &[String]) -> Result<String> {
        let id_list = pmids.join(",");
        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url,
            urlencoding::encode(&id_list)
        );

        debug!("Making EFetch API request");
        let xml = self.make_request(&url).await?.text().await?;

        info!(xml_size = xml.len(), "Fetched article details");
        Ok(xml)
    }

    /// Send a GET with the configured API parameters, failing on non-2xx
    ///
    /// No retries: the first failure goes straight back to the caller.
    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        let response = self.client.get(&final_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "API request failed");
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                body
            };
            return Err(PubMedError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl LiteratureSource for PubMedClient {
    async fn search_ids(&self, query: &str) -> Result<Vec<String>> {
        PubMedClient::search_ids(self, query).await
    }

    async fn fetch_details(&self, pmids: &[String]) -> Result<String> {
        PubMedClient::fetch_details(self, pmids).await
    }
}
