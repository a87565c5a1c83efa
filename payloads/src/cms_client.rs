use reqwest::StatusCode;

use crate::{
    ContentKind, EntryFilters, responses,
    responses::{EntryPage, RawEntryPage},
};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// A read-only client for the headless CMS content API.
///
/// Every method maps one content kind to one endpoint and fails with one
/// of the three `ClientError` categories; retry policy lives with the
/// caller, never here.
pub struct CmsClient {
    pub address: String,
    /// Delivery API key, sent as a bearer token when present.
    pub api_key: Option<String>,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl CmsClient {
    pub fn new(address: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            address: address.into(),
            api_key,
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/content/{path}", &self.address)
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        let mut request = self.inner_client.get(self.format_url(path));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        request.send().await
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ReqwestResult {
        let mut request =
            self.inner_client.get(self.format_url(path)).query(query);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        request.send().await
    }
}

/// Methods on the CMS content API
impl CmsClient {
    pub async fn get_homepage(
        &self,
    ) -> Result<responses::HomepageContent, ClientError> {
        let response = self.get(ContentKind::Homepage.as_str()).await?;
        ok_body(response).await
    }

    pub async fn get_about(
        &self,
    ) -> Result<responses::AboutContent, ClientError> {
        let response = self.get(ContentKind::About.as_str()).await?;
        ok_body(response).await
    }

    /// List all portfolio sections, ordered by sort index.
    pub async fn list_portfolio_sections(
        &self,
    ) -> Result<Vec<responses::PortfolioSection>, ClientError> {
        let response =
            self.get(ContentKind::PortfolioSections.as_str()).await?;
        ok_body(response).await
    }

    /// List portfolio entries matching the given filters.
    ///
    /// The pagination window is recomputed locally from the returned total
    /// and the requested limit.
    pub async fn list_portfolio_entries(
        &self,
        filters: &EntryFilters,
    ) -> Result<EntryPage<responses::PortfolioEntry>, ClientError> {
        let response = self
            .get_with_query(
                ContentKind::PortfolioEntries.as_str(),
                &filters.to_query_pairs(),
            )
            .await?;
        let raw: RawEntryPage<responses::PortfolioEntry> =
            ok_body(response).await?;
        Ok(EntryPage::from_raw(raw, filters.page, filters.clamped_limit()))
    }

    /// List blog posts matching the given filters.
    pub async fn list_blog_posts(
        &self,
        filters: &EntryFilters,
    ) -> Result<EntryPage<responses::BlogPost>, ClientError> {
        let response = self
            .get_with_query(
                ContentKind::BlogPosts.as_str(),
                &filters.to_query_pairs(),
            )
            .await?;
        let raw: RawEntryPage<responses::BlogPost> = ok_body(response).await?;
        Ok(EntryPage::from_raw(raw, filters.page, filters.clamped_limit()))
    }

    /// Fetch a single blog post by slug. Unknown slugs are `NotFound`.
    pub async fn get_blog_post(
        &self,
        slug: &str,
    ) -> Result<responses::BlogPost, ClientError> {
        let response =
            self.get(&format!("{}/{slug}", ContentKind::BlogPosts.as_str()))
                .await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure: connectivity problems and server-side errors.
    #[error("network error: {0}")]
    Network(String),
    /// The queried entity does not exist.
    #[error("not found")]
    NotFound,
    /// The payload shape did not match the expected schema.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::MalformedResponse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Deserialize a successful request into the desired type, or classify the
/// failure into the error taxonomy.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(ClientError::NotFound),
        status if !status.is_success() => {
            Err(ClientError::Network(format!("server returned {status}")))
        }
        _ => Ok(response.json::<T>().await?),
    }
}
