use crate::domain::model::{Book, BookMatch, Catalog};
use crate::utils::error::{BookstoreError, Result};
use crate::utils::validation::validate_url;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Thin client for the bookstore API. Errors from the server are unwrapped
/// into their `{message}` body; transport failures keep the reqwest text.
pub struct QueryClient {
    base_url: Url,
    client: Client,
}

impl QueryClient {
    pub fn new(base_url: &str) -> Result<Self> {
        validate_url("base_url", base_url)?;
        let base_url = Url::parse(base_url).map_err(|e| BookstoreError::InvalidConfigValue {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    pub async fn all_books(&self) -> Result<Catalog> {
        self.get_json(self.base_url.clone()).await
    }

    pub async fn book_by_isbn(&self, isbn: &str) -> Result<Book> {
        self.get_json(self.endpoint("isbn", isbn)?).await
    }

    pub async fn books_by_author(&self, author: &str) -> Result<Vec<BookMatch>> {
        self.get_json(self.endpoint("author", author)?).await
    }

    pub async fn books_by_title(&self, title: &str) -> Result<Vec<BookMatch>> {
        self.get_json(self.endpoint("title", title)?).await
    }

    /// Builds `{base}/{kind}/{value}` with the value percent-encoded.
    fn endpoint(&self, kind: &str, value: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BookstoreError::InvalidConfigValue {
                field: "base_url".to_string(),
                value: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push(kind)
            .push(value);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("request failed with status {}", status));
            return Err(BookstoreError::Api { message });
        }

        Ok(response.json().await?)
    }
}
