//! Catalog sources: where the product list comes from.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use crate::{CatalogResponse, Product, Result, error::AppError};

pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products?limit=100";

/// Something that can produce the full product list in one request.
///
/// A fetch either yields the complete list or an error; there is no partial result and no retry.
pub trait CatalogSource {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Fetches the catalog over HTTP with a single GET.
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        tracing::debug!(url = %self.url, "fetching catalog");
        let res = self.client.get(&self.url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(AppError::Status(status.as_u16()));
        }
        let body = res.bytes().await?;
        let data: CatalogResponse = serde_json::from_slice(&body)?;
        tracing::debug!(count = data.products.len(), "catalog fetched");
        Ok(data.products)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the catalog from a JSON file in the same envelope the HTTP API returns.
#[derive(Clone, Debug)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let raw = tokio::fs::read(&self.path).await?;
        let data: CatalogResponse = serde_json::from_slice(&raw)?;
        tracing::debug!(
            path = %self.path.display(),
            count = data.products.len(),
            "catalog loaded from file"
        );
        Ok(data.products)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
