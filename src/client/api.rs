use std::future::Future;

use reqwest::StatusCode;
use thiserror::Error;

use crate::{
    error::AppError,
    models::{NewProduct, Product},
    response::{Ack, ErrorBody},
    services::product_service,
    state::AppState,
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server rejected request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    #[error(transparent)]
    Service(#[from] AppError),

    #[error(transparent)]
    Gate(#[from] super::gate::GateError),
}

/// The three catalog calls a storefront session makes.
pub trait CatalogApi {
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, ClientError>> + Send;

    fn add_product(
        &self,
        product: &NewProduct,
    ) -> impl Future<Output = Result<Ack, ClientError>> + Send;

    fn delete_product(&self, id: i64) -> impl Future<Output = Result<Ack, ClientError>> + Send;
}

/// Talks to a running catalog service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);
    Err(ClientError::Rejected { status, message })
}

impl CatalogApi for HttpCatalogApi {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self.client.get(self.url("/products")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn add_product(&self, product: &NewProduct) -> Result<Ack, ClientError> {
        let response = self
            .client
            .post(self.url("/add-product"))
            .json(product)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn delete_product(&self, id: i64) -> Result<Ack, ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/delete-product/{id}")))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }
}

/// Runs the catalog service in-process, skipping the network.
#[derive(Clone)]
pub struct LocalCatalogApi {
    state: AppState,
}

impl LocalCatalogApi {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl CatalogApi for LocalCatalogApi {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        Ok(product_service::list_products(&self.state).await?.items)
    }

    async fn add_product(&self, product: &NewProduct) -> Result<Ack, ClientError> {
        Ok(product_service::add_product(&self.state, product.clone()).await?)
    }

    async fn delete_product(&self, id: i64) -> Result<Ack, ClientError> {
        Ok(product_service::delete_product(&self.state, id).await?)
    }
}
