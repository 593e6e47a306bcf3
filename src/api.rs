/// Client for the product review backend.
/// `ProductApi` is the seam the UI talks to; `HttpProductApi` is the browser implementation.
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::{Request, Response};
use leptos::logging::log;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::models::product::Product;
use crate::models::review::NewReview;

pub trait ProductApi {
    /// `GET /products`
    fn fetch_products(&self) -> LocalBoxFuture<'_, Result<Vec<Product>>>;

    /// `POST /products/{product_id}/reviews`
    fn submit_review<'a>(
        &'a self,
        product_id: &'a str,
        review: &'a NewReview,
    ) -> LocalBoxFuture<'a, Result<()>>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpProductApi {
    config: ApiConfig,
}

impl HttpProductApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_products(&self) -> Result<Vec<Product>> {
        let url = self.config.products_url();
        log!("[API] GET {}", url);

        let response = Request::get(&url).send().await.map_err(ApiError::network)?;
        if !response.ok() {
            return Err(ApiError::fetch_status(response.status(), &response.status_text()));
        }

        response
            .json::<Vec<Product>>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn post_review(&self, product_id: &str, review: &NewReview) -> Result<()> {
        let url = self.config.reviews_url(product_id);
        log!("[API] POST {}", url);

        // `json` sets `Content-Type: application/json`
        let response = Request::post(&url)
            .json(review)
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;

        if is_success(&response) {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::submit_status(response.status(), &response.status_text(), &body))
        }
    }
}

fn is_success(response: &Response) -> bool {
    (200..300).contains(&response.status())
}

impl ProductApi for HttpProductApi {
    fn fetch_products(&self) -> LocalBoxFuture<'_, Result<Vec<Product>>> {
        self.get_products().boxed_local()
    }

    fn submit_review<'a>(
        &'a self,
        product_id: &'a str,
        review: &'a NewReview,
    ) -> LocalBoxFuture<'a, Result<()>> {
        self.post_review(product_id, review).boxed_local()
    }
}
