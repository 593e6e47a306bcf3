/// Backend location, resolved at build time.
///
/// `PRODUCT_API_URL` overrides the default origin when the bundle is built, e.g.
/// `PRODUCT_API_URL=https://reviews.example.com trunk build --release`.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("PRODUCT_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub fn reviews_url(&self, product_id: &str) -> String {
        format!(
            "{}/products/{}/reviews",
            self.base_url,
            urlencoding::encode(product_id)
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
