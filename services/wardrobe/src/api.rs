//! HTTP request wrapper and placeholder REST endpoints
//!
//! No backend serves these endpoints yet; the client is kept so the stores
//! can move to a remote API without changing their callers.

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::DEFAULT_API_BASE_URL;
use crate::error::{ApiError, ApiResult};
use crate::models::{ItemPatch, NewItem, NewOutfit, Outfit, OutfitPatch, WardrobeItem};

/// A single request relative to the client's base URL
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub url: String,
    pub method: Method,
    pub data: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// GET request for `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::GET,
            data: None,
            headers: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Send `data` as a JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, data: &T) -> ApiResult<Self> {
        self.data = Some(serde_json::to_value(data)?);
        Ok(self)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Thin JSON client over reqwest
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a request and decode the body of a 200 response
    ///
    /// Any other status fails with [`ApiError::Status`] carrying the raw
    /// body; transport failures surface as [`ApiError::Network`]. An empty
    /// body decodes as JSON `null`.
    pub async fn request<T: DeserializeOwned>(&self, options: RequestOptions) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, options.url);
        debug!("{} {}", options.method, url);

        let mut builder = self.http.request(options.method, &url);
        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(data) = &options.data {
            builder = builder.json(data);
        }

        let response = builder.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            ApiError::Network(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            serde_json::from_slice(b"null")?
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok(body)
    }

    pub fn items(&self) -> ItemsApi<'_> {
        ItemsApi { client: self }
    }

    pub fn outfits(&self) -> OutfitsApi<'_> {
        OutfitsApi { client: self }
    }

    pub fn weather(&self) -> WeatherApi<'_> {
        WeatherApi { _client: self }
    }
}

/// Wardrobe item endpoints under `/items`
pub struct ItemsApi<'a> {
    client: &'a ApiClient,
}

impl ItemsApi<'_> {
    pub async fn get_items(&self) -> ApiResult<Vec<WardrobeItem>> {
        self.client.request(RequestOptions::new("/items")).await
    }

    pub async fn add_item(&self, item: &NewItem) -> ApiResult<WardrobeItem> {
        let options = RequestOptions::new("/items").method(Method::POST).json(item)?;
        self.client.request(options).await
    }

    pub async fn update_item(&self, id: &str, patch: &ItemPatch) -> ApiResult<WardrobeItem> {
        let options = RequestOptions::new(format!("/items/{}", id))
            .method(Method::PUT)
            .json(patch)?;
        self.client.request(options).await
    }

    pub async fn delete_item(&self, id: &str) -> ApiResult<Value> {
        let options = RequestOptions::new(format!("/items/{}", id)).method(Method::DELETE);
        self.client.request(options).await
    }
}

/// Outfit endpoints under `/outfits`
pub struct OutfitsApi<'a> {
    client: &'a ApiClient,
}

impl OutfitsApi<'_> {
    pub async fn get_outfits(&self) -> ApiResult<Vec<Outfit>> {
        self.client.request(RequestOptions::new("/outfits")).await
    }

    pub async fn add_outfit(&self, outfit: &NewOutfit) -> ApiResult<Outfit> {
        let options = RequestOptions::new("/outfits")
            .method(Method::POST)
            .json(outfit)?;
        self.client.request(options).await
    }

    pub async fn update_outfit(&self, id: &str, patch: &OutfitPatch) -> ApiResult<Outfit> {
        let options = RequestOptions::new(format!("/outfits/{}", id))
            .method(Method::PUT)
            .json(patch)?;
        self.client.request(options).await
    }

    pub async fn delete_outfit(&self, id: &str) -> ApiResult<Value> {
        let options = RequestOptions::new(format!("/outfits/{}", id)).method(Method::DELETE);
        self.client.request(options).await
    }
}

/// Weather endpoint placeholder
pub struct WeatherApi<'a> {
    _client: &'a ApiClient,
}

impl WeatherApi<'_> {
    /// Resolves with an empty object without contacting any server
    pub async fn get_weather(&self, _city: &str) -> ApiResult<Value> {
        Ok(Value::Object(serde_json::Map::new()))
    }
}
