use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::errors::{ShopError, ShopResult};
use crate::identity::UserIdentity;
use moodshop_api::*;

/// Target product plus its ranked neighbours from `GET /similar-products/{id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarProducts {
    pub target_product: Product,
    pub similar_products: Vec<SimilarProduct>,
}

/// The backend HTTP contract, as seen by the controller.
///
/// Every call either resolves to the unwrapped payload of a `success: true`
/// envelope or fails with [`ShopError::RequestFailed`].
#[async_trait]
pub trait ShopApi: Send + Sync {
    /// Anonymous identity sent with user-scoped calls.
    fn user_id(&self) -> &str;

    async fn analyze_mood(&self, text: &str) -> ShopResult<SentimentResult>;

    async fn get_recommendations(
        &self,
        context: &RecommendationContext,
    ) -> ShopResult<Vec<Recommendation>>;

    async fn search_products(
        &self,
        query: &str,
        emotion_context: Option<&str>,
    ) -> ShopResult<Vec<SearchResult>>;

    async fn get_all_products(&self) -> ShopResult<Vec<Product>>;

    async fn get_product(&self, product_id: &str) -> ShopResult<Product>;

    async fn track_interaction(
        &self,
        product_id: &str,
        action: InteractionAction,
        emotion: Option<&str>,
    ) -> ShopResult<InteractionAck>;

    async fn get_similar_products(&self, product_id: &str) -> ShopResult<SimilarProducts>;
}

/// Client for the mood shop backend REST API
#[derive(Debug, Clone)]
pub struct ShopClient {
    client: Client,
    base_url: Url,
    identity: UserIdentity,
}

impl ShopClient {
    /// Create a new client against `base_url` (for example `http://127.0.0.1:5000/api`).
    pub fn new(base_url: &str, identity: UserIdentity) -> ShopResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ShopError::ConfigError(format!("Invalid API base URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ShopError::ConfigError(format!(
                "API base URL '{}' cannot carry a path",
                base_url
            )));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            identity,
        })
    }

    pub fn from_config(config: &ClientConfig, identity: UserIdentity) -> ShopResult<Self> {
        Self::new(config.api_base_url(), identity)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> ShopResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ShopError::ConfigError("API base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> ShopResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Envelope,
    {
        debug!("{} {}", method, url);
        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ShopError::request_failed(None, format!("Failed to send request: {}", e)))?;

        read_envelope(response).await
    }

    async fn get<T>(&self, segments: &[&str]) -> ShopResult<T>
    where
        T: DeserializeOwned + Envelope,
    {
        let url = self.endpoint(segments)?;
        self.send::<(), T>(Method::GET, url, None).await
    }

    async fn post<B, T>(&self, segments: &[&str], body: &B) -> ShopResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Envelope,
    {
        let url = self.endpoint(segments)?;
        self.send(Method::POST, url, Some(body)).await
    }
}

/// Decodes a `{success, ...}` envelope, mapping every failure shape to `RequestFailed`.
async fn read_envelope<T>(response: Response) -> ShopResult<T>
where
    T: DeserializeOwned + Envelope,
{
    let status = response.status();
    let code = Some(status.as_u16());

    if !status.is_success() {
        let error_body = response.text().await.map_err(|e| {
            ShopError::request_failed(code, format!("Failed to read error response: {}", e))
        })?;
        let message = serde_json::from_str::<ErrorResponse>(&error_body)
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(ShopError::request_failed(code, message));
    }

    let envelope = response
        .json::<T>()
        .await
        .map_err(|e| ShopError::request_failed(code, format!("Failed to parse response: {}", e)))?;

    if !envelope.success() {
        let message = envelope
            .error()
            .unwrap_or("backend reported failure")
            .to_string();
        return Err(ShopError::request_failed(code, message));
    }

    Ok(envelope)
}

fn require_non_empty(value: &str, what: &str) -> ShopResult<()> {
    if value.trim().is_empty() {
        return Err(ShopError::InvalidInput(format!("{} must not be empty", what)));
    }
    Ok(())
}

fn missing(field: &str) -> ShopError {
    ShopError::request_failed(None, format!("Response is missing '{}'", field))
}

#[async_trait]
impl ShopApi for ShopClient {
    fn user_id(&self) -> &str {
        self.identity.as_str()
    }

    #[instrument(skip(self, text))]
    async fn analyze_mood(&self, text: &str) -> ShopResult<SentimentResult> {
        require_non_empty(text, "mood text")?;
        let body = AnalyzeSentimentRequest {
            text: text.to_string(),
        };
        let response: SentimentResponse = self.post(&["analyze-sentiment"], &body).await?;
        response.sentiment.ok_or_else(|| missing("sentiment"))
    }

    #[instrument(skip(self, context))]
    async fn get_recommendations(
        &self,
        context: &RecommendationContext,
    ) -> ShopResult<Vec<Recommendation>> {
        let body = RecommendationsRequest {
            user_id: self.identity.as_str().to_string(),
            context: context.clone(),
            limit: RECOMMENDATION_LIMIT,
        };
        let response: RecommendationsResponse = self.post(&["recommendations"], &body).await?;
        let mut recommendations = response.recommendations;
        recommendations.truncate(RECOMMENDATION_LIMIT);
        debug!("Received {} recommendations", recommendations.len());
        Ok(recommendations)
    }

    #[instrument(skip(self))]
    async fn search_products(
        &self,
        query: &str,
        emotion_context: Option<&str>,
    ) -> ShopResult<Vec<SearchResult>> {
        require_non_empty(query, "search query")?;
        let body = SearchRequest {
            query: query.to_string(),
            emotion_context: emotion_context.map(str::to_string),
            limit: SEARCH_LIMIT,
        };
        let response: SearchResponse = self.post(&["search"], &body).await?;
        let mut results = response.results;
        results.truncate(SEARCH_LIMIT);
        debug!("Received {} search results", results.len());
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn get_all_products(&self) -> ShopResult<Vec<Product>> {
        let response: ProductsResponse = self.get(&["products"]).await?;
        Ok(response.products)
    }

    #[instrument(skip(self))]
    async fn get_product(&self, product_id: &str) -> ShopResult<Product> {
        require_non_empty(product_id, "product id")?;
        let response: ProductResponse = self.get(&["products", product_id]).await?;
        response.product.ok_or_else(|| missing("product"))
    }

    #[instrument(skip(self))]
    async fn track_interaction(
        &self,
        product_id: &str,
        action: InteractionAction,
        emotion: Option<&str>,
    ) -> ShopResult<InteractionAck> {
        require_non_empty(product_id, "product id")?;
        let body = TrackInteractionRequest {
            user_id: self.identity.as_str().to_string(),
            product_id: product_id.to_string(),
            action,
            emotion: emotion.map(str::to_string),
        };
        self.post(&["track-interaction"], &body).await
    }

    #[instrument(skip(self))]
    async fn get_similar_products(&self, product_id: &str) -> ShopResult<SimilarProducts> {
        require_non_empty(product_id, "product id")?;
        let response: SimilarProductsResponse =
            self.get(&["similar-products", product_id]).await?;
        let target_product = response
            .target_product
            .ok_or_else(|| missing("target_product"))?;
        Ok(SimilarProducts {
            target_product,
            similar_products: response.similar_products,
        })
    }
}
