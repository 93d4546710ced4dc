use std::sync::Arc;

use moodshop_core::api::{context_from_sentiment, InteractionAction};
use moodshop_core::ShopApi;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::errors::{UiError, UiResult};
use crate::page::{ElementId, Page};
use crate::render::{Renderer, CATALOG_ERROR_HTML};
use crate::session::SessionContext;

pub const EMPTY_MOOD_ALERT: &str = "Please tell us how you're feeling first.";
pub const EMPTY_QUERY_ALERT: &str = "Please enter a search query.";
pub const MOOD_FAILED_ALERT: &str = "Failed to analyze your mood. Please try again.";
pub const SEARCH_FAILED_ALERT: &str = "Search failed. Please try again.";
pub const DETAIL_FAILED_ALERT: &str = "Failed to load product details.";
pub const LIKED_ALERT: &str = "Added to your favorites!";
pub const LIKE_FAILED_ALERT: &str = "Failed to like product. Please try again.";
pub const CART_ALERT: &str = "Added to cart!";
pub const CART_FAILED_ALERT: &str = "Failed to add product to cart. Please try again.";

/// How a flow ended, for callers that need more than the page state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    Completed,
    /// Input validation rejected the action before any network call.
    Skipped,
    /// A call failed; the failure was logged and reported on the page.
    Failed,
}

/// Wires user actions to API calls and writes the rendered results into the page.
///
/// Flows catch their own errors: each failure is logged and reported once,
/// and trigger buttons are always restored.
pub struct ShopController {
    api: Arc<dyn ShopApi>,
    session: SessionContext,
    page: Arc<Mutex<Page>>,
    renderer: Renderer,
    /// Fire-and-forget tracking calls still in flight.
    tracking: Mutex<JoinSet<()>>,
}

impl ShopController {
    pub fn new(api: Arc<dyn ShopApi>) -> UiResult<Self> {
        Self::with_session(api, SessionContext::new())
    }

    pub fn with_session(api: Arc<dyn ShopApi>, session: SessionContext) -> UiResult<Self> {
        Ok(Self {
            api,
            session,
            page: Arc::new(Mutex::new(Page::new())),
            renderer: Renderer::new()?,
            tracking: Mutex::new(JoinSet::new()),
        })
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn user_id(&self) -> &str {
        self.api.user_id()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Copy of the current page state.
    pub async fn page(&self) -> Page {
        self.page.lock().await.clone()
    }

    pub async fn take_alerts(&self) -> Vec<String> {
        self.page.lock().await.take_alerts()
    }

    /// Types into an input element.
    pub async fn set_input(&self, id: ElementId, value: &str) {
        self.page.lock().await.set_value(id, value);
    }

    async fn report(&self, message: &str, err: &UiError) -> FlowOutcome {
        error!(error = %err, "{}", message);
        self.page.lock().await.alert(message);
        FlowOutcome::Failed
    }

    /// Reads `moodInput`, analyzes it and shows recommendations for the result.
    pub async fn analyze_mood(&self) -> FlowOutcome {
        let text = {
            let mut page = self.page.lock().await;
            let text = page.value(ElementId::MoodInput).trim().to_string();
            if text.is_empty() {
                page.alert(EMPTY_MOOD_ALERT);
                return FlowOutcome::Skipped;
            }
            page.set_busy(ElementId::AnalyzeMoodBtn);
            text
        };

        let outcome = match self.mood_to_recommendations(&text).await {
            Ok(()) => FlowOutcome::Completed,
            Err(e) => self.report(MOOD_FAILED_ALERT, &e).await,
        };

        self.page
            .lock()
            .await
            .restore_button(ElementId::AnalyzeMoodBtn);
        outcome
    }

    async fn mood_to_recommendations(&self, text: &str) -> UiResult<()> {
        let sentiment = self.api.analyze_mood(text).await?;
        info!(emotion = %sentiment.primary_emotion, "Mood analyzed");
        self.session.set_emotion(&sentiment.primary_emotion).await;

        let summary = self.renderer.render_sentiment(&sentiment)?;
        self.page
            .lock()
            .await
            .set_html(ElementId::SentimentAnalysis, summary);

        let context = context_from_sentiment(&sentiment);
        let recommendations = self.api.get_recommendations(&context).await?;
        debug!("Rendering {} recommendations", recommendations.len());
        let html = self.renderer.render_recommendations(&recommendations)?;

        let mut page = self.page.lock().await;
        page.set_html(ElementId::RecommendationsList, html);
        page.set_hidden(ElementId::RecommendationsSection, false);
        page.scroll_into_view(ElementId::RecommendationsSection);
        Ok(())
    }

    /// Reads `searchInput` and lists matching products, tagged with the emotion context.
    pub async fn search(&self) -> FlowOutcome {
        self.search_with_emotion(None).await
    }

    /// Like [`search`](Self::search), but tags this one query with `emotion`
    /// instead of the session context. The session is left untouched.
    pub async fn search_with_emotion(&self, emotion: Option<&str>) -> FlowOutcome {
        let query = {
            let mut page = self.page.lock().await;
            let query = page.value(ElementId::SearchInput).trim().to_string();
            if query.is_empty() {
                page.alert(EMPTY_QUERY_ALERT);
                return FlowOutcome::Skipped;
            }
            page.set_busy(ElementId::SearchBtn);
            query
        };

        let outcome = match self.run_search(&query, emotion).await {
            Ok(()) => FlowOutcome::Completed,
            Err(e) => self.report(SEARCH_FAILED_ALERT, &e).await,
        };

        self.page.lock().await.restore_button(ElementId::SearchBtn);
        outcome
    }

    async fn run_search(&self, query: &str, emotion: Option<&str>) -> UiResult<()> {
        let emotion = match emotion {
            Some(emotion) => Some(emotion.to_string()),
            None => self.session.emotion().await,
        };
        let results = self
            .api
            .search_products(query, emotion.as_deref())
            .await?;
        debug!("Rendering {} search results", results.len());
        let html = self.renderer.render_search_results(&results)?;
        self.page
            .lock()
            .await
            .set_html(ElementId::SearchResults, html);
        Ok(())
    }

    /// Records the view and opens the detail modal with similar products.
    ///
    /// The tracking call runs on its own task and is never awaited here; its
    /// failure is only logged.
    pub async fn view_product(&self, product_id: &str) -> FlowOutcome {
        let emotion = self.session.emotion().await;
        self.track_in_background(product_id, InteractionAction::View, emotion)
            .await;

        let detail = async {
            let similar = self.api.get_similar_products(product_id).await?;
            self.renderer.render_product_detail(&similar)
        };

        match detail.await {
            Ok((title, body)) => {
                let mut page = self.page.lock().await;
                page.set_html(ElementId::ModalTitle, title);
                page.set_html(ElementId::ModalBody, body);
                page.set_hidden(ElementId::ProductModal, false);
                FlowOutcome::Completed
            }
            Err(e) => self.report(DETAIL_FAILED_ALERT, &e).await,
        }
    }

    async fn track_in_background(
        &self,
        product_id: &str,
        action: InteractionAction,
        emotion: Option<String>,
    ) {
        let api = Arc::clone(&self.api);
        let product_id = product_id.to_string();
        self.tracking.lock().await.spawn(async move {
            if let Err(e) = api
                .track_interaction(&product_id, action, emotion.as_deref())
                .await
            {
                warn!(error = %e, product_id = %product_id, "Failed to track {}", action);
            }
        });
    }

    /// Waits for background tracking calls started so far.
    pub async fn wait_for_tracking(&self) {
        let mut tasks = std::mem::take(&mut *self.tracking.lock().await);
        while let Some(result) = tasks.join_next().await {
            if let Err(e) = result {
                warn!(error = %e, "Tracking task did not complete");
            }
        }
    }

    pub async fn close_modal(&self) {
        self.page
            .lock()
            .await
            .set_hidden(ElementId::ProductModal, true);
    }

    /// Renders the full catalog into `productsList`, or an inline error message.
    pub async fn load_catalog(&self) -> FlowOutcome {
        let html = async {
            let products = self.api.get_all_products().await?;
            self.renderer.render_catalog(&products)
        };

        match html.await {
            Ok(html) => {
                self.page
                    .lock()
                    .await
                    .set_html(ElementId::ProductsList, html);
                FlowOutcome::Completed
            }
            Err(e) => {
                error!(error = %e, "Failed to load products");
                self.page
                    .lock()
                    .await
                    .set_html(ElementId::ProductsList, CATALOG_ERROR_HTML);
                FlowOutcome::Failed
            }
        }
    }

    pub async fn like_product(&self, product_id: &str) -> FlowOutcome {
        self.record_action(product_id, InteractionAction::Like, LIKED_ALERT, LIKE_FAILED_ALERT)
            .await
    }

    pub async fn add_to_cart(&self, product_id: &str) -> FlowOutcome {
        self.record_action(product_id, InteractionAction::AddToCart, CART_ALERT, CART_FAILED_ALERT)
            .await
    }

    async fn record_action(
        &self,
        product_id: &str,
        action: InteractionAction,
        done: &str,
        failed: &str,
    ) -> FlowOutcome {
        let emotion = self.session.emotion().await;
        match self
            .api
            .track_interaction(product_id, action, emotion.as_deref())
            .await
        {
            Ok(_) => {
                self.page.lock().await.alert(done);
                FlowOutcome::Completed
            }
            Err(e) => self.report(failed, &e.into()).await,
        }
    }

    /// Full-page markup of the current state.
    pub async fn render_page(&self) -> UiResult<String> {
        let page = self.page.lock().await;
        self.renderer.render_page(&page)
    }
}
