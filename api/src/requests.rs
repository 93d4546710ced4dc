use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::{InteractionAction, SentimentResult};

/// Free-form key/value context forwarded to the recommendation endpoint.
pub type RecommendationContext = Map<String, Value>;

/// Body of `POST /analyze-sentiment`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalyzeSentimentRequest {
    pub text: String,
}

/// Body of `POST /recommendations`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecommendationsRequest {
    pub user_id: String,
    #[serde(default)]
    pub context: RecommendationContext,
    pub limit: usize,
}

/// Body of `POST /search`. `emotion_context` is sent as `null` when unknown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub emotion_context: Option<String>,
    pub limit: usize,
}

/// Body of `POST /track-interaction`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackInteractionRequest {
    pub user_id: String,
    pub product_id: String,
    pub action: InteractionAction,
    pub emotion: Option<String>,
}

/// Builds the recommendation context derived from a mood analysis.
pub fn context_from_sentiment(sentiment: &SentimentResult) -> RecommendationContext {
    let mut context = Map::new();
    context.insert(
        "current_emotion".to_string(),
        Value::String(sentiment.primary_emotion.clone()),
    );
    context.insert(
        "mood_category".to_string(),
        Value::String(sentiment.mood_category.clone()),
    );
    context.insert(
        "emotion_intensity".to_string(),
        serde_json::json!(sentiment.emotion_intensity),
    );
    context.insert(
        "shopping_motivation".to_string(),
        Value::String(sentiment.shopping_motivation.clone()),
    );
    context
}
