use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// A catalog product as returned by the backend. Read-only on the client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub emotion_tags: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

/// Result of the backend's mood analysis of free text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SentimentResult {
    pub primary_emotion: String,
    #[serde(default)]
    pub mood_category: String,
    /// Scale 1-10.
    #[serde(default)]
    pub emotion_intensity: f64,
    #[serde(default)]
    pub shopping_motivation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_product_types: Vec<String>,
}

/// A recommended product with the backend's scoring metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub product: Product,
    /// Usually within 0.0..=1.0, rendered as a percentage.
    #[serde(default)]
    pub confidence_score: f64,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub recommendation_reason: String,
}

/// A semantic search hit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub product: Product,
    #[serde(default)]
    pub similarity_score: f64,
    #[serde(default)]
    pub explanation: String,
}

/// A product ranked by similarity to another product.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimilarProduct {
    pub product: Product,
    #[serde(default)]
    pub similarity_score: f64,
}

/// User actions the backend records against a product.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InteractionAction {
    View,
    Like,
    AddToCart,
}
