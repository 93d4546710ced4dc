//! View models and their HTML templates.
//!
//! Every function here is a pure mapping from backend data to markup. All
//! interpolated text is escaped by the template engine; fragments produced by
//! one template and embedded in another are passed as safe values.

use minijinja::{context, Environment, Value};
use moodshop_core::api::{Product, Recommendation, SearchResult, SentimentResult, SimilarProduct};
use moodshop_core::SimilarProducts;
use serde::Serialize;

use crate::errors::UiResult;
use crate::page::Page;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Similar-product sub-cards shown in the detail view.
pub const MAX_SIMILAR_IN_DETAIL: usize = 3;

pub const EMPTY_SEARCH_HTML: &str =
    r#"<p class="no-results">No products found matching your search.</p>"#;
pub const EMPTY_RECOMMENDATIONS_HTML: &str =
    r#"<p class="no-results">No recommendations available right now.</p>"#;
pub const CATALOG_ERROR_HTML: &str =
    r#"<p class="error-message">Failed to load products. Please try again later.</p>"#;

const TEMPLATES: &[(&str, &str)] = &[
    ("emotion_tags.html", include_str!("../templates/emotion_tags.html")),
    ("product_card.html", include_str!("../templates/product_card.html")),
    ("search_result.html", include_str!("../templates/search_result.html")),
    ("similar_card.html", include_str!("../templates/similar_card.html")),
    ("product_detail.html", include_str!("../templates/product_detail.html")),
    ("sentiment.html", include_str!("../templates/sentiment.html")),
    ("page.html", include_str!("../templates/page.html")),
    ("text.html", "{{ text }}"),
];

/// `floor(rating)` filled stars then empty ones up to five, rating clamped to 0..=5.
pub fn rating_stars(rating: f64) -> String {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, 5.0)
    } else {
        0.0
    };
    let filled = rating.floor() as usize;
    let mut stars = String::with_capacity(5 * FILLED_STAR.len_utf8());
    stars.extend(std::iter::repeat(FILLED_STAR).take(filled));
    stars.extend(std::iter::repeat(EMPTY_STAR).take(5 - filled));
    stars
}

/// Score in 0..=1 as a whole percentage.
pub fn percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Flattened product fields the templates interpolate.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductCardView {
    pub product_id: String,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub price: String,
    pub stars: String,
    /// The numeric rating exactly as received.
    pub rating: String,
    pub match_label: Option<String>,
    pub explanation: Option<String>,
}

impl ProductCardView {
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.product_id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            price: format_price(product.price),
            stars: rating_stars(product.rating),
            rating: product.rating.to_string(),
            match_label: None,
            explanation: None,
        }
    }

    pub fn with_match(mut self, label: String) -> Self {
        self.match_label = Some(label);
        self
    }

    pub fn with_explanation(mut self, explanation: &str) -> Self {
        if !explanation.trim().is_empty() {
            self.explanation = Some(explanation.to_string());
        }
        self
    }
}

#[derive(Debug, Clone, Serialize)]
struct SentimentView<'a> {
    primary_emotion: &'a str,
    mood_category: &'a str,
    intensity: String,
    shopping_motivation: &'a str,
    recommended_product_types: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
struct PageElementView<'a> {
    id: String,
    kind: &'static str,
    html: &'a str,
    value: &'a str,
    label: &'a str,
    disabled: bool,
    hidden: bool,
}

/// Owns the compiled templates.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> UiResult<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    fn render(&self, name: &str, ctx: Value) -> UiResult<String> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }

    /// Inline badges, one per tag.
    pub fn render_emotion_tags(&self, tags: &[String]) -> UiResult<String> {
        self.render("emotion_tags.html", context! { tags => tags })
    }

    fn render_card(&self, template: &str, card: &ProductCardView, tags: &[String]) -> UiResult<String> {
        let tags_html = Value::from_safe_string(self.render_emotion_tags(tags)?);
        self.render(template, context! { card => card, tags_html => tags_html })
    }

    /// Product card with view, like and add-to-cart affordances.
    ///
    /// `confidence` annotates the card with a match percentage and `explanation`
    /// with the backend's reasoning.
    pub fn render_product_card(
        &self,
        product: &Product,
        confidence: Option<f64>,
        explanation: Option<&str>,
    ) -> UiResult<String> {
        let mut card = ProductCardView::new(product);
        if let Some(score) = confidence {
            card = card.with_match(format!("{}% match", percent(score)));
        }
        if let Some(explanation) = explanation {
            card = card.with_explanation(explanation);
        }
        self.render_card("product_card.html", &card, &product.emotion_tags)
    }

    pub fn render_recommendations(&self, recommendations: &[Recommendation]) -> UiResult<String> {
        if recommendations.is_empty() {
            return Ok(EMPTY_RECOMMENDATIONS_HTML.to_string());
        }
        recommendations
            .iter()
            .map(|r| {
                self.render_product_card(
                    &r.product,
                    Some(r.confidence_score),
                    Some(&r.explanation),
                )
            })
            .collect()
    }

    /// Full catalog grid without match annotations.
    pub fn render_catalog(&self, products: &[Product]) -> UiResult<String> {
        products
            .iter()
            .map(|p| self.render_product_card(p, None, None))
            .collect()
    }

    /// One row per hit with its similarity percentage, or the empty-state message.
    pub fn render_search_results(&self, results: &[SearchResult]) -> UiResult<String> {
        if results.is_empty() {
            return Ok(EMPTY_SEARCH_HTML.to_string());
        }
        results
            .iter()
            .map(|r| {
                let card = ProductCardView::new(&r.product)
                    .with_match(format!("{}% similarity", percent(r.similarity_score)))
                    .with_explanation(&r.explanation);
                self.render_card("search_result.html", &card, &r.product.emotion_tags)
            })
            .collect()
    }

    fn render_similar_card(&self, similar: &SimilarProduct) -> UiResult<String> {
        let card = ProductCardView::new(&similar.product)
            .with_match(format!("{}% similar", percent(similar.similarity_score)));
        self.render("similar_card.html", context! { card => card })
    }

    /// Modal title and body for a product and its first three neighbours.
    pub fn render_product_detail(&self, detail: &SimilarProducts) -> UiResult<(String, String)> {
        let product = &detail.target_product;
        let title = self.render("text.html", context! { text => &product.name })?;
        let similar_html: String = detail
            .similar_products
            .iter()
            .take(MAX_SIMILAR_IN_DETAIL)
            .map(|s| self.render_similar_card(s))
            .collect::<UiResult<_>>()?;

        let card = ProductCardView::new(product);
        let tags_html = Value::from_safe_string(self.render_emotion_tags(&product.emotion_tags)?);
        let body = self.render(
            "product_detail.html",
            context! {
                card => card,
                features => &product.features,
                tags_html => tags_html,
                similar_html => Value::from_safe_string(similar_html),
            },
        )?;
        Ok((title, body))
    }

    pub fn render_sentiment(&self, sentiment: &SentimentResult) -> UiResult<String> {
        let view = SentimentView {
            primary_emotion: &sentiment.primary_emotion,
            mood_category: &sentiment.mood_category,
            intensity: sentiment.emotion_intensity.to_string(),
            shopping_motivation: &sentiment.shopping_motivation,
            recommended_product_types: &sentiment.recommended_product_types,
        };
        self.render("sentiment.html", context! { sentiment => view })
    }

    /// Whole-page snapshot with one element per id.
    pub fn render_page(&self, page: &Page) -> UiResult<String> {
        let elements: Vec<PageElementView> = page
            .elements()
            .map(|(id, el)| PageElementView {
                id: id.to_string(),
                kind: if id.is_input() {
                    "input"
                } else if id.is_button() {
                    "button"
                } else {
                    "container"
                },
                html: &el.html,
                value: &el.value,
                label: &el.label,
                disabled: el.disabled,
                hidden: el.hidden,
            })
            .collect();
        self.render("page.html", context! { elements => elements })
    }
}
