use moodshop_api::{Product, Recommendation, SearchResult, SentimentResult, SimilarProduct};
use serde_json::Value;
use std::collections::HashSet;

/// Static description of one seed product.
struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    subcategory: &'static str,
    price: f64,
    brand: &'static str,
    rating: f64,
    emotion_tags: &'static [&'static str],
    features: &'static [&'static str],
    image: &'static str,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Seed {
    fn into_product(self) -> Product {
        Product {
            product_id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: self.price,
            category: self.category.to_string(),
            subcategory: Some(self.subcategory.to_string()),
            rating: self.rating,
            brand: self.brand.to_string(),
            features: strings(self.features),
            emotion_tags: strings(self.emotion_tags),
            image_url: format!("/static/images/{}", self.image),
            color: None,
            stock: None,
        }
    }
}

/// The five seed products every fresh stub starts with.
pub fn sample_products() -> Vec<Product> {
    vec![
        Seed {
            id: "p001",
            name: "Wireless Bluetooth Headphones",
            description: "Premium noise-canceling headphones with 30-hour battery life. Perfect for music lovers who want crystal clear sound quality.",
            category: "electronics",
            subcategory: "audio",
            price: 199.99,
            brand: "SoundMax",
            rating: 4.5,
            emotion_tags: &["happy", "energetic", "focused"],
            features: &["noise-canceling", "wireless", "long-battery", "premium-sound"],
            image: "headphones.jpg",
        }
        .into_product(),
        Seed {
            id: "p002",
            name: "Cozy Aromatherapy Candle Set",
            description: "Hand-poured soy candles with relaxing lavender and vanilla scents. Create a peaceful atmosphere in your home.",
            category: "home",
            subcategory: "decor",
            price: 29.99,
            brand: "ZenHome",
            rating: 4.8,
            emotion_tags: &["calm", "relaxed", "peaceful", "content"],
            features: &["natural-soy", "long-lasting", "aromatherapy", "handmade"],
            image: "candles.jpg",
        }
        .into_product(),
        Seed {
            id: "p003",
            name: "Adventure Hiking Backpack",
            description: "Durable 40L hiking backpack with weather resistance. Built for outdoor enthusiasts who love exploration.",
            category: "sports",
            subcategory: "outdoor",
            price: 89.99,
            brand: "TrailBlaze",
            rating: 4.6,
            emotion_tags: &["adventurous", "excited", "confident", "energetic"],
            features: &["weather-resistant", "large-capacity", "ergonomic", "durable"],
            image: "backpack.jpg",
        }
        .into_product(),
        Seed {
            id: "p004",
            name: "Luxury Silk Pajama Set",
            description: "Ultra-soft silk pajamas for the ultimate comfort. Perfect for relaxing evenings and peaceful sleep.",
            category: "clothing",
            subcategory: "sleepwear",
            price: 149.99,
            brand: "SilkDream",
            rating: 4.7,
            emotion_tags: &["comfortable", "luxurious", "peaceful", "pampered"],
            features: &["100%-silk", "hypoallergenic", "temperature-regulating", "premium"],
            image: "pajamas.jpg",
        }
        .into_product(),
        Seed {
            id: "p005",
            name: "Smart Fitness Watch",
            description: "Advanced fitness tracking with heart rate monitoring and GPS. Motivate yourself to reach new fitness goals.",
            category: "electronics",
            subcategory: "wearables",
            price: 299.99,
            brand: "FitTech",
            rating: 4.4,
            emotion_tags: &["motivated", "energetic", "accomplished", "healthy"],
            features: &["heart-rate-monitor", "gps", "waterproof", "long-battery"],
            image: "smartwatch.jpg",
        }
        .into_product(),
    ]
}

// (keywords, emotion, motivation, related product tags)
const MOODS: &[(&[&str], &str, &str, &[&str])] = &[
    (
        &["tired", "exhausted", "sleepy", "drained"],
        "tired",
        "rest and comfort",
        &["comfortable", "peaceful", "relaxed", "calm"],
    ),
    (
        &["stressed", "anxious", "overwhelmed", "worried"],
        "stressed",
        "relaxation",
        &["calm", "relaxed", "peaceful", "content"],
    ),
    (
        &["sad", "down", "lonely", "blue"],
        "sad",
        "comfort and self-care",
        &["comfortable", "pampered", "content", "luxurious"],
    ),
    (
        &["excited", "adventure", "thrilled", "explore"],
        "excited",
        "new experiences",
        &["adventurous", "excited", "confident", "energetic"],
    ),
    (
        &["energetic", "workout", "pumped", "motivated"],
        "energetic",
        "performance",
        &["energetic", "motivated", "accomplished", "healthy"],
    ),
    (
        &["happy", "great", "joy", "wonderful"],
        "happy",
        "celebration",
        &["happy", "energetic", "excited", "content"],
    ),
    (
        &["calm", "peaceful", "relaxed", "serene"],
        "calm",
        "maintaining balance",
        &["calm", "peaceful", "relaxed"],
    ),
];

/// Keyword lookup; unknown text falls back to a neutral reading.
pub fn analyze_text(text: &str) -> SentimentResult {
    let lower = text.to_lowercase();
    let intensity = (5 + text.matches('!').count()).min(10) as f64;
    for (keywords, emotion, motivation, tags) in MOODS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return SentimentResult {
                primary_emotion: emotion.to_string(),
                mood_category: emotion.to_string(),
                emotion_intensity: intensity,
                shopping_motivation: motivation.to_string(),
                recommended_product_types: tags.iter().map(|t| t.to_string()).collect(),
            };
        }
    }
    SentimentResult {
        primary_emotion: "neutral".to_string(),
        mood_category: "neutral".to_string(),
        emotion_intensity: intensity,
        shopping_motivation: "general_browsing".to_string(),
        recommended_product_types: vec!["popular_items".to_string()],
    }
}

fn related_tags(emotion: &str) -> &'static [&'static str] {
    MOODS
        .iter()
        .find(|(_, e, _, _)| *e == emotion)
        .map(|(_, _, _, tags)| *tags)
        .unwrap_or(&[])
}

fn sort_desc<T>(items: &mut [(f64, T)]) {
    items.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
}

/// Blends tag overlap with the context emotion and product rating.
pub fn recommend(
    products: &[Product],
    context: &serde_json::Map<String, Value>,
    limit: usize,
) -> Vec<Recommendation> {
    let emotion = context
        .get("current_emotion")
        .and_then(Value::as_str)
        .unwrap_or("neutral");
    let related = related_tags(emotion);

    let mut scored: Vec<(f64, Recommendation)> = products
        .iter()
        .map(|p| {
            let overlap = p
                .emotion_tags
                .iter()
                .filter(|t| related.contains(&t.as_str()))
                .count();
            let emotion_score = if related.is_empty() {
                0.0
            } else {
                overlap as f64 / related.len() as f64
            };
            let score = (emotion_score * 0.6 + p.rating / 5.0 * 0.4).min(1.0);
            let reason = if overlap > 0 {
                format!("Emotionally matches your {} mood", emotion)
            } else {
                "Popular choice among other users".to_string()
            };
            let explanation = format!(
                "This {} could be perfect for how you're feeling right now.",
                p.name
            );
            (
                score,
                Recommendation {
                    product: p.clone(),
                    confidence_score: score,
                    explanation,
                    recommendation_reason: reason,
                },
            )
        })
        .collect();
    sort_desc(&mut scored);
    scored.into_iter().take(limit).map(|(_, r)| r).collect()
}

/// Fraction of query words found anywhere in a product's text.
pub fn search(products: &[Product], query: &str, limit: usize) -> Vec<SearchResult> {
    let words: Vec<String> = query
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    if words.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, SearchResult)> = products
        .iter()
        .filter_map(|p| {
            let haystack = format!(
                "{} {} {} {}",
                p.name,
                p.description,
                p.category,
                p.emotion_tags.join(" ")
            )
            .to_lowercase();
            let hits = words.iter().filter(|w| haystack.contains(w.as_str())).count();
            if hits == 0 {
                return None;
            }
            let score = hits as f64 / words.len() as f64;
            Some((
                score,
                SearchResult {
                    product: p.clone(),
                    similarity_score: score,
                    explanation: format!("{} matches your search for \"{}\".", p.name, query),
                },
            ))
        })
        .collect();
    sort_desc(&mut scored);
    scored.into_iter().take(limit).map(|(_, r)| r).collect()
}

/// Jaccard overlap of emotion tags, with a bonus for a shared category.
pub fn similar_to(products: &[Product], target: &Product, limit: usize) -> Vec<SimilarProduct> {
    let target_tags: HashSet<&str> = target.emotion_tags.iter().map(String::as_str).collect();
    let mut scored: Vec<(f64, SimilarProduct)> = products
        .iter()
        .filter(|p| p.product_id != target.product_id)
        .map(|p| {
            let tags: HashSet<&str> = p.emotion_tags.iter().map(String::as_str).collect();
            let union = target_tags.union(&tags).count().max(1) as f64;
            let mut score = target_tags.intersection(&tags).count() as f64 / union;
            if p.category == target.category {
                score += 0.5;
            }
            let score = score.min(1.0);
            (
                score,
                SimilarProduct {
                    product: p.clone(),
                    similarity_score: score,
                },
            )
        })
        .collect();
    sort_desc(&mut scored);
    scored.into_iter().take(limit).map(|(_, s)| s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_text_keywords() {
        let sentiment = analyze_text("I'm so stressed about work!!");
        assert_eq!(sentiment.primary_emotion, "stressed");
        assert_eq!(sentiment.emotion_intensity, 7.0);
        assert_eq!(analyze_text("hmm").primary_emotion, "neutral");
    }

    #[test]
    fn test_recommend_prefers_matching_tags() {
        let mut context = serde_json::Map::new();
        context.insert("current_emotion".to_string(), Value::from("stressed"));
        let recs = recommend(&sample_products(), &context, 8);
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[0].product.product_id, "p002");
    }

    #[test]
    fn test_search_and_similar() {
        let products = sample_products();
        let hits = search(&products, "candles", 10);
        assert_eq!(hits.len(), 1);
        assert!(search(&products, "submarine", 10).is_empty());

        let similar = similar_to(&products, &products[0], 5);
        assert_eq!(similar.len(), 4);
        assert_eq!(similar[0].product.product_id, "p005");
    }
}
