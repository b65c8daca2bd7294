//! Wire shape of a storefront product record.
//!
//! The product API is loosely typed: numbers arrive as numbers or strings,
//! `images` may be a single path or a list, and any field may be missing or
//! `null`. Every field here is optional and every value is accepted, so a
//! record never fails to deserialize because of one odd field. Interpretation
//! happens once, in [`crate::catalog::normalize_product`].

use serde::{Deserialize, Deserializer};

/// A JSON scalar or list whose type is not trusted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Loose {
    Text(String),
    Number(serde_json::Number),
    List(Vec<Loose>),
    Other(serde_json::Value),
}

impl Loose {
    /// Non-empty text. Numbers are rendered as text; whitespace counts as
    /// content.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Loose::Text(s) if !s.is_empty() => Some(s.clone()),
            Loose::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Finite numeric value. Numeric strings are parsed.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Loose::Number(n) => n.as_f64()?,
            Loose::Text(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Stock count: floored, negative clamps to zero.
    pub fn as_count(&self) -> Option<u32> {
        self.as_f64()
            .map(|v| v.floor().clamp(0.0, f64::from(u32::MAX)) as u32)
    }

    /// Text values from a single entry or a list; empty entries dropped.
    pub fn texts(&self) -> Vec<String> {
        match self {
            Loose::List(items) => items.iter().filter_map(Loose::as_text).collect(),
            other => other.as_text().into_iter().collect(),
        }
    }

    /// Text values only when this is a list. A lone scalar yields nothing.
    pub fn list_texts(&self) -> Vec<String> {
        match self {
            Loose::List(_) => self.texts(),
            _ => Vec::new(),
        }
    }
}

/// Product record exactly as the storefront API returns it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(default)]
    pub id: Option<Loose>,
    /// Document id used by the storefront database.
    #[serde(default, rename = "_id")]
    pub document_id: Option<Loose>,
    #[serde(default)]
    pub title: Option<Loose>,
    #[serde(default)]
    pub name: Option<Loose>,
    #[serde(default)]
    pub description: Option<Loose>,
    #[serde(default)]
    pub images: Option<Loose>,
    #[serde(default)]
    pub image: Option<Loose>,
    #[serde(default)]
    pub discount: Option<Loose>,
    #[serde(default)]
    pub price: Option<Loose>,
    #[serde(default)]
    pub original_price: Option<Loose>,
    #[serde(default)]
    pub rating: Option<Loose>,
    #[serde(default)]
    pub reviews: Option<Loose>,
    #[serde(default)]
    pub sku: Option<Loose>,
    #[serde(default)]
    pub category: Option<Loose>,
    #[serde(default)]
    pub brand: Option<Loose>,
    /// `"MultiVarient"` for per-variant inventory; anything else is simple.
    #[serde(default)]
    pub variant_type: Option<Loose>,
    #[serde(default)]
    pub stock: Option<Loose>,
    #[serde(default)]
    pub total_stock: Option<Loose>,
    #[serde(default)]
    pub sizes: Option<Loose>,
    #[serde(default)]
    pub colors: Option<Loose>,
    #[serde(default, deserialize_with = "lenient_variants")]
    pub variants: Vec<RawVariant>,
}

/// Variant record as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawVariant {
    #[serde(default)]
    pub size: Option<Loose>,
    #[serde(default)]
    pub color: Option<Loose>,
    #[serde(default)]
    pub stock: Option<Loose>,
}

/// Accepts a missing, `null` or non-array `variants` field as empty and
/// skips entries that are not objects.
fn lenient_variants<'de, D>(deserializer: D) -> Result<Vec<RawVariant>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter(serde_json::Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> RawProduct {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_accepts_mixed_types() {
        let raw = parse(json!({
            "_id": "65f1c2aa9b03d4e5f6a7b8c9",
            "title": 42,
            "price": "19.99",
            "stock": "7",
            "images": "/img/a.jpg",
            "variantType": "MultiVarient",
            "variants": [{"size": "M", "color": null, "stock": 3}, "junk", 7]
        }));
        assert_eq!(raw.title.and_then(|t| t.as_text()), Some("42".to_string()));
        assert_eq!(raw.price.and_then(|p| p.as_f64()), Some(19.99));
        assert_eq!(raw.stock.and_then(|s| s.as_count()), Some(7));
        assert_eq!(raw.images.map(|i| i.texts()), Some(vec!["/img/a.jpg".to_string()]));
        assert_eq!(raw.variants.len(), 1);
        assert!(raw.document_id.is_some());
    }

    #[test]
    fn test_non_array_variants_are_empty() {
        let raw = parse(json!({"variants": {"size": "M"}}));
        assert!(raw.variants.is_empty());
        let raw = parse(json!({"variants": null}));
        assert!(raw.variants.is_empty());
    }

    #[test]
    fn test_count_clamps() {
        assert_eq!(Loose::Text("-3".into()).as_count(), Some(0));
        assert_eq!(Loose::Text("2.7".into()).as_count(), Some(2));
        assert_eq!(Loose::Text("lots".into()).as_count(), None);
        assert_eq!(Loose::Other(json!(true)).as_count(), None);
    }

    #[test]
    fn test_list_texts_ignore_scalars() {
        assert!(Loose::Text("XL".into()).list_texts().is_empty());
        assert!(Loose::Number(serde_json::Number::from(42)).list_texts().is_empty());
        assert_eq!(
            Loose::List(vec![Loose::Text("S".into()), Loose::Text("".into())]).list_texts(),
            vec!["S".to_string()]
        );
        assert_eq!(Loose::Text("/a.jpg".into()).texts(), vec!["/a.jpg".to_string()]);
    }

    #[test]
    fn test_whitespace_text_is_kept() {
        assert_eq!(Loose::Text(" ".into()).as_text(), Some(" ".to_string()));
        assert_eq!(Loose::Text("".into()).as_text(), None);
        assert_eq!(
            Loose::List(vec![Loose::Text(" ".into()), Loose::Text("".into())]).texts(),
            vec![" ".to_string()]
        );
    }

    #[test]
    fn test_texts_drop_empty_entries() {
        let list = Loose::List(vec![
            Loose::Text("S".into()),
            Loose::Text("".into()),
            Loose::Number(serde_json::Number::from(42)),
            Loose::Other(json!(null)),
        ]);
        assert_eq!(list.texts(), vec!["S".to_string(), "42".to_string()]);
    }
}
