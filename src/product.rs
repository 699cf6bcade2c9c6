use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// A product's stable identifier.
///
/// The catalog API uses numbers, but persisted favorites written by other clients may hold
/// strings, so both shapes are accepted and round-trip unchanged.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Num(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Num(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

/// Parses command-line ids: all-digit input is numeric, anything else is kept as text.
impl FromStr for ProductId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(s.parse::<u64>()
            .map(ProductId::Num)
            .unwrap_or_else(|_| ProductId::Text(s.to_string())))
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        ProductId::Num(n)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

/// One catalog entry. Fields the page does not use are ignored on decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
}

/// The catalog endpoint's response envelope.
///
/// A missing or `null` product list decodes as empty.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Product>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Product>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_accept_numbers_and_strings() {
        let ids: Vec<ProductId> = serde_json::from_str(r#"[1, "a", 42]"#).unwrap();
        assert_eq!(
            ids,
            vec![ProductId::Num(1), ProductId::from("a"), ProductId::Num(42)]
        );
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[1,"a",42]"#);
    }

    #[test]
    fn id_parsing_prefers_numbers() {
        assert_eq!("17".parse::<ProductId>().unwrap(), ProductId::Num(17));
        assert_eq!(" sku-9 ".parse::<ProductId>().unwrap(), ProductId::from("sku-9"));
        assert_eq!(ProductId::Num(5).to_string(), "5");
    }

    #[test]
    fn missing_products_field_is_empty() {
        let resp: CatalogResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(resp.products.is_empty());
        assert_eq!(resp.total, Some(0));

        let resp: CatalogResponse = serde_json::from_str(r#"{"products": null}"#).unwrap();
        assert!(resp.products.is_empty());
    }

    #[test]
    fn extra_product_fields_are_ignored() {
        let json = r#"{"products":[{"id":1,"title":"Mascara","price":9.99,"rating":4.94,
            "category":"beauty","thumbnail":"t.png","stock":5,"tags":["x"]}]}"#;
        let resp: CatalogResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.products.len(), 1);
        assert_eq!(resp.products[0].category, "beauty");
        assert_eq!(resp.products[0].price, 9.99);
    }
}
