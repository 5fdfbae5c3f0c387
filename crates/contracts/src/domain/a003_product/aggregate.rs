use super::application::Application;
use super::attribute_value::{AttributeValue, HasAttributeValues};
use super::reference::Reference;
use crate::domain::a001_brand::BrandId;
use crate::domain::a002_category::CategoryId;
use serde::{Deserialize, Serialize};

crate::uuid_id!(
    /// Уникальный идентификатор товара
    ItemId
);

crate::uuid_id!(
    /// Уникальный идентификатор варианта товара
    VariantId
);

crate::uuid_id!(
    /// Уникальный идентификатор комплектующей
    ComponentId
);

/// Тип товара (`?type=` в запросах списка)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    Single,
    Kit,
    Variant,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Kit => "kit",
            Self::Variant => "variant",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Pieza",
            Self::Kit => "Kit",
            Self::Variant => "Con variantes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemImage {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub order: i32,
}

/// Изображения по `order`; при равенстве сохраняется исходный порядок
pub fn sorted_images(images: &[ItemImage]) -> Vec<&ItemImage> {
    let mut sorted: Vec<&ItemImage> = images.iter().collect();
    sorted.sort_by_key(|i| i.order);
    sorted
}

/// Вариант исполнения товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: VariantId,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<ItemImage>,
    #[serde(default)]
    pub attribute_values: Vec<AttributeValue>,
}

impl HasAttributeValues for Variant {
    fn attribute_values(&self) -> &[AttributeValue] {
        &self.attribute_values
    }
}

/// Комплектующая набора (kit)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: ComponentId,
    pub sku: String,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// Товар каталога (`GET /products/:id`, элементы списков)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    pub category_id: CategoryId,
    #[serde(default)]
    pub brand_id: Option<BrandId>,
    #[serde(default)]
    pub images: Vec<ItemImage>,
    #[serde(default)]
    pub attribute_values: Vec<AttributeValue>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Item {
    /// Первое изображение по `order`, если есть
    pub fn main_image(&self) -> Option<&ItemImage> {
        self.images.iter().min_by_key(|i| i.order)
    }

    pub fn variant(&self, id: VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// Совпадает ли какой-либо кросс-номер с подстрокой (без учёта регистра)
    pub fn matches_reference(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.references
            .iter()
            .any(|r| r.number.to_lowercase().contains(&needle))
    }
}

impl HasAttributeValues for Item {
    fn attribute_values(&self) -> &[AttributeValue] {
        &self.attribute_values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM_JSON: &str = r#"{
        "id":"6a1f0c1e-51c4-4c64-8c52-3f7d2b9e0a11",
        "sku":"DF-2280",
        "name":"Disco de freno ventilado",
        "type":"single",
        "categoryId":"0b7c6a57-5a3f-4f5c-8f0e-2d1a4e6b7c80",
        "images":[
            {"url":"b.jpg","order":2},
            {"url":"a.jpg","order":1}
        ],
        "references":[
            {"id":"7b2e1d0c-0000-4000-8000-000000000001","brand":"Brembo","number":"09.A727.11"}
        ]
    }"#;

    #[test]
    fn test_parse_item_with_defaults() {
        let item: Item = serde_json::from_str(ITEM_JSON).unwrap();
        assert_eq!(item.item_type, ItemType::Single);
        assert!(item.variants.is_empty());
        assert!(item.components.is_empty());
        assert_eq!(item.main_image().map(|i| i.url.as_str()), Some("a.jpg"));
    }

    #[test]
    fn test_matches_reference_substring() {
        let item: Item = serde_json::from_str(ITEM_JSON).unwrap();
        assert!(item.matches_reference("a727"));
        assert!(item.matches_reference(""));
        assert!(!item.matches_reference("xyz"));
    }

    #[test]
    fn test_component_quantity_defaults_to_one() {
        let json = r#"{"id":"7b2e1d0c-0000-4000-8000-000000000009","sku":"P-1","name":"Pastilla"}"#;
        let c: Component = serde_json::from_str(json).unwrap();
        assert_eq!(c.quantity, 1);
    }

    #[test]
    fn test_sorted_images() {
        let item: Item = serde_json::from_str(ITEM_JSON).unwrap();
        let urls: Vec<&str> = sorted_images(&item.images).iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, vec!["a.jpg", "b.jpg"]);
    }
}
