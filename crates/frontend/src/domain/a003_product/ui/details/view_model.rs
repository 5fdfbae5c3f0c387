use crate::domain::a002_category::model::fetch_category;
use crate::domain::a003_product::model::fetch_product;
use crate::shared::api::ApiError;
use crate::shared::fetch_state::FetchState;
use contracts::domain::a002_category::attribute::visible_sorted;
use contracts::domain::a002_category::{Attribute, AttributeId, AttributeScope, Category};
use contracts::domain::a003_product::{AttributeValue, Item, ItemId};
use contracts::shared::text::NOT_AVAILABLE;
use std::collections::BTreeMap;

/// Товар вместе со схемой атрибутов его категории
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub item: Item,
    /// `None`, если схему получить не удалось: таблицы остаются без атрибутов
    pub category: Option<Category>,
}

impl ProductDetail {
    pub fn attributes(&self, scope: AttributeScope) -> Vec<Attribute> {
        self.category
            .as_ref()
            .map(|c| c.attributes.for_scope(scope).to_vec())
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy)]
pub struct ProductDetailsVm {
    /// `Some(None)` после загрузки означает «товар не найден»
    pub state: FetchState<Option<ProductDetail>>,
}

impl ProductDetailsVm {
    pub fn load(&self, id: ItemId) {
        self.state.run("product", move |signal| async move {
            let item = match fetch_product(id, signal.clone()).await {
                Ok(item) => item,
                Err(ApiError::NotFound) => return Ok(None),
                Err(e) => return Err(e),
            };
            let category = match fetch_category(item.category_id, signal).await {
                Ok(category) => Some(category),
                Err(e) if e.is_aborted() => return Err(e),
                Err(e) => {
                    log::warn!("category {} of product {}: {}", item.category_id, id, e);
                    None
                }
            };
            Ok(Some(ProductDetail { item, category }))
        });
    }
}

pub fn use_product() -> ProductDetailsVm {
    ProductDetailsVm {
        state: FetchState::new(),
    }
}

/// Лист характеристик: видимые атрибуты товара по порядку, промах даёт "N/A"
pub fn attribute_sheet(
    attributes: &[Attribute],
    index: &BTreeMap<AttributeId, AttributeValue>,
) -> Vec<(String, String)> {
    visible_sorted(attributes)
        .into_iter()
        .map(|a| {
            let value = index
                .get(&a.id)
                .and_then(AttributeValue::resolve)
                .map(|v| v.display(a.unit.as_deref()))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            (a.label().to_string(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::AttributeType;

    fn attr(name: &str, order: i32, visible: bool, unit: Option<&str>) -> Attribute {
        Attribute {
            id: AttributeId::new_v4(),
            name: name.to_string(),
            display_name: None,
            kind: AttributeType::Number,
            scope: AttributeScope::Product,
            order,
            visible_in_catalog: visible,
            unit: unit.map(str::to_string),
            options: Vec::new(),
        }
    }

    #[test]
    fn test_attribute_sheet_order_units_and_missing() {
        let diameter = attr("Diámetro", 2, true, Some("mm"));
        let holes = attr("Agujeros", 1, true, None);
        let internal = attr("Código interno", 0, false, None);
        let mut index = BTreeMap::new();
        index.insert(
            diameter.id,
            AttributeValue {
                attribute_id: diameter.id,
                value_number: Some(280.0),
                ..Default::default()
            },
        );

        let sheet = attribute_sheet(&[diameter, holes, internal], &index);
        assert_eq!(
            sheet,
            vec![
                ("Agujeros".to_string(), "N/A".to_string()),
                ("Diámetro".to_string(), "280 mm".to_string()),
            ]
        );
    }
}
