//! Общий контекст просматриваемого товара.
//!
//! Провайдится на уровне `App`, поэтому выбранные в каталоге фильтры по
//! автомобилю доступны карточке товара (подсветка совместимых применяемостей).

use contracts::domain::a002_category::AttributeId;
use contracts::domain::a003_product::{AttributeValue, Item, ItemType, Variant, VariantId};
use contracts::shared::filters::VehicleFilters;
use leptos::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Copy)]
pub struct ItemContext {
    pub item_type: RwSignal<ItemType>,
    pub variant_id: RwSignal<Option<VariantId>>,
    /// Значения атрибутов товара с учётом выбранного варианта
    pub attribute_index: RwSignal<BTreeMap<AttributeId, AttributeValue>>,
    pub selected_filters: RwSignal<VehicleFilters>,
}

impl ItemContext {
    pub fn new() -> Self {
        Self {
            item_type: RwSignal::new(ItemType::default()),
            variant_id: RwSignal::new(None),
            attribute_index: RwSignal::new(BTreeMap::new()),
            selected_filters: RwSignal::new(VehicleFilters::default()),
        }
    }

    /// Новый товар на экране: вариант сбрасывается
    pub fn select_item(&self, item: &Item) {
        self.item_type.set(item.item_type);
        self.variant_id.set(None);
        self.attribute_index.set(attribute_index(item, None));
    }

    pub fn select_variant(&self, item: &Item, variant_id: Option<VariantId>) {
        let variant = variant_id.and_then(|id| item.variant(id));
        self.variant_id.set(variant.map(|v| v.id));
        self.attribute_index.set(attribute_index(item, variant));
    }

    pub fn clear(&self) {
        self.item_type.set(ItemType::default());
        self.variant_id.set(None);
        self.attribute_index.set(BTreeMap::new());
    }
}

impl Default for ItemContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_item_context() -> ItemContext {
    use_context::<ItemContext>().expect("ItemContext not found")
}

/// Индекс значений атрибутов: значения варианта перекрывают значения товара
pub fn attribute_index(
    item: &Item,
    variant: Option<&Variant>,
) -> BTreeMap<AttributeId, AttributeValue> {
    let mut index: BTreeMap<AttributeId, AttributeValue> = item
        .attribute_values
        .iter()
        .map(|v| (v.attribute_id, v.clone()))
        .collect();
    if let Some(variant) = variant {
        for value in &variant.attribute_values {
            if value.resolve().is_some() {
                index.insert(value.attribute_id, value.clone());
            }
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::CategoryId;
    use contracts::domain::a003_product::ItemId;

    fn text(attribute_id: AttributeId, s: &str) -> AttributeValue {
        AttributeValue {
            attribute_id,
            value_string: Some(s.to_string()),
            ..Default::default()
        }
    }

    fn item(values: Vec<AttributeValue>, variants: Vec<Variant>) -> Item {
        Item {
            id: ItemId::new_v4(),
            sku: "DF-1".into(),
            name: "Disco".into(),
            description: None,
            item_type: ItemType::Variant,
            category_id: CategoryId::new_v4(),
            brand_id: None,
            images: Vec::new(),
            attribute_values: values,
            references: Vec::new(),
            applications: Vec::new(),
            variants,
            components: Vec::new(),
        }
    }

    #[test]
    fn test_variant_values_override_item_values() {
        let color = AttributeId::new_v4();
        let size = AttributeId::new_v4();
        let variant = Variant {
            id: VariantId::new_v4(),
            sku: "DF-1-R".into(),
            name: "Rojo".into(),
            images: Vec::new(),
            attribute_values: vec![text(color, "Rojo"), text(size, "")],
        };
        let item = item(vec![text(color, "Negro"), text(size, "280")], vec![variant.clone()]);

        let base = attribute_index(&item, None);
        assert_eq!(base[&color].value_string.as_deref(), Some("Negro"));

        let with_variant = attribute_index(&item, Some(&variant));
        assert_eq!(with_variant[&color].value_string.as_deref(), Some("Rojo"));
        // пустое значение варианта не затирает значение товара
        assert_eq!(with_variant[&size].value_string.as_deref(), Some("280"));
    }
}
