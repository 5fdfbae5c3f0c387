use super::aggregate::Item;
use super::attribute_value::CellValue;
use crate::domain::a002_category::AttributeId;
use crate::shared::pagination::total_pages;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Страница товаров. `page` на проводе начинается с 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    #[serde(default, alias = "data")]
    pub items: Vec<Item>,
    #[serde(default)]
    pub total: usize,
    #[serde(default = "first_page")]
    pub page: usize,
    #[serde(default)]
    pub page_size: usize,
    #[serde(default)]
    pub total_pages: usize,
}

fn first_page() -> usize {
    1
}

impl ProductPage {
    /// `totalPages` из ответа, либо вычисленное из `total`/`pageSize`
    pub fn page_count(&self) -> usize {
        if self.total_pages > 0 {
            self.total_pages
        } else {
            total_pages(self.total, self.page_size)
        }
    }
}

/// Допустимые значения по каждому атрибуту применяемости
/// (`GET /products/category/:id/filters`).
///
/// Бэкенд может прислать числа или булевы значения, они приводятся к строкам.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<AttributeId, Vec<Value>>")]
pub struct FilterOptions(pub BTreeMap<AttributeId, Vec<String>>);

impl From<BTreeMap<AttributeId, Vec<Value>>> for FilterOptions {
    fn from(raw: BTreeMap<AttributeId, Vec<Value>>) -> Self {
        let map = raw
            .into_iter()
            .map(|(id, values)| {
                let mut strings: Vec<String> = values.into_iter().filter_map(option_text).collect();
                sort_options(&mut strings);
                strings.dedup();
                (id, strings)
            })
            .collect();
        Self(map)
    }
}

/// Текст опции в том же виде, что и текст ячейки (`CellValue::plain`),
/// иначе `2.0` с сервера не совпадёт со значением `2` в строке применяемости
fn option_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => n.as_f64().map(|f| CellValue::Number(f).plain()),
        Value::Bool(b) => Some(CellValue::Boolean(b).plain()),
        _ => None,
    }
}

/// Числовые списки (годы, объёмы) по значению, остальные по алфавиту
fn sort_options(values: &mut [String]) {
    let number = |v: &String| v.trim().parse::<f64>().ok();
    if values.iter().all(|v| number(v).is_some()) {
        values.sort_by(|a, b| number(a).unwrap_or_default().total_cmp(&number(b).unwrap_or_default()));
    } else {
        values.sort();
    }
}

impl FilterOptions {
    pub fn get(&self, attribute_id: AttributeId) -> &[String] {
        self.0
            .get(&attribute_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    /// Берёт серверный список, а где он пуст, список из `fallback`
    pub fn or_derived(mut self, fallback: FilterOptions) -> FilterOptions {
        for (id, values) in fallback.0 {
            let entry = self.0.entry(id).or_default();
            if entry.is_empty() {
                *entry = values;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAKE: &str = "1a2b3c4d-0000-4000-8000-000000000001";
    const YEAR: &str = "1a2b3c4d-0000-4000-8000-000000000003";

    fn id(s: &str) -> AttributeId {
        serde_json::from_value(Value::String(s.to_string())).unwrap()
    }

    #[test]
    fn test_product_page_accepts_data_alias() {
        let json = r#"{"data":[],"total":45,"page":2,"pageSize":20}"#;
        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.page_count(), 3);
    }

    #[test]
    fn test_product_page_prefers_server_total_pages() {
        let json = r#"{"items":[],"total":45,"pageSize":20,"totalPages":7}"#;
        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count(), 7);
    }

    #[test]
    fn test_filter_options_normalizes_values() {
        let json = format!(
            r#"{{"{MAKE}":["Seat","Audi","Seat",""],"{YEAR}":[2019,2018,null]}}"#
        );
        let opts: FilterOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts.get(id(MAKE)), ["Audi", "Seat"]);
        assert_eq!(opts.get(id(YEAR)), ["2018", "2019"]);
        assert!(opts.get(AttributeId::new_v4()).is_empty());
    }

    #[test]
    fn test_float_options_match_cell_text() {
        let json = format!(r#"{{"{YEAR}":[2.0,1.6,10,9]}}"#);
        let opts: FilterOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts.get(id(YEAR)), ["1.6", "2", "9", "10"]);
        assert_eq!(CellValue::Number(2.0).plain(), "2");
    }

    #[test]
    fn test_mixed_options_sort_as_text() {
        let json = format!(r#"{{"{MAKE}":["Seat","10","9"]}}"#);
        let opts: FilterOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts.get(id(MAKE)), ["10", "9", "Seat"]);
    }

    #[test]
    fn test_or_derived_fills_only_missing_lists() {
        let mut server = BTreeMap::new();
        server.insert(id(MAKE), vec!["Audi".to_string()]);
        server.insert(id(YEAR), vec![]);
        let mut derived = BTreeMap::new();
        derived.insert(id(MAKE), vec!["Seat".to_string()]);
        derived.insert(id(YEAR), vec!["2019".to_string()]);

        let merged = FilterOptions(server).or_derived(FilterOptions(derived));
        assert_eq!(merged.get(id(MAKE)), ["Audi"]);
        assert_eq!(merged.get(id(YEAR)), ["2019"]);
    }
}
