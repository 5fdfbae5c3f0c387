use serde::{Deserialize, Serialize};

crate::uuid_id!(
    /// Уникальный идентификатор атрибута
    AttributeId
);

/// Тип значения атрибута
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    #[default]
    String,
    Number,
    Boolean,
    Date,
    List,
}

/// Область действия атрибута: к чему привязаны его значения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeScope {
    #[default]
    Product,
    Variant,
    Reference,
    Application,
}

impl AttributeScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Variant => "variant",
            Self::Reference => "reference",
            Self::Application => "application",
        }
    }
}

/// Описание поля категории. Значения хранятся в `AttributeValue` и ссылаются
/// на атрибут по `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: AttributeId,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: AttributeType,
    #[serde(default)]
    pub scope: AttributeScope,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_visible")]
    pub visible_in_catalog: bool,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
}

fn default_visible() -> bool {
    true
}

impl Attribute {
    /// Заголовок колонки: `displayName`, если задан, иначе `name`
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

/// Видимые в каталоге атрибуты, упорядоченные по `order`.
///
/// Сортировка стабильная: при равном `order` сохраняется порядок бэкенда.
pub fn visible_sorted(attributes: &[Attribute]) -> Vec<&Attribute> {
    let mut visible: Vec<&Attribute> = attributes
        .iter()
        .filter(|a| a.visible_in_catalog)
        .collect();
    visible.sort_by_key(|a| a.order);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(name: &str, order: i32, visible: bool) -> Attribute {
        Attribute {
            id: AttributeId::new_v4(),
            name: name.to_string(),
            display_name: None,
            kind: AttributeType::String,
            scope: AttributeScope::Product,
            order,
            visible_in_catalog: visible,
            unit: None,
            options: Vec::new(),
        }
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let json = r#"{"id":"9d3c4f2e-8a0b-4c1e-b5a6-7f8e9d0c1b2a","name":"Diámetro"}"#;
        let a: Attribute = serde_json::from_str(json).unwrap();
        assert!(a.visible_in_catalog);
        assert_eq!(a.order, 0);
        assert_eq!(a.kind, AttributeType::String);
        assert_eq!(a.scope, AttributeScope::Product);
    }

    #[test]
    fn test_type_and_scope_wire_names() {
        let json = r#"{
            "id":"9d3c4f2e-8a0b-4c1e-b5a6-7f8e9d0c1b2a",
            "name":"year",
            "type":"number",
            "scope":"application",
            "visibleInCatalog":false
        }"#;
        let a: Attribute = serde_json::from_str(json).unwrap();
        assert_eq!(a.kind, AttributeType::Number);
        assert_eq!(a.scope, AttributeScope::Application);
        assert!(!a.visible_in_catalog);
    }

    #[test]
    fn test_label_prefers_display_name() {
        let mut a = attr("diam", 0, true);
        assert_eq!(a.label(), "diam");
        a.display_name = Some("Diámetro".to_string());
        assert_eq!(a.label(), "Diámetro");
        a.display_name = Some("  ".to_string());
        assert_eq!(a.label(), "diam");
    }

    #[test]
    fn test_visible_sorted_drops_hidden_and_keeps_ties_stable() {
        let attrs = vec![
            attr("c", 2, true),
            attr("hidden", 0, false),
            attr("a", 1, true),
            attr("b", 1, true),
        ];
        let names: Vec<&str> = visible_sorted(&attrs).iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
