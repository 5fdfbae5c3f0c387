use crate::domain::a002_category::{Attribute, AttributeId};
use crate::shared::text::NOT_AVAILABLE;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Типизированное значение, привязанное ровно к одному атрибуту.
///
/// Бэкенд заполняет одно из полей `value*`; остальные приходят `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValue {
    pub attribute_id: AttributeId,
    #[serde(default)]
    pub value_string: Option<String>,
    #[serde(default)]
    pub value_number: Option<f64>,
    #[serde(default)]
    pub value_boolean: Option<bool>,
    #[serde(default)]
    pub value_date: Option<String>,
}

/// Разрешённое значение ячейки
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(String),
}

impl AttributeValue {
    /// Первое непустое из {string, number, boolean, date}
    pub fn resolve(&self) -> Option<CellValue> {
        if let Some(s) = self.value_string.as_deref().filter(|s| !s.trim().is_empty()) {
            return Some(CellValue::Text(s.to_string()));
        }
        if let Some(n) = self.value_number.filter(|n| n.is_finite()) {
            return Some(CellValue::Number(n));
        }
        if let Some(b) = self.value_boolean {
            return Some(CellValue::Boolean(b));
        }
        self.value_date
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| CellValue::Date(s.to_string()))
    }
}

impl CellValue {
    /// Текст без единицы измерения; по нему сравниваются значения фильтров
    pub fn plain(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Boolean(true) => "Sí".to_string(),
            Self::Boolean(false) => "No".to_string(),
            Self::Date(raw) => format_date(raw),
        }
    }

    /// Текст для таблицы: числа получают единицу измерения атрибута
    pub fn display(&self, unit: Option<&str>) -> String {
        match (self, unit.map(str::trim).filter(|u| !u.is_empty())) {
            (Self::Number(n), Some(unit)) => format!("{} {}", n, unit),
            _ => self.plain(),
        }
    }
}

/// ISO-дата или дата-время → `dd/mm/yyyy`; нераспознанное возвращается как есть
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Строка каталога, у которой есть значения атрибутов
pub trait HasAttributeValues {
    fn attribute_values(&self) -> &[AttributeValue];

    fn value_of(&self, attribute_id: AttributeId) -> Option<&AttributeValue> {
        self.attribute_values()
            .iter()
            .find(|v| v.attribute_id == attribute_id)
    }

    fn cell_value(&self, attribute_id: AttributeId) -> Option<CellValue> {
        self.value_of(attribute_id).and_then(AttributeValue::resolve)
    }

    /// Текст ячейки для атрибута; промах даёт `"N/A"`
    fn display_value(&self, attribute: &Attribute) -> String {
        self.cell_value(attribute.id)
            .map(|v| v.display(attribute.unit.as_deref()))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value() -> AttributeValue {
        AttributeValue {
            attribute_id: AttributeId::new_v4(),
            ..Default::default()
        }
    }

    #[test]
    fn test_string_wins_over_other_fields() {
        let v = AttributeValue {
            value_string: Some("Ventilado".into()),
            value_number: Some(3.0),
            value_boolean: Some(true),
            ..value()
        };
        assert_eq!(v.resolve(), Some(CellValue::Text("Ventilado".into())));
    }

    #[test]
    fn test_blank_string_falls_through_to_number() {
        let v = AttributeValue {
            value_string: Some("  ".into()),
            value_number: Some(280.0),
            ..value()
        };
        assert_eq!(v.resolve(), Some(CellValue::Number(280.0)));
    }

    #[test]
    fn test_false_boolean_is_a_value() {
        let v = AttributeValue {
            value_boolean: Some(false),
            value_date: Some("2024-01-01".into()),
            ..value()
        };
        assert_eq!(v.resolve().unwrap().plain(), "No");
    }

    #[test]
    fn test_all_null_resolves_to_none() {
        assert_eq!(value().resolve(), None);
    }

    #[test]
    fn test_number_display() {
        assert_eq!(CellValue::Number(280.0).display(Some("mm")), "280 mm");
        assert_eq!(CellValue::Number(12.5).display(None), "12.5");
        assert_eq!(CellValue::Number(12.5).display(Some(" ")), "12.5");
        assert_eq!(CellValue::Number(280.0).plain(), "280");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26"), "15/03/2024");
        assert_eq!(format_date("marzo"), "marzo");
    }

    #[test]
    fn test_parse_wire_shape() {
        let json = r#"{
            "attributeId":"9d3c4f2e-8a0b-4c1e-b5a6-7f8e9d0c1b2a",
            "valueString":null,
            "valueNumber":42,
            "valueBoolean":null,
            "valueDate":null
        }"#;
        let v: AttributeValue = serde_json::from_str(json).unwrap();
        assert_eq!(v.resolve(), Some(CellValue::Number(42.0)));
    }
}
