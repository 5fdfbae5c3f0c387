use super::attribute_value::{AttributeValue, HasAttributeValues};
use serde::{Deserialize, Serialize};

crate::uuid_id!(
    /// Уникальный идентификатор кросс-номера
    ReferenceId
);

/// Кросс-номер: номер детали другого производителя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: ReferenceId,
    #[serde(default)]
    pub brand: Option<String>,
    pub number: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub attribute_values: Vec<AttributeValue>,
}

impl HasAttributeValues for Reference {
    fn attribute_values(&self) -> &[AttributeValue] {
        &self.attribute_values
    }
}
