use super::attribute_value::{AttributeValue, HasAttributeValues};
use serde::{Deserialize, Serialize};

crate::uuid_id!(
    /// Уникальный идентификатор строки применяемости
    ApplicationId
);

/// Применяемость: строка совместимости товара с автомобилем.
/// Поля (марка, модель, год, двигатель...) задаются атрибутами категории
/// с областью `application`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    #[serde(default)]
    pub attribute_values: Vec<AttributeValue>,
}

impl HasAttributeValues for Application {
    fn attribute_values(&self) -> &[AttributeValue] {
        &self.attribute_values
    }
}
