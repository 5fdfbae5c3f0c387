use super::attribute::{Attribute, AttributeScope};
use crate::domain::a001_brand::BrandId;
use serde::{Deserialize, Serialize};

crate::uuid_id!(
    /// Уникальный идентификатор категории
    CategoryId
);

/// Атрибуты категории, сгруппированные по области действия.
///
/// `GET /categories` отдаёт категории без атрибутов, поэтому все группы
/// по умолчанию пустые.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryAttributes {
    #[serde(default)]
    pub product: Vec<Attribute>,
    #[serde(default)]
    pub variant: Vec<Attribute>,
    #[serde(default)]
    pub reference: Vec<Attribute>,
    #[serde(default)]
    pub application: Vec<Attribute>,
}

impl CategoryAttributes {
    pub fn for_scope(&self, scope: AttributeScope) -> &[Attribute] {
        match scope {
            AttributeScope::Product => &self.product,
            AttributeScope::Variant => &self.variant,
            AttributeScope::Reference => &self.reference,
            AttributeScope::Application => &self.application,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.product.is_empty()
            && self.variant.is_empty()
            && self.reference.is_empty()
            && self.application.is_empty()
    }
}

/// Категория каталога (`GET /categories/:id?attributes=true`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub brand_id: Option<BrandId>,
    #[serde(default)]
    pub attributes: CategoryAttributes,
}

impl Category {
    /// Атрибуты, по которым строится цепочка фильтров по автомобилю
    pub fn vehicle_attributes(&self) -> Vec<&Attribute> {
        super::attribute::visible_sorted(&self.attributes.application)
    }
}

/// Категории бренда; без бренда возвращаются все.
/// Категории без `brandId` общие и видны для любого бренда.
pub fn for_brand(categories: &[Category], brand_id: Option<BrandId>) -> Vec<&Category> {
    categories
        .iter()
        .filter(|c| match (brand_id, c.brand_id) {
            (Some(wanted), Some(own)) => wanted == own,
            _ => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, brand_id: Option<BrandId>) -> Category {
        Category {
            id: CategoryId::new_v4(),
            name: name.to_string(),
            description: None,
            image_url: None,
            brand_id,
            attributes: CategoryAttributes::default(),
        }
    }

    #[test]
    fn test_for_brand() {
        let fritec = BrandId::new_v4();
        let other = BrandId::new_v4();
        let cats = vec![
            category("Discos", Some(fritec)),
            category("Tambores", Some(other)),
            category("Accesorios", None),
        ];
        let names: Vec<&str> = for_brand(&cats, Some(fritec)).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Discos", "Accesorios"]);
        assert_eq!(for_brand(&cats, None).len(), 3);
    }

    #[test]
    fn test_list_payload_without_attributes() {
        let json = r#"[{"id":"0b7c6a57-5a3f-4f5c-8f0e-2d1a4e6b7c80","name":"Discos"}]"#;
        let cats: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(cats.len(), 1);
        assert!(cats[0].attributes.is_empty());
    }

    #[test]
    fn test_grouped_attributes() {
        let json = r#"{
            "id":"0b7c6a57-5a3f-4f5c-8f0e-2d1a4e6b7c80",
            "name":"Discos",
            "attributes":{
                "product":[{"id":"9d3c4f2e-8a0b-4c1e-b5a6-7f8e9d0c1b2a","name":"Diámetro","order":1}],
                "application":[
                    {"id":"1a2b3c4d-0000-4000-8000-000000000002","name":"Modelo","order":2,"scope":"application"},
                    {"id":"1a2b3c4d-0000-4000-8000-000000000001","name":"Marca","order":1,"scope":"application"}
                ]
            }
        }"#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert_eq!(cat.attributes.for_scope(AttributeScope::Product).len(), 1);
        assert!(cat.attributes.variant.is_empty());
        let chain: Vec<&str> = cat
            .vehicle_attributes()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(chain, vec!["Marca", "Modelo"]);
    }
}
