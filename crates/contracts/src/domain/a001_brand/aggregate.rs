use serde::{Deserialize, Serialize};

crate::uuid_id!(
    /// Уникальный идентификатор бренда
    BrandId
);

/// Бренд (линейка запчастей), `GET /brands`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_brand() {
        let json = r#"{"id":"3f1c1f5e-2b8a-4f41-9a55-0c6f0f7c1a10","name":"Fritec"}"#;
        let brand: Brand = serde_json::from_str(json).unwrap();
        assert_eq!(brand.name, "Fritec");
        assert!(brand.logo_url.is_none());
    }

    #[test]
    fn test_parse_logo_url_camel_case() {
        let json = r#"{
            "id":"3f1c1f5e-2b8a-4f41-9a55-0c6f0f7c1a10",
            "name":"Fritec",
            "logoUrl":"https://cdn.example.com/fritec.png"
        }"#;
        let brand: Brand = serde_json::from_str(json).unwrap();
        assert_eq!(
            brand.logo_url.as_deref(),
            Some("https://cdn.example.com/fritec.png")
        );
    }
}
