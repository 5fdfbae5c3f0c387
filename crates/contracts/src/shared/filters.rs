//! Catalog filter state chain.
//!
//! Three mutually exclusive modes narrow the product list: part number
//! (server-side `search`), cross-reference number (local filter over the
//! loaded page) and vehicle fitment (server-side `filters=<json>`, with
//! cascading option lists). Brand and category sit above the modes: changing
//! either resets everything below it and sends the list back to page 1.

use crate::domain::a001_brand::BrandId;
use crate::domain::a002_category::{Attribute, AttributeId, CategoryId};
use crate::domain::a003_product::{FilterOptions, HasAttributeValues, Item};
use crate::shared::pagination::{normalize_page_size, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    PartNumber,
    Reference,
    Vehicle,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [Self::PartNumber, Self::Reference, Self::Vehicle];

    pub fn label(&self) -> &'static str {
        match self {
            Self::PartNumber => "Número de parte",
            Self::Reference => "Referencia cruzada",
            Self::Vehicle => "Vehículo",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PartNumber => "part_number",
            Self::Reference => "reference",
            Self::Vehicle => "vehicle",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }
}

/// Selected vehicle values keyed by application attribute.
/// Serializes to the `filters` query parameter: `{"<attributeId>":"value"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleFilters(pub BTreeMap<AttributeId, String>);

impl VehicleFilters {
    pub fn get(&self, attribute_id: AttributeId) -> Option<&str> {
        self.0.get(&attribute_id).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    /// A row matches when every selected attribute has exactly the selected
    /// value (compared on the unit-less display text)
    pub fn matches<R: HasAttributeValues>(&self, row: &R) -> bool {
        self.0.iter().all(|(id, wanted)| {
            row.cell_value(*id)
                .map(|v| v.plain() == *wanted)
                .unwrap_or(false)
        })
    }
}

/// Page-level filter state of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilters {
    pub mode: FilterMode,
    pub part_number: String,
    pub reference: String,
    pub vehicle: VehicleFilters,
    pub brand_id: Option<BrandId>,
    pub category_id: Option<CategoryId>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl Default for CatalogFilters {
    fn default() -> Self {
        Self {
            mode: FilterMode::default(),
            part_number: String::new(),
            reference: String::new(),
            vehicle: VehicleFilters::default(),
            brand_id: None,
            category_id: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogFilters {
    fn clear_inputs(&mut self) {
        self.part_number.clear();
        self.reference.clear();
        self.vehicle = VehicleFilters::default();
    }

    /// Switches mode and clears the inputs of the other two modes.
    /// Re-selecting the active mode keeps its input.
    pub fn set_mode(&mut self, mode: FilterMode) {
        if self.mode == mode {
            return;
        }
        let had_server_filter = self.server_search().is_some() || self.server_filters().is_some();
        self.mode = mode;
        match mode {
            FilterMode::PartNumber => {
                self.reference.clear();
                self.vehicle = VehicleFilters::default();
            }
            FilterMode::Reference => {
                self.part_number.clear();
                self.vehicle = VehicleFilters::default();
            }
            FilterMode::Vehicle => {
                self.part_number.clear();
                self.reference.clear();
            }
        }
        if had_server_filter {
            self.page = 1;
        }
    }

    /// Debounced part-number text; goes to the server, so the page resets
    pub fn set_part_number(&mut self, text: &str) {
        self.set_mode(FilterMode::PartNumber);
        if self.part_number != text {
            self.part_number = text.to_string();
            self.page = 1;
        }
    }

    /// Reference text filters the loaded page locally; page is kept
    pub fn set_reference(&mut self, text: &str) {
        self.set_mode(FilterMode::Reference);
        self.reference = text.to_string();
    }

    /// Selects `value` for `attribute_id` in the vehicle chain.
    ///
    /// Selections of attributes that come later in `chain` are dropped: their
    /// option lists were narrowed by the previous value. An empty `value`
    /// clears the attribute.
    pub fn select_vehicle_value(&mut self, chain: &[&Attribute], attribute_id: AttributeId, value: &str) {
        self.set_mode(FilterMode::Vehicle);
        if let Some(pos) = chain.iter().position(|a| a.id == attribute_id) {
            for later in &chain[pos + 1..] {
                self.vehicle.0.remove(&later.id);
            }
        }
        if value.trim().is_empty() {
            self.vehicle.0.remove(&attribute_id);
        } else {
            self.vehicle.0.insert(attribute_id, value.to_string());
        }
        self.page = 1;
    }

    pub fn clear_vehicle_value(&mut self, chain: &[&Attribute], attribute_id: AttributeId) {
        self.select_vehicle_value(chain, attribute_id, "");
    }

    /// New brand: category, every mode input and the page go back to initial
    pub fn set_brand(&mut self, brand_id: Option<BrandId>) {
        if self.brand_id == brand_id {
            return;
        }
        self.brand_id = brand_id;
        self.category_id = None;
        self.clear_inputs();
        self.mode = FilterMode::default();
        self.page = 1;
    }

    /// New category: every mode input and the page go back to initial.
    /// The vehicle chain belongs to the category, so it never survives.
    pub fn set_category(&mut self, category_id: Option<CategoryId>) {
        if self.category_id == category_id {
            return;
        }
        self.category_id = category_id;
        self.clear_inputs();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = normalize_page_size(size);
        self.page = 1;
    }

    /// Clears the mode inputs, keeps brand, category and page size
    pub fn clear(&mut self) {
        self.clear_inputs();
        self.page = 1;
    }

    pub fn server_search(&self) -> Option<&str> {
        let text = self.part_number.trim();
        (self.mode == FilterMode::PartNumber && !text.is_empty()).then_some(text)
    }

    pub fn server_filters(&self) -> Option<&VehicleFilters> {
        (self.mode == FilterMode::Vehicle && !self.vehicle.is_empty()).then_some(&self.vehicle)
    }

    pub fn local_reference(&self) -> Option<&str> {
        let text = self.reference.trim();
        (self.mode == FilterMode::Reference && !text.is_empty()).then_some(text)
    }

    /// Number of active narrowing inputs, for the filter panel badge
    pub fn active_count(&self) -> usize {
        usize::from(self.server_search().is_some())
            + usize::from(self.local_reference().is_some())
            + if self.mode == FilterMode::Vehicle {
                self.vehicle.len()
            } else {
                0
            }
    }
}

/// Fallback option lists built from the loaded products.
///
/// Walks every application of every item, keeps the rows matching all current
/// selections and collects the distinct values of each attribute in `chain`
/// that is not selected yet. Selected attributes get no list.
pub fn derive_vehicle_options(
    items: &[Item],
    chain: &[&Attribute],
    selected: &VehicleFilters,
) -> FilterOptions {
    let mut collected: BTreeMap<AttributeId, BTreeSet<String>> = chain
        .iter()
        .filter(|a| selected.get(a.id).is_none())
        .map(|a| (a.id, BTreeSet::new()))
        .collect();

    for application in items
        .iter()
        .flat_map(|i| i.applications.iter())
        .filter(|app| selected.matches(*app))
    {
        for (id, values) in collected.iter_mut() {
            if let Some(v) = application.cell_value(*id) {
                values.insert(v.plain());
            }
        }
    }

    FilterOptions(
        collected
            .into_iter()
            .map(|(id, values)| (id, values.into_iter().collect()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_category::{AttributeScope, AttributeType};
    use crate::domain::a003_product::{Application, ApplicationId, AttributeValue, ItemId, ItemType};

    fn attr(name: &str, order: i32) -> Attribute {
        Attribute {
            id: AttributeId::new_v4(),
            name: name.to_string(),
            display_name: None,
            kind: AttributeType::String,
            scope: AttributeScope::Application,
            order,
            visible_in_catalog: true,
            unit: None,
            options: Vec::new(),
        }
    }

    fn app(values: &[(&Attribute, &str)]) -> Application {
        Application {
            id: ApplicationId::new_v4(),
            attribute_values: values
                .iter()
                .map(|(a, v)| AttributeValue {
                    attribute_id: a.id,
                    value_string: Some(v.to_string()),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn item(applications: Vec<Application>) -> Item {
        Item {
            id: ItemId::new_v4(),
            sku: "DF-1".to_string(),
            name: "Disco".to_string(),
            description: None,
            item_type: ItemType::Single,
            category_id: CategoryId::new_v4(),
            brand_id: None,
            images: Vec::new(),
            attribute_values: Vec::new(),
            references: Vec::new(),
            applications,
            variants: Vec::new(),
            components: Vec::new(),
        }
    }

    #[test]
    fn test_switching_mode_clears_other_inputs() {
        let make = attr("Marca", 1);
        let chain = vec![&make];

        let mut f = CatalogFilters::default();
        f.set_part_number("DF-22");
        f.set_mode(FilterMode::Reference);
        assert!(f.part_number.is_empty());
        f.set_reference("09.A727");
        f.select_vehicle_value(&chain, make.id, "Seat");
        assert_eq!(f.mode, FilterMode::Vehicle);
        assert!(f.reference.is_empty());
        assert!(f.part_number.is_empty());

        f.set_mode(FilterMode::PartNumber);
        assert!(f.vehicle.is_empty());
        assert!(f.reference.is_empty());
    }

    #[test]
    fn test_every_mode_switch_clears_the_other_two() {
        let make = attr("Marca", 1);
        let chain = vec![&make];
        for from in FilterMode::ALL {
            for to in FilterMode::ALL.into_iter().filter(|m| *m != from) {
                let mut f = CatalogFilters::default();
                f.part_number = "DF".into();
                f.reference = "09".into();
                f.select_vehicle_value(&chain, make.id, "Seat");
                f.part_number = "DF".into();
                f.reference = "09".into();
                f.mode = from;

                f.set_mode(to);
                assert_eq!(f.part_number.is_empty(), to != FilterMode::PartNumber);
                assert_eq!(f.reference.is_empty(), to != FilterMode::Reference);
                assert_eq!(f.vehicle.is_empty(), to != FilterMode::Vehicle);
            }
        }
    }

    #[test]
    fn test_same_mode_keeps_input() {
        let mut f = CatalogFilters::default();
        f.set_part_number("DF");
        f.set_mode(FilterMode::PartNumber);
        assert_eq!(f.part_number, "DF");
    }

    #[test]
    fn test_brand_change_resets_category_filters_and_page() {
        let make = attr("Marca", 1);
        let mut f = CatalogFilters::default();
        f.set_category(Some(CategoryId::new_v4()));
        f.select_vehicle_value(&[&make], make.id, "Seat");
        f.set_page(4);

        f.set_brand(Some(BrandId::new_v4()));
        assert_eq!(f.category_id, None);
        assert!(f.vehicle.is_empty());
        assert_eq!(f.mode, FilterMode::PartNumber);
        assert_eq!(f.page, 1);
    }

    #[test]
    fn test_same_brand_is_a_no_op() {
        let brand = Some(BrandId::new_v4());
        let mut f = CatalogFilters::default();
        f.set_brand(brand);
        f.set_category(Some(CategoryId::new_v4()));
        f.set_page(3);
        f.set_brand(brand);
        assert!(f.category_id.is_some());
        assert_eq!(f.page, 3);
    }

    #[test]
    fn test_category_change_resets_inputs_and_page() {
        let mut f = CatalogFilters::default();
        f.set_part_number("DF");
        f.set_page(2);
        f.set_category(Some(CategoryId::new_v4()));
        assert!(f.part_number.is_empty());
        assert_eq!(f.page, 1);
    }

    #[test]
    fn test_part_number_resets_page_reference_does_not() {
        let mut f = CatalogFilters::default();
        f.set_page(3);
        f.set_part_number("DF");
        assert_eq!(f.page, 1);

        f.set_mode(FilterMode::Reference);
        f.set_page(3);
        f.set_reference("09");
        assert_eq!(f.page, 3);
    }

    #[test]
    fn test_selecting_earlier_attribute_drops_later_selections() {
        let make = attr("Marca", 1);
        let model = attr("Modelo", 2);
        let year = attr("Año", 3);
        let chain = vec![&make, &model, &year];

        let mut f = CatalogFilters::default();
        f.select_vehicle_value(&chain, make.id, "Seat");
        f.select_vehicle_value(&chain, model.id, "Ibiza");
        f.select_vehicle_value(&chain, year.id, "2019");
        assert_eq!(f.vehicle.len(), 3);

        f.select_vehicle_value(&chain, make.id, "Audi");
        assert_eq!(f.vehicle.get(make.id), Some("Audi"));
        assert_eq!(f.vehicle.get(model.id), None);
        assert_eq!(f.vehicle.get(year.id), None);

        f.clear_vehicle_value(&chain, make.id);
        assert!(f.vehicle.is_empty());
    }

    #[test]
    fn test_server_parameters_follow_mode() {
        let make = attr("Marca", 1);
        let mut f = CatalogFilters::default();
        assert_eq!(f.server_search(), None);
        f.set_part_number("  DF-22 ");
        assert_eq!(f.server_search(), Some("DF-22"));
        assert!(f.server_filters().is_none());

        f.select_vehicle_value(&[&make], make.id, "Seat");
        assert_eq!(f.server_search(), None);
        let json = f.server_filters().unwrap().to_json();
        assert_eq!(json, format!("{{\"{}\":\"Seat\"}}", make.id));
        assert_eq!(f.active_count(), 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut f = CatalogFilters::default();
        f.set_page(5);
        f.set_page_size(50);
        assert_eq!(f.page_size, 50);
        assert_eq!(f.page, 1);
        f.set_page_size(7);
        assert_eq!(f.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_derive_options_cascades_on_selection() {
        let make = attr("Marca", 1);
        let model = attr("Modelo", 2);
        let chain = vec![&make, &model];
        let items = vec![
            item(vec![
                app(&[(&make, "Seat"), (&model, "Ibiza")]),
                app(&[(&make, "Seat"), (&model, "León")]),
            ]),
            item(vec![app(&[(&make, "Audi"), (&model, "A3")])]),
        ];

        let all = derive_vehicle_options(&items, &chain, &VehicleFilters::default());
        assert_eq!(all.get(make.id), ["Audi", "Seat"]);
        assert_eq!(all.get(model.id), ["A3", "Ibiza", "León"]);

        let mut selected = VehicleFilters::default();
        selected.0.insert(make.id, "Seat".to_string());
        let narrowed = derive_vehicle_options(&items, &chain, &selected);
        assert!(narrowed.get(make.id).is_empty());
        assert_eq!(narrowed.get(model.id), ["Ibiza", "León"]);
    }

    #[test]
    fn test_filter_mode_round_trips_through_str() {
        for mode in FilterMode::ALL {
            assert_eq!(FilterMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(FilterMode::parse("other"), None);
    }

    #[test]
    fn test_float_option_selects_numeric_application() {
        let engine = attr("Motor", 1);
        let json = format!(r#"{{"{}":[2.0,1.6]}}"#, engine.id);
        let opts: FilterOptions = serde_json::from_str(&json).unwrap();
        let chosen = opts.get(engine.id)[1].clone();
        assert_eq!(chosen, "2");

        let mut f = CatalogFilters::default();
        f.select_vehicle_value(&[&engine], engine.id, &chosen);
        let row = Application {
            id: ApplicationId::new_v4(),
            attribute_values: vec![AttributeValue {
                attribute_id: engine.id,
                value_number: Some(2.0),
                ..Default::default()
            }],
        };
        assert!(f.vehicle.matches(&row));
    }
}
