//! Attribute-driven column model for catalog tables.
//!
//! A table is a pinned identity block (image, SKU, name for products; brand
//! and number for cross-references) followed by one column per visible
//! attribute of the category, ordered by `Attribute::order`.

use crate::domain::a002_category::attribute::visible_sorted;
use crate::domain::a002_category::{Attribute, AttributeId};
use crate::domain::a003_product::{
    Application, CellValue, HasAttributeValues, Item, Reference, Variant,
};
use crate::shared::text::{contains_ci, truncate, CellText, NOT_AVAILABLE, TRUNCATE_AT};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Image,
    Sku,
    Name,
    Brand,
    Number,
    Attribute(AttributeId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Stable key for sorting and `For` keys
    pub key: String,
    pub label: String,
    pub kind: ColumnKind,
    pub pinned: bool,
    pub unit: Option<String>,
}

impl Column {
    fn identity(kind: ColumnKind, key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
            pinned: true,
            unit: None,
        }
    }

    fn attribute(attribute: &Attribute) -> Self {
        Self {
            key: attribute.id.to_string(),
            label: attribute.label().to_string(),
            kind: ColumnKind::Attribute(attribute.id),
            pinned: false,
            unit: attribute.unit.clone(),
        }
    }

    pub fn is_sortable(&self) -> bool {
        self.kind != ColumnKind::Image
    }
}

/// Row that can be rendered by a [`ColumnModel`]
pub trait TableRow: HasAttributeValues {
    /// Value of a pinned identity column, `None` when the row has no such field
    fn identity(&self, kind: ColumnKind) -> Option<String>;
}

impl TableRow for Item {
    fn identity(&self, kind: ColumnKind) -> Option<String> {
        match kind {
            ColumnKind::Image => self.main_image().map(|i| i.url.clone()),
            ColumnKind::Sku => Some(self.sku.clone()),
            ColumnKind::Name => Some(self.name.clone()),
            _ => None,
        }
    }
}

impl TableRow for Variant {
    fn identity(&self, kind: ColumnKind) -> Option<String> {
        match kind {
            ColumnKind::Image => self
                .images
                .iter()
                .min_by_key(|i| i.order)
                .map(|i| i.url.clone()),
            ColumnKind::Sku => Some(self.sku.clone()),
            ColumnKind::Name => Some(self.name.clone()),
            _ => None,
        }
    }
}

impl TableRow for Reference {
    fn identity(&self, kind: ColumnKind) -> Option<String> {
        match kind {
            ColumnKind::Brand => self.brand.clone().filter(|b| !b.trim().is_empty()),
            ColumnKind::Number => Some(self.number.clone()),
            _ => None,
        }
    }
}

impl TableRow for Application {
    fn identity(&self, _kind: ColumnKind) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Click-to-sort state: ascending → descending → unsorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn cycle(&mut self, key: &str) {
        match (&self.key, self.direction) {
            (Some(current), SortDirection::Asc) if current == key => {
                self.direction = SortDirection::Desc;
            }
            (Some(current), SortDirection::Desc) if current == key => {
                self.key = None;
                self.direction = SortDirection::Asc;
            }
            _ => {
                self.key = Some(key.to_string());
                self.direction = SortDirection::Asc;
            }
        }
    }

    pub fn indicator(&self, key: &str) -> &'static str {
        match (&self.key, self.direction) {
            (Some(current), SortDirection::Asc) if current == key => " ▲",
            (Some(current), SortDirection::Desc) if current == key => " ▼",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnModel {
    pub columns: Vec<Column>,
}

impl ColumnModel {
    /// Product list: image, SKU, name, then the category's visible attributes
    pub fn for_products(attributes: &[Attribute]) -> Self {
        let mut columns = vec![
            Column::identity(ColumnKind::Image, "image", "Imagen"),
            Column::identity(ColumnKind::Sku, "sku", "SKU"),
            Column::identity(ColumnKind::Name, "name", "Nombre"),
        ];
        columns.extend(visible_sorted(attributes).into_iter().map(Column::attribute));
        Self { columns }
    }

    pub fn for_variants(attributes: &[Attribute]) -> Self {
        let mut columns = vec![
            Column::identity(ColumnKind::Sku, "sku", "SKU"),
            Column::identity(ColumnKind::Name, "name", "Nombre"),
        ];
        columns.extend(visible_sorted(attributes).into_iter().map(Column::attribute));
        Self { columns }
    }

    pub fn for_references(attributes: &[Attribute]) -> Self {
        let mut columns = vec![
            Column::identity(ColumnKind::Brand, "brand", "Marca"),
            Column::identity(ColumnKind::Number, "number", "Número"),
        ];
        columns.extend(visible_sorted(attributes).into_iter().map(Column::attribute));
        Self { columns }
    }

    /// Fitment rows have no identity block, only attribute columns
    pub fn for_applications(attributes: &[Attribute]) -> Self {
        Self {
            columns: visible_sorted(attributes)
                .into_iter()
                .map(Column::attribute)
                .collect(),
        }
    }

    pub fn attribute_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| !c.pinned)
    }

    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Full cell text; missing values give `"N/A"`
    pub fn cell_text<T: TableRow>(&self, column: &Column, row: &T) -> String {
        let value = match column.kind {
            ColumnKind::Attribute(id) => row
                .cell_value(id)
                .map(|v| v.display(column.unit.as_deref())),
            kind => row.identity(kind),
        };
        value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Cell text as rendered: cut at 30 chars with the full text for the tooltip
    pub fn cell<T: TableRow>(&self, column: &Column, row: &T) -> CellText {
        truncate(&self.cell_text(column, row), TRUNCATE_AT)
    }

    /// Local quick filter: a row passes when any text column contains `query`
    pub fn filter_rows<'a, T: TableRow>(&self, rows: &'a [T], query: &str) -> Vec<&'a T> {
        if query.trim().is_empty() {
            return rows.iter().collect();
        }
        rows.iter()
            .filter(|row| {
                self.columns
                    .iter()
                    .filter(|c| c.kind != ColumnKind::Image)
                    .any(|c| contains_ci(&self.cell_text(c, *row), query))
            })
            .collect()
    }

    /// Sorts rows in place. Numbers compare numerically, text
    /// case-insensitively, missing values always go last.
    pub fn sort_rows<T: TableRow>(&self, rows: &mut [&T], sort: &SortState) {
        let Some(column) = sort.key.as_deref().and_then(|k| self.column(k)) else {
            return;
        };
        if !column.is_sortable() {
            return;
        }
        rows.sort_by(|a, b| {
            let (ka, kb) = (sort_key(column, *a), sort_key(column, *b));
            match (ka, kb) {
                (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
                (SortKey::Missing, _) => Ordering::Greater,
                (_, SortKey::Missing) => Ordering::Less,
                (ka, kb) => {
                    let ord = ka.cmp_present(&kb);
                    match sort.direction {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                }
            }
        });
    }
}

enum SortKey {
    Missing,
    Number(f64),
    Text(String),
}

impl SortKey {
    fn cmp_present(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            // numbers before text when a column mixes both
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

fn sort_key<T: TableRow>(column: &Column, row: &T) -> SortKey {
    match column.kind {
        ColumnKind::Attribute(id) => match row.cell_value(id) {
            Some(CellValue::Number(n)) => SortKey::Number(n),
            Some(v) => SortKey::Text(v.plain().to_lowercase()),
            None => SortKey::Missing,
        },
        kind => match row.identity(kind) {
            Some(s) => SortKey::Text(s.to_lowercase()),
            None => SortKey::Missing,
        },
    }
}
