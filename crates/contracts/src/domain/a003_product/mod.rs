pub mod aggregate;
pub mod application;
pub mod attribute_value;
pub mod dto;
pub mod reference;

pub use aggregate::{
    sorted_images, Component, ComponentId, Item, ItemId, ItemImage, ItemType, Variant, VariantId,
};
pub use application::{Application, ApplicationId};
pub use attribute_value::{AttributeValue, CellValue, HasAttributeValues};
pub use dto::{FilterOptions, ProductPage};
pub use reference::{Reference, ReferenceId};
