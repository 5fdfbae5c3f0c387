pub mod aggregate;
pub mod attribute;

pub use aggregate::{for_brand, Category, CategoryAttributes, CategoryId};
pub use attribute::{Attribute, AttributeId, AttributeScope, AttributeType};
