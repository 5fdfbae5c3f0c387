mod filter_component;
mod filter_section;

pub use filter_component::FilterComponent;
pub use filter_section::FilterSection;
