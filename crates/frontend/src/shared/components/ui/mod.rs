pub mod radio;
pub mod select;

pub use radio::RadioGroup;
pub use select::Select;
