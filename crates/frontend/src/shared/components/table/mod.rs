pub mod dynamic_table;
pub mod sortable_header_cell;

pub use dynamic_table::DynamicTable;
pub use sortable_header_cell::SortableHeaderCell;
