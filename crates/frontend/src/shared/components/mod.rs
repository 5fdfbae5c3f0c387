pub mod filter_panel;
pub mod pagination_controls;
pub mod status;
pub mod table;
pub mod ui;
