pub mod context;
pub mod model;
pub mod ui;
pub mod view_model;
