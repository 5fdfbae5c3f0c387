pub mod model;
pub mod view_model;
