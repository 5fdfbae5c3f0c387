mod applications_table;
mod components_table;
mod products_table;
mod references_table;
mod variants_table;

pub use applications_table::ApplicationsTable;
pub use components_table::ComponentsTable;
pub use products_table::ProductsTable;
pub use references_table::ReferencesTable;
pub use variants_table::VariantsTable;
