mod page;
pub mod state;

pub use page::CatalogPage;
