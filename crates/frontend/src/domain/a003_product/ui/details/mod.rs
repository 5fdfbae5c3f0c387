//! Product details page
//!
//! - view_model.rs: загрузка товара и схемы категории, лист атрибутов
//! - gallery.rs: главное изображение и миниатюры
//! - page.rs: страница товара

mod gallery;
mod page;
mod view_model;

pub use gallery::ImageGallery;
pub use page::ProductDetails;
pub use view_model::{use_product, ProductDetail, ProductDetailsVm};
