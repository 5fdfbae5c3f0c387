pub mod bulletins;
pub mod catalog;
pub mod gallery;
