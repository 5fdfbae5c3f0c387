pub mod details;
pub mod filter;
pub mod table;
