//! Shared catalog contracts: DTOs mirrored from the catalog REST API and the
//! pure presentation logic (columns, filters, pagination) the UI runs on them.

pub mod domain;
pub mod shared;
