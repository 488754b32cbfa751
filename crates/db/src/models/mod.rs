//! Row structs and insert DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts (rows are never updated)

pub mod alert;
pub mod reading;
pub mod user;
