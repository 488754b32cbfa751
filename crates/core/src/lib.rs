//! Domain logic shared by every StressWatch crate.
//!
//! Nothing in here touches the network or a database: the abnormality rule,
//! input validation for readings and users, and the common error type.

pub mod classifier;
pub mod error;
pub mod types;
pub mod users;
pub mod vitals;
