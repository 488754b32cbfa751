//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async insert and query
//! methods that accept `&PgPool` as the first argument.

pub mod alert_repo;
pub mod reading_repo;
pub mod user_repo;

pub use alert_repo::AlertRepo;
pub use reading_repo::ReadingRepo;
pub use user_repo::UserRepo;
