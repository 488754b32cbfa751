pub mod alerts;
pub mod readings;
pub mod users;
