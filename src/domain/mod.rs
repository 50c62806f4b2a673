pub mod error;
pub mod models;
pub mod resolver;
pub mod response;
