pub mod config;
pub mod db;
pub mod observability;
pub mod recipe;

pub use db::{create_pool, migrate};
