//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod database;
pub mod product_repo;


pub use database::{connect, ensure_schema};
pub use product_repo::PostgresProductRepository;
