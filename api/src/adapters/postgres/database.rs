//! Connection setup and schema bootstrap
//!
//! Creates the `products` table on startup if it does not exist yet. The DDL
//! is picked per backend so the same adapter runs against PostgreSQL in
//! production and SQLite in tests.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr};

const POSTGRES_PRODUCTS: &str = "\
CREATE TABLE IF NOT EXISTS products (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    price DOUBLE PRECISION NOT NULL CHECK (price > 0)
)";

const SQLITE_PRODUCTS: &str = "\
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    price REAL NOT NULL CHECK (price > 0)
)";

/// Open a connection pool
pub async fn connect(url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url.to_owned());
    options
        .max_connections(max_connections)
        .min_connections(1);

    Database::connect(options).await
}

/// Create the tables this service needs if they are missing
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let ddl = match db.get_database_backend() {
        DbBackend::Postgres => POSTGRES_PRODUCTS,
        DbBackend::Sqlite => SQLITE_PRODUCTS,
        other => {
            return Err(DbErr::Custom(format!(
                "Unsupported database backend: {:?}",
                other
            )))
        }
    };

    db.execute_unprepared(ddl).await?;
    tracing::debug!("products table ready");

    Ok(())
}
