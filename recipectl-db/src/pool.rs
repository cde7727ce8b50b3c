//! Connection options and pool construction
//!
//! Uses sqlx PgPool with explicit connection limits.

use std::str::FromStr;

use recipectl_core::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low; the host process opens its own pool after the gate.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const APPLICATION_NAME: &str = "recipectl";

/// Build connect options for a configured database alias.
///
/// A configured URL wins over the discrete host/port/name fields.
///
/// # Errors
///
/// Returns `sqlx::Error::Configuration` if the URL does not parse.
pub fn connect_options(db: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    let options = match &db.url {
        Some(url) => PgConnectOptions::from_str(url)?,
        None => {
            let options = PgConnectOptions::new()
                .host(&db.host)
                .port(db.port)
                .username(&db.user)
                .database(&db.name);
            match &db.password {
                Some(password) => options.password(password),
                None => options,
            }
        }
    };

    Ok(options.application_name(APPLICATION_NAME))
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(config.database("default")?).await?;
/// ```
pub async fn create_pool(db: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(db, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `db` - configured database alias
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    db: &DatabaseConfig,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(db)?)
        .await
}
