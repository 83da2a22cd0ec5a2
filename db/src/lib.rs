pub mod models;
pub mod test_utils;

pub use sea_orm::DbErr;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use tracing::warn;

/// Opens a connection pool for `path_or_url`.
///
/// A value that is already a DSN (`sqlite:`, `postgres://`, `mysql://`) is
/// used as-is; anything else is treated as a SQLite file path whose parent
/// directory is created on demand.
pub async fn connect(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url.to_owned()
    } else {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(path_or_url).parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %err, "Could not create database directory");
            }
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false);

    Database::connect(opts).await
}
