//! Database configuration module for the company schema.
//!
//! This module resolves connection settings from the environment, opens the SeaORM
//! connection and creates the four company tables. Table creation uses SeaORM's
//! `Schema::create_table_from_entity` so the DDL always matches the entity definitions,
//! and every statement is issued with `IF NOT EXISTS` so schema creation is idempotent.

use crate::entities::{Budgets, Department, Employee, Manager};
use crate::errors::{Error, Result};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityName, EntityTrait, Schema};
use tracing::{debug, info, instrument};
use url::Url;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 3306;
const DEFAULT_DATABASE: &str = "company";

/// Connection settings for the company database.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    /// Full connection URL taking precedence over the MySQL parts below
    pub url_override: Option<String>,
    /// `MYSQL_USERNAME`
    pub username: String,
    /// `MYSQL_PASSWORD`
    pub password: String,
    /// `MYSQL_HOST`, default `localhost`
    pub host: String,
    /// `MYSQL_PORT`, default 3306
    pub port: u16,
    /// `MYSQL_DATABASE`, default `company`
    pub database: String,
}

// Hand-written so the password never reaches the logs.
impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url_override", &self.url_override.as_ref().map(|_| "<set>"))
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}

impl DatabaseSettings {
    /// Reads the settings from the process environment.
    ///
    /// See [`DatabaseSettings::from_lookup`] for the variables consulted.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the settings through `lookup`.
    ///
    /// `MYSQL_USERNAME` and `MYSQL_PASSWORD` are required unless `DATABASE_URL` is set.
    /// `MYSQL_HOST`, `MYSQL_PORT` and `MYSQL_DATABASE` fall back to
    /// `localhost`, `3306` and `company`.
    ///
    /// # Errors
    /// Returns [`Error::MissingCredential`] for an absent or empty credential and
    /// [`Error::Config`] for a port that is not a valid number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let url_override = non_empty("DATABASE_URL");
        let credential = |name: &str| match (non_empty(name), url_override.is_some()) {
            (Some(value), _) => Ok(value),
            (None, true) => Ok(String::new()),
            (None, false) => Err(Error::MissingCredential {
                name: name.to_string(),
            }),
        };

        let username = credential("MYSQL_USERNAME")?;
        let password = credential("MYSQL_PASSWORD")?;

        let port = match non_empty("MYSQL_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| Error::Config {
                message: format!("MYSQL_PORT must be a port number, got {raw:?}: {e}"),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            url_override,
            username,
            password,
            host: non_empty("MYSQL_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database: non_empty("MYSQL_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        })
    }

    /// Builds the connection URL.
    ///
    /// Username and password are percent-encoded, so characters such as `@`, `/` or
    /// `:` in a credential cannot change the host or database. `DATABASE_URL` is used
    /// as given.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if host, port and database do not form a valid URL.
    pub fn url(&self) -> Result<String> {
        if let Some(url) = &self.url_override {
            return Ok(url.clone());
        }

        let invalid = |what: &str| Error::Config {
            message: format!("Cannot build database URL: invalid {what}"),
        };

        let mut url = Url::parse(&format!(
            "mysql://{}:{}/{}",
            self.host, self.port, self.database
        ))
        .map_err(|e| invalid(&format!("host or database ({e})")))?;
        url.set_username(&self.username)
            .map_err(|()| invalid("username"))?;
        url.set_password(Some(&self.password))
            .map_err(|()| invalid("password"))?;

        Ok(url.into())
    }
}

/// Opens a connection using the given settings.
///
/// Connection failures surface as [`Error::Database`] before any schema or data
/// statement is issued.
#[instrument(skip(settings), fields(host = %settings.host, database = %settings.database))]
pub async fn create_connection(settings: &DatabaseSettings) -> Result<DatabaseConnection> {
    let source = if settings.url_override.is_some() {
        "DATABASE_URL"
    } else {
        "MYSQL_* settings"
    };
    debug!(source, "Connecting to database");
    let db = Database::connect(settings.url()?).await?;
    info!("Database connection established.");
    Ok(db)
}

/// Creates all company tables that do not exist yet.
///
/// Tables are created in foreign-key dependency order: managers, departments,
/// employees, budgets. Existing tables are left as they are.
#[instrument(skip(db))]
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    create_table_if_missing(db, Manager).await?;
    create_table_if_missing(db, Department).await?;
    create_table_if_missing(db, Employee).await?;
    create_table_if_missing(db, Budgets).await?;

    info!("Company tables ensured.");
    Ok(())
}

async fn create_table_if_missing<C, E>(db: &C, entity: E) -> Result<()>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    debug!(table = entity.table_name(), "Ensuring table exists");
    db.execute(builder.build(&statement)).await?;
    Ok(())
}
