use std::time::Duration;

use anyhow::{bail, Context, Result};
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::migrate::MigrateDatabase;
use sqlx::{Any, AnyPool};
use tracing::info;

// The database URL used when nothing is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite:accounts.db";

const SQLITE_SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS accounts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        document_number TEXT NOT NULL UNIQUE
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        account_id INTEGER NOT NULL,
        operation_type INTEGER NOT NULL,
        amount REAL NOT NULL,
        transaction_date TEXT NOT NULL,
        FOREIGN KEY (account_id) REFERENCES accounts (id) ON UPDATE CASCADE ON DELETE CASCADE
    );
    "#,
];

const MYSQL_SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS accounts (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        document_number VARCHAR(191) NOT NULL UNIQUE
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        account_id BIGINT NOT NULL,
        operation_type BIGINT NOT NULL,
        amount DOUBLE NOT NULL,
        transaction_date VARCHAR(64) NOT NULL,
        CONSTRAINT fk_transactions_account FOREIGN KEY (account_id)
            REFERENCES accounts (id) ON UPDATE CASCADE ON DELETE CASCADE
    );
    "#,
];

/// SQL dialect of the configured backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    MySql,
}

impl Dialect {
    /// Infer the dialect from a database URL scheme
    pub fn from_url(url: &str) -> Result<Self> {
        if url.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else if url.starts_with("mysql:") || url.starts_with("mariadb:") {
            Ok(Self::MySql)
        } else {
            bail!("Unsupported database URL scheme: {}", url.split(':').next().unwrap_or(url))
        }
    }

    fn schema(self) -> &'static [&'static str] {
        match self {
            Self::Sqlite => &SQLITE_SCHEMA,
            Self::MySql => &MYSQL_SCHEMA,
        }
    }
}

/// DbConnection owns the connection pool shared by all repositories
#[derive(Clone)]
pub struct DbConnection {
    pool: AnyPool,
    dialect: Dialect,
}

impl DbConnection {
    /// Connect to the database at `url`, creating it if needed, and make sure
    /// the schema exists.
    pub async fn new(url: &str, max_connections: u32) -> Result<Self> {
        install_default_drivers();
        let dialect = Dialect::from_url(url)?;

        // Create database if it doesn't exist
        if !Any::database_exists(url).await.unwrap_or(false) {
            info!("Creating database");
            Any::create_database(url)
                .await
                .context("Failed to create database")?;
        }

        let pool = AnyPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .context("Failed to connect to database")?;

        Self::setup_schema(&pool, dialect).await?;

        Ok(Self { pool, dialect })
    }

    /// Open a private in-memory SQLite database.
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self> {
        install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory database")?;

        Self::setup_schema(&pool, Dialect::Sqlite).await?;

        Ok(Self {
            pool,
            dialect: Dialect::Sqlite,
        })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &AnyPool, dialect: Dialect) -> Result<()> {
        for statement in dialect.schema() {
            sqlx::query(statement)
                .execute(pool)
                .await
                .context("Failed to set up database schema")?;
        }
        Ok(())
    }
}
